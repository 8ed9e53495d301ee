// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::Path;

use serde_json::{json, Value};
use tokio::fs;
use tracing::info;

use crate::domain::models::version::VersionMarker;
use crate::site::list_dirs;

/// 生成描述文件树接口的OpenAPI文档
///
/// 语言枚举取自已写出的目录结构，类目端点为固定约定
pub async fn generate(data_dir: &str) -> anyhow::Result<()> {
    let root = Path::new(data_dir);
    let version = match fs::read(root.join("version.json")).await {
        Ok(data) => serde_json::from_slice::<VersionMarker>(&data)
            .map(|marker| marker.version)
            .unwrap_or_else(|_| "unknown".to_string()),
        Err(_) => "unknown".to_string(),
    };
    let languages = list_dirs(root).await?;

    let doc = build_document(&version, &languages);
    fs::write(root.join("openapi.yaml"), serde_yaml::to_string(&doc)?).await?;
    info!("openapi document generated at {}/openapi.yaml", data_dir);
    Ok(())
}

fn json_response(description: &str) -> Value {
    json!({
        "200": {
            "description": description,
            "content": { "application/json": { "schema": { "type": "object" } } }
        }
    })
}

fn language_parameter(languages: &[String]) -> Value {
    json!({
        "name": "language",
        "in": "path",
        "required": true,
        "schema": { "type": "string", "enum": languages }
    })
}

fn index_path(languages: &[String], category: &str) -> Value {
    json!({
        "get": {
            "summary": format!("Get the {} index for a language", category),
            "parameters": [language_parameter(languages)],
            "responses": json_response("Summary index document")
        }
    })
}

fn detail_path(languages: &[String], category: &str, key: &str, key_type: &str) -> Value {
    json!({
        "get": {
            "summary": format!("Get a single {} document", category),
            "parameters": [
                language_parameter(languages),
                {
                    "name": key,
                    "in": "path",
                    "required": true,
                    "schema": { "type": key_type }
                }
            ],
            "responses": json_response("Detail document")
        }
    })
}

fn build_document(version: &str, languages: &[String]) -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "CDragon Assets API",
            "version": version,
            "description": "Locale-partitioned JSON tree crawled from the CommunityDragon mirror"
        },
        "paths": {
            "/version.json": {
                "get": {
                    "summary": "Get the crawled content version",
                    "responses": json_response("Version marker")
                }
            },
            "/wiki-skin-data.json": {
                "get": {
                    "summary": "Get the raw wiki skin annotations shared by all languages",
                    "responses": json_response("Wiki skin data")
                }
            },
            "/{language}/champion.json": index_path(languages, "champion"),
            "/{language}/champion/{alias}.json": detail_path(languages, "champion", "alias", "string"),
            "/{language}/skin.json": index_path(languages, "skin"),
            "/{language}/skin/{id}.json": detail_path(languages, "skin", "id", "integer"),
            "/{language}/skinline.json": index_path(languages, "skinline"),
            "/{language}/skinline/{id}.json": detail_path(languages, "skinline", "id", "integer"),
            "/{language}/universe.json": index_path(languages, "universe"),
            "/{language}/universe/{id}.json": detail_path(languages, "universe", "id", "integer"),
        }
    })
}
