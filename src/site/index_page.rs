// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::Path;

use chrono::Utc;
use tokio::fs;
use tracing::info;

use crate::domain::models::version::VersionMarker;
use crate::site::list_dirs;

/// 生成数据目录的静态索引页面
pub async fn generate(data_dir: &str) -> anyhow::Result<()> {
    let root = Path::new(data_dir);
    let version = read_version(root).await;
    let languages = list_dirs(root).await?;
    let categories = match languages.first() {
        Some(first) => list_dirs(&root.join(first)).await?,
        None => Vec::new(),
    };

    let html = render(&version, &languages, &categories);
    fs::write(root.join("index.html"), html).await?;
    info!("index page generated at {}/index.html", data_dir);
    Ok(())
}

async fn read_version(root: &Path) -> VersionMarker {
    let fallback = || VersionMarker {
        version: "unknown".to_string(),
        crawled_at: Utc::now(),
    };
    match fs::read(root.join("version.json")).await {
        Ok(data) => serde_json::from_slice(&data).unwrap_or_else(|_| fallback()),
        Err(_) => fallback(),
    }
}

fn language_label(language: &str) -> &str {
    match language {
        "default" => "默认",
        "zh_cn" => "简体中文",
        "zh_tw" => "繁体中文",
        "ja_jp" => "日语",
        "ko_kr" => "韩语",
        other => other,
    }
}

fn category_description(category: &str) -> &str {
    match category {
        "champion" => "英雄相关的数据，包括别名、职业标签和皮肤列表",
        "skin" => "皮肤相关数据，包括稀有度、所属系列和维基补充信息",
        "skinline" => "皮肤系列相关数据，包括主题和关联皮肤",
        "universe" => "宇宙观设定相关数据，包括关联的皮肤系列",
        _ => "相关的游戏资源数据",
    }
}

fn render(version: &VersionMarker, languages: &[String], categories: &[String]) -> String {
    let language_labels = languages
        .iter()
        .map(|lang| {
            format!(
                r#"<span class="language-label">{} ({})</span>"#,
                language_label(lang),
                lang
            )
        })
        .collect::<Vec<_>>()
        .join("");

    let category_cards = categories
        .iter()
        .map(|category| {
            format!(
                r#"<div class="card"><h3>{}</h3><p>{}</p></div>"#,
                category,
                category_description(category)
            )
        })
        .collect::<Vec<_>>()
        .join("\n      ");

    let crawled_date = version.crawled_at.format("%Y-%m-%d");

    format!(
        r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>CDragon Assets - {version}</title>
  <style>
    body {{
      font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Arial, sans-serif;
      line-height: 1.6;
      color: #333;
      max-width: 1200px;
      margin: 0 auto;
      padding: 20px;
      background-color: #f8f9fa;
    }}
    .container {{
      background-color: white;
      border-radius: 8px;
      box-shadow: 0 2px 10px rgba(0, 0, 0, 0.1);
      padding: 30px;
      margin-bottom: 30px;
    }}
    h1, h2, h3 {{ color: #1a73e8; }}
    h1 {{ border-bottom: 2px solid #eaecef; padding-bottom: 10px; margin-top: 0; }}
    .card-container {{
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
      gap: 20px;
      margin-top: 20px;
    }}
    .card {{ border: 1px solid #e1e4e8; border-radius: 6px; padding: 16px; }}
    .endpoint {{
      background-color: #f1f8ff;
      border-left: 4px solid #1a73e8;
      padding: 12px;
      margin: 12px 0;
      border-radius: 0 4px 4px 0;
    }}
    .language-label {{
      display: inline-block;
      background-color: #e1e4e8;
      border-radius: 4px;
      padding: 2px 8px;
      margin: 0 8px 8px 0;
      font-size: 0.85em;
    }}
    pre {{ background-color: #f6f8fa; border-radius: 6px; padding: 12px; overflow-x: auto; }}
    code {{ font-family: Consolas, "Liberation Mono", Menlo, monospace; font-size: 0.9em; }}
  </style>
</head>
<body>
  <div class="container">
    <h1>CDragon Assets <span style="font-size:1rem;color:#666;">v{version}</span></h1>
    <p>这是一个数据收集项目，定期抓取communitydragon.org的最新数据，经过数据清洗、分类后归档。</p>

    <h2>可用语言</h2>
    <div>{language_labels}</div>

    <h2>资产类型</h2>
    <div class="card-container">
      {category_cards}
    </div>
  </div>

  <div class="container">
    <h2>API 端点</h2>
    <div class="endpoint"><strong>获取版本信息</strong><pre><code>GET /version.json</code></pre></div>
    <div class="endpoint"><strong>获取特定语言的类目索引</strong><pre><code>GET /:language/:category.json</code></pre></div>
    <div class="endpoint"><strong>获取特定语言的英雄详情</strong><pre><code>GET /:language/champion/:alias.json</code></pre></div>
    <div class="endpoint"><strong>获取特定语言的皮肤详情</strong><pre><code>GET /:language/skin/:skinId.json</code></pre></div>
    <div class="endpoint"><strong>获取维基皮肤补充数据</strong><pre><code>GET /wiki-skin-data.json</code></pre></div>
  </div>

  <div class="container">
    <h2>数据更新周期</h2>
    <p>数据在上游版本变化后重新抓取，未变化的版本不会产生新的写入。</p>
    <p>最后更新时间: {crawled_date}</p>
  </div>
</body>
</html>
"#,
        version = version.version,
        language_labels = language_labels,
        category_cards = category_cards,
        crawled_date = crawled_date,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_generate_renders_languages_and_categories() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::write(
            root.join("version.json"),
            r#"{"version":"14.9","crawledAt":"2025-04-01T00:00:00Z"}"#,
        )
        .unwrap();
        std::fs::create_dir_all(root.join("default/champion")).unwrap();
        std::fs::create_dir_all(root.join("default/skin")).unwrap();
        std::fs::create_dir_all(root.join("zh_cn/champion")).unwrap();

        generate(root.to_str().unwrap()).await.unwrap();

        let html = std::fs::read_to_string(root.join("index.html")).unwrap();
        assert!(html.contains("14.9"));
        assert!(html.contains("zh_cn"));
        assert!(html.contains("champion"));
        assert!(html.contains("2025-04-01"));
    }

    #[tokio::test]
    async fn test_generate_with_missing_version_marker() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("default")).unwrap();

        generate(dir.path().to_str().unwrap()).await.unwrap();

        let html = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(html.contains("unknown"));
    }
}
