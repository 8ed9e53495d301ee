// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 端到端抓取流程测试
//!
//! 用wiremock模拟内容镜像与维基页面，验证增量触发、
//! 语言回退、关系解析与落盘文件树的形态。

use std::path::Path;
use std::sync::Arc;

use cdragon_crawler::application::use_cases::crawl_use_case::{CrawlOutcome, CrawlUseCase};
use cdragon_crawler::config::settings::{ApiSettings, CrawlSettings, Settings, StorageSettings};
use cdragon_crawler::infrastructure::storage::{InMemoryStorage, LocalStorage};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WIKI_PAGE: &str = r#"<html><body>
<pre class="mw-code mw-script">-- &lt;pre&gt;
return {
    ["Aatrox"] = {
        id = 266,
        skins = {
            ["Justicar"] = { id = 1, cost = 975, availability = "Available" },
        },
    },
}
-- &lt;/pre&gt;</pre>
</body></html>"#;

async fn mount_asset(server: &MockServer, name: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!(
            "/pbe/plugins/rcp-be-lol-game-data/global/default/v1/{}",
            name
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn setup_server(wiki_page: &str) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pbe/content-metadata.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "version": "14.9" })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/Module:SkinData/data"))
        .respond_with(ResponseTemplate::new(200).set_body_string(wiki_page))
        .mount(&server)
        .await;

    mount_asset(
        &server,
        "champion-summary.json",
        json!([
            { "id": 266, "name": "Aatrox", "alias": "Aatrox", "roles": ["fighter"] },
            { "id": 103, "name": "Ahri", "alias": "Ahri", "roles": ["mage"] }
        ]),
    )
    .await;

    mount_asset(
        &server,
        "skins.json",
        json!({
            "266001": {
                "id": 266001,
                "isBase": false,
                "name": "Justicar Aatrox",
                "rarity": "kEpic",
                "skinLines": [{ "id": 5 }]
            },
            "266000": {
                "id": 266000,
                "isBase": true,
                "name": "Aatrox",
                "rarity": "kNoRarity"
            },
            "103000": {
                "id": 103000,
                "isBase": true,
                "name": "Ahri",
                "rarity": "kNoRarity"
            }
        }),
    )
    .await;

    mount_asset(
        &server,
        "universes.json",
        json!([
            { "id": 1, "name": "Runeterra", "skinSets": [5, 777] },
            { "id": 2, "name": "Incomplete" },
            { "id": 3, "name": "Empty", "skinSets": [] }
        ]),
    )
    .await;

    mount_asset(
        &server,
        "skinlines.json",
        json!([
            { "id": 5, "name": "Blood Moon", "description": "a crimson theme" }
        ]),
    )
    .await;

    for name in [
        "items.json",
        "tftitems.json",
        "summoner-emotes.json",
        "summoner-icons.json",
        "summoner-icon-sets.json",
        "tftchampions.json",
        "tftmapskins.json",
        "ward-skins.json",
        "ward-skin-sets.json",
    ] {
        mount_asset(&server, name, json!([])).await;
    }

    server
}

fn settings_for(server: &MockServer, languages: &[&str]) -> Arc<Settings> {
    Arc::new(Settings {
        api: ApiSettings {
            base_url: server.uri(),
            wiki_url: server.uri(),
            patch: "pbe".to_string(),
            fallback_language: "default".to_string(),
        },
        crawl: CrawlSettings {
            languages: languages.iter().map(|s| s.to_string()).collect(),
            concurrency: 4,
        },
        storage: StorageSettings {
            data_dir: ".data".to_string(),
        },
    })
}

fn read_doc(root: &Path, key: &str) -> Value {
    let data = std::fs::read(root.join(key))
        .unwrap_or_else(|e| panic!("missing file {}: {}", key, e));
    serde_json::from_slice(&data).unwrap()
}

#[tokio::test]
async fn test_full_crawl_writes_locale_tree() {
    let server = setup_server(WIKI_PAGE).await;
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(LocalStorage::new(dir.path()));
    let use_case = CrawlUseCase::new(settings_for(&server, &["default", "zh_cn"]), storage).unwrap();

    let report = use_case.run(false).await.unwrap();
    assert_eq!(report.outcome, CrawlOutcome::Completed);
    assert_eq!(report.version, "14.9");
    assert!(!report.has_failures(), "failures: {:?}", report.locales);
    assert_eq!(report.locales.len(), 2);

    let root = dir.path();

    // 运行根部的共享文件
    let version = read_doc(root, "version.json");
    assert_eq!(version["version"], json!("14.9"));
    assert!(version["crawledAt"].is_string());
    let wiki = read_doc(root, "wiki-skin-data.json");
    assert!(wiki.get("Aatrox").is_some());

    // 英雄详情：皮肤按ID升序，维基标注按绝对ID合并到266001
    let aatrox = read_doc(root, "default/champion/Aatrox.json");
    assert_eq!(aatrox["alias"], json!("Aatrox"));
    let skins = aatrox["skins"].as_array().unwrap();
    assert_eq!(skins[0]["id"], json!(266000));
    assert_eq!(skins[1]["id"], json!(266001));
    assert!(skins[0].get("wikiSkinData").is_none());
    assert_eq!(skins[1]["wikiSkinData"]["cost"], json!(975));

    // 皮肤详情同样携带维基标注
    let justicar = read_doc(root, "default/skin/266001.json");
    assert_eq!(justicar["wikiSkinData"]["availability"], json!("Available"));
    let base = read_doc(root, "default/skin/266000.json");
    assert!(base.get("wikiSkinData").is_none());

    // 宇宙：缺skinSets的被剔除，空列表保留，悬空系列ID被丢弃
    let universe_index = read_doc(root, "default/universe.json");
    assert_eq!(universe_index["total"], json!(2));
    assert!(!root.join("default/universe/2.json").exists());
    let runeterra = read_doc(root, "default/universe/1.json");
    let resolved = runeterra["skinlines"].as_array().unwrap();
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0]["name"], json!("Blood Moon"));
    let empty = read_doc(root, "default/universe/3.json");
    assert_eq!(empty["skinlines"], json!([]));

    // 皮肤系列详情反向关联皮肤
    let blood_moon = read_doc(root, "default/skinline/5.json");
    let line_skins = blood_moon["skins"].as_array().unwrap();
    assert_eq!(line_skins.len(), 1);
    assert_eq!(line_skins[0]["id"], json!(266001));

    // 各类目汇总索引
    let champion_index = read_doc(root, "default/champion.json");
    assert_eq!(champion_index["total"], json!(2));
    let skin_index = read_doc(root, "default/skin.json");
    assert_eq!(skin_index["total"], json!(3));
    let items = read_doc(root, "default/items.json");
    assert_eq!(items["total"], json!(0));
    assert_eq!(items["items"], json!([]));

    // zh_cn没有独立数据，经由备用语言回退后仍产出完整文件树
    let fallback_champion = read_doc(root, "zh_cn/champion/Aatrox.json");
    assert_eq!(fallback_champion["id"], json!(266));
    assert!(root.join("zh_cn/skin/266000.json").exists());
}

#[tokio::test]
async fn test_second_run_with_same_version_is_skipped() {
    let server = setup_server(WIKI_PAGE).await;
    let storage = Arc::new(InMemoryStorage::new());
    let use_case =
        CrawlUseCase::new(settings_for(&server, &["default"]), storage.clone()).unwrap();

    let first = use_case.run(false).await.unwrap();
    assert_eq!(first.outcome, CrawlOutcome::Completed);
    let writes_after_first = storage.write_count();
    assert!(writes_after_first > 0);

    // 版本未变化：返回Skipped且零写入
    let second = use_case.run(false).await.unwrap();
    assert_eq!(second.outcome, CrawlOutcome::Skipped);
    assert!(second.locales.is_empty());
    assert_eq!(storage.write_count(), writes_after_first);
}

#[tokio::test]
async fn test_force_recrawl_runs_full_pipeline() {
    let server = setup_server(WIKI_PAGE).await;
    let storage = Arc::new(InMemoryStorage::new());
    let use_case =
        CrawlUseCase::new(settings_for(&server, &["default"]), storage.clone()).unwrap();

    use_case.run(false).await.unwrap();
    let writes_after_first = storage.write_count();

    let forced = use_case.run(true).await.unwrap();
    assert_eq!(forced.outcome, CrawlOutcome::Completed);
    assert!(storage.write_count() > writes_after_first);
}

#[tokio::test]
async fn test_malformed_wiki_payload_degrades_gracefully() {
    let garbage_page = r#"<html><body>
<pre class="mw-code mw-script">return { ["Aatrox"] = { id = , } }</pre>
</body></html>"#;
    let server = setup_server(garbage_page).await;
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(LocalStorage::new(dir.path()));
    let use_case = CrawlUseCase::new(settings_for(&server, &["default"]), storage).unwrap();

    let report = use_case.run(false).await.unwrap();
    assert_eq!(report.outcome, CrawlOutcome::Completed);
    assert!(!report.has_failures());

    // 标注缺席但抓取继续：维基文件为空映射，皮肤不带wikiSkinData
    let wiki = read_doc(dir.path(), "wiki-skin-data.json");
    assert_eq!(wiki, json!({}));
    let aatrox = read_doc(dir.path(), "default/champion/Aatrox.json");
    for skin in aatrox["skins"].as_array().unwrap() {
        assert!(skin.get("wikiSkinData").is_none());
    }
}
