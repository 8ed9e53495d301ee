// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use futures::future::join_all;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Map, Value};
use thiserror::Error;
use tracing::{error, info};

use crate::config::settings::Settings;
use crate::domain::models::auxiliary::{
    Item, SummonerEmote, SummonerIcon, SummonerIconSet, TftChampion, TftItem, TftMapSkin, WardSkin,
    WardSkinSet,
};
use crate::domain::models::champion::{Champion, ChampionDetail, ChampionIndexEntry};
use crate::domain::models::skin::{Skin, SkinDetail};
use crate::domain::models::skinline::{Skinline, SkinlineDetail, SkinlineIndexEntry};
use crate::domain::models::universe::{Universe, UniverseDetail, UniverseIndexEntry};
use crate::domain::models::version::{ContentMetadata, VersionMarker};
use crate::domain::models::wiki::WikiSkin;
use crate::domain::repositories::storage_repository::{StorageError, StorageRepository};
use crate::domain::services::resolver_service;
use crate::infrastructure::cdragon::{ApiConfig, CdragonApi, ResourcePath};
use crate::infrastructure::storage::{read_json, write_json};
use crate::infrastructure::wiki::WikiClient;
use crate::utils::concurrency::{partition_results, run_bounded};
use crate::utils::errors::FetchError;

/// 版本标记文件，整次运行共享
const VERSION_FILE: &str = "version.json";
/// 维基数据文件，整次运行共享
const WIKI_FILE: &str = "wiki-skin-data.json";

/// 抓取用例错误类型
#[derive(Error, Debug)]
pub enum CrawlUseCaseError {
    #[error("请求失败: {0}")]
    Fetch(#[from] FetchError),

    #[error("存储失败: {0}")]
    Storage(#[from] StorageError),
}

/// 单次运行的结果状态
///
/// Skipped与Completed可区分，调用方据此决定是否重新生成派生产物
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlOutcome {
    /// 版本未变化，本次无需抓取
    Skipped,
    /// 全量抓取已完成
    Completed,
}

/// 单个语言的抓取报告
#[derive(Debug)]
pub struct LocaleReport {
    /// 语言代码
    pub language: String,
    /// 成功写入的文件数
    pub written: usize,
    /// 失败项描述列表
    pub failures: Vec<String>,
    /// 该语言抓取耗时
    pub elapsed: Duration,
}

/// 整次运行的汇总报告
#[derive(Debug)]
pub struct CrawlReport {
    pub outcome: CrawlOutcome,
    pub version: String,
    pub locales: Vec<LocaleReport>,
}

impl CrawlReport {
    /// 是否存在任何失败项
    pub fn has_failures(&self) -> bool {
        self.locales.iter().any(|locale| !locale.failures.is_empty())
    }
}

/// 单类目流水线的处理结果
#[derive(Debug, Default)]
struct CategoryOutcome {
    written: usize,
    failures: Vec<String>,
}

/// 抓取编排用例
///
/// 负责增量触发判定、维基数据共享与多语言并行抓取。
/// 单个语言的失败被隔离在其报告内，不会中断其余语言；
/// 进程退出码由调用方根据汇总报告决定。
pub struct CrawlUseCase {
    settings: Arc<Settings>,
    storage: Arc<dyn StorageRepository>,
    wiki: WikiClient,
}

impl CrawlUseCase {
    pub fn new(
        settings: Arc<Settings>,
        storage: Arc<dyn StorageRepository>,
    ) -> Result<Self, CrawlUseCaseError> {
        let wiki = WikiClient::new(settings.api.wiki_url.clone())?;
        Ok(Self {
            settings,
            storage,
            wiki,
        })
    }

    fn api_for(&self, language: &str) -> Result<CdragonApi, FetchError> {
        CdragonApi::new(ApiConfig {
            base_url: self.settings.api.base_url.clone(),
            patch: self.settings.api.patch.clone(),
            language: language.to_string(),
            fallback_language: self.settings.api.fallback_language.clone(),
        })
    }

    /// 执行一次完整的运行
    pub async fn run(&self, force: bool) -> Result<CrawlReport, CrawlUseCaseError> {
        let api = self.api_for(&self.settings.api.fallback_language)?;

        let (version, need_crawl) = self.check_version(&api, force).await?;
        if !need_crawl {
            info!("content version {} unchanged, skipping crawl", version);
            return Ok(CrawlReport {
                outcome: CrawlOutcome::Skipped,
                version,
                locales: Vec::new(),
            });
        }

        // 维基数据整次运行只抓取一次，所有语言共享
        let wiki_data = self.wiki.fetch_skin_data().await?;
        write_json(self.storage.as_ref(), WIKI_FILE, &wiki_data).await?;
        let wiki_by_skin_id = Arc::new(resolver_service::flatten_wiki_skins(&wiki_data));
        info!(
            "wiki skin data loaded: {} champions, {} skins",
            wiki_data.len(),
            wiki_by_skin_id.len()
        );

        let languages = &self.settings.crawl.languages;
        info!(
            "start crawling {} languages for version {}",
            languages.len(),
            version
        );

        let locales = join_all(languages.iter().map(|language| {
            let wiki = wiki_by_skin_id.clone();
            async move { self.crawl_language(language, wiki).await }
        }))
        .await;

        Ok(CrawlReport {
            outcome: CrawlOutcome::Completed,
            version,
            locales,
        })
    }

    /// 版本比对
    ///
    /// 本地标记缺失或无法解析都按不一致处理；需要抓取时，
    /// 新标记在各语言抓取开始前写入（版本推进至多一次，
    /// 中途崩溃不会让下次运行反复与旧标记比较）
    async fn check_version(
        &self,
        api: &CdragonApi,
        force: bool,
    ) -> Result<(String, bool), CrawlUseCaseError> {
        let marker: Option<VersionMarker> = read_json(self.storage.as_ref(), VERSION_FILE).await?;
        let remote: ContentMetadata = api.fetch_base("content-metadata.json").await?;

        let local = marker.as_ref().map(|m| m.version.as_str());
        info!(
            "local version: {}, remote version: {}",
            local.unwrap_or("none"),
            remote.version
        );

        if !force && local == Some(remote.version.as_str()) {
            return Ok((remote.version, false));
        }

        let marker = VersionMarker {
            version: remote.version.clone(),
            crawled_at: Utc::now(),
        };
        write_json(self.storage.as_ref(), VERSION_FILE, &marker).await?;
        Ok((remote.version, true))
    }

    /// 抓取单个语言，失败收敛进报告而不向外传播
    async fn crawl_language(&self, language: &str, wiki: Arc<HashMap<i64, WikiSkin>>) -> LocaleReport {
        let started = Instant::now();
        info!("{} start crawling", language);

        let mut report = LocaleReport {
            language: language.to_string(),
            written: 0,
            failures: Vec::new(),
            elapsed: Duration::ZERO,
        };
        match self.crawl_language_inner(language, &wiki, &mut report).await {
            Ok(()) => info!(
                "{} crawling finished, {} files written, cost {:?}",
                language,
                report.written,
                started.elapsed()
            ),
            Err(e) => {
                error!("{} crawling failed: {}", language, e);
                report.failures.push(e.to_string());
            }
        }
        report.elapsed = started.elapsed();
        report
    }

    async fn crawl_language_inner(
        &self,
        language: &str,
        wiki: &HashMap<i64, WikiSkin>,
        report: &mut LocaleReport,
    ) -> Result<(), CrawlUseCaseError> {
        let api = self.api_for(language)?;

        // 四个核心集合并行获取；任一失败即判该语言失败
        let (champions, skins_by_id, universes_raw, skinlines) = tokio::try_join!(
            api.fetch_asset::<Vec<Champion>>(ResourcePath::ChampionSummary),
            api.fetch_asset::<HashMap<String, Skin>>(ResourcePath::Skins),
            api.fetch_asset::<Vec<Universe>>(ResourcePath::Universes),
            api.fetch_asset::<Vec<Skinline>>(ResourcePath::Skinlines),
        )?;

        let universes = resolver_service::filter_universes(universes_raw);
        let skins = resolver_service::sort_skins(skins_by_id);
        let limit = self.settings.crawl.concurrency;

        // 各类目并行处理，类目内部受限并发
        let (champion_out, universe_out, skinline_out, skin_out, aux_out) = tokio::join!(
            self.dump_champions(language, &champions, &skins, wiki, limit),
            self.dump_universes(language, &universes, &skinlines, limit),
            self.dump_skinlines(language, &skinlines, &skins, wiki, limit),
            self.dump_skins(language, &skins, wiki, limit),
            self.dump_auxiliary(&api, language),
        );

        for outcome in [champion_out, universe_out, skinline_out, skin_out, aux_out] {
            report.written += outcome.written;
            report.failures.extend(outcome.failures);
        }
        Ok(())
    }

    async fn dump_champions(
        &self,
        language: &str,
        champions: &[Champion],
        skins: &[Skin],
        wiki: &HashMap<i64, WikiSkin>,
        limit: usize,
    ) -> CategoryOutcome {
        let mut outcome = self
            .write_details(champions, limit, |champion| {
                let of_champion = resolver_service::skins_of_champion(champion, skins);
                let detail = ChampionDetail {
                    champion: champion.clone(),
                    skins: resolver_service::skin_summaries(&of_champion, wiki),
                };
                (format!("{}/champion/{}.json", language, champion.alias), detail)
            })
            .await;

        let entries: Vec<ChampionIndexEntry> = champions
            .iter()
            .map(|champion| ChampionIndexEntry {
                id: champion.id,
                name: champion.name.clone(),
                alias: champion.alias.clone(),
            })
            .collect();
        self.write_summary(
            &format!("{}/champion.json", language),
            "champions",
            &entries,
            &mut outcome,
        )
        .await;
        outcome
    }

    async fn dump_universes(
        &self,
        language: &str,
        universes: &[Universe],
        skinlines: &[Skinline],
        limit: usize,
    ) -> CategoryOutcome {
        let mut outcome = self
            .write_details(universes, limit, |universe| {
                let detail = UniverseDetail {
                    universe: universe.clone(),
                    skinlines: resolver_service::resolve_skinlines_of_universe(universe, skinlines),
                };
                (format!("{}/universe/{}.json", language, universe.id), detail)
            })
            .await;

        let entries: Vec<UniverseIndexEntry> = universes
            .iter()
            .map(|universe| UniverseIndexEntry {
                id: universe.id,
                name: universe.name.clone(),
            })
            .collect();
        self.write_summary(
            &format!("{}/universe.json", language),
            "universes",
            &entries,
            &mut outcome,
        )
        .await;
        outcome
    }

    async fn dump_skinlines(
        &self,
        language: &str,
        skinlines: &[Skinline],
        skins: &[Skin],
        wiki: &HashMap<i64, WikiSkin>,
        limit: usize,
    ) -> CategoryOutcome {
        let mut outcome = self
            .write_details(skinlines, limit, |skinline| {
                let of_skinline = resolver_service::skins_of_skinline(skinline.id, skins);
                let detail = SkinlineDetail {
                    skinline: skinline.clone(),
                    skins: resolver_service::skin_summaries(&of_skinline, wiki),
                };
                (format!("{}/skinline/{}.json", language, skinline.id), detail)
            })
            .await;

        let entries: Vec<SkinlineIndexEntry> = skinlines
            .iter()
            .map(|skinline| SkinlineIndexEntry {
                id: skinline.id,
                name: skinline.name.clone(),
            })
            .collect();
        self.write_summary(
            &format!("{}/skinline.json", language),
            "skinlines",
            &entries,
            &mut outcome,
        )
        .await;
        outcome
    }

    async fn dump_skins(
        &self,
        language: &str,
        skins: &[Skin],
        wiki: &HashMap<i64, WikiSkin>,
        limit: usize,
    ) -> CategoryOutcome {
        let mut outcome = self
            .write_details(skins, limit, |skin| {
                let detail = SkinDetail {
                    skin: skin.clone(),
                    wiki_skin_data: wiki.get(&skin.id).cloned(),
                };
                (format!("{}/skin/{}.json", language, skin.id), detail)
            })
            .await;

        let refs: Vec<&Skin> = skins.iter().collect();
        let entries = resolver_service::skin_summaries(&refs, wiki);
        self.write_summary(
            &format!("{}/skin.json", language),
            "skins",
            &entries,
            &mut outcome,
        )
        .await;
        outcome
    }

    /// 旁路集合直通落盘，单个类目失败只记录不阻断
    async fn dump_auxiliary(&self, api: &CdragonApi, language: &str) -> CategoryOutcome {
        let results = tokio::join!(
            self.dump_aux::<Item>(api, language, ResourcePath::Items, "items.json", "items"),
            self.dump_aux::<TftItem>(
                api,
                language,
                ResourcePath::TftItems,
                "tftitems.json",
                "tftItems"
            ),
            self.dump_aux::<SummonerEmote>(
                api,
                language,
                ResourcePath::SummonerEmotes,
                "summoner-emotes.json",
                "summonerEmotes"
            ),
            self.dump_aux::<SummonerIcon>(
                api,
                language,
                ResourcePath::SummonerIcons,
                "summoner-icons.json",
                "summonerIcons"
            ),
            self.dump_aux::<SummonerIconSet>(
                api,
                language,
                ResourcePath::SummonerIconSets,
                "summoner-icon-sets.json",
                "summonerIconSets"
            ),
            self.dump_aux::<TftChampion>(
                api,
                language,
                ResourcePath::TftChampions,
                "tftchampions.json",
                "tftChampions"
            ),
            self.dump_aux::<TftMapSkin>(
                api,
                language,
                ResourcePath::TftMapSkins,
                "tftmapskins.json",
                "tftMapSkins"
            ),
            self.dump_aux::<WardSkin>(
                api,
                language,
                ResourcePath::WardSkins,
                "ward-skins.json",
                "wardSkins"
            ),
            self.dump_aux::<WardSkinSet>(
                api,
                language,
                ResourcePath::WardSkinSets,
                "ward-skin-sets.json",
                "wardSkinSets"
            ),
        );

        let mut outcome = CategoryOutcome::default();
        let all = vec![
            results.0, results.1, results.2, results.3, results.4, results.5, results.6,
            results.7, results.8,
        ];
        for result in all {
            match result {
                Ok(()) => outcome.written += 1,
                Err(e) => outcome.failures.push(e),
            }
        }
        outcome
    }

    async fn dump_aux<T>(
        &self,
        api: &CdragonApi,
        language: &str,
        path: ResourcePath,
        file: &str,
        field: &str,
    ) -> Result<(), String>
    where
        T: DeserializeOwned + Serialize,
    {
        let records: Vec<T> = api
            .fetch_asset(path)
            .await
            .map_err(|e| format!("{}: {}", file, e))?;
        let doc = summary_doc(field, &records).map_err(|e| format!("{}: {}", file, e))?;
        write_json(
            self.storage.as_ref(),
            &format!("{}/{}", language, file),
            &doc,
        )
        .await
        .map_err(|e| format!("{}: {}", file, e))
    }

    /// 受限并发写入明细文件，逐项收集失败
    async fn write_details<T, D, F>(&self, items: &[T], limit: usize, project: F) -> CategoryOutcome
    where
        D: Serialize,
        F: Fn(&T) -> (String, D),
    {
        let results = run_bounded(items.iter().collect::<Vec<_>>(), limit, |item| {
            let (key, doc) = project(item);
            let storage = self.storage.clone();
            async move {
                write_json(storage.as_ref(), &key, &doc)
                    .await
                    .map_err(|e| format!("{}: {}", key, e))
            }
        })
        .await;

        let (oks, failures) = partition_results(results);
        CategoryOutcome {
            written: oks.len(),
            failures,
        }
    }

    /// 写入汇总索引，失败计入类目结果
    async fn write_summary<T: Serialize>(
        &self,
        key: &str,
        field: &str,
        records: &[T],
        outcome: &mut CategoryOutcome,
    ) {
        let result = match summary_doc(field, records) {
            Ok(doc) => write_json(self.storage.as_ref(), key, &doc)
                .await
                .map_err(|e| format!("{}: {}", key, e)),
            Err(e) => Err(format!("{}: {}", key, e)),
        };
        match result {
            Ok(()) => outcome.written += 1,
            Err(e) => outcome.failures.push(e),
        }
    }
}

/// 构造`{"total": n, "<category>": [...]}`形态的汇总文档
fn summary_doc<T: Serialize>(field: &str, records: &[T]) -> Result<Value, serde_json::Error> {
    let mut map = Map::new();
    map.insert("total".to_string(), json!(records.len()));
    map.insert(field.to_string(), serde_json::to_value(records)?);
    Ok(Value::Object(map))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_doc_shape() {
        let doc = summary_doc("skinlines", &[json!({"id": 5}), json!({"id": 9})]).unwrap();
        assert_eq!(doc["total"], json!(2));
        assert_eq!(doc["skinlines"][0]["id"], json!(5));
    }

    #[test]
    fn test_summary_doc_empty() {
        let doc = summary_doc("items", &Vec::<Value>::new()).unwrap();
        assert_eq!(doc["total"], json!(0));
        assert_eq!(doc["items"], json!([]));
    }
}
