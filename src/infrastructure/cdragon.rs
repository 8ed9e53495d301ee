// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::utils::errors::FetchError;
use crate::utils::retry_policy::RetryPolicy;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; cdragon-crawler/1.0)";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// 固定的资源JSON路径目录
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourcePath {
    ChampionSummary,
    Universes,
    Skinlines,
    Skins,
    Items,
    TftItems,
    SummonerEmotes,
    SummonerIcons,
    SummonerIconSets,
    TftChampions,
    TftMapSkins,
    WardSkins,
    WardSkinSets,
}

impl ResourcePath {
    /// 资源在上游的相对路径
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourcePath::ChampionSummary => "v1/champion-summary.json",
            ResourcePath::Universes => "v1/universes.json",
            ResourcePath::Skinlines => "v1/skinlines.json",
            ResourcePath::Skins => "v1/skins.json",
            ResourcePath::Items => "v1/items.json",
            ResourcePath::TftItems => "v1/tftitems.json",
            ResourcePath::SummonerEmotes => "v1/summoner-emotes.json",
            ResourcePath::SummonerIcons => "v1/summoner-icons.json",
            ResourcePath::SummonerIconSets => "v1/summoner-icon-sets.json",
            ResourcePath::TftChampions => "v1/tftchampions.json",
            ResourcePath::TftMapSkins => "v1/tftmapskins.json",
            ResourcePath::WardSkins => "v1/ward-skins.json",
            ResourcePath::WardSkinSets => "v1/ward-skin-sets.json",
        }
    }
}

/// 上游API配置
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// 镜像地址
    pub base_url: String,
    /// 内容通道
    pub patch: String,
    /// 主语言
    pub language: String,
    /// 备用语言
    pub fallback_language: String,
}

/// CommunityDragon内容镜像客户端
///
/// 同语言回退在本层完成；瞬时错误的重试完全委托给重试策略
pub struct CdragonApi {
    config: ApiConfig,
    client: reqwest::Client,
    retry: RetryPolicy,
}

impl CdragonApi {
    pub fn new(config: ApiConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            config,
            client,
            retry: RetryPolicy::default(),
        })
    }

    fn patch_url(&self) -> String {
        format!("{}/{}", self.config.base_url, self.config.patch)
    }

    /// 资源的主语言与备用语言URL
    fn asset_urls(&self, path: ResourcePath) -> (String, String) {
        (
            format!(
                "{}/plugins/rcp-be-lol-game-data/global/{}/{}",
                self.patch_url(),
                self.config.language,
                path.as_str()
            ),
            format!(
                "{}/plugins/rcp-be-lol-game-data/global/{}/{}",
                self.patch_url(),
                self.config.fallback_language,
                path.as_str()
            ),
        )
    }

    /// 获取资源数据，主语言失败时回退到备用语言
    ///
    /// 两个地址均失败时返回携带末次错误的`BothLocalesFailed`
    pub async fn fetch_asset<T: DeserializeOwned>(
        &self,
        path: ResourcePath,
    ) -> Result<T, FetchError> {
        let (url, fallback_url) = self.asset_urls(path);

        match self.get_json(&url).await {
            Ok(data) => Ok(data),
            Err(primary_error) => {
                // 主备语言相同则无需重复请求
                if fallback_url == url {
                    return Err(FetchError::BothLocalesFailed {
                        path: path.as_str().to_string(),
                        source: Box::new(primary_error),
                    });
                }
                warn!(
                    "primary locale fetch failed for {}, falling back: {}",
                    path.as_str(),
                    primary_error
                );
                self.get_json(&fallback_url)
                    .await
                    .map_err(|e| FetchError::BothLocalesFailed {
                        path: path.as_str().to_string(),
                        source: Box::new(e),
                    })
            }
        }
    }

    /// 获取版本等语言无关的基础数据
    pub async fn fetch_base<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}/{}", self.patch_url(), path);
        self.get_json(&url).await
    }

    /// 携带重试策略的JSON GET请求
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let mut attempt = 1u32;
        loop {
            match self.try_get_json(url).await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_retryable() && self.retry.should_retry(attempt) => {
                    let backoff = self.retry.calculate_backoff(attempt);
                    debug!(
                        "request to {} failed (attempt {}), retrying in {:?}: {}",
                        url, attempt, backoff, e
                    );
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn try_get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(language: &str) -> CdragonApi {
        CdragonApi::new(ApiConfig {
            base_url: "https://raw.communitydragon.org".to_string(),
            patch: "pbe".to_string(),
            language: language.to_string(),
            fallback_language: "default".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_asset_urls_substitute_locales() {
        let api = api("zh_cn");
        let (primary, fallback) = api.asset_urls(ResourcePath::ChampionSummary);
        assert_eq!(
            primary,
            "https://raw.communitydragon.org/pbe/plugins/rcp-be-lol-game-data/global/zh_cn/v1/champion-summary.json"
        );
        assert_eq!(
            fallback,
            "https://raw.communitydragon.org/pbe/plugins/rcp-be-lol-game-data/global/default/v1/champion-summary.json"
        );
    }

    #[test]
    fn test_asset_urls_identical_for_default_language() {
        let api = api("default");
        let (primary, fallback) = api.asset_urls(ResourcePath::Skins);
        assert_eq!(primary, fallback);
    }

    #[test]
    fn test_resource_path_catalog() {
        assert_eq!(ResourcePath::Skins.as_str(), "v1/skins.json");
        assert_eq!(
            ResourcePath::SummonerIconSets.as_str(),
            "v1/summoner-icon-sets.json"
        );
        assert_eq!(ResourcePath::WardSkinSets.as_str(), "v1/ward-skin-sets.json");
    }
}
