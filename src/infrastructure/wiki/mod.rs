// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 维基模块
///
/// 抓取社区维基的SkinData模块页面，并把页面内嵌的Lua数据表
/// 提取为类型化的皮肤标注记录。页面本身拉取失败是致命错误；
/// 内容解析失败只会降级为空结果，抓取流程继续。
pub mod lua;


use std::time::Duration;

use scraper::{Html, Selector};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::domain::models::wiki::{WikiChampion, WikiSkinData};
use crate::utils::errors::FetchError;
use crate::utils::retry_policy::RetryPolicy;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; cdragon-crawler/1.0)";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// 皮肤数据模块页面的相对路径
const SKIN_DATA_PAGE: &str = "Module:SkinData/data?action=render";

/// 维基站点客户端
pub struct WikiClient {
    base_url: String,
    client: reqwest::Client,
    retry: RetryPolicy,
}

impl WikiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            base_url: base_url.into(),
            client,
            retry: RetryPolicy::default(),
        })
    }

    /// 抓取并解析维基皮肤数据表
    pub async fn fetch_skin_data(&self) -> Result<WikiSkinData, FetchError> {
        let url = format!("{}/{}", self.base_url, SKIN_DATA_PAGE);
        let html = self.get_text(&url).await?;
        Ok(extract_skin_data(&html))
    }

    /// 携带重试策略的文本GET请求
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let mut attempt = 1u32;
        loop {
            match self.try_get_text(url).await {
                Ok(text) => return Ok(text),
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

    async fn try_get_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }
        Ok(response.text().await?)
    }
}

/// 从HTML页面中提取皮肤数据表
///
/// 代码块缺失或为空时直接返回空映射，不尝试解析
pub fn extract_skin_data(html: &str) -> WikiSkinData {
    let document = Html::parse_document(html);
    let selector = Selector::parse(".mw-code.mw-script").expect("static selector is valid");
    let code = document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>())
        .unwrap_or_default();

    if code.trim().is_empty() {
        warn!("wiki skin data code block is missing or empty");
        return WikiSkinData::default();
    }

    parse_skin_table(&code)
}

/// 将Lua表源码转换为类型化的维基数据
///
/// 表级解析失败降级为空映射；单个英雄条目结构不符时跳过该条目
pub fn parse_skin_table(code: &str) -> WikiSkinData {
    let value = match lua::parse_lua_table(code) {
        Ok(value) => value,
        Err(e) => {
            error!("failed to parse wiki skin table: {}", e);
            error!(
                "context near error: {}",
                lua::context_window(code, e.offset, 50)
            );
            return WikiSkinData::default();
        }
    };

    let Value::Object(entries) = value else {
        warn!("wiki skin table did not parse to a keyed table");
        return WikiSkinData::default();
    };

    let mut data = WikiSkinData::default();
    for (name, entry) in entries {
        match serde_json::from_value::<WikiChampion>(entry) {
            Ok(champion) => {
                data.insert(name, champion);
            }
            Err(e) => warn!("skipping malformed wiki entry for {}: {}", name, e),
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::wiki::WikiCost;

    const SAMPLE_PAGE: &str = r#"<html><body>
<pre class="mw-code mw-script" dir="ltr">-- &lt;pre&gt;
return {
    ["Aatrox"] = {
        id = 266,
        skins = {
            ["Original"] = {
                id = 0,
                availability = "Available",
                cost = 880,
            },
            ["Justicar"] = {
                id = 1,
                cost = 975,
                set = {"Justicar"},
                chromas = {
                    ["266011"] = { id = 266011, availability = "Available" },
                },
            },
        },
    },
}
-- &lt;/pre&gt; [[Category:Lua]]</pre>
</body></html>"#;

    #[test]
    fn test_extract_skin_data_from_page() {
        let data = extract_skin_data(SAMPLE_PAGE);
        let aatrox = data.get("Aatrox").expect("champion entry present");
        assert_eq!(aatrox.id, 266);
        assert_eq!(aatrox.skins.len(), 2);

        let justicar = aatrox.skins.get("Justicar").unwrap();
        assert_eq!(justicar.id, 1);
        assert!(matches!(justicar.cost, Some(WikiCost::Amount(975))));
        assert_eq!(justicar.set, vec!["Justicar".to_string()]);
        assert_eq!(justicar.chromas.len(), 1);
    }

    #[test]
    fn test_extract_skin_data_without_code_block() {
        let data = extract_skin_data("<html><body><p>nothing here</p></body></html>");
        assert!(data.is_empty());
    }

    #[test]
    fn test_malformed_table_degrades_to_empty() {
        let data = parse_skin_table("return { [=broken ]");
        assert!(data.is_empty());
    }

    #[test]
    fn test_malformed_champion_entry_is_skipped() {
        // Aatrox的id是字符串，结构不符被跳过；Ahri保留
        let code = r#"return {
            ["Aatrox"] = { id = "not-a-number", skins = {} },
            ["Ahri"] = { id = 103, skins = {} },
        }"#;
        let data = parse_skin_table(code);
        assert!(!data.contains_key("Aatrox"));
        assert_eq!(data.get("Ahri").unwrap().id, 103);
    }

    #[test]
    fn test_special_cost_label() {
        let code = r#"return {
            ["Ahri"] = {
                id = 103,
                skins = { ["0"] = { id = 0, cost = "special" } },
            },
        }"#;
        let data = parse_skin_table(code);
        let skin = &data.get("Ahri").unwrap().skins["0"];
        assert!(matches!(skin.cost, Some(WikiCost::Label(ref label)) if label == "special"));
    }
}
