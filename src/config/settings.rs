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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use url::Url;

/// 上游支持的语言区域列表
pub const LANGUAGES: &[&str] = &[
    "ar_ae", "cs_cz", "de_de", "default", "el_gr", "en_au", "en_gb", "en_ph", "en_sg", "es_ar",
    "es_es", "es_mx", "fr_fr", "hu_hu", "id_id", "it_it", "ja_jp", "ko_kr", "pl_pl", "pt_br",
    "ro_ro", "ru_ru", "th_th", "tr_tr", "vi_vn", "zh_cn", "zh_my", "zh_tw",
];

/// 上游支持的内容通道
pub const PATCHES: &[&str] = &["latest", "pbe"];

/// 应用程序配置设置
///
/// 包含上游API、抓取与存储等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 上游API配置
    pub api: ApiSettings,
    /// 抓取配置
    pub crawl: CrawlSettings,
    /// 存储配置
    pub storage: StorageSettings,
}

/// 上游API配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    /// CommunityDragon镜像地址
    pub base_url: String,
    /// 维基站点地址
    pub wiki_url: String,
    /// 内容通道（latest或pbe）
    pub patch: String,
    /// 主语言失败时的备用语言
    pub fallback_language: String,
}

/// 抓取配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlSettings {
    /// 需要抓取的语言列表
    pub languages: Vec<String>,
    /// 单类目内的并发上限
    pub concurrency: usize,
}

/// 存储配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// 数据输出目录
    pub data_dir: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从默认值、可选配置文件与环境变量加载配置
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Default API settings
            .set_default("api.base_url", "https://raw.communitydragon.org")?
            .set_default("api.wiki_url", "https://leagueoflegends.fandom.com/wiki")?
            .set_default("api.patch", "pbe")?
            .set_default("api.fallback_language", "default")?
            // Default crawl settings
            .set_default(
                "crawl.languages",
                vec!["zh_cn", "default", "zh_tw", "ja_jp", "ko_kr"],
            )?
            .set_default("crawl.concurrency", 10)?
            // Default storage settings
            .set_default("storage.data_dir", ".data")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("CDRAGON").separator("__"));

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// 校验配置项的取值
    pub fn validate(&self) -> Result<(), ConfigError> {
        Url::parse(&self.api.base_url)
            .map_err(|e| ConfigError::Message(format!("api.base_url 无效: {}", e)))?;
        Url::parse(&self.api.wiki_url)
            .map_err(|e| ConfigError::Message(format!("api.wiki_url 无效: {}", e)))?;
        if !PATCHES.contains(&self.api.patch.as_str()) {
            return Err(ConfigError::Message(format!(
                "api.patch 不受支持: {}",
                self.api.patch
            )));
        }
        if !LANGUAGES.contains(&self.api.fallback_language.as_str()) {
            return Err(ConfigError::Message(format!(
                "api.fallback_language 包含未知语言: {}",
                self.api.fallback_language
            )));
        }
        for language in &self.crawl.languages {
            if !LANGUAGES.contains(&language.as_str()) {
                return Err(ConfigError::Message(format!(
                    "crawl.languages 包含未知语言: {}",
                    language
                )));
            }
        }
        if self.crawl.concurrency == 0 {
            return Err(ConfigError::Message(
                "crawl.concurrency 必须大于0".to_string(),
            ));
        }
        Ok(())
    }
}
