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

use std::sync::Arc;
use std::time::Instant;

use cdragon_crawler::application::use_cases::crawl_use_case::{CrawlOutcome, CrawlUseCase};
use cdragon_crawler::config::settings::Settings;
use cdragon_crawler::infrastructure::storage::LocalStorage;
use cdragon_crawler::site;
use cdragon_crawler::utils::telemetry;
use tracing::{error, info};

/// 主函数
///
/// 应用程序入口点，负责装配组件并驱动一次抓取。
/// 唯一的命令行开关是`--force`，用于绕过版本比对强制重抓。
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting cdragon-crawler...");

    let force = std::env::args().any(|arg| arg == "--force");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Assemble storage and the crawl use case
    let storage = Arc::new(LocalStorage::new(settings.storage.data_dir.clone()));
    let use_case = CrawlUseCase::new(settings.clone(), storage)?;

    // 4. Run the crawl and derive artifacts
    let started = Instant::now();
    let report = use_case.run(force).await?;

    match report.outcome {
        CrawlOutcome::Skipped => {
            info!("no need to crawl, version {} is up to date", report.version);
        }
        CrawlOutcome::Completed => {
            for locale in &report.locales {
                info!(
                    "{}: {} files written, {} failures, cost {:?}",
                    locale.language,
                    locale.written,
                    locale.failures.len(),
                    locale.elapsed
                );
            }
            site::index_page::generate(&settings.storage.data_dir).await?;
            site::openapi::generate(&settings.storage.data_dir).await?;
        }
    }

    if report.has_failures() {
        error!("crawl finished with failures, cost {:?}", started.elapsed());
        anyhow::bail!("部分抓取任务失败");
    }

    info!("All tasks finished, cost {:?}", started.elapsed());
    Ok(())
}
