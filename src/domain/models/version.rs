// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 版本标记
///
/// 增量抓取判定所依赖的唯一跨运行持久状态，
/// 每次运行最多读取一次、改写一次
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionMarker {
    /// 上游内容版本号
    pub version: String,
    /// 本次抓取时间
    pub crawled_at: DateTime<Utc>,
}

/// 上游 content-metadata.json 中的版本标量
#[derive(Debug, Clone, Deserialize)]
pub struct ContentMetadata {
    pub version: String,
}
