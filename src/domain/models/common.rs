// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 地区差异化描述
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionalDescription {
    /// 地区标识
    #[serde(default)]
    pub region: String,
    /// 描述文本
    #[serde(default)]
    pub description: String,
}

/// 地区差异化稀有度
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionalRarity {
    /// 地区标识
    #[serde(default)]
    pub region: String,
    /// 稀有度数值
    #[serde(default)]
    pub rarity: i64,
}
