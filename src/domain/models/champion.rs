// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use super::skin::SkinSummary;

/// 英雄概要记录
///
/// 对应上游 v1/champion-summary.json 中的条目
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Champion {
    /// 英雄数字ID
    pub id: i64,
    /// 显示名称
    pub name: String,
    /// 英文别名，唯一且可安全用于URL与文件路径
    pub alias: String,
    /// 头像资源路径
    #[serde(default)]
    pub square_portrait_path: String,
    /// 职业标签列表
    #[serde(default)]
    pub roles: Vec<ChampionRole>,
}

/// 英雄职业标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChampionRole {
    /// 刺客
    Assassin,
    /// 战士
    Fighter,
    /// 法师
    Mage,
    /// 射手
    Marksman,
    /// 辅助
    Support,
    /// 坦克
    Tank,
}

/// 带皮肤列表的英雄详情文档
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionDetail {
    #[serde(flatten)]
    pub champion: Champion,
    /// 该英雄的皮肤概要，按ID升序
    pub skins: Vec<SkinSummary>,
}

/// 英雄汇总索引条目
#[derive(Debug, Clone, Serialize)]
pub struct ChampionIndexEntry {
    pub id: i64,
    pub name: String,
    pub alias: String,
}
