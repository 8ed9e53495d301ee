// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use super::common::{RegionalDescription, RegionalRarity};
use super::wiki::WikiSkin;

/// 皮肤记录
///
/// 对应上游 v1/skins.json 中以皮肤ID字符串为键的对象值。
/// ID编码遵循 `championId * 1000 + 局部序号`。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skin {
    /// 皮肤绝对ID
    pub id: i64,
    /// 是否为基础皮肤
    #[serde(default)]
    pub is_base: bool,
    /// 显示名称
    pub name: String,
    /// 原画资源路径
    #[serde(default)]
    pub splash_path: String,
    /// 非居中原画资源路径
    #[serde(default)]
    pub uncentered_splash_path: String,
    /// 方图资源路径
    #[serde(default)]
    pub tile_path: String,
    /// 载入画面资源路径
    #[serde(default)]
    pub load_screen_path: String,
    /// 稀有度
    #[serde(default)]
    pub rarity: Rarity,
    /// 是否为绝版皮肤
    #[serde(default)]
    pub is_legacy: bool,
    /// 原画视频路径
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub splash_video_path: Option<String>,
    /// 特性说明文本
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features_text: Option<String>,
    /// 地区稀有度ID
    #[serde(default)]
    pub region_rarity_id: i64,
    /// 稀有度宝石图标路径
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity_gem_path: Option<String>,
    /// 所属皮肤系列引用列表
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin_lines: Option<Vec<SkinlineRef>>,
    /// 描述文本
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 炫彩列表
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chromas: Option<Vec<Chroma>>,
}

impl Skin {
    /// 判断皮肤是否属于指定皮肤系列
    pub fn in_skinline(&self, skinline_id: i64) -> bool {
        self.skin_lines
            .as_deref()
            .is_some_and(|lines| lines.iter().any(|line| line.id == skinline_id))
    }
}

/// 皮肤稀有度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Rarity {
    #[default]
    #[serde(rename = "kNoRarity")]
    NoRarity,
    #[serde(rename = "kRare")]
    Rare,
    #[serde(rename = "kEpic")]
    Epic,
    #[serde(rename = "kLegendary")]
    Legendary,
    #[serde(rename = "kMythic")]
    Mythic,
    #[serde(rename = "kUltimate")]
    Ultimate,
    #[serde(rename = "kTranscendent")]
    Transcendent,
}

/// 皮肤系列引用
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkinlineRef {
    /// 皮肤系列ID
    pub id: i64,
}

/// 炫彩皮肤
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chroma {
    /// 炫彩绝对ID
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub chroma_path: String,
    /// 主题色列表
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub descriptions: Vec<RegionalDescription>,
    #[serde(default)]
    pub rarities: Vec<RegionalRarity>,
}

/// 皮肤概要投影
///
/// 英雄详情、皮肤系列详情与皮肤索引共用的列表条目形态
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinSummary {
    pub id: i64,
    pub name: String,
    pub rarity: Rarity,
    pub is_base: bool,
    /// 维基补充标注，无匹配记录时省略
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wiki_skin_data: Option<WikiSkin>,
}

/// 皮肤详情文档
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinDetail {
    #[serde(flatten)]
    pub skin: Skin,
    /// 维基补充标注，无匹配记录时省略
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wiki_skin_data: Option<WikiSkin>,
}
