// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 旁路集合的类型化记录
//!
//! 这些类目不做任何交叉引用解析，仅按语言直通落盘为
//! `{"total": n, "<category>": [...]}` 形态的汇总文档

use serde::{Deserialize, Serialize};

use super::common::{RegionalDescription, RegionalRarity};

/// 装备记录 — v1/items.json
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub in_store: bool,
    /// 合成来源装备ID列表
    #[serde(default)]
    pub from: Vec<i64>,
    /// 可合成的目标装备ID列表
    #[serde(default)]
    pub to: Vec<i64>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub max_stacks: i64,
    #[serde(default)]
    pub required_champion: String,
    #[serde(default)]
    pub required_ally: String,
    #[serde(default)]
    pub required_buff_currency_name: String,
    #[serde(default)]
    pub required_buff_currency_cost: i64,
    #[serde(default)]
    pub special_recipe: i64,
    #[serde(default)]
    pub is_enchantment: bool,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub price_total: i64,
    #[serde(default)]
    pub display_in_item_sets: bool,
    #[serde(default)]
    pub icon_path: String,
}

/// 召唤师表情 — v1/summoner-emotes.json
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerEmote {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub inventory_icon: String,
    #[serde(default)]
    pub description: String,
}

/// 召唤师头像 — v1/summoner-icons.json
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerIcon {
    pub id: i64,
    #[serde(default)]
    pub content_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year_released: i64,
    #[serde(default)]
    pub is_legacy: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    #[serde(default)]
    pub descriptions: Vec<RegionalDescription>,
    #[serde(default)]
    pub rarities: Vec<RegionalRarity>,
    #[serde(default)]
    pub disabled_regions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub esports_team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub esports_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub esports_event: Option<String>,
}

/// 召唤师头像集合 — v1/summoner-icon-sets.json
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerIconSet {
    pub id: i64,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon_ids: Vec<i64>,
}

/// 云顶装备 — v1/tftitems.json
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TftItem {
    #[serde(default)]
    pub guid: String,
    pub name: String,
    #[serde(default)]
    pub name_id: String,
    pub id: i64,
    #[serde(default)]
    pub color: TftColor,
    #[serde(default)]
    pub square_icon_path: String,
}

/// 云顶装备主题色，上游键名为大写单字母
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TftColor {
    #[serde(rename = "R", default)]
    pub r: i64,
    #[serde(rename = "G", default)]
    pub g: i64,
    #[serde(rename = "B", default)]
    pub b: i64,
    #[serde(rename = "A", default)]
    pub a: i64,
}

/// 云顶棋子 — v1/tftchampions.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TftChampion {
    pub name: String,
    pub character_record: TftCharacterRecord,
}

/// 云顶棋子档案；上游在此混用snake_case与camelCase键名
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TftCharacterRecord {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub character_id: String,
    #[serde(default)]
    pub rarity: i64,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub traits: Vec<TftTrait>,
    #[serde(rename = "squareIconPath", default)]
    pub square_icon_path: String,
}

/// 云顶羁绊标签
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TftTrait {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub id: String,
}

/// 云顶战场皮肤 — v1/tftmapskins.json
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TftMapSkin {
    #[serde(default)]
    pub content_id: String,
    pub item_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub loadouts_icon: String,
    #[serde(default)]
    pub group_id: i64,
    #[serde(default)]
    pub group_name: String,
    #[serde(default)]
    pub rarity: String,
    #[serde(default)]
    pub rarity_value: i64,
    #[serde(default)]
    pub tft_rarity: String,
}

/// 守卫皮肤 — v1/ward-skins.json
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WardSkin {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ward_image_path: String,
    #[serde(default)]
    pub ward_shadow_image_path: String,
    #[serde(default)]
    pub content_id: String,
    #[serde(default)]
    pub is_legacy: bool,
    #[serde(default)]
    pub regional_descriptions: Vec<RegionalDescription>,
    #[serde(default)]
    pub rarities: Vec<RegionalRarity>,
}

/// 守卫皮肤集合 — v1/ward-skin-sets.json
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WardSkinSet {
    pub id: i64,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub ward_skin_ids: Vec<i64>,
}
