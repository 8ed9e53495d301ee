// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

/// 维基皮肤数据总表，键为英雄名称
pub type WikiSkinData = HashMap<String, WikiChampion>;

/// 维基中的单个英雄条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikiChampion {
    /// 英雄数字ID
    pub id: i64,
    /// 皮肤表；键可能为皮肤名，也可能本身就是数字字符串
    #[serde(default, deserialize_with = "lua_table_map")]
    pub skins: HashMap<String, WikiSkin>,
}

/// 维基皮肤标注记录
///
/// 所有字段均为尽力而为的补充信息；`id`为相对序号，0表示基础皮肤
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikiSkin {
    /// 相对皮肤序号
    #[serde(default)]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatname: Option<String>,
    /// 获取途径（Available、Legacy、Limited等）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub looteligible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<String>,
    /// 售价，可能为点券数额或特殊标签
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<WikiCost>,
    /// 上架日期
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earlysale: Option<String>,
    /// 所属主题集合
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub set: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neweffects: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub newanimations: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub newrecall: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transforming: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub newvoice: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub newquotes: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<bool>,
    /// 炫彩子表，键通常为炫彩ID的数字字符串
    #[serde(
        default,
        deserialize_with = "lua_table_map",
        skip_serializing_if = "HashMap::is_empty"
    )]
    pub chromas: HashMap<String, WikiChroma>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub voiceactor: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub splashartist: Vec<String>,
    /// 背景故事文本
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lore: Option<String>,
}

/// 维基炫彩子表条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikiChroma {
    #[serde(default)]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// 皮肤售价，可能为点券数额或"special"之类的标签
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WikiCost {
    Amount(i64),
    Label(String),
}

/// Lua空表无法区分数组与映射，这里同时接受两种形态：
/// 序列形态按1起始的数字字符串重建键
fn lua_table_map<'de, D, T>(deserializer: D) -> Result<HashMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr<T> {
        Map(HashMap<String, T>),
        Seq(Vec<T>),
    }

    Ok(match Repr::deserialize(deserializer)? {
        Repr::Map(map) => map,
        Repr::Seq(seq) => seq
            .into_iter()
            .enumerate()
            .map(|(i, value)| ((i + 1).to_string(), value))
            .collect(),
    })
}
