// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 关系解析服务
//!
//! 四个核心集合由上游独立发布，相互之间只以ID松散引用。
//! 这里的函数负责计算派生关联并保证列表顺序确定：
//! 数字排序一律按ID升序，名称排序按显示名升序。

use std::collections::HashMap;

use crate::domain::models::champion::Champion;
use crate::domain::models::skin::{Skin, SkinSummary};
use crate::domain::models::skinline::{Skinline, SkinlineSummary};
use crate::domain::models::universe::Universe;
use crate::domain::models::wiki::{WikiSkin, WikiSkinData};
use crate::utils::helpers::{relative_to_absolute_skin_id, skin_id_to_champion_id};

/// 过滤掉缺失skinSets的宇宙记录
///
/// 缺失该列表的记录视为不完整数据整条剔除；空列表会被保留，
/// 最终呈现为空的skinlines关联
pub fn filter_universes(universes: Vec<Universe>) -> Vec<Universe> {
    universes
        .into_iter()
        .filter(|universe| universe.skin_sets.is_some())
        .collect()
}

/// 将以ID字符串为键的皮肤对象摊平为按ID升序的列表
pub fn sort_skins(skins: HashMap<String, Skin>) -> Vec<Skin> {
    let mut list: Vec<Skin> = skins.into_values().collect();
    list.sort_by_key(|skin| skin.id);
    list
}

/// 选出属于指定英雄的皮肤
///
/// 输入列表已全局有序，筛选保持ID升序
pub fn skins_of_champion<'a>(champion: &Champion, skins: &'a [Skin]) -> Vec<&'a Skin> {
    skins
        .iter()
        .filter(|skin| skin_id_to_champion_id(skin.id) == champion.id)
        .collect()
}

/// 选出属于指定皮肤系列的皮肤，保持ID升序
pub fn skins_of_skinline<'a>(skinline_id: i64, skins: &'a [Skin]) -> Vec<&'a Skin> {
    skins
        .iter()
        .filter(|skin| skin.in_skinline(skinline_id))
        .collect()
}

/// 解析宇宙关联的皮肤系列
///
/// 悬空ID静默丢弃（集合间存在版本偏差属预期情况），
/// 结果按名称升序排列
pub fn resolve_skinlines_of_universe(
    universe: &Universe,
    skinlines: &[Skinline],
) -> Vec<SkinlineSummary> {
    let ids = universe.skin_sets.as_deref().unwrap_or_default();
    let mut resolved: Vec<SkinlineSummary> = ids
        .iter()
        .filter_map(|id| skinlines.iter().find(|skinline| skinline.id == *id))
        .map(|skinline| SkinlineSummary {
            id: skinline.id,
            name: skinline.name.clone(),
            description: skinline.description.clone(),
        })
        .collect();
    resolved.sort_by(|a, b| a.name.cmp(&b.name));
    resolved
}

/// 将嵌套的维基数据摊平为以绝对皮肤ID为键的映射
///
/// 相对序号经所属英雄ID换算；ID冲突时保留先到的记录
pub fn flatten_wiki_skins(data: &WikiSkinData) -> HashMap<i64, WikiSkin> {
    let mut flat = HashMap::new();
    for champion in data.values() {
        for skin in champion.skins.values() {
            let absolute_id = relative_to_absolute_skin_id(champion.id, skin.id);
            flat.entry(absolute_id).or_insert_with(|| skin.clone());
        }
    }
    flat
}

/// 皮肤概要投影，并按ID相等合并维基标注
pub fn skin_summaries(skins: &[&Skin], wiki: &HashMap<i64, WikiSkin>) -> Vec<SkinSummary> {
    skins
        .iter()
        .map(|skin| SkinSummary {
            id: skin.id,
            name: skin.name.clone(),
            rarity: skin.rarity,
            is_base: skin.is_base,
            wiki_skin_data: wiki.get(&skin.id).cloned(),
        })
        .collect()
}
