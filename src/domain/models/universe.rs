// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use super::skinline::SkinlineSummary;

/// 宇宙观设定记录
///
/// 对应上游 v1/universes.json 中的条目
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Universe {
    /// 宇宙数字ID
    pub id: i64,
    /// 显示名称
    pub name: String,
    /// 描述文本
    #[serde(default)]
    pub description: String,
    /// 关联的皮肤系列ID列表；缺失视为数据不完整，整条过滤
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin_sets: Option<Vec<i64>>,
}

/// 带皮肤系列列表的宇宙详情文档
#[derive(Debug, Clone, Serialize)]
pub struct UniverseDetail {
    #[serde(flatten)]
    pub universe: Universe,
    /// 解析后的皮肤系列概要，按名称升序
    pub skinlines: Vec<SkinlineSummary>,
}

/// 宇宙汇总索引条目
#[derive(Debug, Clone, Serialize)]
pub struct UniverseIndexEntry {
    pub id: i64,
    pub name: String,
}
