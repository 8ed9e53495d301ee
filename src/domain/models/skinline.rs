// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use super::skin::SkinSummary;

/// 皮肤系列记录
///
/// 对应上游 v1/skinlines.json 中的条目；一个系列可能没有任何皮肤
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skinline {
    /// 皮肤系列数字ID
    pub id: i64,
    /// 显示名称
    pub name: String,
    /// 描述文本
    #[serde(default)]
    pub description: String,
}

/// 带皮肤列表的皮肤系列详情文档
#[derive(Debug, Clone, Serialize)]
pub struct SkinlineDetail {
    #[serde(flatten)]
    pub skinline: Skinline,
    /// 属于该系列的皮肤概要，按ID升序
    pub skins: Vec<SkinSummary>,
}

/// 皮肤系列概要投影（宇宙详情的关联条目）
#[derive(Debug, Clone, Serialize)]
pub struct SkinlineSummary {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// 皮肤系列索引条目
#[derive(Debug, Clone, Serialize)]
pub struct SkinlineIndexEntry {
    pub id: i64,
    pub name: String,
}
