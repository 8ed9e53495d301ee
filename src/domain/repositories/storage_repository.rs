// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

/// 存储错误类型
#[derive(Error, Debug)]
pub enum StorageError {
    /// IO错误
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
    /// 序列化错误
    #[error("序列化失败: {0}")]
    Serde(#[from] serde_json::Error),
}

/// 存储仓库特质
///
/// 以相对键读写字节内容，具体落盘策略由实现决定
#[async_trait]
pub trait StorageRepository: Send + Sync {
    /// 使用指定键保存数据到存储中
    async fn save(&self, key: &str, data: &[u8]) -> Result<(), StorageError>;

    /// 根据键从存储中检索数据，键不存在时返回None
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;
}
