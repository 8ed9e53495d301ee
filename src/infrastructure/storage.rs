// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use dashmap::DashSet;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::repositories::storage_repository::{StorageError, StorageRepository};

/// 本地文件系统存储实现
///
/// 目录存在性在实例内做了备忘；create_dir_all幂等，
/// 并发的检查-创建竞争是安全的。备忘生命周期与实例一致，一次运行一份。
pub struct LocalStorage {
    base_path: PathBuf,
    dir_cache: DashSet<PathBuf>,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            dir_cache: DashSet::new(),
        }
    }

    fn full_path(&self, key: &str) -> PathBuf {
        self.base_path.join(key)
    }

    async fn ensure_parent_dir(&self, path: &Path) -> Result<(), StorageError> {
        if let Some(parent) = path.parent() {
            if !self.dir_cache.contains(parent) {
                fs::create_dir_all(parent).await?;
                self.dir_cache.insert(parent.to_path_buf());
            }
        }
        Ok(())
    }
}

#[async_trait]
impl StorageRepository for LocalStorage {
    async fn save(&self, key: &str, data: &[u8]) -> Result<(), StorageError> {
        let full_path = self.full_path(key);
        self.ensure_parent_dir(&full_path).await?;

        let mut file = fs::File::create(&full_path).await?;
        file.write_all(data).await?;
        file.flush().await?;

        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let full_path = self.full_path(key);

        match fs::read(&full_path).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }
}

/// 将可序列化数据以带缩进的JSON格式写入存储
pub async fn write_json<T: Serialize>(
    storage: &dyn StorageRepository,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let data = serde_json::to_vec_pretty(value)?;
    storage.save(key, &data).await
}

/// 从存储读取JSON文档
///
/// 文件缺失或内容无法解析都返回None，调用方将其视为首次运行状态
pub async fn read_json<T: DeserializeOwned>(
    storage: &dyn StorageRepository,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match storage.get(key).await? {
        Some(data) => Ok(serde_json::from_slice(&data).ok()),
        None => Ok(None),
    }
}

/// 测试用的内存存储实现（用于单元测试）
pub struct InMemoryStorage {
    data: std::sync::Arc<tokio::sync::RwLock<std::collections::HashMap<String, Vec<u8>>>>,
    writes: std::sync::atomic::AtomicUsize,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            data: std::sync::Arc::new(tokio::sync::RwLock::new(std::collections::HashMap::new())),
            writes: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// 已执行的写入次数
    pub fn write_count(&self) -> usize {
        self.writes.load(std::sync::atomic::Ordering::SeqCst)
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageRepository for InMemoryStorage {
    async fn save(&self, key: &str, data: &[u8]) -> Result<(), StorageError> {
        let mut map = self.data.write().await;
        map.insert(key.to_string(), data.to_vec());
        self.writes
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let map = self.data.read().await;
        Ok(map.get(key).cloned())
    }
}
