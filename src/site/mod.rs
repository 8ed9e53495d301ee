// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 站点产物模块
///
/// 在一次完整抓取后，基于已写出的文件树生成静态索引页面
/// 与OpenAPI接口描述。两者只读取文件树，不做任何数据加工；
/// 跳过抓取的运行不会重新生成这些产物。
pub mod index_page;
pub mod openapi;

use std::path::Path;

use tokio::fs;

/// 列出目录下的子目录名，按名称升序
pub(crate) async fn list_dirs(path: &Path) -> std::io::Result<Vec<String>> {
    let mut dirs = Vec::new();
    let mut entries = fs::read_dir(path).await?;
    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_dir() {
            if let Ok(name) = entry.file_name().into_string() {
                dirs.push(name);
            }
        }
    }
    dirs.sort();
    Ok(dirs)
}
