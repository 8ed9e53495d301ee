// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::future::Future;

use futures::stream::{self, StreamExt};

/// 以受限并发度执行一组异步任务
///
/// 输出顺序与输入顺序一致，与完成顺序无关；任意时刻在途任务数
/// 不超过`limit`（0按1处理）。单个任务失败不会取消其余任务，
/// 所有结果带标签返回，由调用方自行汇总失败项。
pub async fn run_bounded<T, R, E, F, Fut>(
    items: Vec<T>,
    limit: usize,
    worker: F,
) -> Vec<Result<R, E>>
where
    F: Fn(T) -> Fut,
    Fut: Future<Output = Result<R, E>>,
{
    stream::iter(items.into_iter().map(worker))
        .buffered(limit.max(1))
        .collect()
        .await
}

/// 将带标签的结果拆分为成功列表与失败列表
pub fn partition_results<R, E>(results: Vec<Result<R, E>>) -> (Vec<R>, Vec<E>) {
    let mut oks = Vec::new();
    let mut errs = Vec::new();
    for result in results {
        match result {
            Ok(value) => oks.push(value),
            Err(error) => errs.push(error),
        }
    }
    (oks, errs)
}
