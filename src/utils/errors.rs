// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 资源获取错误类型
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("请求失败: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP状态异常: {status} ({url})")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("响应解析失败: {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("主语言与备用语言均获取失败: {path}: {source}")]
    BothLocalesFailed {
        path: String,
        #[source]
        source: Box<FetchError>,
    },
}

impl FetchError {
    /// 判断错误是否值得重试
    ///
    /// 网络传输错误与服务端过载状态（5xx、429）可重试；
    /// 响应体解析失败重试也不会有不同结果，不重试
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            FetchError::Status { status, .. } => {
                status.is_server_error() || *status == reqwest::StatusCode::TOO_MANY_REQUESTS
            }
            FetchError::Decode { .. } | FetchError::BothLocalesFailed { .. } => false,
        }
    }
}
