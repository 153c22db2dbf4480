// HTTP 接口错误类型定义

use thiserror::Error;

/// 文件共享接口错误类型
#[derive(Debug, Error)]
pub enum ApiError {
    /// 服务地址无效
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// 请求发送失败（连接拒绝、DNS 解析失败等）
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// 服务端返回非成功状态
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// 响应内容无法解析
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// 本地文件读写失败
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// 服务端响应携带的文本，用于用户提示
    /// 响应体为空时退化为状态码消息；非状态错误返回 None
    pub fn server_message(&self) -> Option<String> {
        match self {
            ApiError::Status { status, body } => {
                let text = body.trim();
                if text.is_empty() {
                    Some(format!("HTTP {}", status))
                } else {
                    Some(text.to_string())
                }
            }
            _ => None,
        }
    }

    /// 是否为服务端状态错误
    pub fn is_status(&self) -> bool {
        matches!(self, ApiError::Status { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_prefers_body() {
        let err = ApiError::Status {
            status: 400,
            body: "Invalid file type".to_string(),
        };
        assert_eq!(err.server_message(), Some("Invalid file type".to_string()));
    }

    #[test]
    fn test_server_message_falls_back_to_status_code() {
        let err = ApiError::Status {
            status: 500,
            body: "   ".to_string(),
        };
        assert_eq!(err.server_message(), Some("HTTP 500".to_string()));
    }

    #[test]
    fn test_server_message_absent_for_local_errors() {
        let err = ApiError::InvalidBaseUrl("not a url".to_string());
        assert_eq!(err.server_message(), None);
        assert!(!err.is_status());
    }
}
