// 服务地址配置

use url::Url;

use super::error::ApiError;

/// 默认服务地址（本机开发服务）
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// 文件共享服务配置
/// 由组装层注入，核心逻辑不读取进程环境变量
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// 在基础地址上追加路径段，段内特殊字符自动百分号编码
    fn join(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = Url::parse(self.base_url.trim())
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", self.base_url, e)))?;
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.clone()))?;
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }

    /// GET /files 文件清单
    pub fn files_url(&self) -> Result<Url, ApiError> {
        self.join(&["files"])
    }

    /// POST /upload 文件上传
    pub fn upload_url(&self) -> Result<Url, ApiError> {
        self.join(&["upload"])
    }

    /// GET /download/{name} 文件下载
    pub fn download_url(&self, name: &str) -> Result<Url, ApiError> {
        self.join(&["download", name])
    }

    /// DELETE /files/{name} 文件删除
    pub fn delete_url(&self, name: &str) -> Result<Url, ApiError> {
        self.join(&["files", name])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_url() {
        let config = ApiConfig::default();
        assert_eq!(
            config.files_url().unwrap().as_str(),
            "http://127.0.0.1:8000/files"
        );
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let config = ApiConfig::new("http://127.0.0.1:8000/");
        assert_eq!(
            config.upload_url().unwrap().as_str(),
            "http://127.0.0.1:8000/upload"
        );
    }

    #[test]
    fn test_download_url_percent_encodes_name() {
        let config = ApiConfig::default();
        assert_eq!(
            config.download_url("my report.pdf").unwrap().as_str(),
            "http://127.0.0.1:8000/download/my%20report.pdf"
        );
    }

    #[test]
    fn test_name_with_slash_stays_one_segment() {
        let config = ApiConfig::default();
        assert_eq!(
            config.delete_url("a/b.png").unwrap().as_str(),
            "http://127.0.0.1:8000/files/a%2Fb.png"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ApiConfig::new("not a url");
        assert!(matches!(
            config.files_url(),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_base_url_with_path_prefix() {
        let config = ApiConfig::new("http://files.internal:9000/api");
        assert_eq!(
            config.delete_url("old.png").unwrap().as_str(),
            "http://files.internal:9000/api/files/old.png"
        );
    }
}
