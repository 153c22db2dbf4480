// 文件共享 HTTP 客户端核心
// 对应服务端四个接口：清单、上传、下载、删除
// 所有请求单次执行，失败不重试

use reqwest::multipart;
use tracing::{debug, info};

use super::config::ApiConfig;
use super::error::ApiError;

/// 文件共享客户端
#[derive(Clone, Debug)]
pub struct ShareClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl ShareClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// GET /files
    /// 返回服务端完整文件名清单
    pub async fn list_files(&self) -> Result<Vec<String>, ApiError> {
        let url = self.config.files_url()?;
        debug!("[API] GET {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let names = response
            .json::<Vec<String>>()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))?;
        info!("[API] Listed {} files", names.len());
        Ok(names)
    }

    /// POST /upload
    /// multipart/form-data 表单，文件字段名固定为 file
    /// 成功时返回服务端响应文本
    pub async fn upload_file(
        &self,
        file_name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, ApiError> {
        let url = self.config.upload_url()?;
        info!(
            "[API] POST {} ({}, {} bytes, {})",
            url,
            file_name,
            bytes.len(),
            mime_type
        );

        let part = multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime_type)?;
        let form = multipart::Form::new().part("file", part);

        let response = self.http.post(url).multipart(form).send().await?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }

    /// GET /download/{name}
    /// 返回文件完整字节内容
    pub async fn download_file(&self, name: &str) -> Result<Vec<u8>, ApiError> {
        let url = self.config.download_url(name)?;
        debug!("[API] GET {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        info!("[API] Downloaded {} ({} bytes)", name, bytes.len());
        Ok(bytes.to_vec())
    }

    /// DELETE /files/{name}
    pub async fn delete_file(&self, name: &str) -> Result<(), ApiError> {
        let url = self.config.delete_url(name)?;
        info!("[API] DELETE {}", url);

        let response = self.http.delete(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ShareClient {
        ShareClient::new(ApiConfig::new(server.uri()))
    }

    #[tokio::test]
    async fn test_list_files_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/files"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!(["a.png", "b.pdf"])),
            )
            .mount(&server)
            .await;

        let files = client_for(&server).list_files().await.unwrap();
        assert_eq!(files, vec!["a.png".to_string(), "b.pdf".to_string()]);
    }

    #[tokio::test]
    async fn test_list_files_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/files"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client_for(&server).list_files().await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_list_files_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/files"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server).list_files().await.unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_upload_sends_multipart_file_field() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/upload"))
            .and(body_string_contains("name=\"file\""))
            .and(body_string_contains("filename=\"photo.png\""))
            .respond_with(ResponseTemplate::new(200).set_body_string("File uploaded successfully"))
            .mount(&server)
            .await;

        let message = client_for(&server)
            .upload_file("photo.png", "image/png", vec![1, 2, 3])
            .await
            .unwrap();
        assert_eq!(message, "File uploaded successfully");
    }

    #[tokio::test]
    async fn test_upload_failure_carries_response_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/upload"))
            .respond_with(ResponseTemplate::new(400).set_body_string("Invalid file type"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .upload_file("a.png", "image/png", vec![0])
            .await
            .unwrap_err();
        assert_eq!(err.server_message(), Some("Invalid file type".to_string()));
    }

    #[tokio::test]
    async fn test_upload_failure_without_body_uses_status_code() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/upload"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .upload_file("a.png", "image/png", vec![0])
            .await
            .unwrap_err();
        assert_eq!(err.server_message(), Some("HTTP 500".to_string()));
    }

    #[tokio::test]
    async fn test_download_percent_encodes_name() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/download/my%20report.pdf"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF".to_vec()))
            .mount(&server)
            .await;

        let bytes = client_for(&server)
            .download_file("my report.pdf")
            .await
            .unwrap();
        assert_eq!(bytes, b"%PDF".to_vec());
    }

    #[tokio::test]
    async fn test_download_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/download/missing.png"))
            .respond_with(ResponseTemplate::new(404).set_body_string("File not found"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .download_file("missing.png")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_delete_file_success() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/files/old.png"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        assert!(client_for(&server).delete_file("old.png").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_file_failure() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/files/old.png"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client_for(&server).delete_file("old.png").await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
    }
}
