// 文件共享领域模型

use std::path::{Path, PathBuf};

/// 允许上传的 MIME 类型白名单
pub const ALLOWED_MIME_TYPES: [&str; 3] = ["image/png", "image/jpeg", "application/pdf"];

/// 单文件上传大小上限（10 MiB）
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// 单个请求动作的生命周期
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestPhase {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

impl RequestPhase {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, RequestPhase::InFlight)
    }
}

/// 用户通过文件选择器选中的待上传文件
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub path: PathBuf,
}

impl SelectedFile {
    pub fn from_path(path: PathBuf, size_bytes: u64) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let mime_type = detect_mime(&path);
        Self {
            name,
            mime_type,
            size_bytes,
            path,
        }
    }

    /// 格式化文件大小显示
    pub fn format_size(&self) -> String {
        let size = self.size_bytes as f64;
        if size >= 1_073_741_824.0 {
            format!("{:.1} GB", size / 1_073_741_824.0)
        } else if size >= 1_048_576.0 {
            format!("{:.1} MB", size / 1_048_576.0)
        } else if size >= 1_024.0 {
            format!("{:.1} KB", size / 1_024.0)
        } else {
            format!("{} B", self.size_bytes)
        }
    }
}

/// 根据扩展名推断 MIME 类型，未知时退化为 application/octet-stream
pub fn detect_mime(path: &Path) -> String {
    mime_guess::from_path(path)
        .first()
        .map(|m| m.essence_str().to_string())
        .unwrap_or_else(|| "application/octet-stream".to_string())
}

/// 本地校验错误，不会触发任何网络请求
#[derive(Clone, Debug, PartialEq)]
pub enum ValidationError {
    NoFileSelected,
    DisallowedType(String),
    FileTooLarge(u64),
    EmptyFileName,
}

impl ValidationError {
    /// 对应的提示文案翻译键
    pub fn message_key(&self) -> &'static str {
        match self {
            ValidationError::NoFileSelected => "share.validate.no_file",
            ValidationError::DisallowedType(_) => "share.validate.bad_type",
            ValidationError::FileTooLarge(_) => "share.validate.too_large",
            ValidationError::EmptyFileName => "share.validate.empty_name",
        }
    }
}

/// 上传前校验：必须已选中文件、类型在白名单内、大小不超上限
pub fn validate_upload(selected: Option<&SelectedFile>) -> Result<&SelectedFile, ValidationError> {
    let Some(file) = selected else {
        return Err(ValidationError::NoFileSelected);
    };
    if !ALLOWED_MIME_TYPES.contains(&file.mime_type.as_str()) {
        return Err(ValidationError::DisallowedType(file.mime_type.clone()));
    }
    if file.size_bytes > MAX_UPLOAD_BYTES {
        return Err(ValidationError::FileTooLarge(file.size_bytes));
    }
    Ok(file)
}

/// 下载前校验：文件名去除首尾空白后必须非空
pub fn validate_download_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyFileName);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected(name: &str, mime: &str, size: u64) -> SelectedFile {
        SelectedFile {
            name: name.to_string(),
            mime_type: mime.to_string(),
            size_bytes: size,
            path: PathBuf::from(name),
        }
    }

    #[test]
    fn test_validate_upload_requires_selection() {
        assert_eq!(
            validate_upload(None),
            Err(ValidationError::NoFileSelected)
        );
    }

    #[test]
    fn test_validate_upload_rejects_disallowed_type() {
        let file = selected("notes.txt", "text/plain", 10);
        assert_eq!(
            validate_upload(Some(&file)),
            Err(ValidationError::DisallowedType("text/plain".to_string()))
        );
    }

    #[test]
    fn test_validate_upload_rejects_oversize() {
        let file = selected("big.png", "image/png", MAX_UPLOAD_BYTES + 1);
        assert_eq!(
            validate_upload(Some(&file)),
            Err(ValidationError::FileTooLarge(MAX_UPLOAD_BYTES + 1))
        );
    }

    #[test]
    fn test_validate_upload_accepts_limit_exactly() {
        let file = selected("photo.jpg", "image/jpeg", MAX_UPLOAD_BYTES);
        assert!(validate_upload(Some(&file)).is_ok());
    }

    #[test]
    fn test_validate_upload_accepts_each_allowed_type() {
        for mime in ALLOWED_MIME_TYPES {
            let file = selected("file", mime, 1024);
            assert!(validate_upload(Some(&file)).is_ok(), "{} rejected", mime);
        }
    }

    #[test]
    fn test_validation_errors_have_distinct_messages() {
        let keys = [
            ValidationError::NoFileSelected.message_key(),
            ValidationError::DisallowedType("text/plain".to_string()).message_key(),
            ValidationError::FileTooLarge(0).message_key(),
            ValidationError::EmptyFileName.message_key(),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in keys.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_validate_download_name_trims() {
        assert_eq!(
            validate_download_name("  report.pdf  "),
            Ok("report.pdf".to_string())
        );
        assert_eq!(
            validate_download_name("   "),
            Err(ValidationError::EmptyFileName)
        );
    }

    #[test]
    fn test_detect_mime() {
        assert_eq!(detect_mime(Path::new("a.png")), "image/png");
        assert_eq!(detect_mime(Path::new("b.jpeg")), "image/jpeg");
        assert_eq!(detect_mime(Path::new("c.pdf")), "application/pdf");
        assert_eq!(detect_mime(Path::new("noext")), "application/octet-stream");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(selected("a", "image/png", 512).format_size(), "512 B");
        assert_eq!(selected("a", "image/png", 2048).format_size(), "2.0 KB");
        assert_eq!(
            selected("a", "image/png", 5 * 1024 * 1024).format_size(),
            "5.0 MB"
        );
    }

    #[test]
    fn test_request_phase_default_is_idle() {
        assert_eq!(RequestPhase::default(), RequestPhase::Idle);
        assert!(!RequestPhase::Idle.is_in_flight());
        assert!(RequestPhase::InFlight.is_in_flight());
    }
}
