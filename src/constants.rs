// 应用常量与图标路径

/// 应用显示名称
pub const APP_NAME: &str = "FileMaster";

pub mod icons {
    pub const CLOUD: &str = "icons/cloud.svg";
    pub const SETTINGS: &str = "icons/settings.svg";
    pub const FILE: &str = "icons/file.svg";
    pub const FILE_TEXT: &str = "icons/file-text.svg";
    pub const IMAGE: &str = "icons/image.svg";
    pub const PAPERCLIP: &str = "icons/paperclip.svg";
    pub const TRASH: &str = "icons/trash.svg";
    pub const X: &str = "icons/x.svg";
    pub const FOLDER_OPEN: &str = "icons/folder-open.svg";
    pub const INFO: &str = "icons/info.svg";
    // 传输动作图标
    pub const REFRESH: &str = "icons/refresh.svg";
    pub const UPLOAD: &str = "icons/upload.svg";
    pub const DOWNLOAD: &str = "icons/download.svg";
    // 请求状态图标
    pub const LOADER: &str = "icons/loader.svg";
}
