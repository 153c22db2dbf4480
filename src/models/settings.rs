// Settings 配置数据结构

use serde::{Deserialize, Serialize};

// ======================== 主配置结构 ========================

/// 应用设置（持久化用）
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppSettings {
    pub theme: ThemeSettings,
    pub server: ServerSettings,
    pub system: SystemSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: ThemeSettings::default(),
            server: ServerSettings::default(),
            system: SystemSettings::default(),
        }
    }
}

// ======================== 主题设置 ========================

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
    System,
}

/// 界面语言
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    Chinese,
    English,
}

impl Language {
    pub fn label(&self) -> &'static str {
        match self {
            Language::Chinese => "简体中文",
            Language::English => "English",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeSettings {
    pub mode: ThemeMode,
    pub language: Language,
    pub accent_color: String,
    pub ui_font_family: String,
    pub ui_font_size: u32,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            mode: ThemeMode::Dark,
            language: Language::Chinese,
            accent_color: "#3b82f6".to_string(), // Blue
            ui_font_family: "system-ui".to_string(),
            ui_font_size: 14,
        }
    }
}

// ======================== 服务器设置 ========================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerSettings {
    /// 文件共享服务基础地址
    pub base_url: String,
    /// 默认下载目录，为空时每次弹出保存对话框
    pub download_dir: String,
    pub open_folder_after_download: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: crate::api::DEFAULT_BASE_URL.to_string(),
            download_dir: String::new(),
            open_folder_after_download: false,
        }
    }
}

// ======================== 系统设置 ========================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SystemSettings {
    // 窗口
    pub close_to_tray: bool,
    // 通知
    pub notify_on_transfer: bool,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            close_to_tray: false,
            notify_on_transfer: true,
        }
    }
}
