// 通用组件模块

pub mod icon;
pub mod settings_dialog;

pub use settings_dialog::SettingsDialogState;
