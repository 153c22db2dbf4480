// 全局 ShareState 模块
// 按功能拆分为多个子模块

mod core;
mod inventory;
mod transfer;

use gpui::{App, Entity};
use gpui_component::input::InputState;
use gpui_component::notification::NotificationType;

use crate::components::common::settings_dialog::SettingsDialogState;
use crate::components::files::DeleteDialogState;
use crate::models::settings::Language;
use crate::models::share::{RequestPhase, SelectedFile};

/// 全局共享页状态
pub struct ShareState {
    /// 服务端文件清单，每次成功刷新整体替换
    pub inventory: Vec<String>,
    /// 最近一次成功刷新的时间（显示用）
    pub last_refreshed: Option<String>,
    /// 清单加载请求阶段
    pub list_phase: RequestPhase,
    /// 上传请求阶段
    pub upload_phase: RequestPhase,
    /// 下载请求阶段
    pub download_phase: RequestPhase,
    /// 删除请求阶段
    pub delete_phase: RequestPhase,
    /// 当前选中的待上传文件
    pub selected_file: Option<SelectedFile>,
    /// 工具栏文件名输入框（下载名回退）
    pub name_input: Option<Entity<InputState>>,
    /// 删除确认对话框状态
    pub delete_dialog: Option<Entity<DeleteDialogState>>,
    /// 设置对话框状态
    pub settings_dialog: Option<Entity<SettingsDialogState>>,
    /// 界面语言（随设置保存更新）
    pub language: Language,
}

impl Default for ShareState {
    fn default() -> Self {
        let language = crate::services::storage::load_settings()
            .map(|s| s.theme.language)
            .unwrap_or_default();
        Self {
            inventory: Vec::new(),
            last_refreshed: None,
            list_phase: RequestPhase::Idle,
            upload_phase: RequestPhase::Idle,
            download_phase: RequestPhase::Idle,
            delete_phase: RequestPhase::Idle,
            selected_file: None,
            name_input: None,
            delete_dialog: None,
            settings_dialog: None,
            language,
        }
    }
}

/// 推送传输结果通知
/// 成功通知受 notify_on_transfer 设置控制，失败通知始终展示
pub(crate) fn push_transfer_notification(message: String, kind: NotificationType, cx: &mut App) {
    if matches!(kind, NotificationType::Success) {
        let notify = crate::services::storage::load_settings()
            .map(|s| s.system.notify_on_transfer)
            .unwrap_or(true);
        if !notify {
            return;
        }
    }
    push_window_notification(message, kind, cx);
}

/// 推送一条通知到当前活动窗口
pub(crate) fn push_window_notification(message: String, kind: NotificationType, cx: &mut App) {
    if let Some(window) = cx.active_window() {
        use gpui::AppContext as _;
        let _ = cx.update_window(window, |_, window, cx| {
            use gpui::Styled;
            use gpui_component::notification::Notification;
            use gpui_component::WindowExt;

            let notification = Notification::new()
                .message(message)
                .with_type(kind)
                .w_72()
                .py_2();
            window.push_notification(notification, cx);
        });
    }
}
