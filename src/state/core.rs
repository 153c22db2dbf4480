// 核心方法：清单维护、文件选择、输入框与对话框管理

use gpui::{AppContext, Entity, Window};
use gpui_component::input::InputState;
use tracing::info;

use super::ShareState;
use crate::components::common::settings_dialog::SettingsDialogState;
use crate::components::files::DeleteDialogState;
use crate::i18n;
use crate::models::share::{RequestPhase, SelectedFile};

impl ShareState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 整体替换文件清单，并记录刷新时间
    pub fn replace_inventory(&mut self, names: Vec<String>) {
        self.inventory = names;
        self.list_phase = RequestPhase::Succeeded;
        self.last_refreshed = Some(chrono::Local::now().format("%H:%M:%S").to_string());
    }

    /// 清空文件清单（加载失败时回退到空清单）
    pub fn clear_inventory(&mut self) {
        self.inventory.clear();
        self.list_phase = RequestPhase::Failed;
    }

    /// 设置选中的待上传文件
    pub fn set_selected_file(&mut self, file: SelectedFile) {
        info!(
            "[SHARE] Selected {} ({}, {} bytes)",
            file.name, file.mime_type, file.size_bytes
        );
        self.selected_file = Some(file);
        // 重新选择后清除上一轮上传的结果标记
        if self.upload_phase != RequestPhase::InFlight {
            self.upload_phase = RequestPhase::Idle;
        }
    }

    /// 清除选中文件（上传成功后重置选择器）
    pub fn clear_selected_file(&mut self) {
        self.selected_file = None;
    }

    /// 是否有任何请求在途
    pub fn any_in_flight(&self) -> bool {
        self.list_phase.is_in_flight()
            || self.upload_phase.is_in_flight()
            || self.download_phase.is_in_flight()
            || self.delete_phase.is_in_flight()
    }

    /// 确保工具栏文件名输入框已创建（需要 window 上下文）
    pub fn ensure_name_input_created(
        &mut self,
        window: &mut Window,
        cx: &mut gpui::Context<Self>,
    ) {
        if self.name_input.is_none() {
            let placeholder = i18n::t(&self.language, "share.download.name_placeholder");
            self.name_input =
                Some(cx.new(|cx| InputState::new(window, cx).placeholder(placeholder)));
        }
    }

    /// 读取文件名输入框内容（去除首尾空白）
    pub fn name_input_text(&self, cx: &gpui::App) -> String {
        self.name_input
            .as_ref()
            .map(|input| input.read(cx).value().trim().to_string())
            .unwrap_or_default()
    }

    /// 丢弃文件名输入框，下一次渲染时重建为空
    pub fn reset_name_input(&mut self) {
        self.name_input = None;
    }

    /// 确保删除确认对话框状态已创建
    pub fn ensure_delete_dialog(&mut self, cx: &mut gpui::Context<Self>) -> Entity<DeleteDialogState> {
        if self.delete_dialog.is_none() {
            self.delete_dialog = Some(cx.new(|_| DeleteDialogState::default()));
        }
        self.delete_dialog.clone().unwrap()
    }

    /// 确保设置对话框状态已创建
    pub fn ensure_settings_dialog(
        &mut self,
        cx: &mut gpui::Context<Self>,
    ) -> Entity<SettingsDialogState> {
        if self.settings_dialog.is_none() {
            self.settings_dialog = Some(cx.new(|_| SettingsDialogState::default()));
        }
        self.settings_dialog.clone().unwrap()
    }

    /// 设置保存后同步语言缓存
    pub fn reload_language(&mut self) {
        self.language = crate::services::storage::load_settings()
            .map(|s| s.theme.language)
            .unwrap_or_default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_inventory_is_wholesale() {
        let mut state = ShareState::default();
        state.inventory = vec!["stale.png".to_string()];
        state.replace_inventory(vec!["a.png".to_string(), "b.pdf".to_string()]);
        assert_eq!(state.inventory, vec!["a.png", "b.pdf"]);
        assert_eq!(state.list_phase, RequestPhase::Succeeded);
        assert!(state.last_refreshed.is_some());
    }

    #[test]
    fn test_clear_inventory_marks_failure() {
        let mut state = ShareState::default();
        state.replace_inventory(vec!["a.png".to_string()]);
        state.clear_inventory();
        assert!(state.inventory.is_empty());
        assert_eq!(state.list_phase, RequestPhase::Failed);
    }

    #[test]
    fn test_selecting_file_resets_stale_upload_phase() {
        let mut state = ShareState::default();
        state.upload_phase = RequestPhase::Failed;
        state.set_selected_file(SelectedFile::from_path("photo.png".into(), 128));
        assert_eq!(state.upload_phase, RequestPhase::Idle);
        assert_eq!(state.selected_file.as_ref().unwrap().name, "photo.png");
    }

    #[test]
    fn test_any_in_flight() {
        let mut state = ShareState::default();
        assert!(!state.any_in_flight());
        state.download_phase = RequestPhase::InFlight;
        assert!(state.any_in_flight());
    }
}
