// 共享页根视图
// 持有全局 ShareState，组装标题栏、工具栏、文件列表与弹窗

use gpui::*;

use super::titlebar::render_titlebar;
use crate::components::common::settings_dialog::{
    render_settings_dialog_overlay, SettingsDialogState,
};
use crate::components::files::{
    render_delete_dialog_overlay, render_file_list, render_share_toolbar, DeleteDialogState,
    FileListEvent, ShareToolbarEvent,
};
use crate::state::ShareState;

/// 共享页
pub struct SharePage {
    pub state: Entity<ShareState>,
}

impl SharePage {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let state = cx.new(|_| ShareState::new());

        // 弹窗状态在页面创建时就建好，便于统一监听重绘
        let delete_dialog = cx.new(|_| DeleteDialogState::default());
        let settings_dialog = cx.new(|_| SettingsDialogState::default());

        // 状态变更时重绘页面
        cx.observe(&state, |_, _, cx| cx.notify()).detach();
        cx.observe(&delete_dialog, |_, _, cx| cx.notify()).detach();
        cx.observe(&settings_dialog, |_, _, cx| cx.notify()).detach();

        state.update(cx, |state, cx| {
            state.delete_dialog = Some(delete_dialog);
            state.settings_dialog = Some(settings_dialog);
            // 挂载后立即拉取一次文件清单
            state.refresh_list(cx);
        });

        Self { state }
    }

    /// 路由工具栏事件到状态方法
    fn handle_toolbar_event(state: &Entity<ShareState>, event: ShareToolbarEvent, cx: &mut App) {
        state.update(cx, |state, cx| match event {
            ShareToolbarEvent::Refresh => state.refresh_list(cx),
            ShareToolbarEvent::ChooseFile => state.pick_upload_file(cx),
            ShareToolbarEvent::ClearSelection => {
                state.clear_selected_file();
                cx.notify();
            }
            ShareToolbarEvent::Upload => state.upload_selected(cx),
            ShareToolbarEvent::Download => state.download_file(None, cx),
            ShareToolbarEvent::OpenSettings => {
                let dialog = state.ensure_settings_dialog(cx);
                dialog.update(cx, |dialog, cx| {
                    dialog.open();
                    cx.notify();
                });
                cx.notify();
            }
        });
    }

    /// 路由文件列表事件到状态方法
    fn handle_list_event(state: &Entity<ShareState>, event: FileListEvent, cx: &mut App) {
        state.update(cx, |state, cx| match event {
            FileListEvent::Download(name) => state.download_file(Some(name), cx),
            FileListEvent::Delete(name) => state.request_delete(name, cx),
        });
    }
}

impl Render for SharePage {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        // 先创建依赖 window 上下文的输入框
        self.state.update(cx, |state, cx| {
            state.ensure_name_input_created(window, cx);
            if let Some(dialog) = state.settings_dialog.clone() {
                if dialog.read(cx).visible {
                    dialog.update(cx, |dialog, cx| dialog.ensure_inputs_created(window, cx));
                }
            }
        });

        let state_entity = self.state.clone();
        let state = self.state.read(cx);
        let lang = state.language;

        let toolbar_state = state_entity.clone();
        let on_toolbar = move |event: ShareToolbarEvent, cx: &mut App| {
            SharePage::handle_toolbar_event(&toolbar_state, event, cx);
        };

        let list_state = state_entity.clone();
        let on_list = move |event: FileListEvent, cx: &mut App| {
            SharePage::handle_list_event(&list_state, event, cx);
        };

        // 删除确认弹窗（仅打开时渲染）
        let delete_overlay = state.delete_dialog.clone().and_then(|dialog| {
            if !dialog.read(cx).is_open {
                return None;
            }
            let confirm_state = state_entity.clone();
            Some(
                render_delete_dialog_overlay(
                    dialog,
                    lang,
                    move |cx: &mut App| {
                        confirm_state.update(cx, |state, cx| state.confirm_delete(cx));
                    },
                    cx,
                )
                .into_any_element(),
            )
        });

        // 设置弹窗（仅打开时渲染）
        let settings_overlay = state.settings_dialog.clone().and_then(|dialog| {
            if !dialog.read(cx).visible {
                return None;
            }
            let saved_state = state_entity.clone();
            Some(
                render_settings_dialog_overlay(
                    dialog,
                    move |cx: &mut App| {
                        saved_state.update(cx, |state, cx| {
                            state.reload_language();
                            cx.notify();
                        });
                    },
                    cx,
                )
                .into_any_element(),
            )
        });

        div()
            .size_full()
            .bg(crate::theme::background_color(cx))
            .flex()
            .flex_col()
            .child(render_titlebar(cx))
            .child(render_share_toolbar(state, on_toolbar, cx))
            .child(
                div()
                    .flex_1()
                    .min_h(px(0.))
                    .child(render_file_list(state, on_list, cx)),
            )
            .children(delete_overlay)
            .children(settings_overlay)
    }
}
