// 删除确认对话框渲染组件

use gpui::*;
use gpui_component::ActiveTheme;

use crate::i18n;
use crate::models::settings::Language;

use super::state::DeleteDialogState;

/// 渲染删除确认对话框覆盖层
/// 确认按钮在删除请求进行中时禁用
pub fn render_delete_dialog_overlay<F>(
    state: Entity<DeleteDialogState>,
    lang: Language,
    on_confirm: F,
    cx: &App,
) -> impl IntoElement
where
    F: Fn(&mut App) + Clone + 'static,
{
    let state_read = state.read(cx);
    let file_name = state_read.file_name.clone();
    let is_deleting = state_read.is_deleting;

    let state_cancel = state.clone();

    let bg_color = cx.theme().popover;
    let border_color = cx.theme().border;
    let foreground = cx.theme().foreground;
    let muted_foreground = cx.theme().muted_foreground;
    let danger = cx.theme().danger;
    let danger_hover = cx.theme().danger_hover;

    div()
        .id("delete-dialog-overlay")
        .absolute()
        .top_0()
        .left_0()
        .size_full()
        .bg(gpui::black().opacity(0.5))
        .flex()
        .items_center()
        .justify_center()
        .on_mouse_down(MouseButton::Left, move |_, _, cx| {
            cx.stop_propagation();
        })
        .child(
            div()
                .w(px(400.))
                .bg(bg_color)
                .rounded_lg()
                .border_1()
                .border_color(border_color)
                .p_6()
                .flex()
                .flex_col()
                .gap_4()
                // 标题
                .child(
                    div()
                        .text_lg()
                        .font_weight(FontWeight::BOLD)
                        .text_color(foreground)
                        .child(i18n::t(&lang, "share.delete.title")),
                )
                // 提示文案 + 目标文件名
                .child(
                    div()
                        .flex()
                        .flex_col()
                        .gap_2()
                        .child(
                            div()
                                .text_sm()
                                .text_color(muted_foreground)
                                .child(i18n::t(&lang, "share.delete.message")),
                        )
                        .child(
                            div()
                                .text_sm()
                                .font_weight(FontWeight::MEDIUM)
                                .text_color(foreground)
                                .overflow_hidden()
                                .text_ellipsis()
                                .child(file_name),
                        ),
                )
                // 底部按钮
                .child(
                    div()
                        .flex()
                        .justify_end()
                        .gap_3()
                        .pt_2()
                        // 取消按钮
                        .child(
                            div()
                                .id("delete-cancel-btn")
                                .px_4()
                                .py_2()
                                .bg(cx.theme().secondary)
                                .rounded_md()
                                .cursor_pointer()
                                .hover(move |s| s.bg(cx.theme().secondary_hover))
                                .on_click(move |_, _, cx| {
                                    state_cancel.update(cx, |s, _| s.close());
                                })
                                .child(
                                    div()
                                        .text_sm()
                                        .text_color(foreground)
                                        .child(i18n::t(&lang, "common.cancel")),
                                ),
                        )
                        // 确认删除按钮
                        .child({
                            let confirm_btn = div()
                                .id("delete-confirm-btn")
                                .px_4()
                                .py_2()
                                .bg(danger)
                                .rounded_md()
                                .child(
                                    div()
                                        .text_sm()
                                        .text_color(cx.theme().danger_foreground)
                                        .child(if is_deleting {
                                            i18n::t(&lang, "common.loading")
                                        } else {
                                            i18n::t(&lang, "common.delete")
                                        }),
                                );

                            if is_deleting {
                                confirm_btn.opacity(0.6)
                            } else {
                                confirm_btn
                                    .cursor_pointer()
                                    .hover(move |s| s.bg(danger_hover))
                                    .on_click(move |_, _, cx| {
                                        on_confirm(cx);
                                    })
                            }
                        }),
                ),
        )
}
