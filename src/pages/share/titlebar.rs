// 共享页标题栏
// macOS 使用原生红绿灯按钮，Windows/Linux 渲染自绘窗口控制按钮

use gpui::*;
use gpui_component::ActiveTheme;

use crate::components::common::icon::render_icon;
use crate::constants::{icons, APP_NAME};

/// 渲染标题栏
pub fn render_titlebar(cx: &App) -> impl IntoElement {
    let bg = crate::theme::titlebar_color(cx);
    let border = cx.theme().title_bar_border;
    let icon_color = cx.theme().muted_foreground;
    let title_color = cx.theme().foreground;

    // macOS 红绿灯占位
    let leading_pad = if cfg!(target_os = "macos") {
        px(76.)
    } else {
        px(12.)
    };

    div()
        .h(px(40.))
        .w_full()
        .flex_shrink_0()
        .bg(bg)
        .border_b_1()
        .border_color(border)
        .flex()
        .items_center()
        .justify_between()
        .child(
            div()
                .pl(leading_pad)
                .flex()
                .items_center()
                .gap_2()
                .child(render_icon(icons::CLOUD, icon_color.into()))
                .child(
                    div()
                        .text_sm()
                        .font_weight(FontWeight::MEDIUM)
                        .text_color(title_color)
                        .child(APP_NAME),
                ),
        )
        .child(render_window_controls(cx))
}

/// 渲染非 macOS 平台的最小化/最大化/关闭按钮
fn render_window_controls(cx: &App) -> AnyElement {
    if cfg!(target_os = "macos") {
        return div().into_any_element();
    }

    let icon_color = cx.theme().foreground;
    let button_width = px(46.);

    div()
        .flex()
        .items_center()
        .h_full()
        .child(
            div()
                .id("titlebar-minimize")
                .w(button_width)
                .h_full()
                .flex()
                .items_center()
                .justify_center()
                .cursor_default()
                .hover(|s| s.bg(rgba(0x80808040)))
                .window_control_area(WindowControlArea::Min)
                .child(div().w(px(10.)).h(px(1.)).bg(icon_color)),
        )
        .child(
            div()
                .id("titlebar-maximize")
                .w(button_width)
                .h_full()
                .flex()
                .items_center()
                .justify_center()
                .cursor_default()
                .hover(|s| s.bg(rgba(0x80808040)))
                .window_control_area(WindowControlArea::Max)
                .child(
                    div()
                        .w(px(10.))
                        .h(px(10.))
                        .border_1()
                        .border_color(icon_color),
                ),
        )
        .child(
            div()
                .id("titlebar-close")
                .w(button_width)
                .h_full()
                .flex()
                .items_center()
                .justify_center()
                .cursor_default()
                .hover(|s| s.bg(red()))
                .window_control_area(WindowControlArea::Close)
                .child(render_icon(icons::X, icon_color.into())),
        )
        .into_any_element()
}
