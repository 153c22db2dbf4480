// 服务器文件列表组件
// 渲染加载中/空清单/文件行三种状态，行内提供下载与删除操作

use gpui::*;
use gpui_component::scroll::ScrollableElement;
use gpui_component::ActiveTheme;

use crate::constants::icons;
use crate::i18n::t;
use crate::state::ShareState;

/// 标题栏高度
const TITLE_HEIGHT: f32 = 36.0;
/// 表头高度
const HEADER_HEIGHT: f32 = 28.0;
/// 行高度
const ROW_HEIGHT: f32 = 30.0;
/// 图标尺寸
const ICON_SIZE: f32 = 16.0;

/// 文件列表事件
#[derive(Clone, Debug)]
pub enum FileListEvent {
    Download(String),
    Delete(String),
}

/// 按扩展名选择文件图标
/// 服务端只报告文件名，类型只能从扩展名推断
fn file_icon(name: &str) -> &'static str {
    let extension = name.rsplit('.').next().map(|e| e.to_ascii_lowercase());
    match extension.as_deref() {
        Some("png" | "jpg" | "jpeg") => icons::IMAGE,
        Some("pdf" | "txt" | "md") => icons::FILE_TEXT,
        _ => icons::FILE,
    }
}

/// 渲染标题行（清单名称 + 文件数 + 最近刷新时间）
fn render_title(state: &ShareState, cx: &App) -> impl IntoElement {
    let lang = state.language;
    let border_color = cx.theme().border;
    let foreground = cx.theme().foreground;
    let muted = cx.theme().muted_foreground;

    let refreshed = state
        .last_refreshed
        .as_ref()
        .map(|at| format!("{} {}", t(&lang, "share.list.refreshed_at"), at));

    div()
        .w_full()
        .h(px(TITLE_HEIGHT))
        .flex_shrink_0()
        .flex()
        .items_center()
        .justify_between()
        .px_3()
        .border_b_1()
        .border_color(border_color)
        .child(
            div()
                .flex()
                .items_center()
                .gap_2()
                .child(
                    div()
                        .text_sm()
                        .font_weight(FontWeight::MEDIUM)
                        .text_color(foreground)
                        .child(t(&lang, "share.list.title")),
                )
                .child(
                    div()
                        .text_xs()
                        .text_color(muted)
                        .child(format!("({})", state.inventory.len())),
                ),
        )
        .children(refreshed.map(|at| div().text_xs().text_color(muted).child(at)))
}

/// 渲染表头
fn render_header(state: &ShareState, cx: &App) -> impl IntoElement {
    let lang = state.language;
    let border_color = cx.theme().border;
    let muted = cx.theme().muted_foreground;

    div()
        .w_full()
        .h(px(HEADER_HEIGHT))
        .flex_shrink_0()
        .flex()
        .items_center()
        .gap_2()
        .border_b_1()
        .border_color(border_color)
        .px_3()
        .child(
            div()
                .flex_1()
                .text_xs()
                .font_weight(FontWeight::MEDIUM)
                .text_color(muted)
                .child(t(&lang, "share.list.header.name")),
        )
        .child(
            div()
                .w(px(72.))
                .text_xs()
                .font_weight(FontWeight::MEDIUM)
                .text_color(muted)
                .child(t(&lang, "share.list.header.actions")),
        )
}

/// 渲染行内操作图标按钮
fn row_action_button<F>(
    id: impl Into<ElementId>,
    icon_path: &'static str,
    color: Hsla,
    on_click: F,
    cx: &App,
) -> impl IntoElement
where
    F: Fn(&MouseDownEvent, &mut Window, &mut App) + 'static,
{
    div()
        .id(id)
        .size(px(22.))
        .flex()
        .items_center()
        .justify_center()
        .rounded(px(4.))
        .cursor_pointer()
        .hover(|s| s.bg(cx.theme().list_active))
        .on_mouse_down(MouseButton::Left, on_click)
        .child(svg().path(icon_path).size(px(13.)).text_color(color))
}

/// 渲染单个文件行
fn render_file_row<F>(name: &str, on_event: F, cx: &App) -> AnyElement
where
    F: Fn(FileListEvent, &mut App) + Clone + 'static,
{
    let foreground = cx.theme().foreground;
    let muted = cx.theme().muted_foreground;
    let danger = cx.theme().danger;
    let hover_bg = cx.theme().list_hover;

    let download_name = name.to_string();
    let delete_name = name.to_string();
    let on_download = on_event.clone();
    let on_delete = on_event;

    div()
        .id(SharedString::from(format!("share-file-row-{}", name)))
        .w_full()
        .h(px(ROW_HEIGHT))
        .flex()
        .items_center()
        .gap_2()
        .px_3()
        .hover(|s| s.bg(hover_bg))
        // 名称列
        .child(
            div()
                .flex_1()
                .flex()
                .items_center()
                .gap_2()
                .overflow_hidden()
                .child(
                    svg()
                        .path(file_icon(name))
                        .size(px(ICON_SIZE))
                        .text_color(muted),
                )
                .child(
                    div()
                        .flex_1()
                        .text_xs()
                        .text_color(foreground)
                        .overflow_hidden()
                        .text_ellipsis()
                        .child(name.to_string()),
                ),
        )
        // 操作列
        .child(
            div()
                .w(px(72.))
                .flex()
                .items_center()
                .gap_1()
                .child(row_action_button(
                    SharedString::from(format!("share-row-download-{}", name)),
                    icons::DOWNLOAD,
                    muted,
                    move |_: &MouseDownEvent, _: &mut Window, cx: &mut App| {
                        on_download(FileListEvent::Download(download_name.clone()), cx);
                    },
                    cx,
                ))
                .child(row_action_button(
                    SharedString::from(format!("share-row-delete-{}", name)),
                    icons::TRASH,
                    danger,
                    move |_: &MouseDownEvent, _: &mut Window, cx: &mut App| {
                        on_delete(FileListEvent::Delete(delete_name.clone()), cx);
                    },
                    cx,
                )),
        )
        .into_any_element()
}

/// 渲染文件列表
pub fn render_file_list<F>(state: &ShareState, on_event: F, cx: &App) -> impl IntoElement
where
    F: Fn(FileListEvent, &mut App) + Clone + 'static,
{
    let lang = state.language;
    let bg_color = crate::theme::sidebar_color(cx);
    let muted = cx.theme().muted_foreground;

    // 加载中状态整体替换列表内容
    if state.list_phase.is_in_flight() {
        return div()
            .size_full()
            .bg(bg_color)
            .flex()
            .flex_col()
            .child(render_title(state, cx))
            .child(
                div()
                    .flex_1()
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(
                        div()
                            .text_sm()
                            .text_color(muted)
                            .child(t(&lang, "share.list.loading")),
                    ),
            )
            .into_any_element();
    }

    // 空清单：既覆盖服务端无文件，也覆盖拉取失败后的回退
    if state.inventory.is_empty() {
        return div()
            .size_full()
            .bg(bg_color)
            .flex()
            .flex_col()
            .child(render_title(state, cx))
            .child(
                div()
                    .flex_1()
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(
                        div()
                            .text_sm()
                            .text_color(muted)
                            .child(t(&lang, "share.list.empty")),
                    ),
            )
            .into_any_element();
    }

    let rows: Vec<AnyElement> = state
        .inventory
        .iter()
        .map(|name| render_file_row(name, on_event.clone(), cx))
        .collect();

    div()
        .size_full()
        .bg(bg_color)
        .flex()
        .flex_col()
        .child(render_title(state, cx))
        .child(render_header(state, cx))
        .child(
            div()
                .id("share-file-list-scroll")
                .flex_1()
                .min_h(px(0.))
                .overflow_y_scrollbar()
                .children(rows),
        )
        .into_any_element()
}
