// 共享页工具栏组件
// 刷新按钮 + 选择/上传文件 + 文件名输入下载 + 设置入口

use gpui::*;
use gpui_component::input::Input;
use gpui_component::{ActiveTheme, Sizable};

use crate::constants::icons;
use crate::i18n::t;
use crate::state::ShareState;

/// 工具栏高度
const TOOLBAR_HEIGHT: f32 = 44.0;
/// 图标按钮尺寸
const BUTTON_SIZE: f32 = 26.0;
/// 图标尺寸
const ICON_SIZE: f32 = 14.0;

/// 共享页工具栏事件
#[derive(Clone, Debug)]
pub enum ShareToolbarEvent {
    Refresh,
    ChooseFile,
    ClearSelection,
    Upload,
    Download,
    OpenSettings,
}

/// 渲染图标按钮
fn toolbar_button<F>(
    id: impl Into<ElementId>,
    icon_path: &'static str,
    enabled: bool,
    on_click: Option<F>,
    cx: &App,
) -> impl IntoElement
where
    F: Fn(&MouseDownEvent, &mut Window, &mut App) + 'static,
{
    let icon_color = if enabled {
        cx.theme().foreground
    } else {
        cx.theme().muted_foreground.opacity(0.5)
    };
    let hover_bg = cx.theme().list_active;

    let mut el = div()
        .id(id)
        .size(px(BUTTON_SIZE))
        .flex()
        .items_center()
        .justify_center()
        .rounded(px(4.))
        .child(
            svg()
                .path(icon_path)
                .size(px(ICON_SIZE))
                .text_color(icon_color),
        );

    if enabled {
        el = el.cursor_pointer().hover(|s| s.bg(hover_bg));
        if let Some(handler) = on_click {
            el = el.on_mouse_down(MouseButton::Left, handler);
        }
    }

    el
}

/// 渲染文字按钮（选择文件 / 上传）
fn text_button<F>(
    id: impl Into<ElementId>,
    icon_path: &'static str,
    label: &'static str,
    primary: bool,
    enabled: bool,
    on_click: Option<F>,
    cx: &App,
) -> impl IntoElement
where
    F: Fn(&MouseDownEvent, &mut Window, &mut App) + 'static,
{
    let (bg, hover_bg, fg) = if primary {
        (
            cx.theme().primary,
            cx.theme().primary_hover,
            cx.theme().primary_foreground,
        )
    } else {
        (
            cx.theme().secondary,
            cx.theme().secondary_hover,
            cx.theme().secondary_foreground,
        )
    };

    let mut el = div()
        .id(id)
        .h(px(BUTTON_SIZE))
        .px_3()
        .flex()
        .items_center()
        .gap_1p5()
        .rounded(px(4.))
        .bg(bg)
        .child(svg().path(icon_path).size(px(ICON_SIZE)).text_color(fg))
        .child(div().text_xs().text_color(fg).child(label));

    if enabled {
        el = el.cursor_pointer().hover(move |s| s.bg(hover_bg));
        if let Some(handler) = on_click {
            el = el.on_mouse_down(MouseButton::Left, handler);
        }
    } else {
        el = el.opacity(0.6);
    }

    el
}

/// 渲染当前选中文件的信息行（文件名 + 大小 + 清除按钮）
fn render_selection<F>(state: &ShareState, on_clear: F, cx: &App) -> Option<impl IntoElement>
where
    F: Fn(&MouseDownEvent, &mut Window, &mut App) + 'static,
{
    let selected = state.selected_file.as_ref()?;
    let foreground = cx.theme().foreground;
    let muted = cx.theme().muted_foreground;
    let uploading = state.upload_phase.is_in_flight();

    let mut el = div()
        .flex()
        .items_center()
        .gap_1p5()
        .px_2()
        .h(px(BUTTON_SIZE))
        .bg(cx.theme().muted)
        .rounded(px(4.))
        .max_w(px(280.))
        .child(
            svg()
                .path(icons::PAPERCLIP)
                .size(px(12.))
                .text_color(muted),
        )
        .child(
            div()
                .text_xs()
                .text_color(foreground)
                .overflow_hidden()
                .text_ellipsis()
                .child(selected.name.clone()),
        )
        .child(
            div()
                .text_xs()
                .text_color(muted)
                .flex_shrink_0()
                .child(selected.format_size()),
        );

    // 上传中不允许清除当前选择
    if !uploading {
        el = el.child(
            div()
                .id("share-selection-clear")
                .size(px(16.))
                .flex()
                .items_center()
                .justify_center()
                .rounded(px(3.))
                .cursor_pointer()
                .hover(|s| s.bg(cx.theme().list_active))
                .on_mouse_down(MouseButton::Left, on_clear)
                .child(svg().path(icons::X).size(px(10.)).text_color(muted)),
        );
    }

    Some(el)
}

/// 渲染共享页工具栏
pub fn render_share_toolbar<F>(state: &ShareState, on_event: F, cx: &App) -> impl IntoElement
where
    F: Fn(ShareToolbarEvent, &mut App) + Clone + 'static,
{
    let lang = state.language;
    let bg_color = crate::theme::sidebar_color(cx);
    let border_color = cx.theme().border;

    let list_loading = state.list_phase.is_in_flight();
    let uploading = state.upload_phase.is_in_flight();
    let downloading = state.download_phase.is_in_flight();

    // === 刷新 ===
    let on_refresh = on_event.clone();
    let refresh_icon = if list_loading {
        icons::LOADER
    } else {
        icons::REFRESH
    };
    let refresh_btn = toolbar_button(
        "share-btn-refresh",
        refresh_icon,
        !list_loading,
        Some(move |_: &MouseDownEvent, _: &mut Window, cx: &mut App| {
            on_refresh(ShareToolbarEvent::Refresh, cx);
        }),
        cx,
    );

    // === 选择文件 / 上传 ===
    let on_choose = on_event.clone();
    let choose_btn = text_button(
        "share-btn-choose",
        icons::PAPERCLIP,
        t(&lang, "share.upload.choose"),
        false,
        !uploading,
        Some(move |_: &MouseDownEvent, _: &mut Window, cx: &mut App| {
            on_choose(ShareToolbarEvent::ChooseFile, cx);
        }),
        cx,
    );

    let on_clear = on_event.clone();
    let selection = render_selection(
        state,
        move |_: &MouseDownEvent, _: &mut Window, cx: &mut App| {
            on_clear(ShareToolbarEvent::ClearSelection, cx);
        },
        cx,
    );

    let on_upload = on_event.clone();
    let upload_label = if uploading {
        t(&lang, "share.upload.submitting")
    } else {
        t(&lang, "share.upload.submit")
    };
    let upload_btn = text_button(
        "share-btn-upload",
        icons::UPLOAD,
        upload_label,
        true,
        // 上传中禁点，防止同一选择被重复提交；本地校验在状态层处理
        !uploading,
        Some(move |_: &MouseDownEvent, _: &mut Window, cx: &mut App| {
            on_upload(ShareToolbarEvent::Upload, cx);
        }),
        cx,
    );

    let upload_group = div()
        .flex()
        .items_center()
        .gap_2()
        .flex_shrink_0()
        .child(choose_btn)
        .children(selection)
        .child(upload_btn);

    // === 按名称下载 ===
    let name_field = div()
        .w(px(200.))
        .flex_shrink_0()
        .children(
            state
                .name_input
                .as_ref()
                .map(|input| Input::new(input).appearance(true).xsmall()),
        );

    let on_download = on_event.clone();
    let download_btn = toolbar_button(
        "share-btn-download",
        icons::DOWNLOAD,
        !downloading,
        Some(move |_: &MouseDownEvent, _: &mut Window, cx: &mut App| {
            on_download(ShareToolbarEvent::Download, cx);
        }),
        cx,
    );

    // === 设置 ===
    let on_settings = on_event.clone();
    let settings_btn = toolbar_button(
        "share-btn-settings",
        icons::SETTINGS,
        true,
        Some(move |_: &MouseDownEvent, _: &mut Window, cx: &mut App| {
            on_settings(ShareToolbarEvent::OpenSettings, cx);
        }),
        cx,
    );

    div()
        .w_full()
        .h(px(TOOLBAR_HEIGHT))
        .flex_shrink_0()
        .bg(bg_color)
        .border_b_1()
        .border_color(border_color)
        .flex()
        .items_center()
        .px_2()
        .gap_2()
        .child(refresh_btn)
        .child(div().w(px(1.)).h(px(18.)).bg(border_color))
        .child(upload_group)
        .child(div().flex_1())
        .child(name_field)
        .child(download_btn)
        .child(div().w(px(1.)).h(px(18.)).bg(border_color))
        .child(settings_btn)
}
