// 设置弹窗
// 左侧导航 + 右侧内容，底部取消/保存
// 保存时持久化设置、应用主题并重建 API 客户端

use gpui::prelude::*;
use gpui::*;
use gpui_component::input::{Input, InputState};
use gpui_component::switch::Switch;
use gpui_component::theme::{Theme as GpuiTheme, ThemeMode as GpuiThemeMode};
use gpui_component::ActiveTheme;

use crate::api::{ApiConfig, ApiManager};
use crate::components::common::icon::render_icon;
use crate::constants::icons;
use crate::i18n;
use crate::models::settings::{AppSettings, Language, ThemeMode};
use crate::services::storage;

/// 设置导航区域类型
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum SettingsSection {
    #[default]
    Server,
    Appearance,
    About,
}

impl SettingsSection {
    pub fn label_key(&self) -> &'static str {
        match self {
            SettingsSection::Server => "settings.nav.server",
            SettingsSection::Appearance => "settings.nav.appearance",
            SettingsSection::About => "settings.nav.about",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SettingsSection::Server => icons::CLOUD,
            SettingsSection::Appearance => icons::SETTINGS,
            SettingsSection::About => icons::INFO,
        }
    }
}

/// 设置弹窗状态
pub struct SettingsDialogState {
    pub visible: bool,
    pub current_section: SettingsSection,
    pub settings: AppSettings,
    /// 标记设置是否有变更
    pub has_changes: bool,

    pub base_url_input: Option<Entity<InputState>>,
    pub download_dir_input: Option<Entity<InputState>>,
}

impl Default for SettingsDialogState {
    fn default() -> Self {
        let settings = storage::load_settings().unwrap_or_default();
        Self {
            visible: false,
            current_section: SettingsSection::Server,
            settings,
            has_changes: false,
            base_url_input: None,
            download_dir_input: None,
        }
    }
}

impl SettingsDialogState {
    pub fn open(&mut self) {
        // 打开时重新加载设置
        self.settings = storage::load_settings().unwrap_or_default();
        self.visible = true;
        self.current_section = SettingsSection::Server;
        self.has_changes = false;
        // 清除输入状态以便重新加载
        self.base_url_input = None;
        self.download_dir_input = None;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn save(&mut self) {
        if let Err(e) = storage::save_settings(&self.settings) {
            tracing::error!("[SETTINGS] Failed to save settings: {}", e);
        }
        self.has_changes = false;
    }

    /// 标记设置已变更
    pub fn mark_changed(&mut self) {
        self.has_changes = true;
    }

    /// 确保输入框已创建（在有 window 上下文时调用）
    pub fn ensure_inputs_created(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.base_url_input.is_none() {
            let value = self.settings.server.base_url.clone();
            self.base_url_input = Some(cx.new(|cx| {
                let mut state =
                    InputState::new(window, cx).placeholder(crate::api::DEFAULT_BASE_URL);
                state.set_value(value, window, cx);
                state
            }));
        }
        if self.download_dir_input.is_none() {
            let value = self.settings.server.download_dir.clone();
            let lang = self.settings.theme.language;
            self.download_dir_input = Some(cx.new(|cx| {
                let mut state = InputState::new(window, cx)
                    .placeholder(i18n::t(&lang, "settings.server.download_dir_hint"));
                state.set_value(value, window, cx);
                state
            }));
        }
    }

    /// 从 InputState 同步值到 settings
    pub fn sync_from_inputs(&mut self, cx: &App) {
        if let Some(input) = &self.base_url_input {
            self.settings.server.base_url = input.read(cx).value().trim().to_string();
        }
        if let Some(input) = &self.download_dir_input {
            self.settings.server.download_dir = input.read(cx).value().trim().to_string();
        }
    }
}

/// 渲染设置弹窗覆盖层
/// `on_saved` 在保存并应用设置后回调，供页面刷新语言缓存等
pub fn render_settings_dialog_overlay<F>(
    state: Entity<SettingsDialogState>,
    on_saved: F,
    cx: &App,
) -> impl IntoElement
where
    F: Fn(&mut App) + Clone + 'static,
{
    let state_for_close = state.clone();
    let state_for_content = state.clone();

    div()
        .id("settings-dialog-container")
        .absolute()
        .inset_0()
        .flex()
        .items_center()
        .justify_center()
        // 背景遮罩层
        .child(
            div()
                .id("settings-dialog-backdrop")
                .absolute()
                .inset_0()
                .bg(rgba(0x00000080))
                .on_click(move |_, _, cx| {
                    state_for_close.update(cx, |s, _| s.close());
                }),
        )
        // 弹窗内容
        .child(render_dialog_content(state_for_content, on_saved, cx))
}

fn render_dialog_content<F>(
    state: Entity<SettingsDialogState>,
    on_saved: F,
    cx: &App,
) -> impl IntoElement
where
    F: Fn(&mut App) + Clone + 'static,
{
    let state_for_nav = state.clone();

    let bg_color = crate::theme::popover_color(cx);
    let border_color = cx.theme().border;

    div()
        .id("settings-dialog-content")
        .w(px(640.))
        .h(px(440.))
        .bg(bg_color)
        .border_1()
        .border_color(border_color)
        .rounded_lg()
        .shadow_lg()
        .flex()
        .overflow_hidden()
        .on_mouse_down(MouseButton::Left, |_, _, cx| {
            cx.stop_propagation();
        })
        .child(render_left_nav(state_for_nav, cx))
        .child(render_right_content(state, on_saved, cx))
}

/// 渲染左侧导航菜单
fn render_left_nav(state: Entity<SettingsDialogState>, cx: &App) -> impl IntoElement {
    let sections = [
        SettingsSection::Server,
        SettingsSection::Appearance,
        SettingsSection::About,
    ];

    let bg_color = crate::theme::sidebar_color(cx);
    let border_color = cx.theme().border;

    div()
        .w(px(160.))
        .h_full()
        .bg(bg_color)
        .rounded_l_lg()
        .border_r_1()
        .border_color(border_color)
        .flex()
        .flex_col()
        .p_4()
        .gap_1()
        .children(sections.into_iter().map(|section| {
            let state = state.clone();
            render_nav_item(state, section, cx)
        }))
}

fn render_nav_item(
    state: Entity<SettingsDialogState>,
    section: SettingsSection,
    cx: &App,
) -> impl IntoElement {
    let lang = state.read(cx).settings.theme.language;
    let state_for_click = state.clone();
    let hover_bg = cx.theme().muted;
    let icon_color = cx.theme().muted_foreground;
    let text_color = cx.theme().foreground;

    div()
        .id(SharedString::from(format!("settings-nav-{:?}", section)))
        .px_3()
        .py_2()
        .rounded_md()
        .cursor_pointer()
        .flex()
        .items_center()
        .gap_2()
        .hover(move |s| s.bg(hover_bg))
        .on_click(move |_, _, cx| {
            state_for_click.update(cx, |s, _| {
                s.current_section = section;
            });
        })
        .child(render_icon(section.icon(), icon_color.into()))
        .child(
            div()
                .text_sm()
                .text_color(text_color)
                .child(i18n::t(&lang, section.label_key())),
        )
}

/// 渲染右侧内容区域
fn render_right_content<F>(
    state: Entity<SettingsDialogState>,
    on_saved: F,
    cx: &App,
) -> impl IntoElement
where
    F: Fn(&mut App) + Clone + 'static,
{
    let lang = state.read(cx).settings.theme.language;
    let state_for_panel = state.clone();
    let border_color = cx.theme().border;
    let title_color = cx.theme().foreground;

    div()
        .flex_1()
        .h_full()
        .flex()
        .flex_col()
        // 标题栏
        .child(
            div()
                .h(px(52.))
                .flex_shrink_0()
                .border_b_1()
                .border_color(border_color)
                .flex()
                .items_center()
                .px_6()
                .child(
                    div()
                        .text_lg()
                        .font_weight(FontWeight::SEMIBOLD)
                        .text_color(title_color)
                        .child(i18n::t(&lang, "settings.title")),
                ),
        )
        // 内容区域
        .child(
            div()
                .id("settings-form-scroll")
                .flex_1()
                .overflow_scroll()
                .p_6()
                .child(render_section_content(state_for_panel, cx)),
        )
        // 底部按钮
        .child(render_footer_buttons(state, on_saved, cx))
}

fn render_section_content(state: Entity<SettingsDialogState>, cx: &App) -> impl IntoElement {
    let section = state.read(cx).current_section;

    match section {
        SettingsSection::Server => render_server_panel(state, cx).into_any_element(),
        SettingsSection::Appearance => render_appearance_panel(state, cx).into_any_element(),
        SettingsSection::About => render_about_panel(state, cx).into_any_element(),
    }
}

/// 渲染底部按钮
fn render_footer_buttons<F>(
    state: Entity<SettingsDialogState>,
    on_saved: F,
    cx: &App,
) -> impl IntoElement
where
    F: Fn(&mut App) + Clone + 'static,
{
    let lang = state.read(cx).settings.theme.language;
    let state_for_cancel = state.clone();
    let state_for_save = state;

    let border_color = cx.theme().border;
    let secondary_bg = cx.theme().secondary;
    let secondary_hover = cx.theme().secondary_hover;
    let text_color = cx.theme().foreground;
    let primary_bg = cx.theme().primary;
    let primary_hover = cx.theme().primary_hover;
    let primary_fg = cx.theme().primary_foreground;

    div()
        .h(px(60.))
        .flex_shrink_0()
        .border_t_1()
        .border_color(border_color)
        .flex()
        .items_center()
        .justify_end()
        .gap_3()
        .px_6()
        // 取消按钮
        .child(
            div()
                .id("settings-cancel-btn")
                .px_4()
                .py_2()
                .rounded_md()
                .border_1()
                .border_color(border_color)
                .bg(secondary_bg)
                .cursor_pointer()
                .hover(move |s| s.bg(secondary_hover))
                .on_click(move |_, _, cx| {
                    state_for_cancel.update(cx, |s, _| s.close());
                })
                .child(
                    div()
                        .text_sm()
                        .text_color(text_color)
                        .child(i18n::t(&lang, "common.cancel")),
                ),
        )
        // 保存按钮
        .child(
            div()
                .id("settings-save-btn")
                .px_4()
                .py_2()
                .rounded_md()
                .bg(primary_bg)
                .cursor_pointer()
                .hover(move |s| s.bg(primary_hover))
                .on_click(move |_, _, cx| {
                    state_for_save.update(cx, |s, cx| {
                        s.sync_from_inputs(cx);
                        s.save();
                        s.close();
                    });
                    apply_saved_settings(&state_for_save, cx);
                    on_saved(cx);
                })
                .child(
                    div()
                        .text_sm()
                        .text_color(primary_fg)
                        .child(i18n::t(&lang, "common.save")),
                ),
        )
}

/// 保存后立即应用：主题模式切换 + API 客户端重建
fn apply_saved_settings(state: &Entity<SettingsDialogState>, cx: &mut App) {
    let settings = state.read(cx).settings.clone();

    match settings.theme.mode {
        ThemeMode::Light => GpuiTheme::change(GpuiThemeMode::Light, None, cx),
        ThemeMode::Dark => GpuiTheme::change(GpuiThemeMode::Dark, None, cx),
        ThemeMode::System => {}
    }

    ApiManager::global().reconfigure(ApiConfig::new(settings.server.base_url));
}

// ======================== 面板 ========================

/// 服务器设置面板：服务地址 + 下载行为
fn render_server_panel(state: Entity<SettingsDialogState>, cx: &App) -> impl IntoElement {
    let state_read = state.read(cx);
    let lang = state_read.settings.theme.language;
    let open_folder = state_read.settings.server.open_folder_after_download;
    let base_url_input = state_read.base_url_input.clone();
    let download_dir_input = state_read.download_dir_input.clone();

    let state_for_browse = state.clone();
    let browse_input = download_dir_input.clone();

    div()
        .flex()
        .flex_col()
        .gap_6()
        // 服务地址
        .child(
            div()
                .flex()
                .flex_col()
                .gap_3()
                .child(render_section_title(
                    i18n::t(&lang, "settings.server.address"),
                    cx,
                ))
                .children(base_url_input.as_ref().map(|input| {
                    render_input_row(i18n::t(&lang, "settings.server.base_url"), input, cx)
                })),
        )
        // 下载行为
        .child(
            div()
                .flex()
                .flex_col()
                .gap_3()
                .child(render_section_title(
                    i18n::t(&lang, "settings.server.download"),
                    cx,
                ))
                .children(download_dir_input.as_ref().map(|input| {
                    render_dir_row(
                        i18n::t(&lang, "settings.server.download_dir"),
                        input,
                        move |_, _, cx| {
                            let picker_title =
                                i18n::t(&lang, "settings.server.dir_picker_title").to_string();
                            let input = browse_input.clone();
                            let dialog_state = state_for_browse.clone();
                            // 异步选择目录，结果写回输入框
                            cx.to_async()
                                .spawn(async move |async_cx| {
                                    let folder_picker =
                                        rfd::AsyncFileDialog::new().set_title(picker_title);
                                    let Some(folder_handle) = folder_picker.pick_folder().await
                                    else {
                                        return;
                                    };
                                    let path =
                                        folder_handle.path().to_string_lossy().to_string();
                                    let _ = async_cx.update(|cx| {
                                        let Some(window) = cx.active_window() else {
                                            return;
                                        };
                                        let _ = cx.update_window(window, |_, window, cx| {
                                            if let Some(input) = &input {
                                                input.update(cx, |input, cx| {
                                                    input.set_value(path.clone(), window, cx);
                                                });
                                            }
                                            dialog_state.update(cx, |s, _| s.mark_changed());
                                        });
                                    });
                                })
                                .detach();
                        },
                        cx,
                    )
                }))
                .child(render_switch_row(
                    "server-open-folder",
                    i18n::t(&lang, "settings.server.open_folder"),
                    open_folder,
                    state.clone(),
                    |s, v| s.settings.server.open_folder_after_download = v,
                    cx,
                )),
        )
}

/// 外观设置面板：语言 + 主题模式 + 窗口行为
fn render_appearance_panel(state: Entity<SettingsDialogState>, cx: &App) -> impl IntoElement {
    let state_read = state.read(cx);
    let lang = state_read.settings.theme.language;
    let current_mode = state_read.settings.theme.mode.clone();
    let current_language = state_read.settings.theme.language;
    let close_to_tray = state_read.settings.system.close_to_tray;
    let notify_on_transfer = state_read.settings.system.notify_on_transfer;

    div()
        .flex()
        .flex_col()
        .gap_6()
        // 语言设置
        .child(
            div()
                .flex()
                .flex_col()
                .gap_3()
                .child(render_section_title(
                    i18n::t(&lang, "settings.theme.language"),
                    cx,
                ))
                .child(
                    div()
                        .flex()
                        .gap_3()
                        .child(render_choice_button(
                            "lang-zh",
                            Language::Chinese.label(),
                            current_language == Language::Chinese,
                            state.clone(),
                            |s| s.settings.theme.language = Language::Chinese,
                            cx,
                        ))
                        .child(render_choice_button(
                            "lang-en",
                            Language::English.label(),
                            current_language == Language::English,
                            state.clone(),
                            |s| s.settings.theme.language = Language::English,
                            cx,
                        )),
                ),
        )
        // 外观模式
        .child(
            div()
                .flex()
                .flex_col()
                .gap_3()
                .child(render_section_title(
                    i18n::t(&lang, "settings.theme.mode"),
                    cx,
                ))
                .child(
                    div()
                        .flex()
                        .gap_3()
                        .child(render_choice_button(
                            "theme-light",
                            i18n::t(&lang, "settings.theme.mode.light"),
                            current_mode == ThemeMode::Light,
                            state.clone(),
                            |s| s.settings.theme.mode = ThemeMode::Light,
                            cx,
                        ))
                        .child(render_choice_button(
                            "theme-dark",
                            i18n::t(&lang, "settings.theme.mode.dark"),
                            current_mode == ThemeMode::Dark,
                            state.clone(),
                            |s| s.settings.theme.mode = ThemeMode::Dark,
                            cx,
                        ))
                        .child(render_choice_button(
                            "theme-system",
                            i18n::t(&lang, "settings.theme.mode.system"),
                            current_mode == ThemeMode::System,
                            state.clone(),
                            |s| s.settings.theme.mode = ThemeMode::System,
                            cx,
                        )),
                ),
        )
        // 窗口行为
        .child(
            div()
                .flex()
                .flex_col()
                .gap_3()
                .child(render_section_title(
                    i18n::t(&lang, "settings.system.window"),
                    cx,
                ))
                .child(
                    div()
                        .flex()
                        .flex_col()
                        .gap_2()
                        .child(render_switch_row(
                            "sys-close-to-tray",
                            i18n::t(&lang, "settings.system.close_to_tray"),
                            close_to_tray,
                            state.clone(),
                            |s, v| s.settings.system.close_to_tray = v,
                            cx,
                        ))
                        .child(render_switch_row(
                            "sys-notify-transfer",
                            i18n::t(&lang, "settings.system.notify_on_transfer"),
                            notify_on_transfer,
                            state.clone(),
                            |s, v| s.settings.system.notify_on_transfer = v,
                            cx,
                        )),
                ),
        )
}

/// 关于面板
fn render_about_panel(state: Entity<SettingsDialogState>, cx: &App) -> impl IntoElement {
    let lang = state.read(cx).settings.theme.language;

    div()
        .flex()
        .flex_col()
        .items_center()
        .gap_6()
        .pt_8()
        // Logo / 应用名
        .child(
            div()
                .flex()
                .flex_col()
                .items_center()
                .gap_2()
                .child(
                    div()
                        .w(px(64.))
                        .h(px(64.))
                        .rounded_xl()
                        .bg(cx.theme().primary)
                        .flex()
                        .items_center()
                        .justify_center()
                        .child(
                            div()
                                .text_xl()
                                .font_weight(FontWeight::BOLD)
                                .text_color(cx.theme().primary_foreground)
                                .child("FM"),
                        ),
                )
                .child(
                    div()
                        .text_xl()
                        .font_weight(FontWeight::SEMIBOLD)
                        .text_color(cx.theme().foreground)
                        .child(crate::constants::APP_NAME),
                )
                .child(
                    div()
                        .text_sm()
                        .text_color(cx.theme().muted_foreground)
                        .child(concat!("v", env!("CARGO_PKG_VERSION"))),
                ),
        )
        .child(
            div()
                .text_sm()
                .text_color(cx.theme().muted_foreground)
                .child(i18n::t(&lang, "settings.about.description")),
        )
}

// ======================== 辅助渲染函数 ========================

fn render_section_title(title: &'static str, cx: &App) -> impl IntoElement {
    div()
        .text_base()
        .font_weight(FontWeight::MEDIUM)
        .text_color(cx.theme().foreground)
        .child(title)
}

/// 渲染带输入框的设置行
fn render_input_row(
    label: &'static str,
    input: &Entity<InputState>,
    cx: &App,
) -> impl IntoElement {
    let text_color = cx.theme().foreground;

    div()
        .flex()
        .items_center()
        .justify_between()
        .py_3()
        .px_4()
        .bg(cx.theme().muted)
        .rounded_lg()
        .mb_2()
        .child(
            div()
                .w(px(120.))
                .text_sm()
                .text_color(text_color)
                .child(label),
        )
        .child(div().w(px(260.)).child(Input::new(input).appearance(true)))
}

/// 渲染目录选择行（输入框 + 浏览按钮）
fn render_dir_row<F>(
    label: &'static str,
    input: &Entity<InputState>,
    on_browse: F,
    cx: &App,
) -> impl IntoElement
where
    F: Fn(&ClickEvent, &mut Window, &mut App) + 'static,
{
    let text_color = cx.theme().foreground;
    let icon_color = cx.theme().muted_foreground;

    div()
        .flex()
        .items_center()
        .justify_between()
        .py_3()
        .px_4()
        .bg(cx.theme().muted)
        .rounded_lg()
        .mb_2()
        .child(
            div()
                .w(px(120.))
                .text_sm()
                .text_color(text_color)
                .child(label),
        )
        .child(
            div()
                .flex()
                .items_center()
                .gap_2()
                .child(div().w(px(220.)).child(Input::new(input).appearance(true)))
                .child(
                    div()
                        .id("settings-browse-dir")
                        .size(px(28.))
                        .flex()
                        .items_center()
                        .justify_center()
                        .rounded_md()
                        .border_1()
                        .border_color(cx.theme().border)
                        .cursor_pointer()
                        .hover(|s| s.bg(cx.theme().list_active))
                        .on_click(on_browse)
                        .child(render_icon(icons::FOLDER_OPEN, icon_color.into())),
                ),
        )
}

/// 渲染开关设置行
fn render_switch_row(
    id: impl Into<ElementId>,
    label: &'static str,
    checked: bool,
    state: Entity<SettingsDialogState>,
    update_fn: fn(&mut SettingsDialogState, bool),
    cx: &App,
) -> impl IntoElement {
    let text_color = cx.theme().foreground;

    div()
        .flex()
        .items_center()
        .justify_between()
        .py_3()
        .px_4()
        .bg(cx.theme().muted)
        .rounded_lg()
        .mb_2()
        .child(div().text_sm().text_color(text_color).child(label))
        .child(
            Switch::new(id)
                .checked(checked)
                .on_click(move |new_val, _, cx| {
                    state.update(cx, |s, _| {
                        update_fn(s, *new_val);
                        s.mark_changed();
                    });
                }),
        )
}

/// 渲染单选按钮（语言 / 主题模式）
fn render_choice_button(
    id: impl Into<ElementId>,
    label: &'static str,
    selected: bool,
    state: Entity<SettingsDialogState>,
    update_fn: fn(&mut SettingsDialogState),
    cx: &App,
) -> impl IntoElement {
    let (bg, border, text) = if selected {
        (
            cx.theme().primary.opacity(0.15),
            cx.theme().primary,
            cx.theme().foreground,
        )
    } else {
        (cx.theme().muted, cx.theme().border, cx.theme().foreground)
    };

    div()
        .id(id)
        .px_4()
        .py_2()
        .rounded_md()
        .border_1()
        .border_color(border)
        .bg(bg)
        .cursor_pointer()
        .hover(move |s| s.bg(cx.theme().list_active))
        .on_click(move |_, _, cx| {
            state.update(cx, |s, _| {
                update_fn(s);
                s.mark_changed();
            });
        })
        .child(div().text_sm().text_color(text).child(label))
}
