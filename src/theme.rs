// 全局主题配置
// 在 gpui-component 默认主题之上覆盖自定义配色

use gpui::*;
use gpui_component::theme::Theme;
use gpui_component::ActiveTheme;
use std::rc::Rc;

/// 初始化全局主题配置
/// 深色模式使用统一的深蓝色风格，浅色模式只调整按钮配色
pub fn init(cx: &mut App) {
    // 借用规则限制，先克隆当前配置作为基础
    let (mut dark_config, mut light_config) = {
        let theme = Theme::global(cx);
        ((*theme.dark_theme).clone(), (*theme.light_theme).clone())
    };

    // ================== 深色模式 ==================
    // 主背景：深蓝色
    dark_config.colors.background = Some("#20293A".into());
    // 弹窗/卡片：稍亮的深蓝色
    dark_config.colors.popover = Some("#283446".into());
    // 工具栏/列表区域：更深的蓝黑色
    dark_config.colors.sidebar = Some("#1A2535".into());
    // 标题栏：与工具栏一致
    dark_config.colors.title_bar = Some("#1A2535".into());

    dark_config.colors.muted = Some("#1A2535".into());
    dark_config.colors.muted_foreground = Some("#94a3b8".into()); // slate-400
    dark_config.colors.list_hover = Some("#334155".into());
    dark_config.colors.input = Some("#475569".into());
    dark_config.colors.border = Some("#4a5c72".into());
    dark_config.colors.title_bar_border = Some("#4a5c72".into());

    // 按钮配色（深色）
    dark_config.colors.primary = Some("#3b82f6".into()); // Blue 500
    dark_config.colors.primary_hover = Some("#2563eb".into()); // Blue 600
    dark_config.colors.primary_foreground = Some("#ffffff".into());
    dark_config.colors.secondary = Some("#334155".into()); // Slate 700
    dark_config.colors.secondary_hover = Some("#475569".into()); // Slate 600
    dark_config.colors.secondary_foreground = Some("#ffffff".into());

    // ================== 浅色模式 ==================
    // 按钮配色（浅色）
    light_config.colors.primary = Some("#3b82f6".into()); // Blue 500
    light_config.colors.primary_hover = Some("#2563eb".into()); // Blue 600
    light_config.colors.primary_foreground = Some("#ffffff".into());
    light_config.colors.secondary = Some("#f1f5f9".into()); // Slate 100
    light_config.colors.secondary_hover = Some("#e2e8f0".into()); // Slate 200
    light_config.colors.secondary_foreground = Some("#0f172a".into()); // Slate 900

    // 更新全局主题并应用当前模式的配置
    let theme = Theme::global_mut(cx);
    theme.dark_theme = Rc::new(dark_config);
    theme.light_theme = Rc::new(light_config);

    if theme.mode.is_dark() {
        theme.apply_config(&theme.dark_theme.clone());
    } else {
        theme.apply_config(&theme.light_theme.clone());
    }
}

/// 主背景色
pub fn background_color(cx: &App) -> Hsla {
    cx.theme().background
}

/// 弹窗/卡片背景色
pub fn popover_color(cx: &App) -> Hsla {
    cx.theme().popover
}

/// 工具栏/列表区域背景色
pub fn sidebar_color(cx: &App) -> Hsla {
    cx.theme().sidebar
}

/// 标题栏背景色
pub fn titlebar_color(cx: &App) -> Hsla {
    cx.theme().title_bar
}
