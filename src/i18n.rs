use crate::models::settings::Language;

pub fn t(lang: &Language, key: &'static str) -> &'static str {
    match lang {
        Language::Chinese => zh_cn(key),
        Language::English => en_us(key),
    }
}

fn zh_cn(key: &'static str) -> &'static str {
    match key {
        // 通用
        "common.save" => "保存",
        "common.cancel" => "取消",
        "common.loading" => "加载中...",
        "common.delete" => "删除",

        // 文件列表
        "share.list.title" => "服务器文件",
        "share.list.empty" => "暂无文件",
        "share.list.loading" => "正在加载...",
        "share.list.header.name" => "文件名",
        "share.list.header.actions" => "操作",
        "share.list.refreshed_at" => "更新于",
        "share.list.failed" => "获取文件列表失败",

        // 上传
        "share.upload.choose" => "选择文件",
        "share.upload.submit" => "上传",
        "share.upload.submitting" => "上传中...",
        "share.upload.success" => "上传成功",
        "share.upload.failed" => "上传失败",
        "share.upload.picker_title" => "选择要上传的文件",

        // 下载
        "share.download.name_placeholder" => "输入文件名...",
        "share.download.success" => "下载完成",
        "share.download.not_found" => "文件不存在",
        "share.download.write_failed" => "文件保存失败",
        "share.download.picker_title" => "保存文件",

        // 删除
        "share.delete.title" => "删除文件",
        "share.delete.message" => "确定要删除该文件吗？此操作不可撤销。",
        "share.delete.success" => "已删除",
        "share.delete.failed" => "删除失败",

        // 本地校验
        "share.validate.no_file" => "请先选择文件",
        "share.validate.bad_type" => "不支持的文件类型，仅支持 PNG、JPEG 和 PDF",
        "share.validate.too_large" => "文件过大，上限为 10 MB",
        "share.validate.empty_name" => "请输入文件名",

        // 设置菜单
        "settings.title" => "设置",
        "settings.nav.server" => "服务器设置",
        "settings.nav.appearance" => "外观设置",
        "settings.nav.about" => "关于",

        // 服务器设置
        "settings.server.address" => "服务地址",
        "settings.server.base_url" => "基础地址",
        "settings.server.download" => "下载",
        "settings.server.download_dir" => "默认下载目录",
        "settings.server.download_dir_hint" => "留空时每次选择保存位置",
        "settings.server.open_folder" => "下载后打开所在文件夹",
        "settings.server.dir_picker_title" => "选择下载目录",

        // 外观设置
        "settings.theme.language" => "语言 / Language",
        "settings.theme.mode" => "外观模式",
        "settings.theme.mode.light" => "浅色模式",
        "settings.theme.mode.dark" => "深色模式",
        "settings.theme.mode.system" => "跟随系统",
        "settings.system.window" => "窗口",
        "settings.system.close_to_tray" => "关闭到托盘",
        "settings.system.notify_on_transfer" => "传输完成后通知",

        // 关于
        "settings.about.description" => "基于 GPUI 构建的文件共享客户端",

        _ => key,
    }
}

fn en_us(key: &'static str) -> &'static str {
    match key {
        // Common
        "common.save" => "Save",
        "common.cancel" => "Cancel",
        "common.loading" => "Loading...",
        "common.delete" => "Delete",

        // File list
        "share.list.title" => "Files on Server",
        "share.list.empty" => "No files available",
        "share.list.loading" => "Loading...",
        "share.list.header.name" => "File Name",
        "share.list.header.actions" => "Actions",
        "share.list.refreshed_at" => "Updated at",
        "share.list.failed" => "Failed to load file list",

        // Upload
        "share.upload.choose" => "Choose File",
        "share.upload.submit" => "Upload",
        "share.upload.submitting" => "Uploading...",
        "share.upload.success" => "Upload complete",
        "share.upload.failed" => "Upload failed",
        "share.upload.picker_title" => "Choose a file to upload",

        // Download
        "share.download.name_placeholder" => "Enter a file name...",
        "share.download.success" => "Download complete",
        "share.download.not_found" => "File not found",
        "share.download.write_failed" => "Failed to save file",
        "share.download.picker_title" => "Save File",

        // Delete
        "share.delete.title" => "Delete File",
        "share.delete.message" => "Delete this file? This cannot be undone.",
        "share.delete.success" => "Deleted",
        "share.delete.failed" => "Delete failed",

        // Local validation
        "share.validate.no_file" => "Please choose a file first",
        "share.validate.bad_type" => "Unsupported file type, only PNG, JPEG and PDF are allowed",
        "share.validate.too_large" => "File too large, the limit is 10 MB",
        "share.validate.empty_name" => "Please enter a file name",

        // Settings navigation
        "settings.title" => "Settings",
        "settings.nav.server" => "Server",
        "settings.nav.appearance" => "Appearance",
        "settings.nav.about" => "About",

        // Server settings
        "settings.server.address" => "Server Address",
        "settings.server.base_url" => "Base URL",
        "settings.server.download" => "Download",
        "settings.server.download_dir" => "Default Download Directory",
        "settings.server.download_dir_hint" => "Ask where to save when empty",
        "settings.server.open_folder" => "Open folder after download",
        "settings.server.dir_picker_title" => "Choose Download Directory",

        // Appearance settings
        "settings.theme.language" => "语言 / Language",
        "settings.theme.mode" => "Appearance Mode",
        "settings.theme.mode.light" => "Light",
        "settings.theme.mode.dark" => "Dark",
        "settings.theme.mode.system" => "System",
        "settings.system.window" => "Window",
        "settings.system.close_to_tray" => "Close to Tray",
        "settings.system.notify_on_transfer" => "Notify when transfer completes",

        // About
        "settings.about.description" => "A file sharing client built with GPUI",

        _ => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translates_by_language() {
        assert_eq!(t(&Language::Chinese, "common.save"), "保存");
        assert_eq!(t(&Language::English, "common.save"), "Save");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(t(&Language::Chinese, "no.such.key"), "no.such.key");
        assert_eq!(t(&Language::English, "no.such.key"), "no.such.key");
    }
}
