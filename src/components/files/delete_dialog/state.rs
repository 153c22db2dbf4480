// 删除确认对话框状态

/// 删除确认对话框状态
/// 打开时记录目标文件名，确认后进入删除中状态
pub struct DeleteDialogState {
    pub is_open: bool,
    /// 待删除的文件名
    pub file_name: String,
    /// 删除请求是否进行中
    pub is_deleting: bool,
}

impl Default for DeleteDialogState {
    fn default() -> Self {
        Self {
            is_open: false,
            file_name: String::new(),
            is_deleting: false,
        }
    }
}

impl DeleteDialogState {
    /// 打开对话框并记录目标文件
    pub fn open(&mut self, file_name: String) {
        self.file_name = file_name;
        self.is_open = true;
        self.is_deleting = false;
    }

    /// 关闭对话框并复位状态
    pub fn close(&mut self) {
        self.is_open = false;
        self.file_name.clear();
        self.is_deleting = false;
    }

    /// 进入删除中状态（禁用确认按钮）
    pub fn start_deleting(&mut self) {
        self.is_deleting = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_records_target() {
        let mut state = DeleteDialogState::default();
        state.open("old.png".to_string());
        assert!(state.is_open);
        assert_eq!(state.file_name, "old.png");
        assert!(!state.is_deleting);
    }

    #[test]
    fn test_close_resets_state() {
        let mut state = DeleteDialogState::default();
        state.open("old.png".to_string());
        state.start_deleting();
        state.close();
        assert!(!state.is_open);
        assert!(state.file_name.is_empty());
        assert!(!state.is_deleting);
    }

    // 删除请求以 file_name 为目标，取消后目标为空，确认路径不会发出请求
    #[test]
    fn test_dismiss_leaves_no_delete_target() {
        let mut state = DeleteDialogState::default();
        state.open("report.pdf".to_string());
        state.close();
        assert!(state.file_name.is_empty());
    }

    #[test]
    fn test_reopen_clears_previous_deleting_flag() {
        let mut state = DeleteDialogState::default();
        state.open("a.png".to_string());
        state.start_deleting();
        state.open("b.png".to_string());
        assert!(!state.is_deleting);
        assert_eq!(state.file_name, "b.png");
    }
}
