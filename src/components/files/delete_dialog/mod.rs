// 删除确认对话框模块

pub mod dialog;
pub mod state;

pub use dialog::render_delete_dialog_overlay;
pub use state::DeleteDialogState;
