// 文件共享组件模块

pub mod delete_dialog;
pub mod file_list;
pub mod toolbar;

pub use delete_dialog::{render_delete_dialog_overlay, DeleteDialogState};
pub use file_list::{render_file_list, FileListEvent};
pub use toolbar::{render_share_toolbar, ShareToolbarEvent};
