// 数据模型模块

pub mod settings;
pub mod share;

pub use settings::AppSettings;
pub use share::{RequestPhase, SelectedFile};
