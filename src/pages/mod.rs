// 页面模块

pub mod share;

pub use share::SharePage;
