// 共享页模块

mod page;
mod titlebar;

pub use page::SharePage;
