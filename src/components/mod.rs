// 组件模块

pub mod common;
pub mod files;
