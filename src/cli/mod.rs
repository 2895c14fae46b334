//! 命令行支持模块
//!
//! 提供结果打印器，供 CLI 二进制使用

mod printer;

pub use printer::{FlowEntry, FlowSummary, PrintMode, Printer};
