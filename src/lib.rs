//! FlowNet - 管网流量分配引擎
//!
//! 在带容量的管网上做单趟深度优先的饱和填充：
//! - 节点/边数据模型，边在两个端点之间共享
//! - 递归填充算法，祖先栈防止流回正在处理的节点
//! - 对向流量对消与按名称排序的结果报告
//! - 行式文本输入输出

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod import;

// 重导出常用类型
pub use algorithm::{reconcile, sorted_edge_ids, FillEngine};
pub use cli::{FlowEntry, FlowSummary, PrintMode, Printer};
pub use error::{Error, Result};
pub use graph::{Edge, EdgeId, Network, Node, NodeId, UNBOUNDED};
pub use import::{build_network, read_spec, NetworkSpec, PipeSpec};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
