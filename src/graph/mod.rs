//! 图核心模块
//!
//! 定义节点、管道边和管网的核心数据结构

mod edge;
mod network;
mod node;

pub use edge::{Edge, EdgeId, UNBOUNDED};
pub use network::Network;
pub use node::{Node, NodeId};
