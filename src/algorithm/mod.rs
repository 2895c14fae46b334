//! 流量算法模块
//!
//! 包含饱和填充引擎和对向流量对消

mod fill;
mod reconcile;

pub use fill::FillEngine;
pub use reconcile::{reconcile, sorted_edge_ids};
