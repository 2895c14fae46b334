//! 节点定义
//!
//! 以名称标识的管网节点，按接入顺序持有关联边

use crate::graph::edge::EdgeId;
use serde::{Deserialize, Serialize};

/// 节点 ID（全局唯一）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl NodeId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// 节点
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// 节点 ID
    id: NodeId,
    /// 节点名称（唯一，兼作显示标签）
    name: String,
    /// 关联边，按接入顺序排列，顺序决定遍历优先级
    edges: Vec<EdgeId>,
}

impl Node {
    /// 创建新节点
    pub fn new(id: NodeId, name: String) -> Self {
        Self {
            id,
            name,
            edges: Vec::new(),
        }
    }

    /// 获取节点 ID
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// 获取节点名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 获取关联边列表（接入顺序）
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// 接入一条边，同一条边不会出现两次
    pub(crate) fn attach_edge(&mut self, edge_id: EdgeId) {
        debug_assert!(!self.edges.contains(&edge_id));
        self.edges.push(edge_id);
    }
}
