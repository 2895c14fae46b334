//! 管网数据结构
//!
//! 节点和边的竞技场存储：边只存一份，两个端点各持有它的索引

use super::edge::{Edge, EdgeId};
use super::node::{Node, NodeId};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use tracing::debug;

/// 管网
pub struct Network {
    /// 节点竞技场，NodeId 按创建顺序对应下标
    nodes: Vec<Node>,
    /// 边竞技场，EdgeId 按创建顺序对应下标
    edges: Vec<Edge>,
    /// 名称到节点 ID 的映射，保留首次出现顺序
    name_index: IndexMap<String, NodeId>,
}

impl Network {
    /// 创建空管网
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            name_index: IndexMap::new(),
        }
    }

    // ==================== 节点操作 ====================

    /// 按名称添加节点，已存在时返回原有 ID
    pub fn add_node(&mut self, name: &str) -> NodeId {
        if let Some(&existing_id) = self.name_index.get(name) {
            return existing_id;
        }

        let id = NodeId::new(self.nodes.len() as u64);
        self.nodes.push(Node::new(id, name.to_string()));
        self.name_index.insert(name.to_string(), id);
        debug!(name, id = id.as_u64(), "创建节点");

        id
    }

    /// 通过名称查找节点
    pub fn node_by_name(&self, name: &str) -> Option<NodeId> {
        self.name_index.get(name).copied()
    }

    /// 获取节点
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.as_u64() as usize]
    }

    /// 获取节点数量
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // ==================== 边操作 ====================

    /// 在两个节点之间添加一条管道边
    ///
    /// 边只创建一次，按顺序接入两端节点的边列表。
    pub fn add_pipe(&mut self, from: NodeId, to: NodeId, capacity: i64) -> Result<EdgeId> {
        if from.as_u64() as usize >= self.nodes.len() {
            return Err(Error::NodeNotFound(format!("源节点 {:?} 不存在", from)));
        }
        if to.as_u64() as usize >= self.nodes.len() {
            return Err(Error::NodeNotFound(format!("目标节点 {:?} 不存在", to)));
        }

        let id = EdgeId::new(self.edges.len() as u64);
        self.edges.push(Edge::new(id, from, to, capacity));

        self.nodes[from.as_u64() as usize].attach_edge(id);
        self.nodes[to.as_u64() as usize].attach_edge(id);
        debug!(
            from = self.node(from).name(),
            to = self.node(to).name(),
            capacity,
            "创建管道边"
        );

        Ok(id)
    }

    /// 获取边
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.as_u64() as usize]
    }

    /// 获取可变边
    pub fn edge_mut(&mut self, id: EdgeId) -> &mut Edge {
        &mut self.edges[id.as_u64() as usize]
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 按创建顺序遍历所有边 ID
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edges.len() as u64).map(EdgeId::new)
    }

    // ==================== 遍历支持 ====================

    /// 节点的可用边：按接入顺序，排除对端仍在 `active` 中的边
    ///
    /// 过滤只看调用时刻的 `active` 内容，这是唯一的环路防护。
    pub fn admissible_edges(&self, node: NodeId, active: &[NodeId]) -> Vec<EdgeId> {
        self.node(node)
            .edges()
            .iter()
            .copied()
            .filter(|&edge_id| {
                let other = self.edge(edge_id).other_endpoint(node);
                !active.contains(&other)
            })
            .collect()
    }
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}
