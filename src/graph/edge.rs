//! 管道边定义
//!
//! 两个节点之间的带容量连接，持有当前流量

use crate::graph::node::NodeId;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 无界流量哨兵，顶层 fill 调用的初始预算
pub const UNBOUNDED: i64 = i64::MAX;

/// 边 ID（全局唯一）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub u64);

impl EdgeId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for EdgeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// 管道边
///
/// `from` 是名义上的流出端，但两端都可以发起流量：
/// 从 `to` 端发起意味着把已有的正向流量拉回来。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// 边 ID
    id: EdgeId,
    /// 流出端节点 ID
    from: NodeId,
    /// 流入端节点 ID
    to: NodeId,
    /// 容量上限（非负，创建后不变）
    capacity: i64,
    /// 当前流量，始终满足 0 <= flow <= capacity
    flow: i64,
}

impl Edge {
    /// 创建新边
    pub fn new(id: EdgeId, from: NodeId, to: NodeId, capacity: i64) -> Self {
        debug_assert!(capacity >= 0);
        Self {
            id,
            from,
            to,
            capacity,
            flow: 0,
        }
    }

    /// 获取边 ID
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// 获取流出端节点 ID
    pub fn from(&self) -> NodeId {
        self.from
    }

    /// 获取流入端节点 ID
    pub fn to(&self) -> NodeId {
        self.to
    }

    /// 获取容量
    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    /// 获取当前流量
    pub fn flow(&self) -> i64 {
        self.flow
    }

    /// 从 `actor` 端施加流量，返回实际施加量的绝对值
    ///
    /// 从 `from` 端施加时增加流量，上限为容量；`requested` 可以为负，
    /// 用于撤回之前多预定的部分。从 `to` 端施加时把已有流量拉回，
    /// 下限为 0。
    pub fn apply(&mut self, actor: NodeId, requested: i64) -> i64 {
        assert!(
            actor == self.from || actor == self.to,
            "节点 {:?} 不是边 {:?} 的端点",
            actor,
            self.id
        );

        let delta = if actor == self.from {
            requested.min(self.capacity - self.flow)
        } else {
            -self.flow.min(requested)
        };

        self.flow += delta;
        debug!(edge = self.id.as_u64(), delta, flow = self.flow, "流量变更");
        delta.abs()
    }

    /// `node` 端还可以发起多少流量
    ///
    /// `from` 端是剩余容量，`to` 端是可以拉回的已用流量。
    pub fn remaining(&self, node: NodeId) -> i64 {
        assert!(
            node == self.from || node == self.to,
            "节点 {:?} 不是边 {:?} 的端点",
            node,
            self.id
        );

        if node == self.from {
            self.capacity - self.flow
        } else {
            self.flow
        }
    }

    /// 获取 `node` 的对端节点
    pub fn other_endpoint(&self, node: NodeId) -> NodeId {
        assert!(
            node == self.from || node == self.to,
            "节点 {:?} 不是边 {:?} 的端点",
            node,
            self.id
        );

        if node == self.from {
            self.to
        } else {
            self.from
        }
    }

    /// 直接减少流量（对消阶段使用）
    pub(crate) fn cancel(&mut self, amount: i64) {
        debug_assert!(amount >= 0 && amount <= self.flow);
        self.flow -= amount;
    }
}
