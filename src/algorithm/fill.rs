//! 饱和填充算法
//!
//! 单趟深度优先的流量分配：对每个节点按边的接入顺序
//! 依次预定、递归、撤回，不做增广路径回溯。
//! 这不是严格意义上的最大流算法，某些图形下会少送流量，
//! 该行为是契约的一部分，不可替换为教科书算法。

use crate::graph::{EdgeId, Network, NodeId, UNBOUNDED};
use tracing::debug;

/// 填充引擎
///
/// 持有管网的可变引用和祖先栈。栈里是当前递归路径上的节点，
/// 只用于阻止流量流回正在处理的祖先；节点出栈后可以被
/// 之后不相关的递归帧再次访问。
pub struct FillEngine<'a> {
    network: &'a mut Network,
    /// 祖先栈，进入递归帧时压入当前节点，返回时弹出
    stack: Vec<NodeId>,
}

impl<'a> FillEngine<'a> {
    /// 创建填充引擎
    pub fn new(network: &'a mut Network) -> Self {
        Self {
            network,
            stack: Vec::new(),
        }
    }

    /// 以无界预算从 source 向 sink 填充，返回送达的总流量
    pub fn run(network: &'a mut Network, source: NodeId, sink: NodeId) -> i64 {
        let mut engine = Self::new(network);
        engine.fill(source, sink, UNBOUNDED)
    }

    /// 递归填充
    ///
    /// 把流入 `current` 的预算 `budget` 分配到它的可用边上，
    /// 返回实际送达 `target` 的流量。
    fn fill(&mut self, current: NodeId, target: NodeId, mut budget: i64) -> i64 {
        assert!(budget >= 0, "预算不能为负: {}", budget);

        if budget == 0 {
            debug!(node = self.network.node(current).name(), "预算为 0，返回");
            return 0;
        }

        if current == target {
            debug!(flow = budget, "到达汇点，流量全部送达");
            return budget;
        }

        debug!(node = self.network.node(current).name(), budget, "进入节点");
        self.stack.push(current);

        // 可用边快照只取一次，过滤基于此刻的栈内容
        let candidates: Vec<EdgeId> = self.network.admissible_edges(current, &self.stack);
        let mut total = 0;

        for edge_id in candidates {
            // 先按当前预算乐观预定，边会按剩余容量截断
            let reserved = self.network.edge_mut(edge_id).apply(current, budget);
            let next = self.network.edge(edge_id).other_endpoint(current);

            let delivered = self.fill(next, target, reserved);
            budget -= delivered;

            // 撤回没有送达的部分，delivered - reserved <= 0
            self.network
                .edge_mut(edge_id)
                .apply(current, delivered - reserved);
            total += delivered;
        }

        debug!(node = self.network.node(current).name(), total, "离开节点");
        self.stack.pop();
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Network;

    /// 汇点以外节点的净流入应等于净流出
    fn assert_conserved(net: &Network, source: NodeId, sink: NodeId) {
        for id in 0..net.node_count() as u64 {
            let node = NodeId::new(id);
            if node == source || node == sink {
                continue;
            }

            let mut balance = 0;
            for edge_id in net.node(node).edges() {
                let e = net.edge(*edge_id);
                if e.to() == node {
                    balance += e.flow();
                }
                if e.from() == node {
                    balance -= e.flow();
                }
            }
            assert_eq!(balance, 0, "节点 {} 流量不守恒", net.node(node).name());
        }
    }

    #[test]
    fn test_single_edge() {
        let mut net = Network::new();
        let a = net.add_node("A");
        let b = net.add_node("B");
        let ab = net.add_pipe(a, b, 5).unwrap();

        let total = FillEngine::run(&mut net, a, b);

        assert_eq!(total, 5);
        assert_eq!(net.edge(ab).flow(), 5);
    }

    #[test]
    fn test_chain_bottleneck() {
        let mut net = Network::new();
        let a = net.add_node("A");
        let b = net.add_node("B");
        let c = net.add_node("C");
        let ab = net.add_pipe(a, b, 3).unwrap();
        let bc = net.add_pipe(b, c, 5).unwrap();

        let total = FillEngine::run(&mut net, a, c);

        // 受 A-B 瓶颈限制
        assert_eq!(total, 3);
        assert_eq!(net.edge(ab).flow(), 3);
        assert_eq!(net.edge(bc).flow(), 3);
        assert_conserved(&net, a, c);
    }

    #[test]
    fn test_parallel_paths() {
        let mut net = Network::new();
        let s = net.add_node("S");
        let a = net.add_node("A");
        let b = net.add_node("B");
        let t = net.add_node("T");

        net.add_pipe(s, a, 5).unwrap();
        net.add_pipe(a, t, 5).unwrap();
        net.add_pipe(s, b, 10).unwrap();
        net.add_pipe(b, t, 10).unwrap();

        let total = FillEngine::run(&mut net, s, t);

        assert_eq!(total, 15);
        assert_conserved(&net, s, t);
    }

    #[test]
    fn test_cycle_terminates() {
        let mut net = Network::new();
        let a = net.add_node("A");
        let b = net.add_node("B");
        let c = net.add_node("C");

        // 环路 A-B-C-A，祖先栈防止无限递归
        let ab = net.add_pipe(a, b, 4).unwrap();
        let bc = net.add_pipe(b, c, 4).unwrap();
        let ca = net.add_pipe(c, a, 4).unwrap();

        let total = FillEngine::run(&mut net, a, c);

        // A-B-C 送 4；C-A 只能反向拉回已有流量，此时为 0
        assert_eq!(total, 4);
        assert_eq!(net.edge(ab).flow(), 4);
        assert_eq!(net.edge(bc).flow(), 4);
        assert_eq!(net.edge(ca).flow(), 0);
    }

    #[test]
    fn test_retraction_on_dead_end() {
        let mut net = Network::new();
        let a = net.add_node("A");
        let b = net.add_node("B");
        let c = net.add_node("C");
        let d = net.add_node("D");

        // B 先试死路 B-D，预定的流量必须撤回
        let ab = net.add_pipe(a, b, 10).unwrap();
        let bd = net.add_pipe(b, d, 10).unwrap();
        let bc = net.add_pipe(b, c, 4).unwrap();

        let total = FillEngine::run(&mut net, a, c);

        assert_eq!(total, 4);
        assert_eq!(net.edge(ab).flow(), 4);
        assert_eq!(net.edge(bd).flow(), 0);
        assert_eq!(net.edge(bc).flow(), 4);
        assert_conserved(&net, a, c);
    }

    #[test]
    fn test_flow_never_exceeds_capacity() {
        let mut net = Network::new();
        let s = net.add_node("S");
        let a = net.add_node("A");
        let b = net.add_node("B");
        let t = net.add_node("T");

        net.add_pipe(s, a, 10).unwrap();
        net.add_pipe(s, b, 5).unwrap();
        net.add_pipe(a, t, 10).unwrap();
        net.add_pipe(b, a, 10).unwrap();
        net.add_pipe(b, t, 3).unwrap();

        FillEngine::run(&mut net, s, t);

        for edge_id in net.edge_ids().collect::<Vec<_>>() {
            let e = net.edge(edge_id);
            assert!(e.flow() >= 0);
            assert!(e.flow() <= e.capacity());
        }
        assert_conserved(&net, s, t);
    }

    #[test]
    fn test_deterministic() {
        let build = || {
            let mut net = Network::new();
            let s = net.add_node("S");
            let a = net.add_node("A");
            let b = net.add_node("B");
            let t = net.add_node("T");
            net.add_pipe(s, a, 7).unwrap();
            net.add_pipe(s, b, 2).unwrap();
            net.add_pipe(a, b, 3).unwrap();
            net.add_pipe(a, t, 5).unwrap();
            net.add_pipe(b, t, 6).unwrap();
            (net, s, t)
        };

        let (mut first, s1, t1) = build();
        let total_first = FillEngine::run(&mut first, s1, t1);

        let (mut second, s2, t2) = build();
        let total_second = FillEngine::run(&mut second, s2, t2);

        assert_eq!(total_first, total_second);
        for id in 0..first.edge_count() as u64 {
            let e = crate::graph::EdgeId::new(id);
            assert_eq!(first.edge(e).flow(), second.edge(e).flow());
        }
    }

    #[test]
    fn test_source_equals_sink() {
        let mut net = Network::new();
        let a = net.add_node("A");
        let b = net.add_node("B");
        net.add_pipe(a, b, 5).unwrap();

        // 基本情形 B：当前节点即为汇点，预算原样返回
        let total = FillEngine::run(&mut net, a, a);
        assert_eq!(total, UNBOUNDED);
    }
}
