//! 对向流量对消
//!
//! 同一对节点之间两个方向同时有流量是没有物理意义的，
//! 填充结束后把互为反向的边上的流量按较小值对消掉。

use crate::graph::{EdgeId, Network};

/// 按 (from 名称, to 名称) 升序稳定排序的全部边 ID
///
/// 竞技场里每条边只存一份，无需去重。
pub fn sorted_edge_ids(network: &Network) -> Vec<EdgeId> {
    let mut ids: Vec<EdgeId> = network.edge_ids().collect();

    ids.sort_by(|&a, &b| {
        let ea = network.edge(a);
        let eb = network.edge(b);
        let key_a = (network.node(ea.from()).name(), network.node(ea.to()).name());
        let key_b = (network.node(eb.from()).name(), network.node(eb.to()).name());
        key_a.cmp(&key_b)
    });

    ids
}

/// 对消互为反向的边上的流量
///
/// 对每个有序边对 (edge, other)，若 edge.from == other.to 且
/// edge.to == other.from，从两边各减去 min(edge.flow, other.flow)。
/// 每个无序对对消一次后较小侧归零，再跑一遍不会有变化。
pub fn reconcile(network: &mut Network) {
    let ids = sorted_edge_ids(network);

    for &a in &ids {
        for &b in &ids {
            // 自身配对只在自环时满足条件，且无事可做
            if a == b {
                continue;
            }

            let edge = network.edge(a);
            let other = network.edge(b);
            if edge.from() != other.to() || edge.to() != other.from() {
                continue;
            }

            let cancel = edge.flow().min(other.flow());
            network.edge_mut(a).cancel(cancel);
            network.edge_mut(b).cancel(cancel);
        }
    }
}
