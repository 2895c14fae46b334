//! 结果打印器
//!
//! 把填充和对消之后的结果整理成报告，支持文本和 JSON 两种输出

use crate::algorithm::sorted_edge_ids;
use crate::graph::Network;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// 打印模式
#[derive(Clone, Copy, PartialEq)]
pub enum PrintMode {
    /// 文本模式
    Text,
    /// JSON 模式
    Json,
}

/// 单条边的净流量
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowEntry {
    pub from: String,
    pub to: String,
    pub flow: i64,
}

/// 一次完整求解的结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowSummary {
    /// 送达汇点的总流量
    pub total: i64,
    /// 全部边的净流量，按 (from, to) 名称升序
    pub edges: Vec<FlowEntry>,
}

impl FlowSummary {
    /// 从对消后的管网整理结果
    pub fn collect(network: &Network, total: i64) -> Self {
        let edges = sorted_edge_ids(network)
            .into_iter()
            .map(|id| {
                let e = network.edge(id);
                FlowEntry {
                    from: network.node(e.from()).name().to_string(),
                    to: network.node(e.to()).name().to_string(),
                    flow: e.flow(),
                }
            })
            .collect();

        Self { total, edges }
    }
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Text)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 写出结果报告
    pub fn print<W: Write>(&self, summary: &FlowSummary, out: &mut W) -> std::io::Result<()> {
        match self.mode {
            PrintMode::Text => self.print_text(summary, out),
            PrintMode::Json => self.print_json(summary, out),
        }
    }

    /// 文本格式：总流量一行，之后每条边一行 `from to flow`
    fn print_text<W: Write>(&self, summary: &FlowSummary, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", summary.total)?;
        for entry in &summary.edges {
            writeln!(out, "{} {} {}", entry.from, entry.to, entry.flow)?;
        }
        Ok(())
    }

    fn print_json<W: Write>(&self, summary: &FlowSummary, out: &mut W) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(summary)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        writeln!(out, "{}", json)
    }
}
