//! 管网输入模块
//!
//! 从行式文本流读取管网描述并构建管网
//!
//! 输入格式：
//! ```text
//! <管道数量>
//! <源节点名>
//! <汇节点名>
//! <from> <to> <容量>   （每条管道一行）
//! ```

use crate::error::{Error, Result};
use crate::graph::{Network, NodeId};
use serde::{Deserialize, Serialize};
use std::io::BufRead;

/// 单条管道描述
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipeSpec {
    pub from: String,
    pub to: String,
    pub capacity: i64,
}

/// 管网描述
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// 源节点名
    pub source: String,
    /// 汇节点名
    pub sink: String,
    /// 管道列表，顺序即输入顺序
    pub pipes: Vec<PipeSpec>,
}

/// 从行式文本流读取管网描述
pub fn read_spec<R: BufRead>(reader: R) -> Result<NetworkSpec> {
    let mut lines = reader.lines();

    let mut next_line = |what: &str| -> Result<String> {
        match lines.next() {
            Some(line) => Ok(line?),
            None => Err(Error::ParseError(format!("缺少{}行", what))),
        }
    };

    let count_line = next_line("管道数量")?;
    let count: usize = count_line
        .trim()
        .parse()
        .map_err(|_| Error::ParseError(format!("无效的管道数量: {}", count_line.trim())))?;

    let source = next_line("源节点")?.trim().to_string();
    if source.is_empty() {
        return Err(Error::ParseError("源节点名为空".to_string()));
    }

    let sink = next_line("汇节点")?.trim().to_string();
    if sink.is_empty() {
        return Err(Error::ParseError("汇节点名为空".to_string()));
    }

    let mut pipes = Vec::with_capacity(count);
    for i in 0..count {
        let line = next_line(&format!("第 {} 条管道", i + 1))?;
        pipes.push(parse_pipe_line(&line)?);
    }

    Ok(NetworkSpec {
        source,
        sink,
        pipes,
    })
}

/// 解析一行管道描述：`<from> <to> <容量>`
fn parse_pipe_line(line: &str) -> Result<PipeSpec> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(Error::ParseError(format!("无效的管道描述: {}", line)));
    }

    let capacity: i64 = fields[2]
        .parse()
        .map_err(|_| Error::ParseError(format!("无效的容量: {}", fields[2])))?;
    if capacity < 0 {
        return Err(Error::ParseError(format!("容量不能为负: {}", capacity)));
    }

    Ok(PipeSpec {
        from: fields[0].to_string(),
        to: fields[1].to_string(),
        capacity,
    })
}

/// 按描述构建管网，返回管网和解析出的源、汇节点 ID
///
/// 节点按名称首次出现的顺序创建，边按输入顺序创建。
/// 源或汇引用了不存在的节点名时返回 `UnknownNodeReference`，
/// 保证引擎不会拿到无效引用。
pub fn build_network(spec: &NetworkSpec) -> Result<(Network, NodeId, NodeId)> {
    let mut network = Network::new();

    for pipe in &spec.pipes {
        let from = network.add_node(&pipe.from);
        let to = network.add_node(&pipe.to);
        network.add_pipe(from, to, pipe.capacity)?;
    }

    let source = network
        .node_by_name(&spec.source)
        .ok_or_else(|| Error::UnknownNodeReference(spec.source.clone()))?;
    let sink = network
        .node_by_name(&spec.sink)
        .ok_or_else(|| Error::UnknownNodeReference(spec.sink.clone()))?;

    Ok((network, source, sink))
}
