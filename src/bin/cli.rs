//! FlowNet CLI 工具
//!
//! 从文件或标准输入读取管网描述，跑填充和对消，输出结果

use anyhow::Context;
use clap::Parser;
use flownet::{build_network, read_spec, reconcile, FillEngine, FlowSummary, PrintMode, Printer};
use std::fs::File;
use std::io::{self, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "flownet-cli")]
#[command(about = "FlowNet 管网流量分配工具", version = flownet::VERSION)]
struct Args {
    /// 输入文件，省略时读取标准输入
    input: Option<String>,

    /// 以 JSON 格式输出结果
    #[arg(long)]
    json: bool,

    /// 输出内部状态变更的调试跟踪
    #[arg(long)]
    trace: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 跟踪开关只影响日志输出，不影响计算结果
    if args.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("flownet=debug"))
            .with_writer(io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }

    let spec = match &args.input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("无法打开输入文件: {}", path))?;
            read_spec(BufReader::new(file))?
        }
        None => read_spec(io::stdin().lock())?,
    };

    let (mut network, source, sink) = build_network(&spec)?;

    let total = FillEngine::run(&mut network, source, sink);
    reconcile(&mut network);

    let summary = FlowSummary::collect(&network, total);
    let mode = if args.json {
        PrintMode::Json
    } else {
        PrintMode::Text
    };
    Printer::new(mode).print(&summary, &mut io::stdout().lock())?;

    Ok(())
}
