//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("未知节点引用: {0}")]
    UnknownNodeReference(String),

    #[error("节点不存在: {0}")]
    NodeNotFound(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),
}
