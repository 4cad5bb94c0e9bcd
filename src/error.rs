//! 错误类型定义

use crate::graph::VertexId;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("无效参数: {0}")]
    InvalidArgument(String),

    #[error("顶点已存在: {0}")]
    DuplicateVertex(VertexId),

    #[error("邻接顶点不存在: {vertex} -> {target}")]
    UnresolvedTarget { vertex: VertexId, target: VertexId },

    #[error("无法写入文件 {}: {source}", path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("内存分配失败: {0}")]
    AllocationFailure(String),

    #[error("配置错误: {0}")]
    Config(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}
