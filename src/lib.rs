//! SpanGraph - 无向加权图与最小生成树
//!
//! 以邻接表表示无向加权图，支持：
//! - 顶点/边的增量构建，顶点 ID 唯一
//! - Prim 与 Kruskal 最小生成树（非连通图得到生成森林）
//! - 导出 Graphviz dot 格式

pub mod algorithm;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod graph;
pub mod types;

// 重导出常用类型
pub use algorithm::{minimum_spanning_tree, Kruskal, MstAlgorithm, Prim, SpanningTree, TreeEdge};
pub use error::{Error, Result};
pub use export::{export_dot, write_dot, ExportStats};
pub use graph::{Edge, Graph, Vertex, VertexId};
pub use types::{GraphId, VertexRef, Weight};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
