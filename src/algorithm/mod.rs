//! 图算法模块
//!
//! 包含 Prim 和 Kruskal 两种最小生成树算法

mod kruskal;
mod prim;
mod spanning_tree;
mod union_find;

pub use kruskal::Kruskal;
pub use prim::Prim;
pub use spanning_tree::{SpanningTree, TreeEdge};
pub use union_find::UnionFind;

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 最小生成树算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MstAlgorithm {
    #[default]
    Prim,
    Kruskal,
}

impl MstAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            MstAlgorithm::Prim => "prim",
            MstAlgorithm::Kruskal => "kruskal",
        }
    }
}

impl fmt::Display for MstAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MstAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "prim" | "p" => Ok(MstAlgorithm::Prim),
            "kruskal" | "k" => Ok(MstAlgorithm::Kruskal),
            other => Err(Error::InvalidArgument(format!(
                "未知算法: {} (可选: prim, kruskal)",
                other
            ))),
        }
    }
}

/// 使用指定算法计算最小生成树
///
/// `start` 只对 Prim 有效。
pub fn minimum_spanning_tree(
    graph: &mut Graph,
    algorithm: MstAlgorithm,
    start: Option<VertexId>,
) -> Result<SpanningTree> {
    match algorithm {
        MstAlgorithm::Prim => {
            let prim = match start {
                Some(start) => Prim::new(graph).with_start(start),
                None => Prim::new(graph),
            };
            prim.minimum_spanning_tree()
        }
        MstAlgorithm::Kruskal => {
            if let Some(start) = start {
                tracing::debug!(start = %start, "Kruskal 忽略起始顶点");
            }
            Kruskal::new(graph).minimum_spanning_tree()
        }
    }
}
