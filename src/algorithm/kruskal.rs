//! Kruskal 最小生成树算法
//!
//! 收集全部边并按权重升序稳定排序，依次接受两端点不在同一连通分量的边，
//! 接受 |V| - 1 条边或候选边耗尽后结束。

use super::spanning_tree::{SpanningTree, TreeBuilder};
use super::union_find::UnionFind;
use super::MstAlgorithm;
use crate::error::Result;
use crate::graph::Graph;
use crate::types::{VertexRef, Weight};
use tracing::debug;

/// Kruskal 算法
pub struct Kruskal<'g> {
    graph: &'g Graph,
}

impl<'g> Kruskal<'g> {
    /// 创建算法实例
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// 计算最小生成树
    pub fn minimum_spanning_tree(&self) -> Result<SpanningTree> {
        let vertex_count = self.graph.vertex_count();
        let mut tree = TreeBuilder::new(self.graph, MstAlgorithm::Kruskal)?;

        let candidates = self.sorted_edges();
        debug!(candidates = candidates.len(), "Kruskal 候选边排序完成");

        let mut components = UnionFind::new(vertex_count);
        for (source, target, weight) in candidates {
            if tree.len() + 1 >= vertex_count {
                break;
            }
            if components.union(source, target) {
                tree.accept(source, target, weight)?;
            }
        }

        Ok(tree.finish())
    }

    /// 按权重升序排列的全部非自环边，权重相同时保持顶点和邻接表顺序
    fn sorted_edges(&self) -> Vec<(VertexRef, VertexRef, Weight)> {
        let mut edges: Vec<_> = self
            .graph
            .vertices()
            .flat_map(|v| v.edges().iter())
            .filter(|e| !e.is_loop())
            .map(|e| (e.source(), e.target(), e.weight()))
            .collect();
        edges.sort_by_key(|&(_, _, weight)| weight);
        edges
    }
}
