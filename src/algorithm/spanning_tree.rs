//! 生成树结果
//!
//! 两种算法共用的输出：被接受的树边、总权重以及只包含树边的输出图

use super::MstAlgorithm;
use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use crate::types::{VertexRef, Weight};
use serde::Serialize;
use tracing::{debug, info};

/// 生成树中的一条边
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TreeEdge {
    pub source: VertexId,
    pub target: VertexId,
    pub weight: Weight,
}

impl TreeEdge {
    pub fn new(source: impl Into<VertexId>, target: impl Into<VertexId>, weight: Weight) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }
}

/// 最小生成树（非连通图时为最小生成森林）
#[derive(Debug, Clone, Serialize)]
pub struct SpanningTree {
    /// 使用的算法
    pub algorithm: MstAlgorithm,
    /// 按接受顺序排列的树边
    pub edges: Vec<TreeEdge>,
    /// 树边权重之和
    pub total_weight: i64,
    /// 森林中树的数量
    pub components: usize,
    /// 输出图：包含输入图的全部顶点，每条树边添加两个方向
    #[serde(skip)]
    pub graph: Graph,
}

impl SpanningTree {
    /// 是否连通了所有顶点
    pub fn is_spanning(&self) -> bool {
        self.components <= 1
    }

    /// 树边数量
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

/// 逐条接受树边并构建输出图
pub(crate) struct TreeBuilder {
    algorithm: MstAlgorithm,
    graph: Graph,
    edges: Vec<TreeEdge>,
    total_weight: i64,
}

impl TreeBuilder {
    /// 以输入图的全部顶点（相同顺序）初始化输出图
    pub(crate) fn new(input: &Graph, algorithm: MstAlgorithm) -> Result<Self> {
        let mut graph = Graph::new(input.id());
        for id in input.vertex_ids() {
            graph.add_vertex(id)?;
        }

        Ok(Self {
            algorithm,
            graph,
            edges: Vec::with_capacity(input.vertex_count().saturating_sub(1)),
            total_weight: 0,
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.edges.len()
    }

    /// 接受一条树边
    ///
    /// 输出图与输入图的顶点顺序一致，因此可以直接使用输入图的顶点引用。
    pub(crate) fn accept(&mut self, source: VertexRef, target: VertexRef, weight: Weight) -> Result<()> {
        let (source_id, target_id) = match (self.graph.vertex_id(source), self.graph.vertex_id(target)) {
            (Some(s), Some(t)) => (s, t),
            _ => {
                return Err(Error::InvalidArgument(format!(
                    "树边端点 #{} -- #{} 不在输出图中",
                    source.0, target.0
                )))
            }
        };

        let total_weight = self.total_weight.checked_add(weight).ok_or_else(|| {
            Error::InvalidArgument(format!(
                "总权重溢出: {} + {} ({} -- {})",
                self.total_weight, weight, source_id, target_id
            ))
        })?;

        self.graph.add_edges(source, &[(target_id, weight)])?;
        self.graph.add_edges(target, &[(source_id, weight)])?;
        self.edges.push(TreeEdge::new(source_id, target_id, weight));
        self.total_weight = total_weight;

        debug!(algorithm = %self.algorithm, source = %source_id, target = %target_id, weight, "接受树边");
        Ok(())
    }

    pub(crate) fn finish(self) -> SpanningTree {
        let components = self.graph.vertex_count() - self.edges.len();
        info!(
            algorithm = %self.algorithm,
            edges = self.edges.len(),
            total_weight = self.total_weight,
            components,
            "最小生成树计算完成"
        );

        SpanningTree {
            algorithm: self.algorithm,
            edges: self.edges,
            total_weight: self.total_weight,
            components,
            graph: self.graph,
        }
    }
}
