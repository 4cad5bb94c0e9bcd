//! 顶点定义
//!
//! 顶点持有自己的出边（邻接表），以及 Prim 算法使用的访问标记

use super::edge::Edge;
use crate::error::{Error, Result};
use crate::types::{VertexRef, Weight};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点 ID（图内唯一）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub i64);

impl VertexId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for VertexId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 顶点
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    /// 顶点 ID
    id: VertexId,
    /// 邻接表，按添加顺序排列
    adjacency: Vec<Edge>,
    /// 是否已被 Prim 算法并入生成树
    visited: bool,
}

impl Vertex {
    /// 创建新顶点
    pub fn new(id: VertexId) -> Self {
        Self {
            id,
            adjacency: Vec::new(),
            visited: false,
        }
    }

    /// 获取顶点 ID
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// 获取邻接表
    pub fn edges(&self) -> &[Edge] {
        &self.adjacency
    }

    /// 出度
    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub(crate) fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    /// 查找第一条指向 `target` 的边
    pub fn edge_to(&self, target: VertexRef) -> Option<&Edge> {
        self.adjacency.iter().find(|e| e.target() == target)
    }

    pub(crate) fn edges_mut(&mut self) -> &mut [Edge] {
        &mut self.adjacency
    }

    /// 预留邻接表空间
    pub(crate) fn reserve_edges(&mut self, additional: usize) -> Result<()> {
        self.adjacency
            .try_reserve(additional)
            .map_err(|e| Error::AllocationFailure(e.to_string()))
    }

    /// 在邻接表尾部追加一条边
    pub(crate) fn push_edge(&mut self, source: VertexRef, target: VertexRef, weight: Weight) {
        self.adjacency.push(Edge::new(source, target, weight));
    }
}
