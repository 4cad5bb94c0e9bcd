//! 图数据结构
//!
//! 图以插入顺序保存顶点，顶点位置即 [`VertexRef`]；每个顶点独占自己的出边。
//! 无向图需要调用方为每条边添加两个方向，或使用 [`Graph::add_undirected_edge`]。

use super::edge::Edge;
use super::vertex::{Vertex, VertexId};
use crate::error::{Error, Result};
use crate::types::{GraphId, VertexRef, Weight};
use indexmap::IndexMap;
use tracing::debug;

/// 加权图
#[derive(Debug, Clone)]
pub struct Graph {
    /// 图 ID
    id: GraphId,
    /// 顶点集合（保持插入顺序）
    vertices: IndexMap<VertexId, Vertex>,
}

impl Graph {
    /// 创建空图
    pub fn new(id: impl Into<GraphId>) -> Self {
        Self {
            id: id.into(),
            vertices: IndexMap::new(),
        }
    }

    /// 由无向边列表构建图
    ///
    /// 顶点按首次出现的顺序创建，每条边会添加两个方向。
    pub fn from_undirected_edges(
        id: impl Into<GraphId>,
        edges: &[(VertexId, VertexId, Weight)],
    ) -> Result<Self> {
        let mut graph = Self::new(id);
        for &(u, v, w) in edges {
            for vertex in [u, v] {
                if graph.find_vertex(vertex).is_none() {
                    graph.add_vertex(vertex)?;
                }
            }
            graph.add_undirected_edge(u, v, w)?;
        }
        Ok(graph)
    }

    /// 获取图 ID
    pub fn id(&self) -> GraphId {
        self.id
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    pub fn add_vertex(&mut self, id: impl Into<VertexId>) -> Result<VertexRef> {
        let id = id.into();
        if self.vertices.contains_key(&id) {
            return Err(Error::DuplicateVertex(id));
        }

        self.vertices
            .try_reserve(1)
            .map_err(|e| Error::AllocationFailure(e.to_string()))?;
        let (index, _) = self.vertices.insert_full(id, Vertex::new(id));

        debug!(graph = %self.id, vertex = %id, "添加顶点");
        Ok(VertexRef(index))
    }

    /// 按 ID 查找顶点
    pub fn find_vertex(&self, id: impl Into<VertexId>) -> Option<VertexRef> {
        self.vertices.get_index_of(&id.into()).map(VertexRef)
    }

    /// 获取顶点
    pub fn vertex(&self, vertex: VertexRef) -> Option<&Vertex> {
        self.vertices.get_index(vertex.0).map(|(_, v)| v)
    }

    /// 按 ID 获取顶点
    pub fn vertex_by_id(&self, id: impl Into<VertexId>) -> Option<&Vertex> {
        self.vertices.get(&id.into())
    }

    /// 获取顶点 ID
    pub fn vertex_id(&self, vertex: VertexRef) -> Option<VertexId> {
        self.vertices.get_index(vertex.0).map(|(id, _)| *id)
    }

    /// 按插入顺序遍历顶点
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.values()
    }

    /// 所有顶点 ID（插入顺序）
    pub fn vertex_ids(&self) -> Vec<VertexId> {
        self.vertices.keys().copied().collect()
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    fn vertex_mut(&mut self, vertex: VertexRef) -> Option<&mut Vertex> {
        self.vertices.get_index_mut(vertex.0).map(|(_, v)| v)
    }

    fn invalid_ref(&self, vertex: VertexRef) -> Error {
        Error::InvalidArgument(format!("顶点引用 #{} 不属于图 {}", vertex.0, self.id))
    }

    // ==================== 边操作 ====================

    /// 为 `source` 批量添加出边
    ///
    /// `pairs` 为 `(邻接顶点 ID, 权重)`，按给定顺序追加。所有目标顶点在修改前
    /// 统一解析，任何一个不存在时返回错误且邻接表保持不变。
    pub fn add_edges(&mut self, source: VertexRef, pairs: &[(VertexId, Weight)]) -> Result<()> {
        let source_id = self
            .vertex_id(source)
            .ok_or_else(|| self.invalid_ref(source))?;

        let resolved = pairs
            .iter()
            .map(|&(target, weight)| {
                self.find_vertex(target)
                    .map(|r| (r, weight))
                    .ok_or(Error::UnresolvedTarget {
                        vertex: source_id,
                        target,
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let graph_id = self.id;
        let vertex = self
            .vertex_mut(source)
            .ok_or_else(|| Error::InvalidArgument(format!("顶点 {} 不存在", source_id)))?;
        vertex.reserve_edges(resolved.len())?;

        for (target, weight) in resolved {
            vertex.push_edge(source, target, weight);
            debug!(graph = %graph_id, vertex = %source_id, target = target.0, weight, "添加边");
        }

        Ok(())
    }

    /// 添加一条无向边（两个方向，权重相同）
    ///
    /// 两个端点都必须已存在；任一端点缺失时不做任何修改。自环只添加一次。
    pub fn add_undirected_edge(
        &mut self,
        u: impl Into<VertexId>,
        v: impl Into<VertexId>,
        weight: Weight,
    ) -> Result<()> {
        let (u, v) = (u.into(), v.into());
        let ur = self
            .find_vertex(u)
            .ok_or_else(|| Error::InvalidArgument(format!("顶点 {} 不存在", u)))?;
        if self.find_vertex(v).is_none() {
            return Err(Error::UnresolvedTarget {
                vertex: u,
                target: v,
            });
        }

        self.add_edges(ur, &[(v, weight)])?;
        if u != v {
            let vr = self
                .find_vertex(v)
                .ok_or(Error::UnresolvedTarget { vertex: u, target: v })?;
            self.add_edges(vr, &[(u, weight)])?;
        }
        Ok(())
    }

    /// 获取顶点的邻接表
    pub fn edges_of(&self, vertex: VertexRef) -> Option<&[Edge]> {
        self.vertex(vertex).map(|v| v.edges())
    }

    /// 查找 `source` 上第一条指向 `target` 的边
    pub fn find_edge(&self, source: VertexRef, target: VertexRef) -> Option<&Edge> {
        self.vertex(source)?.edge_to(target)
    }

    /// 获取顶点的邻居（按出边顺序）
    pub fn neighbors(&self, id: impl Into<VertexId>) -> Vec<VertexId> {
        let Some(vertex) = self.vertex_by_id(id) else {
            return Vec::new();
        };
        vertex
            .edges()
            .iter()
            .filter_map(|e| self.vertex_id(e.target()))
            .collect()
    }

    /// 获取顶点的出度
    pub fn degree(&self, id: impl Into<VertexId>) -> usize {
        self.vertex_by_id(id).map_or(0, |v| v.degree())
    }

    /// 获取有向边数量（每条无向边计两次）
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(|v| v.degree()).sum()
    }

    /// 每条边是否都存在权重相同的反向边
    pub fn is_symmetric(&self) -> bool {
        self.vertices.values().enumerate().all(|(index, vertex)| {
            vertex.edges().iter().all(|e| {
                self.vertex(e.target()).is_some_and(|t| {
                    t.edges()
                        .iter()
                        .any(|r| r.target() == VertexRef(index) && r.weight() == e.weight())
                })
            })
        })
    }

    // ==================== 遍历标记 ====================

    /// 清除所有访问标记和导出标记
    pub fn clear_marks(&mut self) {
        self.reset_visited();
        self.reset_exported();
    }

    pub(crate) fn reset_visited(&mut self) {
        for vertex in self.vertices.values_mut() {
            vertex.set_visited(false);
        }
    }

    pub(crate) fn reset_exported(&mut self) {
        for vertex in self.vertices.values_mut() {
            for edge in vertex.edges_mut() {
                edge.set_exported(false);
            }
        }
    }

    pub(crate) fn is_visited(&self, vertex: VertexRef) -> bool {
        self.vertex(vertex).is_some_and(|v| v.is_visited())
    }

    pub(crate) fn set_visited(&mut self, vertex: VertexRef) {
        if let Some(v) = self.vertex_mut(vertex) {
            v.set_visited(true);
        }
    }

    /// 标记 `source` 的第 `position` 条出边为已导出，返回之前是否未导出
    pub(crate) fn mark_exported(&mut self, source: VertexRef, position: usize) -> bool {
        match self
            .vertex_mut(source)
            .and_then(|v| v.edges_mut().get_mut(position))
        {
            Some(edge) if !edge.is_exported() => {
                edge.set_exported(true);
                true
            }
            _ => false,
        }
    }

    /// 标记 `target` 上指回 `source` 的反向边为已导出，返回是否找到
    ///
    /// 优先选择权重相同且尚未导出的边，其次是任意尚未导出的反向边，
    /// 这样平行边会两两配对而不会重复输出。
    pub(crate) fn mark_reciprocal_exported(
        &mut self,
        target: VertexRef,
        source: VertexRef,
        weight: Weight,
    ) -> bool {
        let Some(vertex) = self.vertex_mut(target) else {
            return false;
        };
        let edges = vertex.edges_mut();
        let pending = |e: &Edge| e.target() == source && !e.is_exported();
        let position = edges
            .iter()
            .position(|e| pending(e) && e.weight() == weight)
            .or_else(|| edges.iter().position(|e| pending(e)));

        match position {
            Some(position) => {
                edges[position].set_exported(true);
                true
            }
            None => false,
        }
    }
}
