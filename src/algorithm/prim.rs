//! Prim 最小生成树算法
//!
//! 从起始顶点出发，每次选取连接已访问集合与未访问顶点的最小权重边。
//! 候选边保存在最小堆中，权重相同时先入堆者优先，因此后出现的等权边
//! 不会替换已经找到的最小边。图不连通时，按插入顺序从下一个未访问的
//! 顶点重新开始，得到最小生成森林。
//!
//! 顶点的 `visited` 标记只会在两种情况下被设置：作为一棵树的根，或通过
//! 一条被接受的边到达。

use super::spanning_tree::{SpanningTree, TreeBuilder};
use super::MstAlgorithm;
use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use crate::types::{VertexRef, Weight};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::debug;

/// 候选边，用于优先队列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    weight: Weight,
    sequence: u64,
    source: VertexRef,
    target: VertexRef,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap 是最大堆，反转比较得到最小堆
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 当前树的候选边边界
#[derive(Debug, Default)]
struct Frontier {
    heap: BinaryHeap<Candidate>,
    sequence: u64,
}

impl Frontier {
    /// 加入 `vertex` 指向未访问顶点的所有出边
    fn extend(&mut self, graph: &Graph, vertex: VertexRef) {
        let Some(edges) = graph.edges_of(vertex) else {
            return;
        };
        for edge in edges {
            if graph.is_visited(edge.target()) {
                continue;
            }
            self.heap.push(Candidate {
                weight: edge.weight(),
                sequence: self.sequence,
                source: vertex,
                target: edge.target(),
            });
            self.sequence += 1;
        }
    }

    fn pop(&mut self) -> Option<Candidate> {
        self.heap.pop()
    }
}

/// Prim 算法
pub struct Prim<'g> {
    graph: &'g mut Graph,
    start: Option<VertexId>,
}

impl<'g> Prim<'g> {
    /// 创建算法实例
    pub fn new(graph: &'g mut Graph) -> Self {
        Self { graph, start: None }
    }

    /// 指定起始顶点（默认为第一个插入的顶点）
    pub fn with_start(mut self, start: impl Into<VertexId>) -> Self {
        self.start = Some(start.into());
        self
    }

    /// 计算最小生成树
    pub fn minimum_spanning_tree(self) -> Result<SpanningTree> {
        let graph = self.graph;
        let start = match self.start {
            Some(id) => Some(graph.find_vertex(id).ok_or_else(|| {
                Error::InvalidArgument(format!("起始顶点 {} 不存在", id))
            })?),
            None => None,
        };

        graph.reset_visited();
        let mut tree = TreeBuilder::new(graph, MstAlgorithm::Prim)?;

        let roots = start
            .into_iter()
            .chain((0..graph.vertex_count()).map(VertexRef));
        for root in roots {
            if graph.is_visited(root) {
                continue;
            }
            grow(graph, root, &mut tree)?;
        }

        Ok(tree.finish())
    }
}

/// 从 `root` 出发扩展一棵树
fn grow(graph: &mut Graph, root: VertexRef, tree: &mut TreeBuilder) -> Result<()> {
    debug!(root = root.0, "Prim 新建树");
    graph.set_visited(root);

    let mut frontier = Frontier::default();
    frontier.extend(graph, root);

    while let Some(candidate) = frontier.pop() {
        if graph.is_visited(candidate.target) {
            continue;
        }

        graph.set_visited(candidate.target);
        tree.accept(candidate.source, candidate.target, candidate.weight)?;
        frontier.extend(graph, candidate.target);
    }

    Ok(())
}
