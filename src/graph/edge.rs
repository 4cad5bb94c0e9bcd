//! 边定义
//!
//! 无向边由两条方向相反、权重相同的有向边表示

use crate::types::{VertexRef, Weight};
use serde::{Deserialize, Serialize};

/// 边
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// 所属顶点（非拥有引用）
    source: VertexRef,
    /// 邻接顶点
    target: VertexRef,
    /// 权重
    weight: Weight,
    /// 是否已被导出器输出
    exported: bool,
}

impl Edge {
    /// 创建新边
    pub fn new(source: VertexRef, target: VertexRef, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
            exported: false,
        }
    }

    /// 获取源顶点
    pub fn source(&self) -> VertexRef {
        self.source
    }

    /// 获取邻接顶点
    pub fn target(&self) -> VertexRef {
        self.target
    }

    /// 获取权重
    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn is_exported(&self) -> bool {
        self.exported
    }

    pub(crate) fn set_exported(&mut self, exported: bool) {
        self.exported = exported;
    }

    /// 是否为自环
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_new() {
        let e = Edge::new(VertexRef(0), VertexRef(3), 12);

        assert_eq!(e.source(), VertexRef(0));
        assert_eq!(e.target(), VertexRef(3));
        assert_eq!(e.weight(), 12);
        assert!(!e.is_exported());
        assert!(!e.is_loop());
    }

    #[test]
    fn test_edge_loop() {
        assert!(Edge::new(VertexRef(2), VertexRef(2), 0).is_loop());
    }
}
