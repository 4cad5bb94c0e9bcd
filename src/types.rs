//! 通用类型定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 边权重
pub type Weight = i64;

/// 图 ID（仅用于标识，不参与任何计算）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GraphId(pub i64);

impl GraphId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for GraphId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 顶点在图内部存储中的位置
///
/// 顶点只增不删，因此引用在图的整个生命周期内保持有效。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexRef(pub usize);

impl VertexRef {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_id_display() {
        assert_eq!(GraphId::new(7).to_string(), "7");
        assert_eq!(GraphId::from(-3).as_i64(), -3);
    }

    #[test]
    fn test_vertex_ref_order() {
        assert!(VertexRef(1) < VertexRef(2));
        assert_eq!(VertexRef(4).index(), 4);
    }
}
