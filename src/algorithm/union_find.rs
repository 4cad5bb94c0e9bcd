//! 并查集
//!
//! 跟踪顶点所属的连通分量，Kruskal 算法用它拒绝会成环的边。
//! 使用路径压缩和按秩合并。

use crate::types::VertexRef;

/// 并查集
#[derive(Debug, Clone)]
pub struct UnionFind {
    /// 父节点（根节点指向自身）
    parent: Vec<usize>,
    /// 秩（树高上界）
    rank: Vec<u32>,
    /// 分量数量
    components: usize,
}

impl UnionFind {
    /// 创建 n 个单元素集合
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// 当前分量数量
    pub fn components(&self) -> usize {
        self.components
    }

    /// 查找代表元，同时压缩路径
    pub fn find(&mut self, x: VertexRef) -> usize {
        let mut root = x.0;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x.0;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// 合并两个集合，两者原本不连通时返回 true
    pub fn union(&mut self, x: VertexRef, y: VertexRef) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Less => self.parent[root_x] = root_y,
            std::cmp::Ordering::Greater => self.parent[root_y] = root_x,
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }

        self.components -= 1;
        true
    }

    pub fn connected(&mut self, x: VertexRef, y: VertexRef) -> bool {
        self.find(x) == self.find(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_find_basic() {
        let mut uf = UnionFind::new(5);
        assert_eq!(uf.len(), 5);
        assert_eq!(uf.components(), 5);

        assert!(uf.union(VertexRef(0), VertexRef(1)));
        assert!(uf.union(VertexRef(2), VertexRef(3)));
        assert!(!uf.union(VertexRef(1), VertexRef(0)));

        assert!(uf.connected(VertexRef(0), VertexRef(1)));
        assert!(!uf.connected(VertexRef(1), VertexRef(2)));
        assert_eq!(uf.components(), 3);
    }

    #[test]
    fn test_union_find_chain() {
        let mut uf = UnionFind::new(4);
        uf.union(VertexRef(0), VertexRef(1));
        uf.union(VertexRef(1), VertexRef(2));
        uf.union(VertexRef(2), VertexRef(3));

        assert_eq!(uf.components(), 1);
        assert!(uf.connected(VertexRef(0), VertexRef(3)));
        let root = uf.find(VertexRef(3));
        assert!((0..4).all(|i| uf.find(VertexRef(i)) == root));
    }

    #[test]
    fn test_union_find_empty() {
        let uf = UnionFind::new(0);
        assert!(uf.is_empty());
        assert_eq!(uf.components(), 0);
    }
}
