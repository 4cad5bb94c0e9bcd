//! 命令行支持模块
//!
//! 边参数解析、交互式控制台命令、结果打印和 Tab 补全

pub mod commands;
pub mod completer;
pub mod printer;

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use crate::types::Weight;
use std::str::FromStr;

/// 命令行中的一条无向边，格式 `U:V:W`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSpec {
    pub u: VertexId,
    pub v: VertexId,
    pub weight: Weight,
}

impl FromStr for EdgeSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        let [u, v, w] = parts.as_slice() else {
            return Err(Error::InvalidArgument(format!(
                "边格式错误: {} (应为 U:V:W)",
                s
            )));
        };

        let number = |text: &str| {
            text.parse::<i64>()
                .map_err(|_| Error::InvalidArgument(format!("无效的整数: {}", text)))
        };

        Ok(Self {
            u: VertexId::new(number(*u)?),
            v: VertexId::new(number(*v)?),
            weight: number(*w)?,
        })
    }
}

/// 按顺序添加无向边，端点不存在时先创建
pub fn add_edge_specs(graph: &mut Graph, specs: &[EdgeSpec]) -> Result<()> {
    for spec in specs {
        for id in [spec.u, spec.v] {
            if graph.find_vertex(id).is_none() {
                graph.add_vertex(id)?;
            }
        }
        graph.add_undirected_edge(spec.u, spec.v, spec.weight)?;
    }
    Ok(())
}

/// 内置示例图：4 个顶点，最小生成树总权重为 4
pub fn demo_graph(id: i64) -> Result<Graph> {
    let edges = [(1, 2, 1), (2, 3, 2), (3, 4, 1), (1, 4, 4), (1, 3, 3)];
    let edges: Vec<_> = edges
        .iter()
        .map(|&(u, v, w)| (VertexId::new(u), VertexId::new(v), w))
        .collect();
    Graph::from_undirected_edges(id, &edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edge_spec() {
        let spec: EdgeSpec = "1:2:7".parse().unwrap();
        assert_eq!(
            spec,
            EdgeSpec {
                u: VertexId::new(1),
                v: VertexId::new(2),
                weight: 7
            }
        );

        let spec: EdgeSpec = " -1 : 3 : -4 ".parse().unwrap();
        assert_eq!(spec.u, VertexId::new(-1));
        assert_eq!(spec.weight, -4);
    }

    #[test]
    fn test_parse_edge_spec_errors() {
        assert!("1:2".parse::<EdgeSpec>().is_err());
        assert!("1:2:3:4".parse::<EdgeSpec>().is_err());
        assert!("a:2:3".parse::<EdgeSpec>().is_err());
    }

    #[test]
    fn test_add_edge_specs_creates_vertices() {
        let mut graph = Graph::new(1);
        let specs: Vec<EdgeSpec> = ["3:1:2", "1:2:5"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();

        add_edge_specs(&mut graph, &specs).unwrap();

        assert_eq!(
            graph.vertex_ids(),
            vec![VertexId::new(3), VertexId::new(1), VertexId::new(2)]
        );
        assert_eq!(graph.edge_count(), 4);
        assert!(graph.is_symmetric());
    }

    #[test]
    fn test_demo_graph() {
        let graph = demo_graph(9).unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 10);
        assert_eq!(graph.id().as_i64(), 9);
    }
}
