//! Graphviz 导出模块
//!
//! 将图写成 dot 格式的无向边列表：
//!
//! ```text
//! graph {
//! 	1 -- 2 [label = 5];
//! }
//! ```
//!
//! 每条无向边只输出一次：输出某条边时，同时把目标顶点上的反向边标记为已导出。
//! 没有反向边的单向边同样输出一次。

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::VertexRef;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

/// 导出统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportStats {
    /// 输出的边行数
    pub edges_written: usize,
    /// 未找到反向边的单向边数
    pub unmatched: usize,
}

/// 把图写入任意 writer
///
/// 导出前会清除所有导出标记，因此同一张图可以反复导出。
pub fn write_dot<W: Write>(graph: &mut Graph, writer: &mut W) -> std::io::Result<ExportStats> {
    let mut stats = ExportStats::default();
    graph.reset_exported();

    writeln!(writer, "graph {{")?;

    for index in 0..graph.vertex_count() {
        let source = VertexRef(index);
        let Some(vertex) = graph.vertex(source) else {
            continue;
        };
        let source_id = vertex.id();
        let edges = vertex.edges().to_vec();

        for (position, edge) in edges.iter().enumerate() {
            // 可能已作为反向边被标记
            if !graph.mark_exported(source, position) {
                continue;
            }
            let Some(target_id) = graph.vertex_id(edge.target()) else {
                continue;
            };

            if !graph.mark_reciprocal_exported(edge.target(), source, edge.weight()) {
                warn!(source = %source_id, target = %target_id, "边没有对应的反向边");
                stats.unmatched += 1;
            }

            writeln!(
                writer,
                "\t{} -- {} [label = {}];",
                source_id,
                target_id,
                edge.weight()
            )?;
            stats.edges_written += 1;
        }
    }

    writeln!(writer, "}}")?;
    Ok(stats)
}

/// 导出为字符串
pub fn to_dot_string(graph: &mut Graph) -> String {
    let mut buffer = Vec::new();
    // 写入 Vec 不会失败
    let _ = write_dot(graph, &mut buffer);
    String::from_utf8_lossy(&buffer).into_owned()
}

/// 导出到文件
pub fn export_dot<P: AsRef<Path>>(graph: &mut Graph, path: P) -> Result<ExportStats> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(Error::InvalidArgument("导出路径为空".to_string()));
    }

    let unavailable = |source: std::io::Error| Error::ResourceUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(unavailable)?;
    let mut writer = BufWriter::new(file);
    let stats = write_dot(graph, &mut writer).map_err(unavailable)?;
    writer.flush().map_err(unavailable)?;

    info!(
        graph = %graph.id(),
        path = %path.display(),
        edges = stats.edges_written,
        "导出 dot 文件"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::VertexId;

    fn fixture() -> Graph {
        Graph::from_undirected_edges(
            1,
            &[
                (VertexId::new(1), VertexId::new(2), 1),
                (VertexId::new(2), VertexId::new(3), 2),
                (VertexId::new(3), VertexId::new(4), 1),
                (VertexId::new(1), VertexId::new(4), 4),
                (VertexId::new(1), VertexId::new(3), 3),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_export_symmetric() {
        let mut graph = fixture();

        let dot = to_dot_string(&mut graph);

        assert_eq!(
            dot,
            "graph {\n\
             \t1 -- 2 [label = 1];\n\
             \t1 -- 4 [label = 4];\n\
             \t1 -- 3 [label = 3];\n\
             \t2 -- 3 [label = 2];\n\
             \t3 -- 4 [label = 1];\n\
             }\n"
        );
        assert!(graph
            .vertices()
            .all(|v| v.edges().iter().all(|e| e.is_exported())));
    }

    #[test]
    fn test_export_asymmetric_edge() {
        let mut graph = Graph::new(1);
        let v1 = graph.add_vertex(1).unwrap();
        graph.add_vertex(2).unwrap();
        graph.add_edges(v1, &[(VertexId::new(2), 8)]).unwrap();

        let mut buffer = Vec::new();
        let stats = write_dot(&mut graph, &mut buffer).unwrap();

        assert_eq!(stats.edges_written, 1);
        assert_eq!(stats.unmatched, 1);
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "graph {\n\t1 -- 2 [label = 8];\n}\n"
        );
    }

    #[test]
    fn test_export_parallel_edges() {
        let mut graph = Graph::from_undirected_edges(
            1,
            &[
                (VertexId::new(1), VertexId::new(2), 3),
                (VertexId::new(1), VertexId::new(2), 5),
            ],
        )
        .unwrap();

        let dot = to_dot_string(&mut graph);

        assert_eq!(
            dot,
            "graph {\n\t1 -- 2 [label = 3];\n\t1 -- 2 [label = 5];\n}\n"
        );
    }

    #[test]
    fn test_export_repeatable() {
        let mut graph = fixture();

        let first = to_dot_string(&mut graph);
        let second = to_dot_string(&mut graph);

        assert_eq!(first, second);
    }

    #[test]
    fn test_export_empty_graph() {
        let mut graph = Graph::new(1);
        assert_eq!(to_dot_string(&mut graph), "graph {\n}\n");
    }

    #[test]
    fn test_export_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.dot");
        let mut graph = fixture();

        let stats = export_dot(&mut graph, &path).unwrap();

        assert_eq!(stats.edges_written, 5);
        assert_eq!(stats.unmatched, 0);
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("graph {\n"));
        assert_eq!(content.lines().filter(|l| l.contains(" -- ")).count(), 5);
    }

    #[test]
    fn test_export_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("graph.dot");
        let mut graph = fixture();

        let err = export_dot(&mut graph, &path).unwrap_err();

        assert!(matches!(err, Error::ResourceUnavailable { path: p, .. } if p == path));
    }

    #[test]
    fn test_export_empty_path() {
        let mut graph = fixture();
        let err = export_dot(&mut graph, "").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
