//! 结果打印器
//!
//! 提供表格和垂直格式的结果输出

use crate::algorithm::SpanningTree;
use crate::graph::Graph;
use prettytable::{format, row, Cell, Row, Table};

/// 打印模式
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// 垂直模式
    Vertical,
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> PrintMode {
        self.mode
    }

    /// 打印生成树
    pub fn print_tree(&self, tree: &SpanningTree) -> String {
        let columns = ["source", "target", "weight"].map(String::from);
        let rows: Vec<Vec<String>> = tree
            .edges
            .iter()
            .map(|e| vec![e.source.to_string(), e.target.to_string(), e.weight.to_string()])
            .collect();

        let body = if rows.is_empty() {
            "Empty tree\n".to_string()
        } else {
            match self.mode {
                PrintMode::Table => self.format_table(&columns, &rows),
                PrintMode::Vertical => self.format_vertical(&columns, &rows),
            }
        };

        let mut output = format!(
            "{}\n算法: {}  边数: {}  总权重: {}\n",
            body,
            tree.algorithm,
            tree.len(),
            tree.total_weight
        );
        if !tree.is_spanning() {
            output.push_str(&format!("图不连通，得到 {} 棵树的生成森林\n", tree.components));
        }
        output
    }

    /// 打印邻接表
    pub fn print_graph(&self, graph: &Graph) -> String {
        let columns = ["vertex", "adjacency"].map(String::from);
        let rows: Vec<Vec<String>> = graph
            .vertices()
            .map(|v| {
                let adjacency = v
                    .edges()
                    .iter()
                    .filter_map(|e| {
                        graph
                            .vertex_id(e.target())
                            .map(|t| format!("{}({})", t, e.weight()))
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                vec![v.id().to_string(), adjacency]
            })
            .collect();

        if rows.is_empty() {
            return format!("Empty graph {}\n", graph.id());
        }
        match self.mode {
            PrintMode::Table => self.format_table(&columns, &rows),
            PrintMode::Vertical => self.format_vertical(&columns, &rows),
        }
    }

    /// 表格格式
    fn format_table(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let header: Vec<Cell> = columns.iter().map(|c| Cell::new(c)).collect();
        table.set_titles(Row::new(header));

        for row_data in rows {
            let cells: Vec<Cell> = row_data.iter().map(|v| Cell::new(v)).collect();
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }

    /// 垂直格式
    fn format_vertical(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        let max_col_width = columns.iter().map(|c| c.len()).max().unwrap_or(0);
        let mut output = String::new();

        for (i, row_data) in rows.iter().enumerate() {
            output.push_str(&format!(
                "*************************** {}. row ***************************\n",
                i + 1
            ));

            for (j, col) in columns.iter().enumerate() {
                let value = row_data.get(j).map(|s| s.as_str()).unwrap_or("");
                output.push_str(&format!("{:>width$}: {}\n", col, value, width = max_col_width));
            }
        }

        output
    }

    /// 打印统计信息
    pub fn print_stats(&self, graph: &Graph) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Graph ID", graph.id().to_string()]);
        table.add_row(row!["Vertex Count", graph.vertex_count().to_string()]);
        table.add_row(row!["Edge Count", graph.edge_count().to_string()]);
        table.add_row(row!["Symmetric", graph.is_symmetric().to_string()]);
        table.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{Kruskal, Prim};
    use crate::cli::demo_graph;

    #[test]
    fn test_print_tree_table() {
        let graph = demo_graph(1).unwrap();
        let tree = Kruskal::new(&graph).minimum_spanning_tree().unwrap();

        let output = Printer::default().print_tree(&tree);

        assert!(output.contains("source"));
        assert!(output.contains("总权重: 4"));
        assert!(!output.contains("生成森林"));
    }

    #[test]
    fn test_print_tree_vertical_forest() {
        let mut graph = demo_graph(1).unwrap();
        graph.add_vertex(9).unwrap();
        let tree = Prim::new(&mut graph).minimum_spanning_tree().unwrap();

        let mut printer = Printer::default();
        printer.set_mode(PrintMode::Vertical);
        let output = printer.print_tree(&tree);

        assert!(output.contains("1. row"));
        assert!(output.contains("2 棵树"));
    }

    #[test]
    fn test_print_graph() {
        let graph = demo_graph(1).unwrap();
        let output = Printer::new(PrintMode::Vertical).print_graph(&graph);

        assert!(output.contains("2(1), 4(4), 3(3)"));
    }

    #[test]
    fn test_print_stats() {
        let graph = demo_graph(1).unwrap();
        let output = Printer::default().print_stats(&graph);

        assert!(output.contains("Vertex Count"));
        assert!(output.contains("10"));
    }
}
