//! 控制台命令处理
//!
//! 交互式地构建图、计算最小生成树并导出结果

use std::path::PathBuf;

use crate::algorithm::{minimum_spanning_tree, MstAlgorithm, SpanningTree};
use crate::cli::demo_graph;
use crate::cli::printer::{PrintMode, Printer};
use crate::config::CliConfig;
use crate::error::Error;
use crate::export::export_dot;
use crate::graph::{Graph, VertexId};

/// 控制台命令执行结果
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
    /// 错误
    Error(String),
}

impl From<Error> for CommandResult {
    fn from(e: Error) -> Self {
        CommandResult::Error(e.to_string())
    }
}

/// 控制台状态
pub struct ConsoleState {
    /// 当前编辑的图
    pub graph: Graph,
    /// 最近一次计算的生成树
    pub last_tree: Option<SpanningTree>,
    /// 结果打印器
    pub printer: Printer,
    /// 配置
    pub config: CliConfig,
}

impl ConsoleState {
    pub fn new(config: CliConfig) -> Self {
        Self {
            graph: Graph::new(config.graph_id),
            last_tree: None,
            printer: Printer::default(),
            config,
        }
    }

    /// 替换当前图，旧的生成树随之失效
    fn replace_graph(&mut self, graph: Graph) {
        self.graph = graph;
        self.last_tree = None;
    }

    fn run_algorithm(&mut self, algorithm: MstAlgorithm, start: Option<VertexId>) -> CommandResult {
        let start = start.or(self.config.start_vertex);
        match minimum_spanning_tree(&mut self.graph, algorithm, start) {
            Ok(tree) => {
                let output = self.printer.print_tree(&tree);
                self.last_tree = Some(tree);
                CommandResult::Message(output)
            }
            Err(e) => e.into(),
        }
    }
}

/// 解析一个整数参数
fn parse_i64(text: &str) -> Result<i64, String> {
    text.parse::<i64>()
        .map_err(|_| format!("无效的整数: {}", text))
}

/// 解析 `<u> <v> <w>` 三个参数
fn parse_edge_args(args: &str) -> Result<(VertexId, VertexId, i64), String> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    if parts.len() != 3 {
        return Err("需要 3 个参数: <u> <v> <w>".to_string());
    }
    Ok((
        VertexId::new(parse_i64(parts[0])?),
        VertexId::new(parse_i64(parts[1])?),
        parse_i64(parts[2])?,
    ))
}

/// 解析并执行控制台命令
pub fn execute_console_command(input: &str, state: &mut ConsoleState) -> CommandResult {
    let input = input.trim();
    if input.is_empty() {
        return CommandResult::Continue;
    }

    let parts: Vec<&str> = input.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let args = parts.get(1).copied().unwrap_or("").trim();

    match cmd.as_str() {
        "help" | "h" | "?" => CommandResult::Message(get_help_text()),

        "quit" | "q" | "exit" => CommandResult::Exit,

        "vertex" | "v" => {
            if args.is_empty() {
                return CommandResult::Error("用法: vertex <id> [id ...]".to_string());
            }
            // 全部校验通过后再添加，失败时图保持不变
            let mut ids: Vec<VertexId> = Vec::new();
            for text in args.split_whitespace() {
                let id = match parse_i64(text) {
                    Ok(id) => VertexId::new(id),
                    Err(e) => return CommandResult::Error(e),
                };
                if ids.contains(&id) || state.graph.find_vertex(id).is_some() {
                    return Error::DuplicateVertex(id).into();
                }
                ids.push(id);
            }

            for &id in &ids {
                if let Err(e) = state.graph.add_vertex(id) {
                    state.last_tree = None;
                    return e.into();
                }
            }
            state.last_tree = None;
            let added: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
            CommandResult::Message(format!("已添加顶点: {}", added.join(", ")))
        }

        "edge" | "e" => match parse_edge_args(args) {
            Ok((u, v, w)) => match state.graph.add_undirected_edge(u, v, w) {
                Ok(()) => {
                    state.last_tree = None;
                    CommandResult::Message(format!("已添加边: {} -- {} [{}]", u, v, w))
                }
                Err(e) => e.into(),
            },
            Err(e) => CommandResult::Error(format!("{}\n用法: edge <u> <v> <w>", e)),
        },

        "arc" => match parse_edge_args(args) {
            Ok((u, v, w)) => {
                let Some(source) = state.graph.find_vertex(u) else {
                    return CommandResult::Error(format!("顶点不存在: {}", u));
                };
                match state.graph.add_edges(source, &[(v, w)]) {
                    Ok(()) => {
                        state.last_tree = None;
                        CommandResult::Message(format!("已添加单向边: {} -> {} [{}]", u, v, w))
                    }
                    Err(e) => e.into(),
                }
            }
            Err(e) => CommandResult::Error(format!("{}\n用法: arc <u> <v> <w>", e)),
        },

        "show" | "graph" => CommandResult::Message(state.printer.print_graph(&state.graph)),

        "stats" | "info" => CommandResult::Message(state.printer.print_stats(&state.graph)),

        "prim" => {
            let start = if args.is_empty() {
                None
            } else {
                match parse_i64(args) {
                    Ok(id) => Some(VertexId::new(id)),
                    Err(e) => return CommandResult::Error(e),
                }
            };
            state.run_algorithm(MstAlgorithm::Prim, start)
        }

        "kruskal" => state.run_algorithm(MstAlgorithm::Kruskal, None),

        "mst" => {
            let algorithm = state.config.algorithm;
            state.run_algorithm(algorithm, None)
        }

        "export" => {
            let args_parts: Vec<&str> = args.split_whitespace().collect();
            let (file, export_tree) = match args_parts.as_slice() {
                [file] => (*file, false),
                [file, "tree"] => (*file, true),
                _ => return CommandResult::Error("用法: export <file> [tree]".to_string()),
            };
            let path = state.config.resolve_output(&PathBuf::from(file));

            let result = if export_tree {
                match state.last_tree.as_mut() {
                    Some(tree) => export_dot(&mut tree.graph, &path),
                    None => return CommandResult::Error("尚未计算生成树".to_string()),
                }
            } else {
                export_dot(&mut state.graph, &path)
            };

            match result {
                Ok(stats) => CommandResult::Message(format!(
                    "已导出 {} 条边到 {}",
                    stats.edges_written,
                    path.display()
                )),
                Err(e) => e.into(),
            }
        }

        "demo" => match demo_graph(state.config.graph_id) {
            Ok(graph) => {
                state.replace_graph(graph);
                CommandResult::Message(state.printer.print_graph(&state.graph))
            }
            Err(e) => e.into(),
        },

        "clear" | "reset" => {
            let id = state.graph.id();
            state.replace_graph(Graph::new(id));
            CommandResult::Message("图已清空".to_string())
        }

        "vertical" => {
            let mode = match state.printer.mode() {
                PrintMode::Table => PrintMode::Vertical,
                PrintMode::Vertical => PrintMode::Table,
            };
            state.printer.set_mode(mode);
            CommandResult::Message(format!("打印模式: {:?}", mode))
        }

        _ => CommandResult::Error(format!("未知命令: {}。输入 'help' 查看帮助。", cmd)),
    }
}

fn get_help_text() -> String {
    r#"
═══════════════════════════════════════════════════════════════
                   SpanGraph 控制台命令帮助
═══════════════════════════════════════════════════════════════

  help, h, ?              显示帮助
  quit, exit, q           退出程序

  vertex, v <id> [...]    添加顶点
  edge, e <u> <v> <w>     添加无向边（两个方向）
  arc <u> <v> <w>         添加单向边 u -> v
  show, graph             显示邻接表
  stats, info             显示图统计信息

  prim [start]            Prim 最小生成树
  kruskal                 Kruskal 最小生成树
  mst                     使用配置中的默认算法

  export <file> [tree]    导出 dot 文件（tree: 导出最近的生成树）
  demo                    加载示例图
  clear, reset            清空当前图
  vertical                切换表格/垂直打印模式

═══════════════════════════════════════════════════════════════
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ConsoleState {
        ConsoleState::new(CliConfig::default())
    }

    fn message(result: CommandResult) -> String {
        match result {
            CommandResult::Message(m) => m,
            other => panic!("expected message, got {:?}", other),
        }
    }

    #[test]
    fn test_build_and_run() {
        let mut state = state();
        message(execute_console_command("vertex 1 2 3 4", &mut state));
        for edge in ["1 2 1", "2 3 2", "3 4 1", "1 4 4", "1 3 3"] {
            message(execute_console_command(&format!("edge {}", edge), &mut state));
        }

        let output = message(execute_console_command("kruskal", &mut state));
        assert!(output.contains("总权重: 4"));
        assert_eq!(state.last_tree.as_ref().map(|t| t.total_weight), Some(4));

        let output = message(execute_console_command("prim 4", &mut state));
        assert!(output.contains("总权重: 4"));
    }

    #[test]
    fn test_errors_do_not_exit() {
        let mut state = state();
        execute_console_command("vertex 1", &mut state);

        assert!(matches!(
            execute_console_command("vertex 1", &mut state),
            CommandResult::Error(_)
        ));
        assert!(matches!(
            execute_console_command("edge 1 9 3", &mut state),
            CommandResult::Error(_)
        ));
        assert!(matches!(
            execute_console_command("edge 1 x 3", &mut state),
            CommandResult::Error(_)
        ));
        assert!(matches!(
            execute_console_command("prim 7", &mut state),
            CommandResult::Error(_)
        ));
        assert!(matches!(
            execute_console_command("bogus", &mut state),
            CommandResult::Error(_)
        ));
        assert_eq!(state.graph.vertex_count(), 1);
    }

    #[test]
    fn test_vertex_batch_is_all_or_nothing() {
        let mut state = state();
        execute_console_command("demo", &mut state);
        message(execute_console_command("kruskal", &mut state));

        assert_eq!(
            execute_console_command("vertex 7 8 1", &mut state),
            CommandResult::Error("顶点已存在: 1".to_string())
        );
        assert!(matches!(
            execute_console_command("vertex 7 7", &mut state),
            CommandResult::Error(_)
        ));
        assert_eq!(state.graph.vertex_count(), 4);
        assert!(state.last_tree.is_some());

        message(execute_console_command("vertex 7 8", &mut state));
        assert_eq!(state.graph.vertex_count(), 6);
        assert!(state.last_tree.is_none());
    }

    #[test]
    fn test_arc_is_one_directional() {
        let mut state = state();
        execute_console_command("vertex 1 2", &mut state);

        message(execute_console_command("arc 1 2 5", &mut state));

        assert_eq!(state.graph.degree(1), 1);
        assert_eq!(state.graph.degree(2), 0);
    }

    #[test]
    fn test_export_commands() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = CliConfig::default();
        config.output_dir = dir.path().to_path_buf();
        let mut state = ConsoleState::new(config);

        message(execute_console_command("demo", &mut state));
        assert!(matches!(
            execute_console_command("export tree.dot tree", &mut state),
            CommandResult::Error(_)
        ));

        message(execute_console_command("kruskal", &mut state));
        message(execute_console_command("export input.dot", &mut state));
        message(execute_console_command("export tree.dot tree", &mut state));

        let tree = std::fs::read_to_string(dir.path().join("tree.dot")).unwrap();
        assert_eq!(
            tree,
            "graph {\n\t1 -- 2 [label = 1];\n\t2 -- 3 [label = 2];\n\t3 -- 4 [label = 1];\n}\n"
        );
        let input = std::fs::read_to_string(dir.path().join("input.dot")).unwrap();
        assert_eq!(input.lines().count(), 7);
    }

    #[test]
    fn test_graph_change_invalidates_tree() {
        let mut state = state();
        execute_console_command("demo", &mut state);
        execute_console_command("mst", &mut state);
        assert!(state.last_tree.is_some());

        execute_console_command("clear", &mut state);

        assert!(state.last_tree.is_none());
        assert!(state.graph.is_empty());
    }

    #[test]
    fn test_quit_and_empty() {
        let mut state = state();
        assert_eq!(execute_console_command("quit", &mut state), CommandResult::Exit);
        assert_eq!(execute_console_command("   ", &mut state), CommandResult::Continue);
    }
}
