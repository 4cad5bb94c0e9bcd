//! SpanGraph CLI 工具
//!
//! 构建无向加权图、计算最小生成树并导出 Graphviz dot 文件

use anyhow::{anyhow, bail, Context};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use spangraph::algorithm::{minimum_spanning_tree, MstAlgorithm};
use spangraph::cli::commands::{execute_console_command, CommandResult, ConsoleState};
use spangraph::cli::completer::ConsoleCompleter;
use spangraph::cli::printer::Printer;
use spangraph::cli::{add_edge_specs, demo_graph, EdgeSpec};
use spangraph::config::CliConfig;
use spangraph::export::export_dot;
use spangraph::graph::{Graph, VertexId};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "spangraph-cli")]
#[command(about = "SpanGraph 最小生成树命令行工具", version)]
struct Cli {
    /// 配置文件（JSON）
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// 输出调试日志
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct GraphArgs {
    /// 无向边，格式 U:V:W，可重复
    #[arg(short, long = "edge", value_name = "U:V:W", allow_hyphen_values = true)]
    edges: Vec<EdgeSpec>,

    /// 使用内置示例图
    #[arg(long)]
    demo: bool,

    /// 图 ID
    #[arg(long)]
    graph_id: Option<i64>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 计算最小生成树
    Mst {
        #[command(flatten)]
        graph: GraphArgs,

        /// 算法: prim, kruskal
        #[arg(short, long)]
        algorithm: Option<MstAlgorithm>,

        /// Prim 起始顶点
        #[arg(short, long, allow_hyphen_values = true)]
        start: Option<i64>,

        /// 导出输入图的 dot 文件
        #[arg(long)]
        dot_input: Option<PathBuf>,

        /// 导出生成树的 dot 文件
        #[arg(long)]
        dot_output: Option<PathBuf>,

        /// 以 JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 导出图为 dot 文件
    Export {
        #[command(flatten)]
        graph: GraphArgs,

        /// 输出文件
        #[arg(short, long)]
        output: PathBuf,
    },

    /// 交互式控制台
    Console,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref()).context("加载配置失败")?;
    init_logging(&config, cli.verbose);

    match cli.command {
        Command::Mst {
            graph,
            algorithm,
            start,
            dot_input,
            dot_output,
            json,
        } => {
            let mut input = build_graph(&graph, &config)?;
            if let Some(path) = dot_input {
                export(&mut input, &config, &path)?;
            }

            let algorithm = algorithm.unwrap_or(config.algorithm);
            let start = start.map(VertexId::new).or(config.start_vertex);
            let mut tree = minimum_spanning_tree(&mut input, algorithm, start)
                .with_context(|| format!("{} 计算失败", algorithm))?;

            if json || config.json_output {
                println!("{}", serde_json::to_string_pretty(&tree)?);
            } else {
                print!("{}", Printer::default().print_tree(&tree));
            }

            if let Some(path) = dot_output {
                export(&mut tree.graph, &config, &path)?;
            }
        }

        Command::Export { graph, output } => {
            let mut input = build_graph(&graph, &config)?;
            export(&mut input, &config, &output)?;
        }

        Command::Console => run_console(config)?,
    }

    Ok(())
}

fn init_logging(config: &CliConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_graph(args: &GraphArgs, config: &CliConfig) -> anyhow::Result<Graph> {
    if !args.demo && args.edges.is_empty() {
        bail!("没有输入边，请使用 --edge U:V:W 或 --demo");
    }

    let id = args.graph_id.unwrap_or(config.graph_id);
    let mut graph = if args.demo {
        demo_graph(id)?
    } else {
        Graph::new(id)
    };
    add_edge_specs(&mut graph, &args.edges).context("构建图失败")?;
    Ok(graph)
}

fn export(graph: &mut Graph, config: &CliConfig, file: &Path) -> anyhow::Result<()> {
    let path = config.resolve_output(file);
    let stats = export_dot(graph, &path)?;
    eprintln!("已导出 {} 条边到 {}", stats.edges_written, path.display());
    Ok(())
}

fn run_console(config: CliConfig) -> anyhow::Result<()> {
    println!("SpanGraph 控制台 - 最小生成树");
    println!("==============================");
    println!("输入 'help' 查看命令列表，'quit' 退出\n");

    let mut editor: Editor<ConsoleCompleter, DefaultHistory> =
        Editor::new().map_err(|e| anyhow!("初始化控制台失败: {}", e))?;
    editor.set_helper(Some(ConsoleCompleter::new()));
    let mut state = ConsoleState::new(config);

    loop {
        match editor.readline("spangraph> ") {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                match execute_console_command(&line, &mut state) {
                    CommandResult::Continue => {}
                    CommandResult::Exit => break,
                    CommandResult::Message(message) => println!("{}", message),
                    CommandResult::Error(error) => {
                        println!("{}", format!("错误: {}", error).red())
                    }
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => bail!("读取输入失败: {}", e),
        }
    }

    println!("再见！");
    Ok(())
}
