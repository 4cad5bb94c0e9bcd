//! 控制台命令补全器
//!
//! 基于 rustyline 实现 Tab 补全功能

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// 控制台命令列表
const CONSOLE_COMMANDS: &[&str] = &[
    "help", "quit", "exit", "vertex", "edge", "arc", "show", "graph", "stats", "info", "prim",
    "kruskal", "mst", "export", "demo", "clear", "reset", "vertical",
];

/// 子命令映射
fn get_sub_commands(command: &str) -> Option<&'static [&'static str]> {
    match command {
        "export" => Some(&["tree"]),
        _ => None,
    }
}

fn pairs<'a>(candidates: impl Iterator<Item = &'a &'static str>) -> Vec<Pair> {
    candidates
        .map(|c| Pair {
            display: c.to_string(),
            replacement: c.to_string(),
        })
        .collect()
}

/// SpanGraph 控制台补全器
#[derive(Default)]
pub struct ConsoleCompleter;

impl ConsoleCompleter {
    pub fn new() -> Self {
        Self
    }

    /// 计算补全候选，返回替换起始位置和候选列表
    pub fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let line_to_cursor = &line[..pos];
        let words: Vec<&str> = line_to_cursor.split_whitespace().collect();
        let at_word_end = !line_to_cursor.is_empty() && !line_to_cursor.ends_with(' ');

        match (words.as_slice(), at_word_end) {
            ([], _) => (pos, pairs(CONSOLE_COMMANDS.iter())),
            // 替换起点按原始单词的字节长度计算，小写化只用于前缀比较
            ([current], true) => {
                let prefix = current.to_lowercase();
                (
                    pos - current.len(),
                    pairs(CONSOLE_COMMANDS.iter().filter(|c| c.starts_with(&prefix))),
                )
            }
            ([command, .., current], true) if words.len() > 2 => {
                let prefix = current.to_lowercase();
                let subs = get_sub_commands(&command.to_lowercase()).unwrap_or(&[]);
                (
                    pos - current.len(),
                    pairs(subs.iter().filter(|c| c.starts_with(&prefix))),
                )
            }
            _ => (pos, vec![]),
        }
    }
}

impl Completer for ConsoleCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}

impl Hinter for ConsoleCompleter {
    type Hint = String;
}

impl Highlighter for ConsoleCompleter {}

impl Validator for ConsoleCompleter {}

impl Helper for ConsoleCompleter {}
