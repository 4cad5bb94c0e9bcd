//! 命令行配置
//!
//! 配置来源依次为：默认值、可选的 JSON 配置文件、命令行参数。

use crate::algorithm::MstAlgorithm;
use crate::error::{Error, Result};
use crate::graph::VertexId;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI 配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// 日志过滤规则（RUST_LOG 语法）
    pub log_level: String,
    /// 默认算法
    pub algorithm: MstAlgorithm,
    /// Prim 起始顶点
    pub start_vertex: Option<VertexId>,
    /// dot 文件输出目录（相对路径以此为基准）
    pub output_dir: PathBuf,
    /// 输入图 ID
    pub graph_id: i64,
    /// 以 JSON 输出结果
    pub json_output: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            algorithm: MstAlgorithm::Prim,
            start_vertex: None,
            output_dir: PathBuf::from("."),
            graph_id: 1,
            json_output: false,
        }
    }
}

impl CliConfig {
    /// 从 JSON 文件加载，缺省字段使用默认值
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// 加载可选的配置文件
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// 解析输出文件路径
    pub fn resolve_output(&self, file: &Path) -> PathBuf {
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.output_dir.join(file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CliConfig::load(None).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.algorithm, MstAlgorithm::Prim);
    }

    #[test]
    fn test_partial_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"algorithm": "kruskal", "start_vertex": 3, "output_dir": "out"}}"#).unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();

        assert_eq!(config.algorithm, MstAlgorithm::Kruskal);
        assert_eq!(config.start_vertex, Some(VertexId::new(3)));
        assert_eq!(config.log_level, "warn");
        assert_eq!(
            config.resolve_output(Path::new("tree.dot")),
            PathBuf::from("out").join("tree.dot")
        );
    }

    #[test]
    fn test_invalid_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"algorithm": "boruvka"}}"#).unwrap();

        let err = CliConfig::from_file(file.path()).unwrap_err();

        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_missing_config_file() {
        let err = CliConfig::from_file("/nonexistent/spangraph.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
