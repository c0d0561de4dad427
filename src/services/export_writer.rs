//! 结果导出 - 业务能力层
//!
//! 只负责把结构化提取结果写成 JSON / TOML 文件这一件事。
//! 导出文件与源文档同名（扩展名不同），放在配置的导出目录下。

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::QuizPaper;
use std::path::PathBuf;
use tracing::warn;

/// 导出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Toml,
}

impl ExportFormat {
    /// 解析配置中的格式名，无法识别时回退到 JSON
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "json" => ExportFormat::Json,
            "toml" => ExportFormat::Toml,
            other => {
                warn!("⚠️ 未知的导出格式 '{}'，回退到 json", other);
                ExportFormat::Json
            }
        }
    }

    /// 导出文件扩展名
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Toml => "toml",
        }
    }
}

/// 结果导出器
pub struct ExportWriter {
    export_dir: PathBuf,
    format: ExportFormat,
}

impl ExportWriter {
    pub fn new(config: &Config) -> Self {
        Self {
            export_dir: PathBuf::from(&config.export_dir),
            format: ExportFormat::parse(&config.export_format),
        }
    }

    /// 导出一份文档的提取结果，返回写出的文件路径
    pub async fn write(&self, paper: &QuizPaper) -> AppResult<PathBuf> {
        tokio::fs::create_dir_all(&self.export_dir)
            .await
            .map_err(|e| AppError::file_write_failed(self.export_dir.display().to_string(), e))?;

        let content = self.serialize(paper)?;
        let path = self
            .export_dir
            .join(format!("{}.{}", paper.name, self.format.extension()));

        tokio::fs::write(&path, content)
            .await
            .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;

        Ok(path)
    }

    /// 序列化为配置指定的格式
    fn serialize(&self, paper: &QuizPaper) -> AppResult<String> {
        let content = match self.format {
            ExportFormat::Json => serde_json::to_string_pretty(paper)?,
            ExportFormat::Toml => toml::to_string_pretty(paper)?,
        };
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnswerLetter, QuizItem};
    use tokio_test::assert_ok;

    fn test_paper() -> QuizPaper {
        QuizPaper {
            name: "样例文档".to_string(),
            items: vec![
                QuizItem {
                    number: 1,
                    question_text: "第一题".to_string(),
                    options: vec!["a.".to_string(), "b.".to_string()],
                    answer: Some(AnswerLetter::A),
                },
                QuizItem {
                    number: 2,
                    question_text: "第二题".to_string(),
                    options: vec![],
                    answer: None,
                },
            ],
            file_path: None,
        }
    }

    fn test_config(dir: &str, format: &str) -> Config {
        Config {
            export_dir: std::env::temp_dir().join(dir).display().to_string(),
            export_format: format.to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn test_parse_format_is_case_insensitive_with_fallback() {
        assert_eq!(ExportFormat::parse("JSON"), ExportFormat::Json);
        assert_eq!(ExportFormat::parse("toml"), ExportFormat::Toml);
        assert_eq!(ExportFormat::parse("yaml"), ExportFormat::Json);
    }

    #[tokio::test]
    async fn test_json_export_keeps_answer_sentinel() {
        let config = test_config("quiz_export_json_test", "json");
        let writer = ExportWriter::new(&config);

        let path = assert_ok!(writer.write(&test_paper()).await);
        let content = tokio::fs::read_to_string(&path).await.expect("读取导出文件失败");
        let value: serde_json::Value = serde_json::from_str(&content).expect("JSON 解析失败");

        assert_eq!(value["name"], "样例文档");
        assert_eq!(value["items"][0]["answer_letter"], "a");
        assert_eq!(value["items"][1]["answer_letter"], "not found");
        // file_path 不导出
        assert!(value.get("file_path").is_none());

        let _ = std::fs::remove_dir_all(&config.export_dir);
    }

    #[tokio::test]
    async fn test_toml_export_is_parseable() {
        let config = test_config("quiz_export_toml_test", "toml");
        let writer = ExportWriter::new(&config);

        let path = assert_ok!(writer.write(&test_paper()).await);
        assert_eq!(path.extension().and_then(|s| s.to_str()), Some("toml"));

        let content = tokio::fs::read_to_string(&path).await.expect("读取导出文件失败");
        let table: toml::Table = content.parse().expect("TOML 解析失败");
        let items = table["items"].as_array().expect("items 应当是数组");
        assert_eq!(items.len(), 2);

        let _ = std::fs::remove_dir_all(&config.export_dir);
    }
}
