//! 报告渲染 - 业务能力层
//!
//! 只负责把提取结果渲染成人类可读的报告文本这一件事。
//! 渲染结果是纯字符串，打印到控制台还是写进报告文件由编排层决定。

use crate::error::AppResult;
use crate::extractor::OPTION_COUNT;
use crate::models::{QuizItem, QuizPaper};
use regex::Regex;

/// 报告渲染器
pub struct ReportFormatter {
    /// 选项行自带的 "a)" / "2." 这类前缀，展示前剥离再统一编号
    option_prefix: Regex,
}

impl ReportFormatter {
    pub fn new() -> AppResult<Self> {
        Ok(Self {
            option_prefix: Regex::new(r"^\s*([a-dA-D][.)]|\d[.)])\s*")?,
        })
    }

    /// 渲染整份文档的报告
    pub fn format_paper(&self, paper: &QuizPaper) -> String {
        let mut out = String::new();
        out.push('\n');
        out.push_str(&"=".repeat(50));
        out.push('\n');
        out.push_str("           ✅ Extracted Quiz Data\n");
        out.push_str(&format!("Source: {}\n", paper.name));
        out.push_str(&"=".repeat(50));
        out.push_str("\n\n");

        for item in &paper.items {
            out.push_str(&self.format_item(item));
        }
        out
    }

    /// 渲染单道题
    pub fn format_item(&self, item: &QuizItem) -> String {
        let mut out = String::new();
        out.push_str(&format!("Q{}. {}\n", item.number, item.question_text));
        out.push_str("\nOptions\n");

        for (i, option) in item.options.iter().take(OPTION_COUNT).enumerate() {
            // 选项重新编号为 A-D，不管原文写的是什么标记；超出 4 个的不展示
            let letter = (b'A' + i as u8) as char;
            out.push_str(&format!(
                "  {}. {}\n",
                letter,
                self.strip_option_prefix(option)
            ));
        }

        match item.answer {
            Some(letter) => {
                out.push_str(&format!("\nAnswer - {} (Option {})\n", letter, letter.upper()))
            }
            None => out.push_str("\nAnswer - N/A (Missing in key)\n"),
        }

        out.push_str(&"-".repeat(40));
        out.push_str("\n\n");
        out
    }

    /// 剥离选项行自带的标记前缀（如 "A) "、"2. "）
    fn strip_option_prefix(&self, option: &str) -> String {
        self.option_prefix.replace(option, "").trim().to_string()
    }
}
