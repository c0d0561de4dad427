//! # DOCX Quiz Extract
//!
//! 一个从 DOCX 文档中批量提取结构化选择题的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Reader）
//! - `reader/` - DOCX 容器读取，把压缩包里的 document.xml 还原成段落全文
//! - `DocxReader` - 唯一接触文件格式的模块，向上只暴露字符串
//!
//! ### ② 业务能力层（Extractor / Services）
//! - `extractor/` - 描述"我能做什么"，只处理一份全文
//! - `AnswerKeyExtractor` - 答案区解析能力
//! - `QuestionExtractor` - 题块定位与切分能力
//! - `services/` - 结果侧能力
//! - `ReportFormatter` - 可读报告渲染能力
//! - `ExportWriter` - JSON / TOML 导出能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一份文档全文"的完整提取流程
//! - `ExtractionFlow` - 流程编排（答案区 → 题块 → 关联答案）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量文档处理器，管理并发和全局统计
//! - `orchestrator/document_processor` - 单个文档处理器，读取 → 提取 → 报告 → 导出
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod extractor;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod reader;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use extractor::{AnswerKeyExtractor, QuestionExtractor};
pub use models::{AnswerKey, AnswerLetter, ExtractedQuestion, QuizItem, QuizPaper};
pub use orchestrator::{process_document, App};
pub use reader::{DocxError, DocxReader};
pub use services::{ExportFormat, ExportWriter, ReportFormatter};
pub use workflow::ExtractionFlow;
