//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量处理和流程调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量文档处理器
//! - 管理应用生命周期（初始化、运行、统计）
//! - 收集待处理文件（单个文件或整个目录）
//! - 控制并发数量（Semaphore）
//! - 输出全局统计信息
//!
//! ### `document_processor` - 单个文档处理器
//! - 读取单个 DOCX 的段落全文
//! - 调用提取流程得到结构化题目
//! - 渲染报告、写导出文件
//! - 输出单个文档的统计信息
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<PathBuf>)
//!     ↓
//! document_processor (处理单个 DOCX)
//!     ↓
//! workflow::ExtractionFlow (处理一份全文)
//!     ↓
//! extractor / services (能力层：answer_key / question_blocks / report / export)
//!     ↓
//! reader (基础设施：DocxReader)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：batch_processor 管批量，document_processor 管单个
//! 2. **失败隔离**：单个文档的失败只记入统计，不中断批次
//! 3. **向下依赖**：编排层 → workflow → extractor/services → reader
//! 4. **无业务逻辑**：只做调度和统计，不做具体提取判断

pub mod batch_processor;
pub mod document_processor;

// 重新导出主要类型
pub use batch_processor::App;
pub use document_processor::{process_document, DocumentStats};
