//! 单个文档处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块负责单个 DOCX 文档的完整处理，是文档级别的编排器。
//!
//! ## 核心功能
//!
//! 1. **读取**：DOCX → 段落全文（失败对该文档致命，不产生任何输出）
//! 2. **提取**：调用 ExtractionFlow 得到 QuizItem 列表
//! 3. **报告**：渲染可读报告，打印并追加到报告文件
//! 4. **导出**：写出 JSON / TOML 结构化文件
//! 5. **统计**：记录题目数与答案命中数

use crate::config::Config;
use crate::error::AppResult;
use crate::models::{QuizItem, QuizPaper};
use crate::reader::DocxReader;
use crate::services::{ExportWriter, ReportFormatter};
use crate::utils::logging::{append_report, truncate_text};
use crate::workflow::ExtractionFlow;
use std::path::Path;
use tracing::{info, warn};

/// 单个文档的处理统计
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentStats {
    /// 提取出的题目数量
    pub questions: usize,
    /// 答案区命中的题目数量
    pub answered: usize,
}

/// 处理单个文档
///
/// # 参数
/// - `path`: DOCX 文件路径
/// - `file_index`: 文件索引（用于日志）
/// - `config`: 配置
///
/// # 返回
/// 返回该文档的提取统计
pub async fn process_document(
    path: &Path,
    file_index: usize,
    config: &Config,
) -> AppResult<DocumentStats> {
    let name = document_name(path);
    log_document_start(file_index, &name);

    // 读取 DOCX 全文（容器层失败对该文档致命）
    let blob = DocxReader::read_to_string(path).await?;
    info!(
        "[文件 {}] ✓ 读取完成，共 {} 个字符",
        file_index,
        blob.chars().count()
    );

    // 提取流程（纯计算，逐文档独立）
    let flow = ExtractionFlow::new()?;
    let items = flow.run(&blob);

    if items.is_empty() {
        warn!("[文件 {}] ⚠️ 没有发现任何题块", file_index);
    }

    let paper = QuizPaper {
        name,
        items,
        file_path: Some(path.display().to_string()),
    };

    // 详细日志（如果启用）
    if config.verbose_logging {
        if let Some(file_path) = &paper.file_path {
            info!("[文件 {}] 文件路径: {}", file_index, file_path);
        }
        log_items(file_index, &paper.items);
    }

    let stats = DocumentStats {
        questions: paper.items.len(),
        answered: paper.answered(),
    };

    // 渲染报告：打印到控制台，同时追加到报告文件
    let formatter = ReportFormatter::new()?;
    let report = formatter.format_paper(&paper);
    println!("{}", report);
    append_report(&config.report_file, &report)?;

    // 导出结构化结果
    let exporter = ExportWriter::new(config);
    let export_path = exporter.write(&paper).await?;
    info!("[文件 {}] ✓ 已导出: {}", file_index, export_path.display());

    log_document_complete(file_index, &stats);

    Ok(stats)
}

/// 文档名：文件名去掉扩展名，用作报告标题和导出文件名
fn document_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string())
}

// ========== 日志辅助函数 ==========

fn log_document_start(file_index: usize, name: &str) {
    info!("\n[文件 {}] {}", file_index, "─".repeat(30));
    info!("[文件 {}] 开始处理: {}", file_index, name);
}

fn log_items(file_index: usize, items: &[QuizItem]) {
    for item in items {
        info!(
            "[文件 {}]   Q{}: {}",
            file_index,
            item.number,
            truncate_text(&item.question_text, 40)
        );
    }
}

fn log_document_complete(file_index: usize, stats: &DocumentStats) {
    info!(
        "[文件 {}] 题目统计: 提取 {}, 答案命中 {}",
        file_index, stats.questions, stats.answered
    );
    info!("[文件 {}] ✅ 文档处理完成\n", file_index);
}
