//! 日志工具模块
//!
//! 提供日志格式化输出和报告文件写入的辅助函数

use crate::error::{AppError, AppResult};
use std::fs;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::info;

/// 初始化报告文件
///
/// 写入带时间戳的文件头，之后的内容以追加方式写入。
///
/// # 参数
/// - `report_file_path`: 报告文件路径
pub fn init_report_file(report_file_path: &str) -> AppResult<()> {
    let header = format!(
        "{}\n测验提取报告 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(report_file_path, header)
        .map_err(|e| AppError::file_write_failed(report_file_path, e))?;
    Ok(())
}

/// 把一段报告文本追加到报告文件
///
/// # 参数
/// - `report_file_path`: 报告文件路径
/// - `content`: 待追加的报告文本
pub fn append_report(report_file_path: &str, content: &str) -> AppResult<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(report_file_path)
        .map_err(|e| AppError::file_write_failed(report_file_path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| AppError::file_write_failed(report_file_path, e))?;
    Ok(())
}

/// 记录程序启动信息
///
/// # 参数
/// - `max_concurrent`: 最大并发数
pub fn log_startup(max_concurrent: usize) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 批量文档提取模式");
    info!("📊 最大并发数: {}", max_concurrent);
    info!("{}", "=".repeat(60));
}

/// 记录文件加载信息
///
/// # 参数
/// - `total`: 文件总数
/// - `max_concurrent`: 最大并发数
pub fn log_files_loaded(total: usize, max_concurrent: usize) {
    info!("✓ 找到 {} 个待处理的 DOCX 文件", total);
    info!("📋 将以每批 {} 个的方式处理", max_concurrent);
    info!("💡 每批完成后再开始下一批\n");
}

/// 记录批次开始信息
///
/// # 参数
/// - `batch_num`: 批次编号
/// - `total_batches`: 批次总数
/// - `start`: 起始文件编号
/// - `end`: 结束文件编号
/// - `total`: 文件总数
pub fn log_batch_start(
    batch_num: usize,
    total_batches: usize,
    start: usize,
    end: usize,
    total: usize,
) {
    info!("\n{}", "=".repeat(60));
    info!("📦 开始处理第 {}/{} 批", batch_num, total_batches);
    info!("📄 本批文件: {}-{} / 共 {} 个", start, end, total);
    info!("{}", "=".repeat(60));
}

/// 记录批次完成信息
///
/// # 参数
/// - `batch_num`: 批次编号
/// - `success`: 成功数量
/// - `total`: 批次总数
pub fn log_batch_complete(batch_num: usize, success: usize, total: usize) {
    info!("\n{}", "─".repeat(60));
    info!("✓ 第 {} 批完成: 成功 {}/{}", batch_num, success, total);
    info!("{}", "─".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `success`: 成功文档数
/// - `failed`: 失败文档数
/// - `total`: 文档总数
/// - `questions`: 提取题目总数
/// - `answered`: 答案命中数
/// - `report_file_path`: 报告文件路径
pub fn print_final_stats(
    success: usize,
    failed: usize,
    total: usize,
    questions: usize,
    answered: usize,
    report_file_path: &str,
) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", success, total);
    info!("❌ 失败: {}", failed);
    info!("📝 提取题目: {} 道，答案命中 {} 道", questions, answered);
    info!("{}", "=".repeat(60));
    info!("\n报告已保存至: {}", report_file_path);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
