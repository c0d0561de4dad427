//! 批量文档处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量文档的处理和全局统计。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：初始化报告文件、记录启动信息
//! 2. **文件收集**：单个文件直接处理，目录则扫描其中所有 .docx
//! 3. **并发控制**：使用 Semaphore 限制并发数量
//! 4. **分批处理**：文件分批次处理，每批完成后再开始下一批
//! 5. **全局统计**：汇总所有文档的处理结果
//!
//! ## 设计特点
//!
//! - **顶层编排**：不处理单个文档的细节，向下委托 document_processor
//! - **失败隔离**：单个文档失败只记入统计，不中断批次
//! - **全军覆没才算失败**：只要有文档成功，进程就以成功退出

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::orchestrator::document_processor;
use crate::utils::logging::{
    init_report_file, log_batch_complete, log_batch_start, log_files_loaded, log_startup,
    print_final_stats,
};
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> AppResult<Self> {
        // 初始化报告文件
        init_report_file(&config.report_file)?;

        log_startup(config.max_concurrent_files);

        Ok(Self { config })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        // 收集所有待处理的文件
        let files = self
            .collect_files()
            .await
            .with_context(|| format!("无法收集待处理文件: {}", self.config.docx_path))?;

        if files.is_empty() {
            warn!("⚠️ 没有找到待处理的 DOCX 文件，程序结束");
            return Ok(());
        }

        let total_files = files.len();
        log_files_loaded(total_files, self.config.max_concurrent_files);

        // 处理所有文件
        let stats = self.process_all_files(files).await?;

        // 输出最终统计
        print_final_stats(
            stats.success,
            stats.failed,
            stats.total,
            stats.questions,
            stats.answered,
            &self.config.report_file,
        );

        // 全部失败按失败处理，让单文件运行也能以非零码退出
        if stats.success == 0 {
            anyhow::bail!("所有 {} 个文档处理失败", stats.total);
        }

        Ok(())
    }

    /// 收集待处理的文件
    async fn collect_files(&self) -> AppResult<Vec<PathBuf>> {
        info!("\n📁 正在扫描待处理的文档...");
        collect_docx_files(&self.config.docx_path).await
    }

    /// 处理所有文件
    async fn process_all_files(&self, files: Vec<PathBuf>) -> Result<ProcessingStats> {
        let batch_size = self.config.max_concurrent_files.max(1);
        let semaphore = Arc::new(Semaphore::new(batch_size));
        let total_files = files.len();
        let mut stats = ProcessingStats {
            total: total_files,
            ..Default::default()
        };

        // 分批处理
        for batch_start in (0..total_files).step_by(batch_size) {
            let batch_end = (batch_start + batch_size).min(total_files);
            let batch_files = &files[batch_start..batch_end];
            let batch_num = (batch_start / batch_size) + 1;
            let total_batches = (total_files + batch_size - 1) / batch_size;

            log_batch_start(
                batch_num,
                total_batches,
                batch_start + 1,
                batch_end,
                total_files,
            );

            // 处理本批
            let batch_result = self
                .process_batch(batch_files, batch_start, semaphore.clone())
                .await?;

            stats.success += batch_result.success;
            stats.failed += batch_result.failed;
            stats.questions += batch_result.questions;
            stats.answered += batch_result.answered;

            log_batch_complete(batch_num, batch_result.success, batch_files.len());
        }

        Ok(stats)
    }

    /// 处理单个批次
    async fn process_batch(
        &self,
        batch_files: &[PathBuf],
        batch_start: usize,
        semaphore: Arc<Semaphore>,
    ) -> Result<BatchResult> {
        let mut batch_handles = Vec::new();

        // 为本批创建并发任务
        for (idx, file) in batch_files.iter().enumerate() {
            let file_index = batch_start + idx + 1;
            let permit = semaphore.clone().acquire_owned().await?;

            let file_clone = file.clone();
            let config_clone = self.config.clone();

            let handle = tokio::spawn(async move {
                let _permit = permit;
                document_processor::process_document(&file_clone, file_index, &config_clone).await
            });
            batch_handles.push((file_index, handle));
        }

        // 等待本批所有任务完成
        let mut result = BatchResult::default();

        for (file_index, handle) in batch_handles {
            match handle.await {
                Ok(Ok(doc_stats)) => {
                    result.success += 1;
                    result.questions += doc_stats.questions;
                    result.answered += doc_stats.answered;
                }
                Ok(Err(e)) => {
                    error!("[文件 {}] ❌ 处理失败: {}", file_index, e);
                    result.failed += 1;
                }
                Err(e) => {
                    error!("[文件 {}] 任务执行失败: {}", file_index, e);
                    result.failed += 1;
                }
            }
        }

        Ok(result)
    }
}

/// 全局处理统计
#[derive(Debug, Default)]
struct ProcessingStats {
    success: usize,
    failed: usize,
    total: usize,
    questions: usize,
    answered: usize,
}

/// 批次处理结果
#[derive(Debug, Default)]
struct BatchResult {
    success: usize,
    failed: usize,
    questions: usize,
    answered: usize,
}

/// 收集待处理的 DOCX 文件
///
/// `docx_path` 指向单个文件时只处理该文件；指向目录时扫描其中
/// 所有 .docx 文件（不递归子目录），按文件名排序保证批次顺序稳定。
async fn collect_docx_files(docx_path: &str) -> AppResult<Vec<PathBuf>> {
    let path = PathBuf::from(docx_path);

    if !path.exists() {
        return Err(AppError::file_not_found(docx_path));
    }

    if path.is_file() {
        return Ok(vec![path]);
    }

    let mut files = Vec::new();
    let mut entries = tokio::fs::read_dir(&path)
        .await
        .map_err(|e| AppError::file_read_failed(docx_path, e))?;

    while let Some(entry) = entries.next_entry().await? {
        let entry_path = entry.path();
        if entry_path.extension().and_then(|ext| ext.to_str()) == Some("docx") {
            info!(
                "发现待处理文件: {}",
                entry_path.file_name().unwrap_or_default().to_string_lossy()
            );
            files.push(entry_path);
        }
    }

    files.sort();
    Ok(files)
}
