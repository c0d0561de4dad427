//! 提取流程 - 流程层
//!
//! 核心职责：定义"一份文档全文"的完整提取流程
//!
//! 流程顺序：
//! 1. 解析答案区（标记缺失 → 警告并继续）
//! 2. 扫描并切分所有题块
//! 3. 按题号把答案并入题目，得到最终的 QuizItem 列表

use tracing::{debug, warn};

use crate::error::AppResult;
use crate::extractor::{AnswerKeyExtractor, QuestionExtractor};
use crate::models::QuizItem;

/// 提取流程
///
/// - 编排答案区提取和题块提取这两项能力
/// - 决定答案区缺失时的降级行为
/// - 纯计算，不持有任何 IO 资源
pub struct ExtractionFlow {
    answer_key: AnswerKeyExtractor,
    questions: QuestionExtractor,
}

impl ExtractionFlow {
    /// 创建新的提取流程
    pub fn new() -> AppResult<Self> {
        Ok(Self {
            answer_key: AnswerKeyExtractor::new()?,
            questions: QuestionExtractor::new()?,
        })
    }

    /// 对一份文档全文执行完整提取
    ///
    /// 答案区缺失是可恢复情况：发出警告后照常提取题目，
    /// 所有题目的答案标记为未找到。
    pub fn run(&self, blob: &str) -> Vec<QuizItem> {
        let key = self.answer_key.extract(blob);
        if key.marker_found {
            debug!("答案区解析完成，共 {} 条", key.len());
        } else {
            warn!("⚠️ 未找到 'Answer key' 标记，所有题目的答案将标记为未找到");
        }

        let extracted = self.questions.extract(blob);
        debug!("共发现 {} 个题块", extracted.len());

        extracted
            .into_iter()
            .map(|question| {
                let answer = key.lookup(question.number);
                QuizItem::from_extracted(question, answer)
            })
            .collect()
    }
}
