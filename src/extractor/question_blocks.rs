//! 题块提取与切分 - 业务能力层
//!
//! 负责在文档全文中定位所有题块，并把每个题块切分为题干和选项列表。
//! 切分是尽力而为的启发式：输入再混乱也不报错，
//! 最坏情况是题干或选项为空。

use crate::error::AppResult;
use crate::extractor::patterns::{
    QuizPatterns, ANSWER_KEY_MARKER, OPTION_COUNT, QUESTION_MARKER,
};
use crate::models::ExtractedQuestion;

/// 题块提取器
///
/// - 从每个题块标记出发，找标记之后第一个 "Question <题号> " 题头
/// - 题体延伸到下一个题块标记、答案区标记或文末，先到者为准
/// - 被题头越过的标记算作已消费，不再单独成块
pub struct QuestionExtractor {
    patterns: QuizPatterns,
}

impl QuestionExtractor {
    pub fn new() -> AppResult<Self> {
        Ok(Self {
            patterns: QuizPatterns::compile()?,
        })
    }

    /// 提取全文中的所有题块（按发现顺序，不排序、不去重）
    pub fn extract(&self, blob: &str) -> Vec<ExtractedQuestion> {
        let mut questions = Vec::new();
        let mut cursor = 0;

        while let Some(rel) = blob[cursor..].find(QUESTION_MARKER) {
            let header_from = cursor + rel + QUESTION_MARKER.len();

            // 标记之后的第一个题头；题头可以越过后续标记出现
            let header = match self.patterns.find_question_header(&blob[header_from..]) {
                Some(header) => header,
                // 后文再无题头，不可能有更多题块
                None => break,
            };

            let body_start = header_from + header.body_start;
            let body_end = next_boundary(blob, body_start);
            let (question_text, options) = segment_body(&self.patterns, &blob[body_start..body_end]);

            questions.push(ExtractedQuestion {
                number: header.number,
                question_text,
                options,
            });

            // 从题块边界继续扫描
            cursor = body_end;
        }

        questions
    }
}

/// 题块终点：下一个题块标记、答案区标记或文末，先到者为准
fn next_boundary(blob: &str, from: usize) -> usize {
    let rest = &blob[from..];
    let rel = match (rest.find(QUESTION_MARKER), rest.find(ANSWER_KEY_MARKER)) {
        (Some(a), Some(b)) => a.min(b),
        (Some(a), None) => a,
        (None, Some(b)) => b,
        (None, None) => rest.len(),
    };
    from + rel
}

/// 把题体切分为题干和选项列表
///
/// 1. 逐行修剪空白并去掉空行
/// 2. 不足 4 行：整个题体都是题干，没有选项
/// 3. 在最后 4 行里自上而下找第一个选项标记行作为切分点
/// 4. 找不到则回退：最后 4 行就是选项
/// 5. 选项从切分点起最多取 4 行
fn segment_body(patterns: &QuizPatterns, body: &str) -> (String, Vec<String>) {
    let lines: Vec<&str> = body
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() < OPTION_COUNT {
        return (lines.join("\n"), Vec::new());
    }

    let window_start = lines.len() - OPTION_COUNT;
    let split = (window_start..lines.len())
        .find(|&i| patterns.is_option_marker(lines[i]))
        .unwrap_or(window_start);

    let question_text = lines[..split].join("\n");
    let end = (split + OPTION_COUNT).min(lines.len());
    let options = lines[split..end].iter().map(|line| line.to_string()).collect();

    (question_text, options)
}
