//! 答案区提取 - 业务能力层
//!
//! 只负责答案区解析这一件事：按第一个 "Answer key" 标记切分全文，
//! 在标记之后的文本中按出现顺序收集 `题号.字母` 条目。

use crate::error::AppResult;
use crate::extractor::patterns::{QuizPatterns, ANSWER_KEY_MARKER};
use crate::models::AnswerKey;

/// 答案区提取器
///
/// - 只认第一个 "Answer key" 标记，后续出现的当普通文本处理
/// - 重复题号时后出现的条目覆盖先出现的
/// - 标记缺失不是错误，返回空映射，由调用方发出可恢复警告
pub struct AnswerKeyExtractor {
    patterns: QuizPatterns,
}

impl AnswerKeyExtractor {
    pub fn new() -> AppResult<Self> {
        Ok(Self {
            patterns: QuizPatterns::compile()?,
        })
    }

    /// 从文档全文中提取答案映射
    pub fn extract(&self, blob: &str) -> AnswerKey {
        let tail = match blob.split_once(ANSWER_KEY_MARKER) {
            Some((_, tail)) => tail,
            None => return AnswerKey::new(false),
        };

        let mut key = AnswerKey::new(true);
        for (number, letter) in self.patterns.answer_entries(tail) {
            key.insert(number, letter);
        }
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnswerLetter;

    fn extractor() -> AnswerKeyExtractor {
        AnswerKeyExtractor::new().expect("创建提取器失败")
    }

    #[test]
    fn test_missing_marker_returns_empty_key() {
        let key = extractor().extract("1.a 2.b 没有标记的文本");
        assert!(!key.marker_found);
        assert!(key.is_empty());
    }

    #[test]
    fn test_entries_before_marker_are_ignored() {
        // 标记之前的 "5.c" 属于正文，不算答案条目
        let key = extractor().extract("正文里提到 5.c 这样的编号\n\nAnswer key\n\n1.a 2.b");
        assert!(key.marker_found);
        assert_eq!(key.len(), 2);
        assert_eq!(key.lookup(5), None);
        assert_eq!(key.lookup(1), Some(AnswerLetter::A));
    }

    #[test]
    fn test_duplicate_numbers_keep_last_entry() {
        let key = extractor().extract("Answer key\n\n1.a 3.d 1.b");
        assert_eq!(key.lookup(1), Some(AnswerLetter::B));
        assert_eq!(key.lookup(3), Some(AnswerLetter::D));
        assert_eq!(key.len(), 2);
    }

    #[test]
    fn test_second_marker_is_plain_text() {
        // 第二个标记不会重新切分，它后面的条目照常收集
        let key = extractor().extract("Answer key\n\n1.a\n\nAnswer key\n\n2.b");
        assert!(key.marker_found);
        assert_eq!(key.lookup(1), Some(AnswerLetter::A));
        assert_eq!(key.lookup(2), Some(AnswerLetter::B));
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let key = extractor().extract("Answer key\n\n1.a 12.e 7.B 2.d");
        assert_eq!(key.len(), 2);
        assert_eq!(key.lookup(12), None);
        assert_eq!(key.lookup(7), None);
        assert_eq!(key.lookup(2), Some(AnswerLetter::D));
    }

    #[test]
    fn test_marker_with_no_entries() {
        let key = extractor().extract("Answer key\n\n这里没有任何条目");
        assert!(key.marker_found);
        assert!(key.is_empty());
    }
}
