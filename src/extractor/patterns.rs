//! 提取启发式模式 - 业务能力层
//!
//! 集中管理定位题块、选项行和答案条目所用的全部模式。
//! 判定函数都是无状态的，方便单独测试和调整。

use crate::error::AppResult;
use crate::models::AnswerLetter;
use regex::Regex;

/// 题块起始标记（字面量，区分大小写）
pub const QUESTION_MARKER: &str = "Type: Multiple choice question";

/// 答案区标记（字面量，区分大小写）
pub const ANSWER_KEY_MARKER: &str = "Answer key";

/// 每道题的目标选项数量
pub const OPTION_COUNT: usize = 4;

/// 题头匹配结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionHeader {
    /// 文档中声明的题号
    pub number: u32,
    /// 题体起始偏移（相对于被搜索的文本）
    pub body_start: usize,
}

/// 编译好的启发式模式集合
#[derive(Debug, Clone)]
pub struct QuizPatterns {
    /// "Question <题号> "，题号后必须跟一个空格
    question_header: Regex,
    /// 选项标记行：整行恰好是 "a." / "B)" / "3." 或一个 3-4 字符的短词
    option_marker: Regex,
    /// 答案区条目 "<题号>.<小写字母>"
    answer_entry: Regex,
}

impl QuizPatterns {
    pub fn compile() -> AppResult<Self> {
        Ok(Self {
            question_header: Regex::new(r"Question (\d+) ")?,
            option_marker: Regex::new(r"^\s*([a-dA-D][.)]|\d[.)]|\w{3,4})$")?,
            answer_entry: Regex::new(r"(\d+)\.([a-d])")?,
        })
    }

    /// 在 `text` 中查找第一个题头
    ///
    /// 返回题号和题体起始偏移（题号后那个空格的下一个位置，
    /// 相对于 `text`）。题号超出 u32 范围按未匹配处理，继续向后找。
    pub fn find_question_header(&self, text: &str) -> Option<QuestionHeader> {
        for caps in self.question_header.captures_iter(text) {
            let whole = caps.get(0)?;
            let digits = caps.get(1)?;
            if let Ok(number) = digits.as_str().parse::<u32>() {
                return Some(QuestionHeader {
                    number,
                    body_start: whole.end(),
                });
            }
        }
        None
    }

    /// 判断一行是否为选项标记行（整行匹配）
    pub fn is_option_marker(&self, line: &str) -> bool {
        self.option_marker.is_match(line)
    }

    /// 迭代文本中的所有答案条目，按出现顺序产出 (题号, 字母)
    ///
    /// 不合法的条目（如 "12.e"、"12.B"）不会被模式命中，静默跳过。
    pub fn answer_entries<'a>(
        &'a self,
        text: &'a str,
    ) -> impl Iterator<Item = (u32, AnswerLetter)> + 'a {
        self.answer_entry.captures_iter(text).filter_map(|caps| {
            let number = caps.get(1)?.as_str().parse::<u32>().ok()?;
            let letter = AnswerLetter::from_char(caps.get(2)?.as_str().chars().next()?)?;
            Some((number, letter))
        })
    }
}
