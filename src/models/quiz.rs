use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// 缺失答案在导出文件中的占位值
const ANSWER_NOT_FOUND: &str = "not found";

/// 正确答案字母（a-d）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerLetter {
    A,
    B,
    C,
    D,
}

impl AnswerLetter {
    /// 从答案区条目的小写字母解析，其余字符一律拒绝
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a' => Some(AnswerLetter::A),
            'b' => Some(AnswerLetter::B),
            'c' => Some(AnswerLetter::C),
            'd' => Some(AnswerLetter::D),
            _ => None,
        }
    }

    /// 小写形式（与答案区条目一致）
    pub fn as_char(self) -> char {
        match self {
            AnswerLetter::A => 'a',
            AnswerLetter::B => 'b',
            AnswerLetter::C => 'c',
            AnswerLetter::D => 'd',
        }
    }

    /// 大写形式（用于 "Option A" 这样的展示字样）
    pub fn upper(self) -> char {
        self.as_char().to_ascii_uppercase()
    }
}

impl fmt::Display for AnswerLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// 答案区解析结果：题号到正确答案字母的映射
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerKey {
    entries: HashMap<u32, AnswerLetter>,
    /// 全文中是否出现过 "Answer key" 标记
    pub marker_found: bool,
}

impl AnswerKey {
    pub fn new(marker_found: bool) -> Self {
        Self {
            entries: HashMap::new(),
            marker_found,
        }
    }

    /// 记录一条答案，重复题号时后出现的覆盖先出现的
    pub fn insert(&mut self, number: u32, letter: AnswerLetter) {
        self.entries.insert(number, letter);
    }

    /// 查找某道题的答案
    pub fn lookup(&self, number: u32) -> Option<AnswerLetter> {
        self.entries.get(&number).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 题块切分出的单道题（答案尚未关联）
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedQuestion {
    pub number: u32,
    pub question_text: String,
    pub options: Vec<String>,
}

/// 结构化测验条目（一道题的最终输出记录）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizItem {
    /// 文档中声明的题号（乱序、不连续都照原样保留）
    pub number: u32,
    pub question_text: String,
    pub options: Vec<String>,
    /// 正确答案，答案区中没有对应条目时为 None
    #[serde(
        rename = "answer_letter",
        serialize_with = "serialize_answer",
        deserialize_with = "deserialize_answer"
    )]
    pub answer: Option<AnswerLetter>,
}

impl QuizItem {
    /// 把切分结果和答案区查到的答案合并成最终条目
    pub fn from_extracted(question: ExtractedQuestion, answer: Option<AnswerLetter>) -> Self {
        Self {
            number: question.number,
            question_text: question.question_text,
            options: question.options,
            answer,
        }
    }
}

// Helper functions to keep the exported answer field as "a"-"d" or "not found"
fn serialize_answer<S>(answer: &Option<AnswerLetter>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match answer {
        Some(letter) => serializer.serialize_str(&letter.to_string()),
        None => serializer.serialize_str(ANSWER_NOT_FOUND),
    }
}

fn deserialize_answer<'de, D>(deserializer: D) -> Result<Option<AnswerLetter>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;

    struct AnswerVisitor;

    impl<'de> Visitor<'de> for AnswerVisitor {
        type Value = Option<AnswerLetter>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a letter a-d or \"not found\"")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            if value == ANSWER_NOT_FOUND {
                return Ok(None);
            }
            let mut chars = value.chars();
            match (chars.next().and_then(AnswerLetter::from_char), chars.next()) {
                (Some(letter), None) => Ok(Some(letter)),
                _ => Err(E::custom(format!("无效的答案字母: {}", value))),
            }
        }
    }

    deserializer.deserialize_str(AnswerVisitor)
}

/// 一份文档的完整提取结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizPaper {
    /// 文档名（不含扩展名），同时用作导出文件名
    pub name: String,
    pub items: Vec<QuizItem>,
    #[serde(skip_serializing, skip_deserializing)]
    pub file_path: Option<String>,
}

impl QuizPaper {
    /// 答案区命中的题目数量
    pub fn answered(&self) -> usize {
        self.items.iter().filter(|item| item.answer.is_some()).count()
    }
}
