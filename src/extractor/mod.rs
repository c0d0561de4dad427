//! 业务能力层（Extractor）
//!
//! ## 职责
//!
//! 本层提供文档全文上的各项提取能力，每个模块只描述"我能做什么"：
//!
//! ### `patterns` - 启发式模式
//! - 题块标记、题头、选项标记行、答案条目的全部模式
//! - 无状态判定函数，单独可测
//!
//! ### `answer_key` - 答案区提取
//! - 按第一个 "Answer key" 标记切分全文
//! - 收集 `题号.字母` 条目，重复题号后者覆盖前者
//!
//! ### `question_blocks` - 题块提取与切分
//! - 定位所有题块并切分为题干和选项
//! - 尽力而为：不报错，最坏情况产出空题干或空选项
//!
//! ## 设计原则
//!
//! 1. **纯计算**：不做 IO，不打日志，只通过返回值交流
//! 2. **永不失败**：提取函数对任意输入都返回结果，错误只可能出现在构造期（模式编译）
//! 3. **顺序保真**：题块按发现顺序产出，不排序、不去重

pub mod answer_key;
pub mod patterns;
pub mod question_blocks;

pub use answer_key::AnswerKeyExtractor;
pub use patterns::{QuizPatterns, OPTION_COUNT};
pub use question_blocks::QuestionExtractor;
