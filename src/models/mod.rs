pub mod quiz;

pub use quiz::{AnswerKey, AnswerLetter, ExtractedQuestion, QuizItem, QuizPaper};
