//! Forced-choice answer value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two options of a forced-choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Answer {
    A,
    B,
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::A => write!(f, "A"),
            Answer::B => write!(f, "B"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_serializes_as_letter() {
        assert_eq!(serde_json::to_string(&Answer::A).unwrap(), "\"A\"");
        assert_eq!(serde_json::to_string(&Answer::B).unwrap(), "\"B\"");
    }

    #[test]
    fn answer_deserializes_from_letter() {
        let answers: Vec<Answer> = serde_json::from_str(r#"["A","B","A"]"#).unwrap();
        assert_eq!(answers, vec![Answer::A, Answer::B, Answer::A]);
    }
}
