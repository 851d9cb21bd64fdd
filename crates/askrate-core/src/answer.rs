//! Answer model for yes/no questions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Answers counted towards the rating.
pub const POSITIVE_ANSWERS: &[&str] = &["yes", "y"];

/// Answers accepted but not counted towards the rating.
pub const NEGATIVE_ANSWERS: &[&str] = &["no", "n"];

/// A validated answer to a yes/no question.
///
/// Long and short forms are distinct variants because the tool persists the
/// raw lowercase string the user typed, not a normalized boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    Y,
    No,
    N,
}

impl Answer {
    /// The lowercase form stored in the answers store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Answer::Yes => "yes",
            Answer::Y => "y",
            Answer::No => "no",
            Answer::N => "n",
        }
    }

    /// Returns `true` for "yes"/"y".
    pub fn is_positive(&self) -> bool {
        matches!(self, Answer::Yes | Answer::Y)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Answer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yes" => Ok(Answer::Yes),
            "y" => Ok(Answer::Y),
            "no" => Ok(Answer::No),
            "n" => Ok(Answer::N),
            other => Err(format!("not a yes/no answer: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_all_four_forms() {
        assert_eq!("yes".parse::<Answer>().unwrap(), Answer::Yes);
        assert_eq!("y".parse::<Answer>().unwrap(), Answer::Y);
        assert_eq!("no".parse::<Answer>().unwrap(), Answer::No);
        assert_eq!("n".parse::<Answer>().unwrap(), Answer::N);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("YES".parse::<Answer>().unwrap(), Answer::Yes);
        assert_eq!("YEs".parse::<Answer>().unwrap(), Answer::Yes);
        assert_eq!("N".parse::<Answer>().unwrap(), Answer::N);
        assert_eq!("No".parse::<Answer>().unwrap(), Answer::No);
    }

    #[test]
    fn parse_rejects_everything_else() {
        assert!("maybe".parse::<Answer>().is_err());
        assert!("".parse::<Answer>().is_err());
        assert!("yess".parse::<Answer>().is_err());
        assert!("yes ".parse::<Answer>().is_err());
    }

    #[test]
    fn stored_form_is_lowercase() {
        assert_eq!(Answer::Yes.as_str(), "yes");
        assert_eq!(Answer::Y.as_str(), "y");
        assert_eq!(Answer::No.to_string(), "no");
        assert_eq!(Answer::N.to_string(), "n");
    }

    #[test]
    fn positivity() {
        assert!(Answer::Yes.is_positive());
        assert!(Answer::Y.is_positive());
        assert!(!Answer::No.is_positive());
        assert!(!Answer::N.is_positive());
    }
}
