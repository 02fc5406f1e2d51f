//! Answers to requirement questions.
//!
//! An [`Answer`] is either `yes` or `no`, and a `no` may carry free text
//! when the requirement allows it. On the wire a simple answer is the bare
//! string (`"yes"` / `"no"`) and a qualified `no` is an object:
//!
//! ```
//! use buildgate::requirements::Answer;
//!
//! let answer = Answer::no_with("missing docker");
//! let json = serde_json::to_string(&answer).unwrap();
//! assert_eq!(json, r#"{"answer":"no","customValue":"missing docker"}"#);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The symbolic value behind an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Yes,
    No,
}

impl Choice {
    /// The symbolic value as written in answer maps.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    /// Display label for the option control.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Choice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" | "y" | "true" => Ok(Self::Yes),
            "no" | "n" | "false" => Ok(Self::No),
            _ => Err(format!("expected yes or no, got '{}'", s)),
        }
    }
}

/// A recorded response to one requirement.
///
/// Free text only exists on the `No` branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "AnswerRepr", try_from = "AnswerRepr")]
pub enum Answer {
    Yes,
    No {
        /// `None` until the user types into the custom field.
        custom_value: Option<String>,
    },
}

impl Answer {
    /// The simple `no` answer.
    pub fn no() -> Self {
        Self::No { custom_value: None }
    }

    /// A `no` qualified with free text.
    pub fn no_with(custom_value: impl Into<String>) -> Self {
        Self::No {
            custom_value: Some(custom_value.into()),
        }
    }

    /// The simple answer for a choice.
    pub fn from_choice(choice: Choice) -> Self {
        match choice {
            Choice::Yes => Self::Yes,
            Choice::No => Self::no(),
        }
    }

    /// The symbolic value of this answer.
    pub fn choice(&self) -> Choice {
        match self {
            Self::Yes => Choice::Yes,
            Self::No { .. } => Choice::No,
        }
    }

    /// Free text attached to a `no`, if any was typed.
    pub fn custom_value(&self) -> Option<&str> {
        match self {
            Self::Yes => None,
            Self::No { custom_value } => custom_value.as_deref(),
        }
    }

    /// Whether this answer carries the free-text sub-answer.
    pub fn is_compound(&self) -> bool {
        matches!(
            self,
            Self::No {
                custom_value: Some(_)
            }
        )
    }

    /// `yes`, or a `no` explained with non-empty free text.
    pub fn is_satisfied(&self) -> bool {
        match self {
            Self::Yes => true,
            Self::No { custom_value } => custom_value.as_deref().is_some_and(|v| !v.is_empty()),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yes => f.write_str("yes"),
            Self::No { custom_value: None } => f.write_str("no"),
            Self::No {
                custom_value: Some(v),
            } => write!(f, "no ({})", v),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum AnswerRepr {
    Simple(Choice),
    Compound {
        answer: Choice,
        #[serde(rename = "customValue")]
        custom_value: String,
    },
}

impl From<Answer> for AnswerRepr {
    fn from(answer: Answer) -> Self {
        match answer {
            Answer::Yes => Self::Simple(Choice::Yes),
            Answer::No { custom_value: None } => Self::Simple(Choice::No),
            Answer::No {
                custom_value: Some(custom_value),
            } => Self::Compound {
                answer: Choice::No,
                custom_value,
            },
        }
    }
}

impl TryFrom<AnswerRepr> for Answer {
    type Error = String;

    fn try_from(repr: AnswerRepr) -> Result<Self, Self::Error> {
        match repr {
            AnswerRepr::Simple(choice) => Ok(Self::from_choice(choice)),
            AnswerRepr::Compound {
                answer: Choice::No,
                custom_value,
            } => Ok(Self::no_with(custom_value)),
            AnswerRepr::Compound {
                answer: Choice::Yes,
                ..
            } => Err("customValue is only allowed on a \"no\" answer".to_string()),
        }
    }
}

/// Requirement id to recorded answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap {
    answers: BTreeMap<String, Answer>,
}

impl AnswerMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the answer for a requirement.
    pub(crate) fn upsert(&mut self, id: &str, answer: Answer) -> Option<Answer> {
        self.answers.insert(id.to_string(), answer)
    }

    /// Answer recorded for a requirement.
    pub fn get(&self, id: &str) -> Option<&Answer> {
        self.answers.get(id)
    }

    /// Whether a requirement has been answered.
    pub fn contains(&self, id: &str) -> bool {
        self.answers.contains_key(id)
    }

    /// Number of answered requirements.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Whether nothing has been answered.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterate answers sorted by requirement id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Answer)> {
        self.answers.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Every answer is satisfied (see [`Answer::is_satisfied`]).
    pub fn all_requirements_met(&self) -> bool {
        self.answers.values().all(Answer::is_satisfied)
    }

    /// Ids whose answers are not satisfied, sorted.
    pub fn unmet(&self) -> Vec<&str> {
        self.answers
            .iter()
            .filter(|(_, a)| !a.is_satisfied())
            .map(|(k, _)| k.as_str())
            .collect()
    }
}

impl FromIterator<(String, Answer)> for AnswerMap {
    fn from_iter<I: IntoIterator<Item = (String, Answer)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}
