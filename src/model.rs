use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One multiple-choice question as it arrives on the wire.
/// Immutable once ingested; identity is `question_number`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_number: u32,
    pub question: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub subject: String,
    pub topic: String,
}

impl Question {
    /// Stringified question number, the key used by every map in the session.
    pub fn key(&self) -> String {
        self.question_number.to_string()
    }

    pub fn option_text(&self, letter: &str) -> &str {
        match letter {
            "A" => &self.option_a,
            "B" => &self.option_b,
            "C" => &self.option_c,
            "D" => &self.option_d,
            _ => "",
        }
    }
}

/// Mapping from stringified question number to an option letter.
/// Used both for the authoritative key and for the user's answers.
pub type AnswerKey = HashMap<String, String>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub question_number: u32,
    pub detailed_solution: String,
    pub correct_option: String,
    pub final_answer: String,
}

pub type SolutionKey = HashMap<String, Solution>;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Subject {
    Physics,
    Chemistry,
    Mathematics,
}

impl Subject {
    pub fn label(&self) -> &'static str {
        match self {
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Mathematics => "Mathematics",
        }
    }
}

/// Static reference data for AI topic selection, never mutated.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct JeeTopic {
    pub id: String,
    pub name: String,
    pub subject: Subject,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectScore {
    pub subject: String,
    pub correct: u32,
    pub total: u32,
}

/// Output of the scoring engine.
/// `subject_wise` keeps the order in which subjects first appear among the
/// questions, which is also the display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResults {
    pub correct: u32,
    pub attempted: u32,
    pub total: u32,
    pub percentage: String,
    pub subject_wise: Vec<SubjectScore>,
}

impl TestResults {
    pub fn subject(&self, name: &str) -> Option<&SubjectScore> {
        self.subject_wise.iter().find(|s| s.subject == name)
    }
}

/// The six mutually exclusive screens, derived from session state on every
/// frame rather than stored.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScreenMode {
    Upload,
    TopicSelection,
    PreTest,
    Analysis,
    Solutions,
    QuestionAnswer,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavDirection {
    Prev,
    Next,
}
