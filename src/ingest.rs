//! Validates and normalizes externally obtained JSON payloads before they
//! enter the session. The three artifact kinds (questions, answer key,
//! solutions) arrive independently; none requires another to be present.

use crate::model::{AnswerKey, Question, Solution, SolutionKey};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    #[error("could not read file: {0}")]
    Io(#[from] std::io::Error),
}

/// Parses a questions payload: a non-empty JSON array of Question objects.
pub fn parse_questions(payload: &str) -> Result<Vec<Question>, IngestError> {
    let questions: Vec<Question> = serde_json::from_str(payload)
        .map_err(|e| IngestError::InvalidFormat(e.to_string()))?;
    if questions.is_empty() {
        return Err(IngestError::InvalidFormat(
            "question file contains no questions".into(),
        ));
    }
    Ok(questions)
}

/// Parses an answer-key payload: any JSON object with string values.
///
/// The letter range is deliberately not checked; a value outside A-D simply
/// never matches during scoring. This mirrors the permissive behavior the
/// product has always had for answer keys.
pub fn parse_answer_key(payload: &str) -> Result<AnswerKey, IngestError> {
    serde_json::from_str(payload).map_err(|e| IngestError::InvalidFormat(e.to_string()))
}

/// Parses a solutions payload and indexes it by stringified question number.
/// A duplicate question number overwrites the earlier entry (last one wins).
pub fn parse_solutions(payload: &str) -> Result<SolutionKey, IngestError> {
    let solutions: Vec<Solution> = serde_json::from_str(payload)
        .map_err(|e| IngestError::InvalidFormat(e.to_string()))?;
    if solutions.is_empty() {
        return Err(IngestError::InvalidFormat(
            "solution file contains no solutions".into(),
        ));
    }
    let mut map = SolutionKey::new();
    for sol in solutions {
        map.insert(sol.question_number.to_string(), sol);
    }
    Ok(map)
}

pub fn read_questions_file(path: &Path) -> Result<Vec<Question>, IngestError> {
    let text = fs::read_to_string(path)?;
    parse_questions(&text)
}

pub fn read_answer_key_file(path: &Path) -> Result<AnswerKey, IngestError> {
    let text = fs::read_to_string(path)?;
    parse_answer_key(&text)
}

pub fn read_solutions_file(path: &Path) -> Result<SolutionKey, IngestError> {
    let text = fs::read_to_string(path)?;
    parse_solutions(&text)
}
