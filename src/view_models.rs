//! Plain row structs handed to the views, so the UI code never walks the
//! session maps itself.

use crate::model::Solution;

/// One cell of the horizontal question-navigation strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub index: usize,
    pub number: u32,
    pub answered: bool,
    pub current: bool,
}

/// One card of the solutions screen.
#[derive(Clone, Debug)]
pub struct SolutionRow {
    pub number: u32,
    pub question: String,
    pub user_answer: Option<String>,
    pub solution: Solution,
}
