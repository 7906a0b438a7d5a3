use crate::app::generation::{GeneratedSet, GenerationError, QuestionGenerator, SampleGenerator};
use crate::data::jee_topics;
use crate::model::{AnswerKey, JeeTopic, Question, SolutionKey};
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Instant;

// Submodules
pub mod actions;
pub mod generation;
pub mod navigation;
pub mod queries;
pub mod results;
pub mod timer;
pub mod view_models;

// Re-export of view models
pub use crate::view_models::{NavEntry, SolutionRow};

/// Full JEE paper length.
pub const TEST_DURATION_SECS: u32 = 3 * 60 * 60;

/// The authoritative record of one test attempt. Created empty, populated
/// by a single ingestion event, discarded when the user leaves the flow.
#[derive(Clone, Debug)]
pub struct TestSession {
    pub questions: Vec<Question>,
    pub answer_key: AnswerKey,
    pub solutions: SolutionKey,
    pub user_answers: AnswerKey,
    pub current_question: usize,
    pub test_started: bool,
    pub test_completed: bool,
    pub time_remaining: u32,
    pub show_analysis: bool,
    pub show_solutions: bool,
    pub show_review: bool,
}

impl Default for TestSession {
    fn default() -> Self {
        Self {
            questions: Vec::new(),
            answer_key: AnswerKey::new(),
            solutions: SolutionKey::new(),
            user_answers: AnswerKey::new(),
            current_question: 0,
            test_started: false,
            test_completed: false,
            time_remaining: TEST_DURATION_SECS,
            show_analysis: false,
            show_solutions: false,
            show_review: false,
        }
    }
}

/// Transient intent for AI generation, owned apart from the session and
/// consumed on a successful run.
#[derive(Clone, Debug)]
pub struct GenerationState {
    pub is_generating: bool,
    pub selected_topics: HashSet<String>,
    pub number_of_questions: usize,
    pub show_topic_selection: bool,
}

impl Default for GenerationState {
    fn default() -> Self {
        Self {
            is_generating: false,
            selected_topics: HashSet::new(),
            number_of_questions: 10,
            show_topic_selection: false,
        }
    }
}

pub struct TestApp {
    pub session: TestSession,
    pub generation: GenerationState,
    pub topics: Vec<JeeTopic>,
    pub message: String,
    pub confirm_submit: bool,
    pub(crate) last_tick: Option<Instant>,
    pub(crate) generation_rx: Option<Receiver<Result<GeneratedSet, GenerationError>>>,
    pub(crate) generator: Arc<dyn QuestionGenerator>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_generator(Arc::new(SampleGenerator::default()))
    }

    /// Entrypoint for wiring in a real generation backend.
    pub fn with_generator(generator: Arc<dyn QuestionGenerator>) -> Self {
        Self {
            session: TestSession::default(),
            generation: GenerationState::default(),
            topics: jee_topics(),
            message: String::new(),
            confirm_submit: false,
            last_tick: None,
            generation_rx: None,
            generator,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
