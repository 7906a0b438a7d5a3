use super::*;
use crate::model::{AnswerKey, JeeTopic, Question, Solution, SolutionKey};
use log::{info, warn};
use rand::Rng;
use std::sync::mpsc;
use std::time::Instant;

/// Everything a generation backend delivers for one paper. The answer key
/// always comes with generated questions; solutions are optional extras.
pub struct GeneratedSet {
    pub questions: Vec<Question>,
    pub answer_key: AnswerKey,
    pub solutions: SolutionKey,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("the generator returned no questions")]
    Empty,
    #[error("generation failed: {0}")]
    Failed(String),
}

/// Seam for the question-generation backend. The app only consumes the
/// structured output; how the questions are produced is not its concern.
pub trait QuestionGenerator: Send + Sync {
    fn generate(&self, topics: &[JeeTopic], count: usize)
    -> Result<GeneratedSet, GenerationError>;
}

/// Local stand-in used by the binary: builds a structured practice set from
/// the selected topics so the app is usable without a remote backend.
#[derive(Default)]
pub struct SampleGenerator;

impl QuestionGenerator for SampleGenerator {
    fn generate(
        &self,
        topics: &[JeeTopic],
        count: usize,
    ) -> Result<GeneratedSet, GenerationError> {
        if topics.is_empty() {
            return Err(GenerationError::Failed("no topics selected".into()));
        }
        let mut rng = rand::thread_rng();
        let mut questions = Vec::with_capacity(count);
        let mut answer_key = AnswerKey::new();
        let mut solutions = SolutionKey::new();

        for i in 0..count {
            let topic = &topics[i % topics.len()];
            let number = (i + 1) as u32;
            let correct = ["A", "B", "C", "D"][rng.gen_range(0..4)];
            questions.push(Question {
                question_number: number,
                question: format!(
                    "Practice question {number}: which statement about {} is correct?",
                    topic.name
                ),
                option_a: format!("Statement 1 on {}", topic.name),
                option_b: format!("Statement 2 on {}", topic.name),
                option_c: format!("Statement 3 on {}", topic.name),
                option_d: format!("Statement 4 on {}", topic.name),
                subject: topic.subject.label().to_owned(),
                topic: topic.name.clone(),
            });
            answer_key.insert(number.to_string(), correct.to_owned());
            solutions.insert(
                number.to_string(),
                Solution {
                    question_number: number,
                    detailed_solution: format!(
                        "Only option {correct} is consistent with the standard results for {}.",
                        topic.name
                    ),
                    correct_option: correct.to_owned(),
                    final_answer: format!("Option {correct}"),
                },
            );
        }

        Ok(GeneratedSet {
            questions,
            answer_key,
            solutions,
        })
    }
}

impl TestApp {
    pub fn selected_topic_list(&self) -> Vec<JeeTopic> {
        self.topics
            .iter()
            .filter(|t| self.generation.selected_topics.contains(&t.id))
            .cloned()
            .collect()
    }

    /// Kicks off generation on a worker thread; the result is picked up by
    /// `poll_generation_result` on a later frame.
    pub fn start_generation(&mut self) {
        if self.generation.is_generating {
            return;
        }
        let topics = self.selected_topic_list();
        if topics.is_empty() {
            self.message = "⚠ Select at least one topic first.".to_owned();
            return;
        }
        let count = self.generation.number_of_questions;
        let generator = Arc::clone(&self.generator);
        let (tx, rx) = mpsc::channel();

        self.generation.is_generating = true;
        self.generation_rx = Some(rx);
        self.message = "⏳ Generating questions...".to_owned();
        info!("generating {count} questions across {} topics", topics.len());

        std::thread::spawn(move || {
            let _ = tx.send(generator.generate(&topics, count));
        });
    }

    pub fn poll_generation_result(&mut self) {
        let maybe_result = self
            .generation_rx
            .as_ref()
            .and_then(|rx| rx.try_recv().ok());

        if let Some(result) = maybe_result {
            self.generation_rx = None;
            match result {
                Ok(set) => self.apply_generated_set(set),
                Err(err) => {
                    warn!("generation failed: {err}");
                    self.generation.is_generating = false;
                    self.message = format!("❌ {err}");
                }
            }
        }
    }

    /// Writes a generated set into the session and starts the test right
    /// away; generation skips the pre-test summary. The topic-selection
    /// intent is consumed. An empty set leaves the session untouched.
    pub fn apply_generated_set(&mut self, set: GeneratedSet) {
        if set.questions.is_empty() {
            self.generation.is_generating = false;
            self.message = "❌ Generation returned no usable questions.".to_owned();
            return;
        }
        let count = set.questions.len();
        self.apply_questions(set.questions);
        self.session.answer_key = set.answer_key;
        self.session.solutions = set.solutions;
        self.session.test_started = true;
        self.last_tick = Some(Instant::now());
        self.generation = GenerationState::default();
        self.message = format!("✅ {count} questions generated. Good luck!");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::jee_topics;
    use crate::model::ScreenMode;

    #[test]
    fn sample_generator_produces_a_complete_set() {
        let topics: Vec<JeeTopic> = jee_topics().into_iter().take(3).collect();
        let set = SampleGenerator
            .generate(&topics, 10)
            .expect("generation ok");
        assert_eq!(set.questions.len(), 10);
        assert_eq!(set.answer_key.len(), 10);
        assert_eq!(set.solutions.len(), 10);
        for q in &set.questions {
            let letter = &set.answer_key[&q.key()];
            assert!(["A", "B", "C", "D"].contains(&letter.as_str()));
            assert_eq!(set.solutions[&q.key()].correct_option, *letter);
        }
    }

    #[test]
    fn sample_generator_rejects_an_empty_topic_list() {
        assert!(SampleGenerator.generate(&[], 5).is_err());
    }

    #[test]
    fn generated_set_skips_the_pre_test_screen() {
        let mut app = TestApp::new();
        app.open_topic_selection();
        app.toggle_topic("optics");
        let set = SampleGenerator
            .generate(&app.selected_topic_list(), 5)
            .expect("generation ok");

        app.apply_generated_set(set);
        assert!(app.session.test_started);
        assert_eq!(app.screen_mode(), ScreenMode::QuestionAnswer);
        assert_eq!(app.session.questions.len(), 5);
        assert!(!app.generation.show_topic_selection);
        assert!(!app.generation.is_generating);
        assert!(app.generation.selected_topics.is_empty());
    }

    #[test]
    fn empty_generated_set_leaves_the_session_alone() {
        let mut app = TestApp::new();
        app.open_topic_selection();
        app.generation.is_generating = true;
        app.apply_generated_set(GeneratedSet {
            questions: Vec::new(),
            answer_key: AnswerKey::new(),
            solutions: SolutionKey::new(),
        });
        assert!(app.session.questions.is_empty());
        assert!(!app.session.test_started);
        assert!(!app.generation.is_generating);
        // Still on topic selection, free to retry.
        assert_eq!(app.screen_mode(), ScreenMode::TopicSelection);
    }

    #[test]
    fn start_generation_requires_a_topic() {
        let mut app = TestApp::new();
        app.open_topic_selection();
        app.start_generation();
        assert!(!app.generation.is_generating);
        assert!(app.generation_rx.is_none());
    }

    #[test]
    fn generation_result_arrives_through_the_channel() {
        let mut app = TestApp::new();
        app.open_topic_selection();
        app.toggle_topic("algebra");
        app.set_question_count(5);
        app.start_generation();
        assert!(app.generation.is_generating);

        // The worker thread is fast; poll until the set lands.
        for _ in 0..200 {
            app.poll_generation_result();
            if app.session.test_started {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(5));
        }
        assert!(app.session.test_started);
        assert_eq!(app.session.questions.len(), 5);
    }
}
