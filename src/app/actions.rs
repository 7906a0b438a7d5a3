use super::*;
use crate::ingest::{self, IngestError};
use crate::model::{Question, SolutionKey};
use log::{info, warn};
use std::path::Path;
use std::time::Instant;

impl TestApp {
    /// Records the answer for the question under the cursor, overwriting any
    /// earlier choice. Ignored once the session is read-only (completed test
    /// or review).
    pub fn select_answer(&mut self, option: &str) {
        if self.session.test_completed || self.session.show_review {
            return;
        }
        let key = match self.session.questions.get(self.session.current_question) {
            Some(q) => q.key(),
            None => return,
        };
        self.session.user_answers.insert(key, option.to_owned());
    }

    /// Valid only with a loaded paper that has not started yet; arms the timer.
    pub fn start_test(&mut self) {
        if self.session.questions.is_empty() || self.session.test_started {
            return;
        }
        self.session.test_started = true;
        self.last_tick = Some(Instant::now());
        self.message.clear();
    }

    /// Asks for confirmation before submitting; cancel leaves state untouched.
    pub fn request_submit(&mut self) {
        if self.session.test_completed {
            return;
        }
        self.confirm_submit = true;
    }

    pub fn confirm_submit(&mut self, ctx: &egui::Context) {
        let mut submit = false;
        let mut cancel = false;
        egui::Window::new("Submit Test")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Are you sure you want to submit your test?");
                ui.horizontal(|ui| {
                    if ui.button("Submit").clicked() {
                        submit = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                });
            });
        if submit {
            self.confirm_submit = false;
            self.finish_test();
        } else if cancel {
            self.confirm_submit = false;
        }
    }

    /// Completes the test and routes to analysis. Idempotent: a second call,
    /// by submit or by expiry, changes nothing.
    pub fn finish_test(&mut self) {
        if self.session.test_completed {
            return;
        }
        self.session.test_completed = true;
        self.session.show_analysis = true;
        self.last_tick = None;
    }

    /// From analysis: re-enter the question flow read-only.
    pub fn request_review(&mut self) {
        self.session.show_analysis = false;
        self.session.show_review = true;
    }

    /// No-op unless at least one solution is loaded. Leaves the
    /// analysis/review flags alone; the router decides what is visible.
    pub fn request_solutions(&mut self) {
        if self.session.solutions.is_empty() {
            return;
        }
        self.session.show_solutions = true;
    }

    pub fn return_to_analysis(&mut self) {
        self.session.show_review = false;
        self.session.show_solutions = false;
        self.session.show_analysis = true;
    }

    /// Tears down the attempt: fresh session and generation state, timer
    /// disarmed. Nothing is persisted.
    pub fn reset_session(&mut self) {
        self.session = TestSession::default();
        self.generation = GenerationState::default();
        self.confirm_submit = false;
        self.last_tick = None;
        self.message.clear();
    }

    // --- Ingestion events -------------------------------------------------

    /// Replaces the paper wholesale and resets every per-attempt field.
    /// Only called with an already validated, non-empty question list.
    pub(crate) fn apply_questions(&mut self, questions: Vec<Question>) {
        self.session.questions = questions;
        self.session.user_answers.clear();
        self.session.current_question = 0;
        self.session.test_started = false;
        self.session.test_completed = false;
        self.session.show_analysis = false;
        self.session.show_solutions = false;
        self.session.show_review = false;
        self.session.time_remaining = TEST_DURATION_SECS;
        self.last_tick = None;
    }

    pub fn load_questions_file(&mut self, path: &Path) {
        match ingest::read_questions_file(path) {
            Ok(questions) => {
                info!("loaded {} questions from {}", questions.len(), path.display());
                self.message = format!("✅ {} questions loaded successfully!", questions.len());
                self.apply_questions(questions);
            }
            Err(err) => self.report_ingest_error("questions", err),
        }
    }

    pub fn load_answer_key_file(&mut self, path: &Path) {
        match ingest::read_answer_key_file(path) {
            Ok(key) => {
                info!("loaded answer key with {} entries", key.len());
                self.session.answer_key = key;
                self.message = "✅ Answer key loaded successfully!".to_owned();
            }
            Err(err) => self.report_ingest_error("answer key", err),
        }
    }

    pub fn load_solutions_file(&mut self, path: &Path) {
        match ingest::read_solutions_file(path) {
            Ok(solutions) => {
                info!("loaded {} solutions", solutions.len());
                self.message = format!("✅ {} solutions loaded successfully!", solutions.len());
                self.session.solutions = solutions;
            }
            Err(err) => self.report_ingest_error("solutions", err),
        }
    }

    /// Surfaces an ingestion failure without touching the session.
    fn report_ingest_error(&mut self, kind: &str, err: IngestError) {
        warn!("failed to load {kind}: {err}");
        self.message = format!("❌ Failed to load {kind}. Please check the JSON format.");
    }

    pub(crate) fn apply_solutions(&mut self, solutions: SolutionKey) {
        self.session.solutions = solutions;
    }

    // --- Topic selection --------------------------------------------------

    pub fn open_topic_selection(&mut self) {
        self.generation.show_topic_selection = true;
        self.message.clear();
    }

    pub fn close_topic_selection(&mut self) {
        self.generation.show_topic_selection = false;
        self.message.clear();
    }

    pub fn toggle_topic(&mut self, topic_id: &str) {
        if !self.generation.selected_topics.remove(topic_id) {
            self.generation.selected_topics.insert(topic_id.to_owned());
        }
    }

    pub fn set_question_count(&mut self, count: usize) {
        self.generation.number_of_questions = count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Question;

    fn question(number: u32, subject: &str) -> Question {
        Question {
            question_number: number,
            question: format!("Question {number}?"),
            option_a: "a".into(),
            option_b: "b".into(),
            option_c: "c".into(),
            option_d: "d".into(),
            subject: subject.into(),
            topic: "Mechanics".into(),
        }
    }

    fn app_with_questions(n: u32) -> TestApp {
        let mut app = TestApp::new();
        app.apply_questions((1..=n).map(|i| question(i, "Physics")).collect());
        app
    }

    #[test]
    fn select_answer_records_and_overwrites() {
        let mut app = app_with_questions(2);
        app.start_test();
        app.select_answer("A");
        assert_eq!(app.session.user_answers["1"], "A");
        app.select_answer("C");
        assert_eq!(app.session.user_answers["1"], "C");
        assert_eq!(app.session.user_answers.len(), 1);
    }

    #[test]
    fn select_answer_is_rejected_in_review() {
        let mut app = app_with_questions(1);
        app.start_test();
        app.finish_test();
        app.request_review();
        app.select_answer("B");
        assert!(app.session.user_answers.is_empty());
    }

    #[test]
    fn select_answer_is_rejected_after_completion() {
        let mut app = app_with_questions(1);
        app.start_test();
        app.finish_test();
        app.select_answer("B");
        assert!(app.session.user_answers.is_empty());
    }

    #[test]
    fn finish_test_routes_to_analysis_from_any_cursor() {
        let mut app = app_with_questions(5);
        app.start_test();
        app.jump_to_question(2);
        app.finish_test();
        assert!(app.session.test_completed);
        assert!(app.session.show_analysis);
    }

    #[test]
    fn finish_test_is_idempotent() {
        let mut app = app_with_questions(1);
        app.start_test();
        app.finish_test();
        app.request_review();
        // A stray second completion must not drag the user back to analysis.
        app.finish_test();
        assert!(app.session.show_review);
        assert!(!app.session.show_analysis);
    }

    #[test]
    fn start_test_requires_a_loaded_paper() {
        let mut app = TestApp::new();
        app.start_test();
        assert!(!app.session.test_started);
    }

    #[test]
    fn review_and_back_round_trip() {
        let mut app = app_with_questions(1);
        app.start_test();
        app.finish_test();
        app.request_review();
        assert!(app.session.show_review);
        assert!(!app.session.show_analysis);
        app.return_to_analysis();
        assert!(!app.session.show_review);
        assert!(!app.session.show_solutions);
        assert!(app.session.show_analysis);
    }

    #[test]
    fn request_solutions_needs_loaded_solutions() {
        let mut app = app_with_questions(1);
        app.request_solutions();
        assert!(!app.session.show_solutions);

        app.apply_solutions(crate::ingest::parse_solutions(
            r#"[{"questionNumber": 1, "detailedSolution": "s", "correctOption": "A", "finalAnswer": "a"}]"#,
        ).expect("parse ok"));
        app.request_solutions();
        assert!(app.session.show_solutions);
    }

    #[test]
    fn applying_questions_resets_the_attempt() {
        let mut app = app_with_questions(3);
        app.start_test();
        app.select_answer("A");
        app.finish_test();

        app.apply_questions(vec![question(9, "Chemistry")]);
        assert_eq!(app.session.questions.len(), 1);
        assert!(app.session.user_answers.is_empty());
        assert_eq!(app.session.current_question, 0);
        assert!(!app.session.test_started);
        assert!(!app.session.test_completed);
        assert!(!app.session.show_analysis);
        assert_eq!(app.session.time_remaining, TEST_DURATION_SECS);
    }

    #[test]
    fn failed_questions_load_preserves_the_loaded_paper() {
        let mut app = app_with_questions(2);
        app.start_test();
        app.select_answer("A");

        let empty = std::env::temp_dir().join("jee_mock_test_empty_questions.json");
        std::fs::write(&empty, "[]").expect("write temp payload");
        app.load_questions_file(&empty);
        let _ = std::fs::remove_file(&empty);

        assert_eq!(app.session.questions.len(), 2);
        assert_eq!(app.session.user_answers["1"], "A");
        assert!(app.session.test_started);
        assert!(app.message.starts_with("❌"));

        app.load_questions_file(std::path::Path::new("/definitely/not/a/file.json"));
        assert_eq!(app.session.questions.len(), 2);
    }

    #[test]
    fn toggle_topic_flips_membership() {
        let mut app = TestApp::new();
        app.toggle_topic("optics");
        assert!(app.generation.selected_topics.contains("optics"));
        app.toggle_topic("optics");
        assert!(!app.generation.selected_topics.contains("optics"));
    }
}
