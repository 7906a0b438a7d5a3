use super::*;
use crate::model::{Question, ScreenMode};

impl TestApp {
    /// Derives the active screen from session state alone, first match wins.
    /// The order is a contract: analysis outranks solutions even when both
    /// flags are set, and solutions needs at least one solution loaded.
    pub fn screen_mode(&self) -> ScreenMode {
        let s = &self.session;
        if s.questions.is_empty() && !self.generation.show_topic_selection {
            ScreenMode::Upload
        } else if self.generation.show_topic_selection {
            ScreenMode::TopicSelection
        } else if !s.test_started {
            ScreenMode::PreTest
        } else if s.show_analysis {
            ScreenMode::Analysis
        } else if s.show_solutions && !s.solutions.is_empty() {
            ScreenMode::Solutions
        } else {
            ScreenMode::QuestionAnswer
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.session.questions.get(self.session.current_question)
    }

    /// Review and the post-completion flow render the question screen
    /// without accepting writes.
    pub fn question_view_read_only(&self) -> bool {
        self.session.test_completed || self.session.show_review
    }

    pub fn answer_for(&self, question: &Question) -> Option<&String> {
        self.session.user_answers.get(&question.key())
    }

    pub fn correct_answer_for(&self, question: &Question) -> Option<&String> {
        self.session.answer_key.get(&question.key())
    }

    pub fn has_answer_key(&self) -> bool {
        !self.session.answer_key.is_empty()
    }

    pub fn has_solutions(&self) -> bool {
        !self.session.solutions.is_empty()
    }

    pub fn attempted_count(&self) -> usize {
        self.session.user_answers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Question;

    fn question(number: u32) -> Question {
        Question {
            question_number: number,
            question: format!("Q{number}"),
            option_a: "a".into(),
            option_b: "b".into(),
            option_c: "c".into(),
            option_d: "d".into(),
            subject: "Physics".into(),
            topic: "Optics".into(),
        }
    }

    fn solution(number: u32) -> crate::model::Solution {
        crate::model::Solution {
            question_number: number,
            detailed_solution: "s".into(),
            correct_option: "A".into(),
            final_answer: "a".into(),
        }
    }

    #[test]
    fn empty_session_lands_on_upload() {
        let app = TestApp::new();
        assert_eq!(app.screen_mode(), ScreenMode::Upload);
    }

    #[test]
    fn topic_selection_outranks_upload() {
        let mut app = TestApp::new();
        app.open_topic_selection();
        assert_eq!(app.screen_mode(), ScreenMode::TopicSelection);
    }

    #[test]
    fn loaded_but_unstarted_paper_shows_pre_test() {
        let mut app = TestApp::new();
        app.apply_questions(vec![question(1)]);
        assert_eq!(app.screen_mode(), ScreenMode::PreTest);
    }

    #[test]
    fn started_paper_shows_questions() {
        let mut app = TestApp::new();
        app.apply_questions(vec![question(1)]);
        app.start_test();
        assert_eq!(app.screen_mode(), ScreenMode::QuestionAnswer);
        assert!(!app.question_view_read_only());
    }

    #[test]
    fn analysis_outranks_solutions_when_both_flags_are_set() {
        let mut app = TestApp::new();
        app.apply_questions(vec![question(1)]);
        app.session
            .solutions
            .insert("1".into(), solution(1));
        app.start_test();
        app.finish_test();
        app.request_solutions();
        assert!(app.session.show_analysis && app.session.show_solutions);
        assert_eq!(app.screen_mode(), ScreenMode::Analysis);
    }

    #[test]
    fn solutions_flag_without_solutions_falls_through_to_questions() {
        let mut app = TestApp::new();
        app.apply_questions(vec![question(1)]);
        app.start_test();
        app.finish_test();
        app.request_review();
        app.session.show_solutions = true; // no solutions loaded
        assert_eq!(app.screen_mode(), ScreenMode::QuestionAnswer);
        assert!(app.question_view_read_only());
    }

    #[test]
    fn review_then_solutions_reaches_the_solutions_screen() {
        let mut app = TestApp::new();
        app.apply_questions(vec![question(1)]);
        app.session
            .solutions
            .insert("1".into(), solution(1));
        app.start_test();
        app.finish_test();
        app.request_review();
        app.request_solutions();
        assert_eq!(app.screen_mode(), ScreenMode::Solutions);
        app.return_to_analysis();
        assert_eq!(app.screen_mode(), ScreenMode::Analysis);
    }
}
