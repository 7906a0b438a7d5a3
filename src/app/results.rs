use super::*;
use crate::model::{AnswerKey, Question, SubjectScore, TestResults};

/// Scores a completed attempt. Pure: the same inputs always produce the
/// same results. Subjects are reported in the order they first appear in
/// the paper.
pub fn calculate_results(
    questions: &[Question],
    answer_key: &AnswerKey,
    user_answers: &AnswerKey,
) -> TestResults {
    let mut correct = 0;
    let mut attempted = 0;
    let mut subject_wise: Vec<SubjectScore> = Vec::new();

    for q in questions {
        let idx = match subject_wise.iter().position(|s| s.subject == q.subject) {
            Some(i) => i,
            None => {
                subject_wise.push(SubjectScore {
                    subject: q.subject.clone(),
                    correct: 0,
                    total: 0,
                });
                subject_wise.len() - 1
            }
        };
        subject_wise[idx].total += 1;

        let key = q.key();
        if let Some(user_answer) = user_answers.get(&key) {
            attempted += 1;
            if answer_key.get(&key) == Some(user_answer) {
                correct += 1;
                subject_wise[idx].correct += 1;
            }
        }
    }

    let total = questions.len() as u32;
    // "0", not "0.0": an empty paper is a documented edge case, not a fault.
    let percentage = if total > 0 {
        format!("{:.1}", f64::from(correct) / f64::from(total) * 100.0)
    } else {
        "0".to_owned()
    };

    TestResults {
        correct,
        attempted,
        total,
        percentage,
        subject_wise,
    }
}

impl TestApp {
    /// Only meaningful with a non-empty answer key; the analysis view falls
    /// back to an attempted/unanswered summary otherwise.
    pub fn results(&self) -> TestResults {
        calculate_results(
            &self.session.questions,
            &self.session.answer_key,
            &self.session.user_answers,
        )
    }
}
