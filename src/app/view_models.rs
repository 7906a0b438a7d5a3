use super::*;

impl TestApp {
    pub fn nav_entries(&self) -> Vec<NavEntry> {
        self.session
            .questions
            .iter()
            .enumerate()
            .map(|(i, q)| NavEntry {
                index: i,
                number: q.question_number,
                answered: self.session.user_answers.contains_key(&q.key()),
                current: i == self.session.current_question,
            })
            .collect()
    }

    /// Solution cards in paper order, skipping questions without a solution.
    pub fn solution_rows(&self) -> Vec<SolutionRow> {
        self.session
            .questions
            .iter()
            .filter_map(|q| {
                let solution = self.session.solutions.get(&q.key())?;
                Some(SolutionRow {
                    number: q.question_number,
                    question: q.question.clone(),
                    user_answer: self.session.user_answers.get(&q.key()).cloned(),
                    solution: solution.clone(),
                })
            })
            .collect()
    }
}
