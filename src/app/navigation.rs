use super::*;
use crate::model::NavDirection;

impl TestApp {
    /// Moves the cursor one question forward or back. Stepping past either
    /// end of the paper is a silent no-op.
    pub fn navigate_question(&mut self, direction: NavDirection) {
        match direction {
            NavDirection::Prev => {
                if self.session.current_question > 0 {
                    self.session.current_question -= 1;
                }
            }
            NavDirection::Next => {
                if self.session.current_question + 1 < self.session.questions.len() {
                    self.session.current_question += 1;
                }
            }
        }
    }

    /// Direct jump from the nav strip. The strip only produces in-range
    /// indices; anything else is ignored.
    pub fn jump_to_question(&mut self, index: usize) {
        if index < self.session.questions.len() {
            self.session.current_question = index;
        }
    }
}
