pub mod layout;
pub mod views;

use crate::TestApp;
use crate::model::ScreenMode;
use eframe::{App, Frame};
use egui::Context;
use layout::bottom_panel;
use std::time::Duration;

impl App for TestApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Autonomous mutators first, then the frame renders from the result.
        self.poll_timer();
        self.poll_generation_result();
        if self.timer_running() || self.generation.is_generating {
            ctx.request_repaint_after(Duration::from_millis(250));
        }

        bottom_panel(ctx);

        // Dispatch by derived screen mode to the functions in views/
        match self.screen_mode() {
            ScreenMode::Upload => views::upload::ui_upload(self, ctx),
            ScreenMode::TopicSelection => views::topic_selection::ui_topic_selection(self, ctx),
            ScreenMode::PreTest => views::pre_test::ui_pre_test(self, ctx),
            ScreenMode::Analysis => views::analysis::ui_analysis(self, ctx),
            ScreenMode::Solutions => views::solutions::ui_solutions(self, ctx),
            ScreenMode::QuestionAnswer => views::question::ui_question(self, ctx),
        }

        if self.confirm_submit {
            self.confirm_submit(ctx);
        }
    }
}
