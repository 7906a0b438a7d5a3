use crate::TestApp;
use crate::app::timer::format_time;
use crate::ui::layout::centered_panel;
use egui::{Button, Context};

pub fn ui_pre_test(app: &mut TestApp, ctx: &Context) {
    centered_panel(ctx, 300.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Ready to Begin?");
            ui.add_space(12.0);

            ui.label(format!(
                "📝 {} Questions Loaded",
                app.session.questions.len()
            ));
            ui.label(format!(
                "⏱ Time Limit: {}",
                format_time(app.session.time_remaining)
            ));
            ui.label(format!(
                "🎯 Answer Key: {}",
                if app.has_answer_key() {
                    "Available"
                } else {
                    "Not Available"
                }
            ));
            ui.label(format!(
                "📚 Solutions: {}",
                if app.has_solutions() {
                    "Available"
                } else {
                    "Not Available"
                }
            ));

            ui.add_space(16.0);
            if ui
                .add_sized([220.0, 42.0], Button::new("Start Test"))
                .clicked()
            {
                app.start_test();
            }
            ui.add_space(5.0);
            if ui.button("🔙 Discard and upload again").clicked() {
                app.reset_session();
            }

            if !app.message.is_empty() {
                ui.add_space(8.0);
                ui.label(&app.message);
            }
        });
    });
}
