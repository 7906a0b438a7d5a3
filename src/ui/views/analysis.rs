use crate::TestApp;
use crate::ui::layout::centered_panel;
use egui::{Button, Context, Grid, RichText};

pub fn ui_analysis(app: &mut TestApp, ctx: &Context) {
    if app.has_answer_key() {
        scored_analysis(app, ctx);
    } else {
        keyless_analysis(app, ctx);
    }
}

fn scored_analysis(app: &mut TestApp, ctx: &Context) {
    let results = app.results();
    centered_panel(ctx, 460.0, 520.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Test Analysis");
            ui.add_space(10.0);

            ui.label(
                RichText::new(format!("Score: {}/{}", results.correct, results.total)).size(18.0),
            );
            ui.label(RichText::new(format!("{}%", results.percentage)).size(24.0).strong());
            ui.add_space(10.0);

            Grid::new("analysis_stats").spacing([24.0, 4.0]).show(ui, |ui| {
                ui.label("Attempted");
                ui.label("Correct");
                ui.label("Incorrect");
                ui.end_row();
                ui.label(results.attempted.to_string());
                ui.label(results.correct.to_string());
                ui.label((results.attempted - results.correct).to_string());
                ui.end_row();
            });
            ui.add_space(12.0);

            ui.label(RichText::new("Subject-wise Performance").strong());
            Grid::new("subject_grid")
                .striped(true)
                .spacing([24.0, 2.0])
                .show(ui, |ui| {
                    for score in &results.subject_wise {
                        ui.label(&score.subject);
                        ui.label(format!("{}/{}", score.correct, score.total));
                        ui.end_row();
                    }
                });

            ui.add_space(14.0);
            footer_buttons(app, ui);
        });
    });
}

fn keyless_analysis(app: &mut TestApp, ctx: &Context) {
    let attempted = app.attempted_count();
    let total = app.session.questions.len();
    centered_panel(ctx, 360.0, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Test Completed!");
            ui.add_space(10.0);
            ui.label(RichText::new("Test Submitted Successfully ✔").size(18.0));
            ui.add_space(10.0);

            Grid::new("keyless_stats").spacing([24.0, 4.0]).show(ui, |ui| {
                ui.label("Attempted");
                ui.label("Total");
                ui.label("Unanswered");
                ui.end_row();
                ui.label(attempted.to_string());
                ui.label(total.to_string());
                ui.label((total - attempted).to_string());
                ui.end_row();
            });

            ui.add_space(10.0);
            ui.label(
                "📝 Note: answer key was not provided, so detailed analysis is not \
                 available. You can review your answers below.",
            );
            ui.add_space(14.0);
            footer_buttons(app, ui);
        });
    });
}

fn footer_buttons(app: &mut TestApp, ui: &mut egui::Ui) {
    let btn_w = 260.0;
    if ui
        .add_sized([btn_w, 38.0], Button::new("Review Your Answers"))
        .clicked()
    {
        app.request_review();
    }
    if app.has_solutions() {
        ui.add_space(5.0);
        if ui
            .add_sized([btn_w, 38.0], Button::new("View Detailed Solutions"))
            .clicked()
        {
            // Composition of the public ops: analysis outranks solutions in
            // the router, so drop into review before raising the flag.
            app.request_review();
            app.request_solutions();
        }
    }
    ui.add_space(5.0);
    if ui
        .add_sized([btn_w, 38.0], Button::new("🔄 Start a New Test"))
        .clicked()
    {
        app.reset_session();
    }
}
