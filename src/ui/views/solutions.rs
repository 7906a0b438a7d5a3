use crate::TestApp;
use egui::{CentralPanel, Context, RichText, ScrollArea};

pub fn ui_solutions(app: &mut TestApp, ctx: &Context) {
    egui::TopBottomPanel::top("solutions_header").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("⬅ Back to Analysis").clicked() {
                app.return_to_analysis();
            }
            ui.heading("Detailed Solutions");
        });
    });

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 680.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_width(panel_width);
                for row in app.solution_rows() {
                    let user_answer = row.user_answer.as_deref().unwrap_or("Not Answered");
                    let answered_right = row.user_answer.as_deref()
                        == Some(row.solution.correct_option.as_str());

                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_width(panel_width - 16.0);
                        ui.label(
                            RichText::new(format!("Question {}", row.number)).strong(),
                        );
                        ui.label(&row.question);
                        ui.add_space(4.0);
                        ui.label(format!(
                            "Your Answer: {user_answer} {}",
                            if row.user_answer.is_none() {
                                ""
                            } else if answered_right {
                                "✅"
                            } else {
                                "❌"
                            }
                        ));
                        ui.label(format!("Correct Answer: {}", row.solution.correct_option));
                        ui.add_space(4.0);
                        ui.label(RichText::new("Solution:").strong());
                        ui.label(&row.solution.detailed_solution);
                        ui.add_space(2.0);
                        ui.label(format!("Final Answer: {}", row.solution.final_answer));
                    });
                    ui.add_space(8.0);
                }
            });
        });
    });
}
