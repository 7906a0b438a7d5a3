use crate::TestApp;
use crate::model::Subject;
use crate::ui::layout::centered_panel;
use egui::{Button, Context, ScrollArea};

const QUESTION_COUNTS: [usize; 6] = [5, 10, 15, 20, 25, 30];

pub fn ui_topic_selection(app: &mut TestApp, ctx: &Context) {
    centered_panel(ctx, 560.0, 620.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Select Topics");
            ui.add_space(10.0);

            ui.label("Number of Questions:");
            ui.horizontal_wrapped(|ui| {
                for count in QUESTION_COUNTS {
                    let selected = app.generation.number_of_questions == count;
                    if ui.selectable_label(selected, count.to_string()).clicked() {
                        app.set_question_count(count);
                    }
                }
            });
            ui.add_space(10.0);

            ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                for subject in [Subject::Physics, Subject::Chemistry, Subject::Mathematics] {
                    ui.label(egui::RichText::new(subject.label()).strong());
                    let subject_topics: Vec<(String, String)> = app
                        .topics
                        .iter()
                        .filter(|t| t.subject == subject)
                        .map(|t| (t.id.clone(), t.name.clone()))
                        .collect();
                    ui.horizontal_wrapped(|ui| {
                        for (id, name) in subject_topics {
                            let selected = app.generation.selected_topics.contains(&id);
                            if ui.selectable_label(selected, name).clicked() {
                                app.toggle_topic(&id);
                            }
                        }
                    });
                    ui.add_space(8.0);
                }
            });

            if !app.generation.selected_topics.is_empty() {
                ui.label(format!(
                    "Selected: {} topics, {} questions",
                    app.generation.selected_topics.len(),
                    app.generation.number_of_questions
                ));
            }
            ui.add_space(10.0);

            let can_generate =
                !app.generation.is_generating && !app.generation.selected_topics.is_empty();
            let label = if app.generation.is_generating {
                "⏳ Generating...".to_owned()
            } else {
                format!(
                    "🤖 Generate {} Questions",
                    app.generation.number_of_questions
                )
            };
            if ui
                .add_enabled(can_generate, Button::new(label).min_size([240.0, 40.0].into()))
                .clicked()
            {
                app.start_generation();
            }
            if app.generation.is_generating {
                ui.add_space(5.0);
                ui.spinner();
            }

            ui.add_space(10.0);
            if ui.button("🔙 Back").clicked() {
                app.close_topic_selection();
            }

            if !app.message.is_empty() {
                ui.add_space(8.0);
                ui.label(&app.message);
            }
        });
    });
}
