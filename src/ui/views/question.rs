use crate::TestApp;
use crate::app::timer::format_time;
use crate::model::NavDirection;
use crate::ui::layout::two_button_row;
use egui::{Button, CentralPanel, Color32, Context, RichText, ScrollArea};

pub fn ui_question(app: &mut TestApp, ctx: &Context) {
    let Some(question) = app.current_question().cloned() else {
        return;
    };
    let read_only = app.question_view_read_only();

    egui::TopBottomPanel::top("question_header").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if app.session.show_review {
                if ui.button("⬅ Back to Analysis").clicked() {
                    app.return_to_analysis();
                    return;
                }
                if app.has_solutions() && ui.button("📚 View Solutions").clicked() {
                    app.request_solutions();
                }
            } else {
                ui.label(format!(
                    "Question {}/{}",
                    app.session.current_question + 1,
                    app.session.questions.len()
                ));
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("⏱ {}", format_time(app.session.time_remaining)))
                        .strong(),
                );
            });
        });
    });

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 680.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        ui.vertical_centered(|ui| {
            ui.set_width(panel_width);

            // Navigation strip
            ScrollArea::horizontal().show(ui, |ui| {
                ui.horizontal(|ui| {
                    for entry in app.nav_entries() {
                        let mut text = RichText::new(entry.number.to_string());
                        if entry.current {
                            text = text.strong();
                        }
                        let mut button = Button::new(text);
                        if entry.answered {
                            button = button.fill(Color32::DARK_GREEN);
                        }
                        if ui.add_sized([32.0, 28.0], button).clicked() {
                            app.jump_to_question(entry.index);
                        }
                    }
                });
            });
            ui.add_space(10.0);

            ui.label(
                RichText::new(format!(
                    "Q{}. {}",
                    question.question_number, question.question
                ))
                .size(16.0),
            );
            ui.label(
                RichText::new(format!("{} · {}", question.subject, question.topic)).weak(),
            );
            ui.add_space(10.0);

            let selected = app.answer_for(&question).cloned();
            let correct = app.correct_answer_for(&question).cloned();
            for letter in ["A", "B", "C", "D"] {
                let is_selected = selected.as_deref() == Some(letter);
                let is_correct = app.session.test_completed && correct.as_deref() == Some(letter);
                let is_wrong =
                    app.session.test_completed && is_selected && correct.as_deref() != Some(letter);

                let mut button = Button::new(format!("{letter}.  {}", question.option_text(letter)))
                    .min_size([panel_width, 34.0].into());
                if is_correct {
                    button = button.fill(Color32::DARK_GREEN);
                } else if is_wrong {
                    button = button.fill(Color32::DARK_RED);
                } else if is_selected {
                    button = button.fill(ui.visuals().selection.bg_fill);
                }
                if ui.add(button).clicked() && !read_only {
                    app.select_answer(letter);
                }
            }
            ui.add_space(12.0);

            let (prev, next) = two_button_row(ui, panel_width, "⬅ Previous", "Next ➡");
            if prev {
                app.navigate_question(NavDirection::Prev);
            }
            if next {
                app.navigate_question(NavDirection::Next);
            }

            ui.add_space(5.0);
            if read_only {
                if ui
                    .add_sized([panel_width, 36.0], Button::new("Back to Analysis"))
                    .clicked()
                {
                    app.return_to_analysis();
                }
            } else {
                let (submit, exit) = two_button_row(ui, panel_width, "Submit Test", "Exit Test");
                if submit {
                    app.request_submit();
                }
                if exit {
                    app.reset_session();
                }
            }

            if !app.message.is_empty() {
                ui.add_space(8.0);
                ui.label(&app.message);
            }
        });
    });
}
