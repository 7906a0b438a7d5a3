use crate::TestApp;
use crate::ui::layout::centered_panel;
use egui::{Button, Context};
use std::path::PathBuf;

fn pick_json_file() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("JSON", &["json"])
        .pick_file()
}

pub fn ui_upload(app: &mut TestApp, ctx: &Context) {
    centered_panel(ctx, 360.0, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("JEE Test Environment");
            ui.add_space(4.0);
            ui.label("Generate questions with AI or upload your own JSON files");
            ui.add_space(18.0);

            let btn_w = (ui.available_width() * 0.9).clamp(160.0, 400.0);
            let btn_h = 40.0;

            if ui
                .add_sized([btn_w, btn_h], Button::new("🤖 Generate with AI"))
                .clicked()
            {
                app.open_topic_selection();
            }

            ui.add_space(10.0);
            ui.separator();
            ui.label("OR");
            ui.separator();
            ui.add_space(10.0);

            if ui
                .add_sized([btn_w, btn_h], Button::new("📄 Upload Questions (JSON)"))
                .clicked()
            {
                if let Some(path) = pick_json_file() {
                    app.load_questions_file(&path);
                }
            }
            ui.add_space(5.0);
            if ui
                .add_sized([btn_w, btn_h], Button::new("🎯 Upload Answer Key (JSON)"))
                .clicked()
            {
                if let Some(path) = pick_json_file() {
                    app.load_answer_key_file(&path);
                }
            }
            ui.add_space(5.0);
            if ui
                .add_sized([btn_w, btn_h], Button::new("📚 Upload Solutions (JSON)"))
                .clicked()
            {
                if let Some(path) = pick_json_file() {
                    app.load_solutions_file(&path);
                }
            }

            if !app.message.is_empty() {
                ui.add_space(12.0);
                ui.label(&app.message);
            }
        });
    });
}
