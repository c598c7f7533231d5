use crate::QuizApp;
use crate::ui::layout::centered_panel;
use egui::{Button, Context, RichText};

pub fn ui_welcome(app: &mut QuizApp, ctx: &Context) {
    let total = app.session.len();
    let mut start = false;

    centered_panel(ctx, 320.0, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("🚗").size(56.0));
            ui.heading("Tire Knowledge Quiz");
            ui.label("Test your knowledge about tires and tire safety");
            ui.add_space(16.0);
        });

        for line in [
            format!("❓  {total} questions"),
            "🏷  5 categories".to_owned(),
            "📖  Detailed explanations".to_owned(),
            "📊  Track your progress".to_owned(),
        ] {
            ui.label(line);
        }

        ui.add_space(18.0);
        ui.vertical_centered(|ui| {
            let w = (ui.available_width() * 0.9).clamp(120.0, 360.0);
            start = ui.add_sized([w, 42.0], Button::new("▶ Start Quiz")).clicked();
        });
    });

    if start {
        app.start_quiz();
    }
}
