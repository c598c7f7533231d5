use crate::QuizApp;
use crate::ui::helpers::{ACCENT, BAD, GOOD, fraction_color, level_color, stat_row};
use crate::ui::layout::{scroll_panel, two_button_row};
use egui::{Align, Context, Frame, Layout, ProgressBar, RichText};
use log::info;

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    let summary = app.results_summary();
    let message = app.message.clone();

    let (mut review, mut retake, mut share, mut home) = (false, false, false, false);

    scroll_panel(ctx, 540.0, |ui| {
        let width = ui.available_width();

        ui.vertical_centered(|ui| {
            ui.label(RichText::new(summary.level.emoji()).size(56.0));
            ui.label(RichText::new(summary.score.to_string()).size(48.0).strong());
            ui.label(format!("out of {}", summary.total));
            ui.add_space(8.0);
            ui.label(
                RichText::new(summary.level.title())
                    .heading()
                    .color(level_color(summary.level)),
            );
            ui.label(summary.level.message());
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("{}%", summary.whole_percentage()))
                    .size(32.0)
                    .strong(),
            );
        });

        ui.add_space(12.0);
        Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(width - 16.0);
            stat_row(ui, "✔", "Correct Answers", summary.score.to_string(), GOOD);
            stat_row(ui, "✖", "Incorrect Answers", summary.incorrect().to_string(), BAD);
            stat_row(ui, "☰", "Total Questions", summary.total.to_string(), ACCENT);
        });

        // ----------- POR CATEGORÍA -----------
        ui.add_space(12.0);
        ui.heading("Performance by Category");
        ui.add_space(4.0);
        for row in &summary.categories {
            ui.horizontal(|ui| {
                ui.label(row.category.label());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(RichText::new(row.label()).strong());
                });
            });
            ui.add(
                ProgressBar::new(row.fraction())
                    .fill(fraction_color(row.fraction()))
                    .desired_width(width),
            );
            ui.add_space(4.0);
        }

        ui.add_space(16.0);
        (review, retake) = two_button_row(
            ui,
            width,
            Some("📄 Review All Answers"),
            Some("🔄 Retake Quiz"),
        );
        ui.add_space(6.0);
        (share, home) = two_button_row(ui, width, Some("📋 Share Results"), Some("🏠 Home"));

        if !message.is_empty() {
            ui.add_space(8.0);
            ui.label(message);
        }
    });

    if review {
        app.open_review();
    }
    if retake {
        app.restart_quiz();
    }
    if share {
        let text = app.share_text();
        info!("sharing results: {text}");
        ctx.copy_text(text);
        app.message = "📋 Results copied to the clipboard.".into();
    }
    if home {
        app.go_home();
    }
}
