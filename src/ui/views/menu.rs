use crate::QuizApp;
use crate::ui::helpers::{ACCENT, GOOD, menu_button};
use egui::{Align2, Context, Frame, RichText};

/// Menú del quiz: progreso actual y accesos al resto de ventanas.
pub fn ui_menu(app: &mut QuizApp, ctx: &Context) {
    let card = app.progress_card();
    let theme = app.theme.current();

    let mut open = true;
    let mut clicked: Option<&str> = None;

    egui::Window::new("Quiz Menu")
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let width = 320.0;

            Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(width - 16.0);
                ui.label(RichText::new("Current Progress").strong());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(card.position_label()).color(ACCENT));
                    ui.separator();
                    ui.label(RichText::new(format!("Score {}", card.score)).color(GOOD));
                    ui.separator();
                    ui.label(format!("Answered {}", card.answered));
                });
            });
            ui.add_space(8.0);

            let entries = [
                ("tips", "💡", "Tire Safety Tips", "Essential tire maintenance advice"),
                ("review", "📄", "Review Answers", "See all questions and explanations"),
                ("theme", theme.next().icon(), "Change Theme", "Switch between light and dark mode"),
                ("restart", "🔄", "Restart Quiz", "Start over with new questions"),
                ("about", "ℹ", "About", "Learn more about this quiz"),
            ];
            for (key, icon, title, description) in entries {
                if menu_button(ui, icon, title, description, width) {
                    clicked = Some(key);
                }
                ui.add_space(4.0);
            }

            ui.add_space(6.0);
            if ui.button("Close").clicked() {
                clicked = Some("close");
            }
        });

    if !open {
        app.close_menu();
    }

    match clicked {
        Some("tips") => app.open_tips(),
        Some("review") => app.open_review(),
        Some("theme") => app.toggle_theme(),
        Some("restart") => {
            // Solo se pide confirmación si hay algo que perder
            if app.session.answered_count() > 0 {
                app.confirm_restart = true;
            } else {
                app.restart_quiz();
            }
        }
        Some("about") => app.open_about(),
        Some("close") => app.close_menu(),
        _ => {}
    }
}

pub fn ui_confirm_restart(app: &mut QuizApp, ctx: &Context) {
    egui::Window::new("Restart quiz")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Your answers will be cleared and the questions reshuffled.");
            ui.horizontal(|ui| {
                if ui.button("Yes, restart").clicked() {
                    app.restart_quiz();
                }
                if ui.button("No").clicked() {
                    app.confirm_restart = false;
                }
            });
        });
}
