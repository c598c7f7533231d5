use crate::QuizApp;
use crate::model::Category;
use egui::{Context, RichText};

pub fn ui_about(app: &mut QuizApp, ctx: &Context) {
    let total = app.session.len();
    let mut open = true;
    let mut close = false;

    egui::Window::new("About This Quiz")
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("🚗").size(40.0));
                ui.heading("Tire Knowledge Quiz");
                ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
            });
            ui.add_space(8.0);
            ui.label(format!(
                "{total} questions about tire basics, maintenance, safety, \
                 technical details and seasonal care. Every answer comes with \
                 an explanation."
            ));
            ui.add_space(6.0);
            ui.label(RichText::new("Categories").strong());
            for category in Category::ALL {
                ui.label(format!("• {}", category.label()));
            }
            ui.add_space(6.0);
            ui.label(
                RichText::new("Always follow the vehicle manufacturer's recommendations.")
                    .small()
                    .italics(),
            );
            ui.add_space(6.0);
            close = ui.button("Close").clicked();
        });

    if !open || close {
        app.show_about = false;
    }
}
