use crate::QuizApp;
use egui::{Context, RichText, ScrollArea};

pub fn ui_tips(app: &mut QuizApp, ctx: &Context) {
    let mut open = true;
    let mut close = false;

    egui::Window::new("Tire Safety Tips")
        .collapsible(false)
        .open(&mut open)
        .default_width(480.0)
        .show(ctx, |ui| {
            ui.label("Essential knowledge for safe driving");
            ui.separator();
            ScrollArea::vertical().max_height(440.0).show(ui, |ui| {
                for (category, tips) in app.tips_by_category() {
                    ui.add_space(6.0);
                    ui.label(RichText::new(category.label()).heading());
                    for tip in tips {
                        ui.label(RichText::new(&tip.title).strong());
                        ui.label(&tip.description);
                        ui.add_space(4.0);
                    }
                }
            });
            ui.add_space(6.0);
            close = ui.button("Done").clicked();
        });

    if !open || close {
        app.show_tips = false;
    }
}
