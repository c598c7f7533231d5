use crate::QuizApp;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText, Spinner};

pub fn ui_launch(app: &mut QuizApp, ctx: &Context) {
    // El chequeo arranca con el primer frame de esta pantalla
    app.ensure_access_check();

    let mut skip = false;
    centered_panel(ctx, 220.0, 380.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("🚗").size(48.0));
            ui.add_space(8.0);
            ui.add(Spinner::new().size(36.0));
            ui.add_space(10.0);
            ui.label("Checking access…");
            ui.add_space(18.0);
            if ui.button("▶ Continue without waiting").clicked() {
                skip = true;
            }
        });
    });

    if skip {
        app.skip_access_check();
    }
}
