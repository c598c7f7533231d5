use crate::QuizApp;
use crate::model::AppState;
use crate::ui::layout::centered_panel;
use egui::{Context, OpenUrl, RichText};
use log::warn;

/// Contenido externo aprobado: se abre en el navegador del sistema.
pub fn ui_external(app: &mut QuizApp, ctx: &Context) {
    let Some(dest) = app.destination.clone() else {
        warn!("external screen without destination, falling back to quiz");
        app.state = AppState::Welcome;
        return;
    };

    if !dest.loaded {
        ctx.open_url(OpenUrl::new_tab(dest.url.as_str()));
        app.mark_destination_loaded();
    }

    centered_panel(ctx, 200.0, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Tire Knowledge Quiz");
            ui.add_space(10.0);
            ui.label("The content was opened in your browser.");
            ui.add_space(6.0);
            ui.hyperlink_to(RichText::new(dest.url.as_str()).small(), dest.url.as_str());
            ui.add_space(14.0);
            if ui.button("🔗 Open again").clicked() {
                ctx.open_url(OpenUrl::new_tab(dest.url.as_str()));
            }
        });
    });
}
