use crate::QuizApp;
use crate::model::AppState;
use egui::{Align, CentralPanel, Context, Frame, Layout, TopBottomPanel, Ui};

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.strong(app.title());

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if app.state == AppState::Quiz && ui.button("☰ Menu").clicked() {
                    app.open_menu();
                }

                // ----------- BOTÓN DE TEMA -----------
                let theme = app.theme.current();
                if ui
                    .button(format!("{} {}", theme.icon(), theme.label()))
                    .on_hover_text("Change app appearance")
                    .clicked()
                {
                    app.toggle_theme();
                }
            });
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Panel con scroll para pantallas largas (quiz, resultados).
pub fn scroll_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    Frame::default()
                        .inner_margin(egui::Margin::symmetric(16, 12))
                        .show(ui, |ui| {
                            let w = ui.available_width().min(max_width);
                            ui.set_width(w);
                            ui.with_layout(Layout::top_down(Align::Min), inner);
                        });
                });
            });
    });
}

/// Dibuja dos botones del mismo tamaño en una fila.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left: Option<&str>,
    right: Option<&str>,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        match left {
            Some(label) => clicked_left = ui.add_sized([btn_w, 36.0], egui::Button::new(label)).clicked(),
            None => ui.add_space(btn_w),
        }
        ui.add_space(8.0);
        if let Some(label) = right {
            clicked_right = ui
                .add_sized([btn_w, 36.0], egui::Button::new(label))
                .clicked();
        }
    });
    (clicked_left, clicked_right)
}
