mod helpers;
pub mod layout;
pub mod views;

use std::time::Duration;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{App, Frame, Storage};
use egui::Context;
use layout::top_panel;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        // Resultado del gate (llega desde el hilo de fondo)
        self.sync_gate();
        if self.state == AppState::Launch {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        // Barra superior con menú y tema (solo en el flujo nativo)
        if matches!(
            self.state,
            AppState::Welcome | AppState::Quiz | AppState::Results
        ) {
            top_panel(self, ctx);
        }

        // Dispatch por estado a las vistas
        match self.state {
            AppState::Launch => views::launch::ui_launch(self, ctx),
            AppState::External => views::external::ui_external(self, ctx),
            AppState::Welcome => views::welcome::ui_welcome(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Results => views::results::ui_results(self, ctx),
        }

        // Ventanas encima de la pantalla actual
        if self.show_menu {
            views::menu::ui_menu(self, ctx);
        }
        if self.show_review {
            views::review::ui_review(self, ctx);
        }
        if self.show_tips {
            views::tips::ui_tips(self, ctx);
        }
        if self.show_about {
            views::about::ui_about(self, ctx);
        }
        if self.confirm_restart {
            views::menu::ui_confirm_restart(self, ctx);
        }

        // El tema se guarda en cada cambio, no solo en el autosave
        if let Some(theme) = self.take_theme_change() {
            ctx.set_theme(theme.preference());
            if let Some(storage) = frame.storage_mut() {
                self.theme.persist(storage);
            }
        }
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        self.theme.persist(storage);
    }
}
