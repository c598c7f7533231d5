// src/ui/helpers.rs
use crate::view_models::PerformanceLevel;
use egui::{Button, Color32, RichText, Ui, Vec2};

pub const LETTERS: [&str; 4] = ["A", "B", "C", "D"];

pub const GOOD: Color32 = Color32::from_rgb(60, 170, 90);
pub const BAD: Color32 = Color32::from_rgb(210, 70, 70);
pub const ACCENT: Color32 = Color32::from_rgb(70, 130, 220);
pub const WARN: Color32 = Color32::from_rgb(230, 150, 40);

/// Cómo pintar una opción de respuesta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerMark {
    Neutral,
    Correct,
    Wrong,
}

impl AnswerMark {
    /// Marca de la opción `option` una vez respondida la pregunta.
    pub fn for_option(option: usize, correct: usize, chosen: Option<usize>) -> Self {
        match chosen {
            None => AnswerMark::Neutral,
            Some(_) if option == correct => AnswerMark::Correct,
            Some(c) if c == option => AnswerMark::Wrong,
            Some(_) => AnswerMark::Neutral,
        }
    }
}

/// Botón de opción "A  texto". Devuelve true si se pulsó.
pub fn answer_button(
    ui: &mut Ui,
    index: usize,
    text: &str,
    width: f32,
    mark: AnswerMark,
    enabled: bool,
) -> bool {
    let letter = LETTERS.get(index).copied().unwrap_or("?");
    let label = match mark {
        AnswerMark::Neutral => format!("{letter}   {text}"),
        AnswerMark::Correct => format!("{letter}   {text}   ✅"),
        AnswerMark::Wrong => format!("{letter}   {text}   ❌"),
    };
    let mut button = Button::new(label).min_size(Vec2::new(width, 40.0));
    match mark {
        AnswerMark::Correct => button = button.fill(Color32::from_rgb(36, 110, 60)),
        AnswerMark::Wrong => button = button.fill(Color32::from_rgb(140, 40, 40)),
        AnswerMark::Neutral => {}
    }
    ui.add_enabled(enabled, button).clicked()
}

pub fn level_color(level: PerformanceLevel) -> Color32 {
    match level {
        PerformanceLevel::Expert => GOOD,
        PerformanceLevel::GreatJob => ACCENT,
        PerformanceLevel::GoodWork => WARN,
        PerformanceLevel::KeepLearning => BAD,
    }
}

/// Color de la barra por categoría según el porcentaje de aciertos.
pub fn fraction_color(fraction: f32) -> Color32 {
    if fraction >= 0.8 {
        GOOD
    } else if fraction >= 0.6 {
        ACCENT
    } else if fraction >= 0.4 {
        WARN
    } else {
        BAD
    }
}

/// Fila "etiqueta ........ valor" de las estadísticas.
pub fn stat_row(ui: &mut Ui, icon: &str, label: &str, value: String, color: Color32) {
    ui.horizontal(|ui| {
        ui.colored_label(color, icon);
        ui.label(label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(value).strong());
        });
    });
}

/// Botón grande de menú con título y descripción.
pub fn menu_button(ui: &mut Ui, icon: &str, title: &str, description: &str, width: f32) -> bool {
    let text = format!("{icon}  {title}\n{description}");
    ui.add(Button::new(text).min_size(Vec2::new(width, 48.0)))
        .clicked()
}
