use crate::QuizApp;
use crate::ui::helpers::{ACCENT, BAD, GOOD, LETTERS};
use egui::{CollapsingHeader, Context, RichText, ScrollArea};

pub fn ui_review(app: &mut QuizApp, ctx: &Context) {
    let rows = app.review_rows();
    let summary = app.results_summary();

    let mut open = true;
    let mut close = false;

    egui::Window::new("Review Your Answers")
        .collapsible(false)
        .open(&mut open)
        .default_width(560.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(GOOD, format!("✔ {} correct", summary.score));
                ui.separator();
                ui.colored_label(BAD, format!("✖ {} wrong", summary.incorrect()));
                ui.separator();
                ui.colored_label(ACCENT, format!("{}%", summary.whole_percentage()));
            });
            ui.separator();

            ScrollArea::vertical().max_height(440.0).show(ui, |ui| {
                for row in &rows {
                    let header = format!("{} {}. {}", row.status_icon(), row.number, row.text);
                    CollapsingHeader::new(header)
                        .id_salt(("review_row", row.number))
                        .show(ui, |ui| {
                            ui.label(RichText::new(row.category.label()).small().strong());
                            for (i, option) in row.options.iter().enumerate() {
                                let letter = LETTERS.get(i).copied().unwrap_or("?");
                                ui.label(format!("{} {letter}. {option}", row.option_marker(i)));
                            }
                            match row.user_answer {
                                None => {
                                    ui.colored_label(BAD, "Not answered");
                                }
                                Some(answer) if !row.is_correct() => {
                                    let letter = LETTERS.get(answer).copied().unwrap_or("?");
                                    ui.colored_label(BAD, format!("Your answer: {letter}"));
                                }
                                Some(_) => {}
                            }
                            ui.add_space(4.0);
                            ui.label(RichText::new(&row.explanation).italics());
                        });
                }
            });

            ui.add_space(6.0);
            close = ui.button("Done").clicked();
        });

    if !open || close {
        app.show_review = false;
    }
}
