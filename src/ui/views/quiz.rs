use crate::QuizApp;
use crate::ui::helpers::{AnswerMark, BAD, GOOD, WARN, answer_button};
use crate::ui::layout::{scroll_panel, two_button_row};
use egui::{Context, Frame, ProgressBar, RichText};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let question = app.session.current_question().clone();
    let chosen = app.session.current_answer();
    let position = app.session.current_index() + 1;
    let total = app.session.len();
    let is_first = app.session.is_first();
    let is_last = app.session.is_last();
    let message = app.message.clone();

    let mut picked = None;
    let mut prev = false;
    let mut next = false;

    scroll_panel(ctx, 650.0, |ui| {
        let width = ui.available_width();

        ui.add(
            ProgressBar::new(position as f32 / total as f32)
                .desired_width(width)
                .text(format!("{position}/{total}")),
        );
        ui.add_space(6.0);
        ui.label(RichText::new(question.category.label()).small().strong());
        ui.add_space(8.0);
        ui.label(RichText::new(&question.text).heading());
        ui.add_space(14.0);

        for (i, option) in question.options.iter().enumerate() {
            let mark = AnswerMark::for_option(i, question.correct_answer, chosen);
            if answer_button(ui, i, option, width, mark, chosen.is_none()) {
                picked = Some(i);
            }
            ui.add_space(6.0);
        }

        // Explicación en cuanto hay respuesta
        if let Some(answer) = chosen {
            ui.add_space(8.0);
            let (title, color) = if question.is_correct(answer) {
                ("✅ Correct!", GOOD)
            } else {
                ("❌ Incorrect", BAD)
            };
            Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(width - 16.0);
                ui.label(RichText::new(title).strong().color(color));
                if !question.is_correct(answer) {
                    ui.label(format!("Correct answer: {}", question.correct_option()));
                }
                ui.add_space(4.0);
                ui.label(&question.explanation);
            });
        }

        ui.add_space(14.0);
        let left = (!is_first).then_some("◀ Previous");
        let right = chosen.map(|_| if is_last { "✔ Finish" } else { "Next ▶" });
        (prev, next) = two_button_row(ui, width, left, right);

        if !message.is_empty() {
            ui.add_space(8.0);
            ui.colored_label(WARN, message);
        }
    });

    if let Some(option) = picked {
        app.choose_answer(option);
    }
    if prev {
        app.go_previous();
    }
    if next {
        app.go_next();
    }
}
