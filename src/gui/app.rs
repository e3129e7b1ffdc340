use eframe::egui;

use super::theme::{
    set_theme,
    Theme,
};
use crate::{
    core::errors::WordmineError,
    quiz::{
        QuizSession,
        SAMPLE_SIZE,
    },
};

/// Cosmetic rendering variants. `Plain` keeps egui's stock visuals, `Themed`
/// applies the palette from [`super::theme`]. Session behavior is identical
/// for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizStyle {
    Plain,
    #[default]
    Themed,
}

pub struct WordmineApp {
    session: Result<QuizSession, String>,
    theme: Theme,
}

impl WordmineApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        session: Result<QuizSession, WordmineError>,
        style: QuizStyle,
    ) -> Self {
        let theme = Theme::default();

        if style == QuizStyle::Themed {
            set_theme(&cc.egui_ctx, &theme);
        }

        Self { session: session.map_err(|error| error.to_string()), theme }
    }

    fn show_fatal_error(&self, ctx: &egui::Context, message: &str) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(48.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("⚠").size(32.0).color(self.theme.red()));
                ui.add_space(8.0);
                ui.heading("Could not start the quiz");
                ui.add_space(8.0);
                ui.label(message);
                ui.add_space(8.0);
                ui.weak("Run wordmine-export first to produce the vocabulary file.");
            });
        });
    }
}

impl eframe::App for WordmineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let session = match &mut self.session {
            Ok(session) => session,
            Err(message) => {
                let message = message.clone();
                self.show_fatal_error(ctx, &message);
                return;
            }
        };

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.label(format!(
                "Total words: {} | In play: {}",
                session.total_words(),
                SAMPLE_SIZE
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if ui
                .add_sized([ui.available_width(), 32.0], egui::Button::new("Random 5 Words"))
                .clicked()
            {
                session.reshuffle(&mut rand::rng());
            }

            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                ui.heading(self.theme.heading("Discuss using these words!"));
            });
            ui.add_space(12.0);

            let selected = session.selected_words().to_vec();

            ui.columns(SAMPLE_SIZE, |columns| {
                for (column, word) in columns.iter_mut().zip(&selected) {
                    if column
                        .add_sized(
                            [column.available_width(), 28.0],
                            egui::Button::new(self.theme.bold(word)),
                        )
                        .clicked()
                    {
                        session.toggle(word);
                    }
                }
            });

            ui.add_space(12.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                for word in &selected {
                    if !session.is_revealed(word) {
                        continue;
                    }

                    if let Some(examples) = session.examples_for(word) {
                        egui::Frame::group(ui.style()).show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.label(self.theme.bold(word));
                            if examples.is_empty() {
                                ui.weak("No examples recorded for this word.");
                            } else {
                                // Bullet lines carry literal newlines; a
                                // single label keeps them intact.
                                ui.label(examples);
                            }
                        });
                        ui.add_space(6.0);
                    }
                }
            });
        });
    }
}
