use std::path::Path;

use eframe::egui;
use wordmine::{
    gui::app::{
        QuizStyle,
        WordmineApp,
    },
    persistence,
    quiz::QuizSession,
};

fn main() -> eframe::Result<()> {
    // Load failures are shown in-page rather than killing the process.
    let session = persistence::load_vocab(Path::new(persistence::VOCAB_FILE))
        .and_then(|entries| QuizSession::new(entries, &mut rand::rng()));

    let style = match std::env::var_os("WORDMINE_PLAIN") {
        Some(_) => QuizStyle::Plain,
        None => QuizStyle::Themed,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([580.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Wordmine",
        options,
        Box::new(move |cc| Ok(Box::new(WordmineApp::new(cc, session, style)))),
    )
}
