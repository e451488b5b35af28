use eframe::egui::{self, Ui};

use crate::archive::naming;
use crate::state::{CompressorState, ConverterState, ExtractorState};
use crate::ui::dialog;

const BROWSE_WIDTH: f32 = 90.0;

// ---------------------------------------------------------------------------
// Shared rows
// ---------------------------------------------------------------------------

/// `label [read-only path field] [Browse]`. Returns true when Browse was clicked.
fn path_row(ui: &mut Ui, label: &str, text: &str, placeholder: &str) -> bool {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(label);
        let mut shown = text.to_string();
        ui.add(
            egui::TextEdit::singleline(&mut shown)
                .hint_text(placeholder)
                .interactive(false)
                .desired_width(ui.available_width() - BROWSE_WIDTH),
        );
        ui.button("Browse").clicked()
    })
    .inner
}

/// `[submit] [Clear] result…`. Returns (submit clicked, clear clicked).
fn action_row(ui: &mut Ui, submit: &str, result: &str) -> (bool, bool) {
    ui.horizontal(|ui: &mut Ui| {
        let submitted = ui.button(submit).clicked();
        let cleared = ui.button("Clear").clicked();
        if !result.is_empty() {
            ui.label(result);
        }
        (submitted, cleared)
    })
    .inner
}

// ---------------------------------------------------------------------------
// File compressor
// ---------------------------------------------------------------------------

pub fn compressor_form(ui: &mut Ui, state: &mut CompressorState) {
    if path_row(
        ui,
        "Select file(s): ",
        &state.files_text(),
        " No file(s) selected yet",
    ) {
        state.set_files(dialog::pick_files());
    }

    if path_row(
        ui,
        "Select destination: ",
        &state.destination_text(),
        " No destination folder selected yet",
    ) {
        if let Some(folder) = dialog::pick_folder() {
            state.set_destination(folder);
        }
    }

    let (compress, clear) = action_row(ui, "Compress", "");
    if compress {
        state.compress(naming::today());
    }
    if clear {
        state.clear();
    }
}

// ---------------------------------------------------------------------------
// Archive extractor
// ---------------------------------------------------------------------------

pub fn extractor_form(ui: &mut Ui, state: &mut ExtractorState) {
    if path_row(
        ui,
        "Select archive file: ",
        &state.archive_text(),
        " No archive file selected yet",
    ) {
        if let Some(archive) = dialog::pick_archive() {
            state.set_archive(archive);
        }
    }

    if path_row(
        ui,
        "Select destination: ",
        &state.destination_text(),
        " No destination folder selected yet",
    ) {
        if let Some(folder) = dialog::pick_folder() {
            state.set_destination(folder);
        }
    }

    let (extract, clear) = action_row(ui, "Extract", "");
    if extract {
        state.extract(naming::today());
    }
    if clear {
        state.clear();
    }
}

// ---------------------------------------------------------------------------
// Meter converter
// ---------------------------------------------------------------------------

pub fn converter_form(ui: &mut Ui, state: &mut ConverterState) {
    egui::Grid::new("converter_inputs")
        .num_columns(2)
        .spacing([10.0, 12.0])
        .show(ui, |ui: &mut Ui| {
            ui.label("Enter \"feet\" value: ");
            ui.add(egui::TextEdit::singleline(&mut state.feet).hint_text(" 0 "));
            ui.end_row();

            ui.label("Enter \"inches\" value: ");
            ui.add(egui::TextEdit::singleline(&mut state.inches).hint_text(" 0 "));
            ui.end_row();
        });

    let result = state.result.clone();
    let (convert, clear) = action_row(ui, "Convert", &result);
    if convert {
        state.convert();
    }
    if clear {
        state.clear();
    }
}
