use std::path::PathBuf;

use eframe::egui::{self, Color32, RichText};

use crate::imaging::IMAGE_EXTENSIONS;
use crate::state::{Notice, NoticeLevel};

// ---------------------------------------------------------------------------
// Notice modal
// ---------------------------------------------------------------------------

/// Show `notice` as a modal over the whole window; OK, Escape or a click on
/// the backdrop dismisses it.
pub fn notice_modal(ctx: &egui::Context, notice: &mut Option<Notice>) {
    let Some(current) = notice.as_ref() else {
        return;
    };

    let response = egui::Modal::new(egui::Id::new("notice_modal")).show(ctx, |ui| {
        ui.set_max_width(420.0);

        let title_color = match current.level {
            NoticeLevel::Info => Color32::LIGHT_GREEN,
            NoticeLevel::Warning => Color32::from_rgb(255, 196, 0),
        };
        ui.label(RichText::new(&current.title).strong().color(title_color));
        ui.separator();
        ui.label(&current.message);
        ui.add_space(8.0);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            ui.button("OK").clicked()
        })
        .inner
    });

    if response.inner || response.should_close() {
        *notice = None;
    }
}

// ---------------------------------------------------------------------------
// Native pickers
// ---------------------------------------------------------------------------

/// Multi-file picker for the compressor. Empty when cancelled.
pub fn pick_files() -> Vec<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Select Files")
        .pick_files()
        .unwrap_or_default()
}

pub fn pick_archive() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Select Archive")
        .add_filter("ZIP Files", &["zip"])
        .pick_file()
}

pub fn pick_folder() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Select Destination Folder")
        .pick_folder()
}

pub fn pick_image() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Browse a picture")
        .add_filter("Images", IMAGE_EXTENSIONS)
        .pick_file()
}
