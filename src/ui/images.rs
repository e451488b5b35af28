use eframe::egui::{self, Color32, RichText, TextureHandle, TextureOptions, Ui};

use crate::camera;
use crate::imaging;
use crate::state::{GrayscaleState, SourceMode};
use crate::ui::dialog;

// ---------------------------------------------------------------------------
// GPU textures for the current image pair
// ---------------------------------------------------------------------------

/// Textures uploaded for one revision of [`GrayscaleState::pair`].
pub struct PairTextures {
    revision: u64,
    original: TextureHandle,
    grayscale: TextureHandle,
}

/// Upload (or drop) textures so they match the state's current pair.
pub fn sync_textures(ctx: &egui::Context, state: &GrayscaleState, textures: &mut Option<PairTextures>) {
    let Some(pair) = &state.pair else {
        *textures = None;
        return;
    };
    if textures.as_ref().is_some_and(|t| t.revision == state.revision) {
        return;
    }

    // egui refuses textures larger than the GPU allows on either side.
    let max_side = ctx.input(|i| i.max_texture_side);
    let max_side = u32::try_from(max_side).unwrap_or(u32::MAX);

    let original = ctx.load_texture(
        "original",
        imaging::to_color_image(&pair.original, max_side),
        TextureOptions::LINEAR,
    );
    let grayscale = ctx.load_texture(
        "grayscale",
        imaging::gray_to_color_image(&pair.grayscale, max_side),
        TextureOptions::LINEAR,
    );
    *textures = Some(PairTextures {
        revision: state.revision,
        original,
        grayscale,
    });
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// Render the grayscale converter page.
pub fn grayscale_page(ui: &mut Ui, state: &mut GrayscaleState, textures: Option<&PairTextures>) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading("Grayscale Image Converter");
    });
    ui.add_space(8.0);

    ui.columns(4, |cols: &mut [Ui]| {
        let capture = egui::Button::new("Capture Image").selected(state.mode == SourceMode::Capture);
        if cols[1].add(capture).clicked() {
            state.select_mode(SourceMode::Capture);
        }
        let browse = egui::Button::new("Browse Image").selected(state.mode == SourceMode::Upload);
        if cols[2].add(browse).clicked() {
            state.select_mode(SourceMode::Upload);
        }
    });
    ui.separator();

    match state.mode {
        SourceMode::Capture => capture_section(ui, state),
        SourceMode::Upload => upload_section(ui, state),
    }

    if let Some(err) = &state.error {
        ui.label(RichText::new(err).color(Color32::RED));
    }

    if let (Some(pair), Some(tex)) = (&state.pair, textures) {
        let (w, h) = pair.dimensions();
        ui.label(RichText::new(format!("{}  ({w}×{h})", pair.source)).weak());
        side_by_side(ui, tex);
    }
}

fn capture_section(ui: &mut Ui, state: &mut GrayscaleState) {
    ui.heading("Capture a picture");
    egui::CollapsingHeader::new("Start camera")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            if !camera::is_available() {
                ui.label(
                    RichText::new("This build has no camera support.").color(Color32::LIGHT_RED),
                );
            }
            ui.horizontal(|ui: &mut Ui| {
                ui.label("Camera");
                ui.add(egui::DragValue::new(&mut state.camera_index).range(0..=9));
                if ui.button("Take photo").clicked() {
                    state.capture();
                }
            });
        });
}

fn upload_section(ui: &mut Ui, state: &mut GrayscaleState) {
    ui.heading("Browse a picture");
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Browse…").clicked() {
            if let Some(path) = dialog::pick_image() {
                state.upload(&path);
            }
        }
        ui.label(RichText::new("jpg, jpeg or png").weak());
    });
}

/// Original on the left, grayscale on the right, each scaled to its column.
fn side_by_side(ui: &mut Ui, tex: &PairTextures) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.columns(2, |cols: &mut [Ui]| {
                cols[0].strong("Original:");
                let width = cols[0].available_width();
                cols[0].add(egui::Image::new(&tex.original).max_width(width));

                cols[1].strong("Grayscale:");
                let width = cols[1].available_width();
                cols[1].add(egui::Image::new(&tex.grayscale).max_width(width));
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbImage};

    #[test]
    fn test_texture_larger_than_gpu_limit_is_downscaled() {
        let ctx = egui::Context::default();
        let max_side = ctx.input(|i| i.max_texture_side);

        let mut state = GrayscaleState::default();
        let too_wide = u32::try_from(max_side).unwrap() + 1;
        state.set_image(DynamicImage::ImageRgb8(RgbImage::new(too_wide, 10)), "panorama.png");

        let mut textures = None;
        sync_textures(&ctx, &state, &mut textures);

        let tex = textures.unwrap();
        assert!(tex.original.size()[0] <= max_side);
        assert!(tex.grayscale.size()[0] <= max_side);
        assert_eq!(tex.revision, state.revision);
    }

    #[test]
    fn test_textures_dropped_with_pair() {
        let ctx = egui::Context::default();
        let mut state = GrayscaleState::default();
        state.set_image(DynamicImage::ImageRgb8(RgbImage::new(4, 4)), "small.png");

        let mut textures = None;
        sync_textures(&ctx, &state, &mut textures);
        assert!(textures.is_some());

        state.select_mode(SourceMode::Capture);
        sync_textures(&ctx, &state, &mut textures);
        assert!(textures.is_none());
    }
}
