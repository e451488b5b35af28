use eframe::egui;

use crate::state::{CompressorState, ConverterState, ExtractorState, GrayscaleState};
use crate::ui::images::{self, PairTextures};
use crate::ui::{dialog, panels};

// ---------------------------------------------------------------------------
// eframe App implementations, one per tool
// ---------------------------------------------------------------------------

const FORM_TOP_PADDING: f32 = 20.0;

#[derive(Default)]
pub struct CompressorApp {
    pub state: CompressorState,
}

impl eframe::App for CompressorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(FORM_TOP_PADDING);
            panels::compressor_form(ui, &mut self.state);
        });
        dialog::notice_modal(ctx, &mut self.state.notice);
    }
}

#[derive(Default)]
pub struct ExtractorApp {
    pub state: ExtractorState,
}

impl eframe::App for ExtractorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(FORM_TOP_PADDING);
            panels::extractor_form(ui, &mut self.state);
        });
        dialog::notice_modal(ctx, &mut self.state.notice);
    }
}

#[derive(Default)]
pub struct ConverterApp {
    pub state: ConverterState,
}

impl eframe::App for ConverterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(FORM_TOP_PADDING);
            panels::converter_form(ui, &mut self.state);
        });
        dialog::notice_modal(ctx, &mut self.state.notice);
    }
}

#[derive(Default)]
pub struct GrayscaleApp {
    pub state: GrayscaleState,
    textures: Option<PairTextures>,
}

impl eframe::App for GrayscaleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        images::sync_textures(ctx, &self.state, &mut self.textures);
        let revision = self.state.revision;

        egui::CentralPanel::default().show(ctx, |ui| {
            images::grayscale_page(ui, &mut self.state, self.textures.as_ref());
        });

        // New image this frame: redraw so its textures get uploaded.
        if self.state.revision != revision {
            ctx.request_repaint();
        }
    }
}
