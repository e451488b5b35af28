use eframe::egui;

use crate::ui::theme::Theme;

// ---------------------------------------------------------------------------
// Window configuration per tool
// ---------------------------------------------------------------------------

/// Compiled-in window settings for one tool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolWindow {
    pub title: &'static str,
    pub inner_size: [f32; 2],
    pub resizable: bool,
    pub theme: Theme,
}

pub const FILE_COMPRESSOR: ToolWindow = ToolWindow {
    title: "File Compressor",
    inner_size: [600.0, 200.0],
    resizable: false,
    theme: Theme::NAVY,
};

pub const ARCHIVE_EXTRACTOR: ToolWindow = ToolWindow {
    title: "Archive Extractor",
    inner_size: [600.0, 200.0],
    resizable: false,
    theme: Theme::NAVY,
};

pub const METER_CONVERTER: ToolWindow = ToolWindow {
    title: "Meter Converter",
    inner_size: [400.0, 200.0],
    resizable: false,
    theme: Theme::SLATE,
};

pub const GRAYSCALE_CONVERTER: ToolWindow = ToolWindow {
    title: "Grayscale Image Converter",
    inner_size: [900.0, 700.0],
    resizable: true,
    theme: Theme::GRAPHITE,
};

/// Build the eframe options for `window`. Fixed-size tools get min = max = inner size.
pub fn native_options(window: &ToolWindow) -> eframe::NativeOptions {
    let mut viewport = egui::ViewportBuilder::default()
        .with_title(window.title)
        .with_inner_size(window.inner_size)
        .with_resizable(window.resizable);

    viewport = if window.resizable {
        viewport.with_min_inner_size([480.0, 360.0])
    } else {
        viewport
            .with_min_inner_size(window.inner_size)
            .with_max_inner_size(window.inner_size)
    };

    eframe::NativeOptions {
        viewport,
        ..Default::default()
    }
}

/// Run `app` in a native window configured from `window`, with the tool's theme installed.
pub fn run<A>(window: ToolWindow, app: A) -> eframe::Result
where
    A: eframe::App + 'static,
{
    let options = native_options(&window);
    eframe::run_native(
        window.title,
        options,
        Box::new(move |cc| {
            crate::ui::theme::apply(&cc.egui_ctx, &window.theme);
            Ok(Box::new(app))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_size_window() {
        let options = native_options(&METER_CONVERTER);
        assert_eq!(options.viewport.inner_size, Some(egui::vec2(400.0, 200.0)));
        assert_eq!(options.viewport.max_inner_size, Some(egui::vec2(400.0, 200.0)));
        assert_eq!(options.viewport.resizable, Some(false));
    }

    #[test]
    fn test_resizable_window() {
        let options = native_options(&GRAYSCALE_CONVERTER);
        assert_eq!(options.viewport.resizable, Some(true));
        assert_eq!(options.viewport.max_inner_size, None);
    }
}
