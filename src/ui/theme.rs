use eframe::egui::{self, Color32, FontId, TextStyle};
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Per-tool colour theme
// ---------------------------------------------------------------------------

/// Flat dark theme: one background colour, one accent for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: [u8; 3],
    pub accent: [u8; 3],
}

impl Theme {
    pub const NAVY: Theme = Theme {
        background: [0x0F, 0x10, 0x35],
        accent: [0x36, 0x54, 0x86],
    };

    pub const SLATE: Theme = Theme {
        background: [0x34, 0x49, 0x55],
        accent: [0xFF, 0x57, 0x33],
    };

    pub const GRAPHITE: Theme = Theme {
        background: [0x1E, 0x1E, 0x2E],
        accent: [0x36, 0x54, 0x86],
    };

    pub fn background(&self) -> Color32 {
        to_color32(self.background)
    }

    pub fn accent(&self) -> Color32 {
        to_color32(self.accent)
    }
}

/// Shift the HSL lightness of `rgb` by `delta` (−1.0‥1.0), clamped.
pub fn shade(rgb: [u8; 3], delta: f32) -> Color32 {
    let srgb: Srgb = Srgb::new(rgb[0], rgb[1], rgb[2]).into_format();
    let mut hsl: Hsl = srgb.into_color();
    hsl.lightness = (hsl.lightness + delta).clamp(0.0, 1.0);
    let out: Srgb = hsl.into_color();
    let out: Srgb<u8> = out.into_format();
    Color32::from_rgb(out.red, out.green, out.blue)
}

fn to_color32(rgb: [u8; 3]) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// Install the theme: dark visuals, white 16px text, accent-filled buttons.
pub fn apply(ctx: &egui::Context, theme: &Theme) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = theme.background();
    visuals.window_fill = shade(theme.background, 0.06);
    visuals.extreme_bg_color = shade(theme.background, -0.04);
    visuals.override_text_color = Some(Color32::WHITE);

    visuals.widgets.inactive.weak_bg_fill = theme.accent();
    visuals.widgets.inactive.bg_fill = theme.accent();
    visuals.widgets.hovered.weak_bg_fill = shade(theme.accent, 0.08);
    visuals.widgets.hovered.bg_fill = shade(theme.accent, 0.08);
    visuals.widgets.active.weak_bg_fill = shade(theme.accent, -0.08);
    visuals.widgets.active.bg_fill = shade(theme.accent, -0.08);
    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        style
            .text_styles
            .insert(TextStyle::Body, FontId::proportional(16.0));
        style
            .text_styles
            .insert(TextStyle::Button, FontId::proportional(16.0));
        style
            .text_styles
            .insert(TextStyle::Heading, FontId::proportional(26.0));
        style.spacing.item_spacing = egui::vec2(10.0, 12.0);
        style.spacing.button_padding = egui::vec2(12.0, 4.0);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shade_lightens_and_darkens() {
        let base = Theme::NAVY.accent;
        let lighter = shade(base, 0.2);
        let darker = shade(base, -0.2);
        let sum = |c: Color32| c.r() as u32 + c.g() as u32 + c.b() as u32;
        assert!(sum(lighter) > sum(Theme::NAVY.accent()));
        assert!(sum(darker) < sum(Theme::NAVY.accent()));
    }

    #[test]
    fn test_shade_clamps() {
        assert_eq!(shade([10, 20, 30], 5.0), Color32::WHITE);
        assert_eq!(shade([10, 20, 30], -5.0), Color32::BLACK);
    }

    #[test]
    fn test_zero_shift_is_identity() {
        assert_eq!(shade([0xFF, 0x57, 0x33], 0.0), Color32::from_rgb(0xFF, 0x57, 0x33));
    }
}
