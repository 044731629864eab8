//! Theme and accent handling for the egui visuals.

use egui::{Color32, Context, Visuals};
use launchdeck_core::color::{hex_to_hsl, hsl_to_rgb, Hsl};
use launchdeck_core::{AppSettings, ThemePreference};

/// Fallback accent when the stored hex string does not parse.
const FALLBACK_ACCENT: Hsl = Hsl {
    h: 217.2,
    s: 0.912,
    l: 0.598,
};

/// Resolves the effective dark/light flag. The system preference is sampled
/// once at startup and carried along unchanged.
pub fn resolve_dark(theme: ThemePreference, system_dark: bool) -> bool {
    match theme {
        ThemePreference::Light => false,
        ThemePreference::Dark => true,
        ThemePreference::System => system_dark,
    }
}

/// Returns the accent fill color and a lighter focus-ring variant derived
/// from it in HSL space.
pub fn accent_colors(accent_hex: &str) -> (Color32, Color32) {
    let hsl = match hex_to_hsl(accent_hex) {
        Ok(hsl) => hsl,
        Err(err) => {
            log::warn!("invalid accent color {accent_hex:?}: {err}");
            FALLBACK_ACCENT
        }
    };
    let (r, g, b) = hsl_to_rgb(hsl);
    let ring = hsl.with_lightness((hsl.l + 0.18).min(0.9));
    let (rr, rg, rb) = hsl_to_rgb(ring);
    (
        Color32::from_rgb(r, g, b),
        Color32::from_rgb(rr, rg, rb),
    )
}

/// Applies theme, accent and zoom from the current settings to the context.
pub fn apply_appearance(ctx: &Context, settings: &AppSettings, system_dark: bool) {
    let mut visuals = if resolve_dark(settings.theme, system_dark) {
        Visuals::dark()
    } else {
        Visuals::light()
    };
    let (accent, ring) = accent_colors(&settings.accent_color);
    visuals.selection.bg_fill = accent;
    visuals.selection.stroke.color = ring;
    visuals.hyperlink_color = accent;
    visuals.widgets.active.bg_stroke.color = ring;
    ctx.set_visuals(visuals);
    ctx.set_zoom_factor(f32::from(settings.zoom_level) / 100.0);
}
