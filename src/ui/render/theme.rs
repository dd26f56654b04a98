use ratatui::style::{Color, Modifier, Style};

use crate::fade::OPAQUE;

pub(super) const UI_MARGIN: u16 = 1;
pub(super) const DEFAULT_TERMINAL_WIDTH: u16 = 80;
pub(super) const OVERLAY_BG_RGB: (u8, u8, u8) = (0x0a, 0x0a, 0x0a);
pub(super) const OVERLAY_TEXT_RGB: (u8, u8, u8) = (0xff, 0xff, 0xff);
/// Below this alpha, monochrome terminals show text dimmed.
pub(super) const DIM_THRESHOLD: u8 = 0xc0;

pub(super) const fn rgb(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub(super) fn app_background_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().bg(rgb(OVERLAY_BG_RGB))
    }
}

/// Style for overlay text drawn at `alpha`.
pub(super) fn text_style(no_color: bool, alpha: u8) -> Style {
    if no_color {
        if alpha < DIM_THRESHOLD {
            Style::default().add_modifier(Modifier::DIM)
        } else {
            Style::default()
        }
    } else {
        app_background_style(no_color).fg(blend(OVERLAY_BG_RGB, OVERLAY_TEXT_RGB, alpha))
    }
}

/// Mixes `fg` over `bg` at `alpha`.
pub(super) fn blend(bg: (u8, u8, u8), fg: (u8, u8, u8), alpha: u8) -> Color {
    let weight = i32::from(alpha);
    let denom = i32::from(OPAQUE);
    let lerp = |a: u8, b: u8| -> u8 {
        let a = i32::from(a);
        let b = i32::from(b);
        let value = b
            .checked_sub(a)
            .and_then(|delta| delta.checked_mul(weight))
            .and_then(|scaled| scaled.checked_div(denom))
            .and_then(|step| a.checked_add(step))
            .unwrap_or(a);
        u8::try_from(value.clamp(0, 255)).unwrap_or(0)
    };
    Color::Rgb(lerp(bg.0, fg.0), lerp(bg.1, fg.1), lerp(bg.2, fg.2))
}
