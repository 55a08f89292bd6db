use ratatui::style::Color;

use crate::grid::{ActionVariant, StatusTone};

pub const ACCENT: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

pub fn status_color(tone: StatusTone) -> Color {
    match tone {
        StatusTone::Active => STATUS_OK,
        StatusTone::Inactive => STATUS_ERROR,
        StatusTone::Neutral => MUTED_TEXT,
    }
}

pub fn action_color(variant: ActionVariant) -> Color {
    match variant {
        ActionVariant::Default => HEADER_TEXT,
        ActionVariant::Primary => ACCENT,
        ActionVariant::Danger => STATUS_ERROR,
    }
}
