use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_config(mode: &str) -> Self {
        match mode {
            "light" => Self::Light,
            "dark" => Self::Dark,
            other => {
                log::warn!("unknown theme {:?}, using dark", other);
                Self::Dark
            }
        }
    }

    pub fn apply(&self, ctx: &egui::Context) {
        match self {
            Self::Light => ctx.set_visuals(egui::Visuals::light()),
            Self::Dark => ctx.set_visuals(egui::Visuals::dark()),
        }
    }
}

// --- Breadcrumb bar ---
pub const BAR_HEIGHT: f32 = 25.0;
pub const SEGMENT_SPACING: f32 = 1.0;
pub const HINT_MARKER: &str = "\u{21e5}";
pub const EDIT_ICON: &str = "\u{270f}";

// --- Listing ---
pub const ICON_COL_WIDTH: f32 = 30.0;
pub const SIZE_COL_WIDTH: f32 = 80.0;
pub const MODIFIED_COL_WIDTH: f32 = 130.0;
pub const ROW_HEIGHT: f32 = 24.0;
pub const HEADER_HEIGHT: f32 = 20.0;

/// Render a label that truncates overflowing text with an ellipsis and uses the provided sense.
pub fn truncated_label_with_sense(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
    sense: egui::Sense,
) -> egui::Response {
    ui.add(egui::Label::new(text).truncate().sense(sense))
}
