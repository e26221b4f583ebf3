// Breadcrumb bar rendering
// Reads navigator state and reports clicks and keys back as events

use crate::input;
use crate::style;
use crumbbar::io::FileSystem;
use crumbbar::{DisplayMode, NavEvent, NavigatorController};
use eframe::egui;

pub fn render_bar<F: FileSystem>(
    ui: &mut egui::Ui,
    nav: &NavigatorController<F>,
    separator: &str,
    focus_text: bool,
) -> Vec<NavEvent> {
    match nav.mode() {
        DisplayMode::Segmented => render_segments(ui, nav, separator),
        DisplayMode::Editing => render_editor(ui, nav, focus_text),
    }
}

fn render_segments<F: FileSystem>(
    ui: &mut egui::Ui,
    nav: &NavigatorController<F>,
    separator: &str,
) -> Vec<NavEvent> {
    let mut events = Vec::new();

    ui.horizontal(|ui| {
        ui.set_min_height(style::BAR_HEIGHT);
        // Registered first so every segment sits on top of it
        let background = ui.interact(
            ui.max_rect(),
            ui.id().with("crumb_background"),
            egui::Sense::click(),
        );
        ui.spacing_mut().item_spacing.x = style::SEGMENT_SPACING;

        let mut hovered = None;
        let mut handled = false;

        if nav.segments().is_empty() {
            ui.label(egui::RichText::new(separator).weak());
        }
        for (index, label) in nav.segments().iter().enumerate() {
            ui.label(egui::RichText::new(separator).weak());
            let button = egui::Button::new(label.as_str())
                .frame(nav.hovered() == Some(index))
                .selected(nav.selected_segment() == Some(index));
            let response = ui.add(button);
            if response.hovered() {
                hovered = Some(index);
            }
            if response.clicked() {
                handled = true;
                events.push(NavEvent::SegmentClicked(index));
            }
        }
        if hovered != nav.hovered() {
            events.push(NavEvent::SegmentHovered(hovered));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button(style::EDIT_ICON)
                .on_hover_text("Edit path (Ctrl+L)")
                .clicked()
            {
                handled = true;
                events.push(NavEvent::ToggleRequested);
            }
        });

        if background.clicked() && !handled {
            events.push(NavEvent::ToggleRequested);
        }
    });

    events
}

fn render_editor<F: FileSystem>(
    ui: &mut egui::Ui,
    nav: &NavigatorController<F>,
    focus_text: bool,
) -> Vec<NavEvent> {
    let mut events = Vec::new();

    ui.horizontal(|ui| {
        ui.set_min_height(style::BAR_HEIGHT);
        // Right to left: the toggle is laid out before the text field so its
        // click is known when the field reports lost focus
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let toggle_clicked = ui
                .button(style::EDIT_ICON)
                .on_hover_text("Back to breadcrumbs (Ctrl+L)")
                .clicked();
            if toggle_clicked {
                events.push(NavEvent::ToggleRequested);
            }

            if let Some(suffix) = nav.ghost_suffix() {
                ui.label(
                    egui::RichText::new(format!("{} {}", style::HINT_MARKER, suffix))
                        .weak()
                        .italics(),
                )
                .on_hover_text("Tab to jump here");
            }

            let mut buffer = nav.typed_text().to_string();
            let response = ui.add(
                egui::TextEdit::singleline(&mut buffer)
                    .lock_focus(true)
                    .desired_width(ui.available_width()),
            );
            if focus_text {
                response.request_focus();
            }
            if response.changed() {
                events.push(NavEvent::TextChanged(buffer));
            }
            events.extend(input::edit_field_events(ui, &response, toggle_clicked));
        });
    });

    events
}
