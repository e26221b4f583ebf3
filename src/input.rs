// Keyboard handling for the breadcrumb bar
use crumbbar::{CommitTrigger, NavEvent};
use eframe::egui;

/// Global shortcuts, independent of which widget has focus.
pub fn shortcut_events(ctx: &egui::Context) -> Vec<NavEvent> {
    let mut events = Vec::new();

    // Ctrl+L: edit the path, or leave edit mode
    if ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::L)) {
        events.push(NavEvent::ToggleRequested);
    }

    events
}

/// Keys that act on the path text field while it has focus or just lost it.
pub fn edit_field_events(
    ui: &egui::Ui,
    response: &egui::Response,
    toggle_clicked: bool,
) -> Vec<NavEvent> {
    let mut events = Vec::new();

    if response.has_focus()
        && ui.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Tab))
    {
        events.push(NavEvent::TabPressed);
    }

    // A toggle click is what stole the focus; the toggle commits by itself
    if response.lost_focus() && !toggle_clicked {
        let trigger = ui.input(|i| {
            if i.key_pressed(egui::Key::Enter) {
                CommitTrigger::Enter
            } else if i.key_pressed(egui::Key::Escape) {
                CommitTrigger::Escape
            } else {
                CommitTrigger::FocusLost
            }
        });
        events.push(NavEvent::CommitRequested(trigger));
    }

    events
}
