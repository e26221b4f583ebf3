// Directory listing for the current breadcrumb path

use crate::style;
use chrono::{DateTime, Local};
use crumbbar::entry::FileEntry;
use eframe::egui;
use egui_extras::{Column, TableBuilder};
use std::path::PathBuf;

pub enum ListingAction {
    Navigate(PathBuf),
    Open(PathBuf),
}

pub fn render_listing(ui: &mut egui::Ui, entries: &[FileEntry]) -> Option<ListingAction> {
    let mut action = None;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(style::ICON_COL_WIDTH))
        .column(Column::remainder().clip(true))
        .column(Column::initial(style::SIZE_COL_WIDTH))
        .column(Column::initial(style::MODIFIED_COL_WIDTH))
        .header(style::HEADER_HEIGHT, |mut header| {
            header.col(|_| {});
            header.col(|ui| {
                ui.strong("Name");
            });
            header.col(|ui| {
                ui.strong("Size");
            });
            header.col(|ui| {
                ui.strong("Modified");
            });
        })
        .body(|body| {
            body.rows(style::ROW_HEIGHT, entries.len(), |mut row| {
                let entry = &entries[row.index()];

                row.col(|ui| {
                    ui.label(entry.icon());
                });
                row.col(|ui| {
                    let response = style::truncated_label_with_sense(
                        ui,
                        entry.display_name(),
                        egui::Sense::click(),
                    );
                    if entry.is_dir && response.clicked() {
                        action = Some(ListingAction::Navigate(entry.path.clone()));
                    } else if !entry.is_dir && response.double_clicked() {
                        action = Some(ListingAction::Open(entry.path.clone()));
                    }
                });
                row.col(|ui| {
                    if !entry.is_dir {
                        ui.label(bytesize::ByteSize(entry.size).to_string());
                    }
                });
                row.col(|ui| {
                    let datetime: DateTime<Local> = entry.modified.into();
                    ui.label(datetime.format("%Y-%m-%d %H:%M").to_string());
                });
            });
        });

    action
}
