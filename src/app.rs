use crate::input;
use crate::style::Theme;
use crate::view::{self, ListingAction};
use crumbbar::config::Config;
use crumbbar::entry::FileEntry;
use crumbbar::io::{self, FileSystem, HintRequest, HintResponse, LocalFileSystem};
use crumbbar::{NavEvent, NavigatorController, PathModel};
use eframe::egui;
use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::mpsc::{Receiver, Sender};

pub struct CrumbBar {
    pub navigator: NavigatorController<LocalFileSystem>,
    pub config: Config,

    // Listing of the current path
    pub entries: Vec<FileEntry>,
    pub error_message: Option<String>,
    needs_refresh: Rc<Cell<bool>>,

    // Background hint lookups
    hint_tx: Sender<HintRequest>,
    hint_rx: Receiver<HintResponse>,
}

impl CrumbBar {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config, start_path: PathBuf) -> Self {
        Theme::from_config(&config.theme.mode).apply(&cc.egui_ctx);

        let resolver = config.hints.resolver();
        let model = PathModel::new(&start_path).unwrap_or_else(|e| {
            log::warn!("{}; starting at /", e);
            PathModel::root()
        });
        let mut navigator = NavigatorController::with_model(LocalFileSystem, model)
            .with_hints(resolver)
            .with_commit_requires_directory(config.navigator.commit_requires_directory);

        let needs_refresh = Rc::new(Cell::new(true));
        let flag = needs_refresh.clone();
        navigator.on_path_changed(move |_| flag.set(true));

        let ctx = cc.egui_ctx.clone();
        let (hint_tx, hint_rx) = io::spawn_hint_worker(
            LocalFileSystem,
            resolver.unwrap_or_default(),
            move || ctx.request_repaint(),
        );

        Self {
            navigator,
            config,
            entries: Vec::new(),
            error_message: None,
            needs_refresh,
            hint_tx,
            hint_rx,
        }
    }

    pub fn title(&self) -> String {
        let current = self.navigator.current_path();
        let name = self
            .navigator
            .filesystem()
            .leaf_name(current)
            .unwrap_or_else(|| current.display().to_string());
        format!("crumbbar - {}", name)
    }

    fn dispatch(&mut self, event: NavEvent) {
        match event {
            NavEvent::TextChanged(text) => {
                if let Some(request) = self.navigator.begin_text_edit(text) {
                    if self.hint_tx.send(request).is_err() {
                        log::warn!("hint worker has stopped");
                    }
                }
            }
            other => {
                if let Err(e) = self.navigator.handle(other) {
                    self.error_message = Some(e.to_string());
                }
            }
        }
    }

    fn receive_hints(&mut self) {
        while let Ok(response) = self.hint_rx.try_recv() {
            self.navigator.apply_hint(response);
        }
    }

    fn refresh_entries(&mut self) {
        let path = self.navigator.current_path().to_path_buf();
        match io::read_directory(
            &path,
            self.config.listing.show_hidden,
            self.config.listing.dirs_first,
        ) {
            Ok(entries) => {
                self.entries = entries;
                self.error_message = None;
            }
            Err(e) => {
                self.entries.clear();
                self.error_message = Some(format!("Error reading {}: {}", path.display(), e));
            }
        }
    }

    fn navigate_to(&mut self, path: &Path) {
        if let Err(e) = self.navigator.navigate_to(path) {
            self.error_message = Some(e.to_string());
        }
    }

    fn open_file(&mut self, path: &Path) {
        if let Err(e) = open::that(path) {
            self.error_message = Some(format!("Could not open file: {}", e));
        }
    }
}

impl eframe::App for CrumbBar {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.receive_hints();
        for event in input::shortcut_events(ctx) {
            self.dispatch(event);
        }

        // --- Top Bar ---
        let mut bar_events = Vec::new();
        let focus_text = self.navigator.take_focus_request();
        egui::TopBottomPanel::top("breadcrumb_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            bar_events = view::render_bar(
                ui,
                &self.navigator,
                &self.config.navigator.separator,
                focus_text,
            );
            ui.add_space(4.0);
        });
        for event in bar_events {
            self.dispatch(event);
        }

        if self.needs_refresh.replace(false) {
            self.refresh_entries();
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(self.title()));
        }

        // --- Bottom Bar ---
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("{} items", self.entries.len()));
                if let Some(err) = &self.error_message {
                    ui.colored_label(egui::Color32::RED, format!(" | {}", err));
                }
            });
        });

        // --- Listing ---
        let mut action = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    action = view::render_listing(ui, &self.entries);
                });
        });
        match action {
            Some(ListingAction::Navigate(path)) => self.navigate_to(&path),
            Some(ListingAction::Open(path)) => self.open_file(&path),
            None => {}
        }
    }
}
