use eframe::CreationContext;
use egui::{Align2, Context, Key, RichText, ScrollArea, TextEdit, Ui};
use log::{error, info};
use rfd::FileDialog;

use crate::error::SearchError;
use crate::matcher::MatchMode;
use crate::report;
use crate::search::Searcher;
use crate::selection::{PendingFiles, SelectionPolicy};

/// The main application state
pub struct PdfSearchApp {
    search_term: String,
    literal: bool,

    // Files for the next search; each pick replaces the previous one
    pending: PendingFiles,

    // Rendered output of the last search
    results: Option<String>,

    // Error boundary: the last fatal error waiting to be acknowledged
    error_message: Option<String>,
}

impl PdfSearchApp {
    pub fn new(cc: &CreationContext) -> Self {
        super::theme::setup_custom_theme(&cc.egui_ctx);
        Self::default()
    }

    /// Pick every PDF directly inside a directory
    fn select_directory(&mut self) {
        let Some(dir) = dialog().set_title("Choose a directory").pick_folder() else {
            return;
        };
        match self.pending.select_directory(&dir) {
            Ok(count) => info!("Selected {} PDF files from {}", count, dir.display()),
            Err(e) => self.report_error(e),
        }
    }

    /// Pick one or more PDF files
    fn select_files(&mut self) {
        if let Some(files) = dialog()
            .set_title("Choose a file")
            .add_filter("Pdf file", &["pdf"])
            .pick_files()
        {
            self.pending.select_files(files);
        }
    }

    /// Search the pending files. Blocks the window until every page is read.
    fn run_search(&mut self) {
        let files = self.pending.take();
        let mode = if self.literal {
            MatchMode::Literal
        } else {
            MatchMode::Regex
        };

        match Searcher::new().match_mode(mode).search(files, &self.search_term) {
            Ok(outcome) => {
                let mut text = report::render(&outcome.result);
                text.push_str(&report::render_skipped(&outcome.skipped));
                self.results = Some(text);
            }
            Err(e) => self.report_error(e),
        }
    }

    /// Every fatal error from collection or search ends up here
    fn report_error(&mut self, e: SearchError) {
        error!("{}", e);
        self.error_message = Some(e.to_string());
    }

    fn search_bar(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let response = ui.add(
                TextEdit::singleline(&mut self.search_term)
                    .hint_text("Enter text here")
                    .desired_width(500.0),
            );
            if ui.button("Clear").clicked() {
                self.search_term.clear();
            }
            if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                self.run_search();
            }
        });
        ui.checkbox(&mut self.literal, "Match text literally (no regular expressions)");
    }

    fn selected_files(&self, ui: &mut Ui) {
        if self.pending.is_empty() {
            ui.label(RichText::new("No files selected").italics());
            return;
        }

        ui.label(format!("{} file(s) selected", self.pending.files().len()));
        ScrollArea::both()
            .id_source("selected_files")
            .max_height(150.0)
            .show(ui, |ui| {
                for path in self.pending.files() {
                    ui.monospace(path.display().to_string());
                }
            });
    }

    fn results_panel(&self, ui: &mut Ui) {
        if let Some(results) = &self.results {
            ui.separator();
            ScrollArea::both()
                .id_source("results")
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.monospace(results.as_str());
                });
        }
    }

    fn error_window(&mut self, ctx: &Context) {
        let Some(message) = &self.error_message else {
            return;
        };

        let mut acknowledged = false;
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message.as_str());
                if ui.button("OK").clicked() {
                    acknowledged = true;
                }
            });

        if acknowledged {
            self.error_message = None;
        }
    }
}

impl Default for PdfSearchApp {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            literal: false,
            pending: PendingFiles::new(SelectionPolicy::Replace),
            results: None,
            error_message: None,
        }
    }
}

impl eframe::App for PdfSearchApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(self.error_message.is_none(), |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("What word/words are you looking for?");
                    ui.add_space(10.0);
                    self.search_bar(ui);
                    ui.add_space(10.0);

                    if ui.button("Select an entire directory").clicked() {
                        self.select_directory();
                    }
                    if ui.button("Select one or more files").clicked() {
                        self.select_files();
                    }
                    ui.add_space(10.0);

                    self.selected_files(ui);
                    ui.add_space(10.0);

                    if ui
                        .add(egui::Button::new("Search").min_size(egui::vec2(120.0, 28.0)))
                        .clicked()
                    {
                        self.run_search();
                    }
                });
                self.results_panel(ui);
            });
        });

        self.error_window(ctx);
    }
}

/// File dialog opening in the user's home directory when there is one
fn dialog() -> FileDialog {
    let dialog = FileDialog::new();
    match dirs::home_dir() {
        Some(home) => dialog.set_directory(home),
        None => dialog,
    }
}
