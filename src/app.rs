use std::path::PathBuf;

use crate::io;
use crate::model::{Entry, EntryFilter, EntryStore, Priority};
use crate::ui;

/// Which of the two screens is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    NewTask,
}

/// Main application state.
pub struct TodoApp {
    pub store: EntryStore,
    pub filter: EntryFilter,
    pub view: View,
    pub data_path: PathBuf,

    // New-task form state
    pub new_task_description: String,
    pub new_task_priority: Priority,

    // Status message
    pub status_message: String,
}

impl TodoApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        Self::with_data_path(io::default_data_path())
    }

    pub fn with_data_path(data_path: PathBuf) -> Self {
        let entries = io::load_entries(&data_path);
        let mut store = EntryStore::from_entries(entries, crate::model::DEFAULT_CAPACITY);
        store.sort_by_priority();
        log::info!(
            "loaded {} tasks from {}",
            store.len(),
            data_path.display()
        );

        Self {
            store,
            filter: EntryFilter::All,
            view: View::Dashboard,
            data_path,
            new_task_description: String::new(),
            new_task_priority: Priority::Low,
            status_message: "Ready".to_string(),
        }
    }

    /// Rewrite the whole list to disk. Runs after every mutation; failure is
    /// reported on the status line and in the log, never interrupts the loop.
    fn persist(&mut self) {
        if let Err(err) = io::save_entries(self.store.entries(), &self.data_path) {
            log::error!("{}", err);
            self.status_message = format!("Save failed: {}", err);
        }
    }

    // --- Entry operations ---

    pub fn open_new_task_form(&mut self) {
        self.reset_form_fields();
        self.view = View::NewTask;
    }

    pub fn reset_form_fields(&mut self) {
        self.new_task_description.clear();
        self.new_task_priority = Priority::Low;
    }

    pub fn add_entry_from_form(&mut self) {
        let description = self.new_task_description.trim().to_string();
        if description.is_empty() {
            return;
        }
        let entry = Entry::new(description, self.new_task_priority);
        match self.store.append(entry) {
            Ok(()) => {
                self.store.sort_by_priority();
                self.persist();
                self.reset_form_fields();
                self.view = View::Dashboard;
                self.status_message = "Task added".to_string();
            }
            Err(err) => {
                log::warn!("{}", err);
                self.status_message = format!("Cannot add: {}", err);
            }
        }
    }

    pub fn delete_entry(&mut self, index: usize) {
        match self.store.remove_at(index) {
            Ok(removed) => {
                self.persist();
                self.status_message = format!("Deleted '{}'", removed.description);
            }
            Err(err) => log::warn!("{}", err),
        }
    }

    pub fn toggle_completed(&mut self, index: usize) {
        let Some(completed) = self.store.get(index).map(|e| e.completed) else {
            return;
        };
        if self.store.set_completed(index, !completed).is_ok() {
            self.persist();
            self.status_message = if completed {
                "Marked in progress".to_string()
            } else {
                "Marked completed".to_string()
            };
        }
    }

    pub fn cycle_priority(&mut self, index: usize) {
        if self.store.advance_priority(index).is_ok() {
            self.persist();
            self.status_message = "Priority changed".to_string();
        }
    }

    pub fn start_edit(&mut self, index: usize) {
        // Only one row edits at a time; any other open edit is discarded.
        let open: Vec<usize> = self
            .store
            .entries()
            .iter()
            .enumerate()
            .filter(|(i, e)| e.editing && *i != index)
            .map(|(i, _)| i)
            .collect();
        for i in open {
            let _ = self.store.cancel_edit(i);
        }
        let _ = self.store.begin_edit(index);
    }

    pub fn cancel_edit(&mut self, index: usize) {
        let _ = self.store.cancel_edit(index);
    }

    pub fn commit_edit(&mut self, index: usize) {
        // An empty description is not committed; keep editing instead.
        let buffer_ok = self
            .store
            .get(index)
            .map(|e| !e.edit_buffer.trim().is_empty())
            .unwrap_or(false);
        if !buffer_ok {
            return;
        }
        if self.store.commit_edit(index).is_ok() {
            self.persist();
            self.status_message = "Description updated".to_string();
        }
    }
}

impl eframe::App for TodoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx);

        // Top panel: title + navigation
        egui::TopBottomPanel::top("topbar")
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_DARK)
                    .inner_margin(egui::Margin::symmetric(16.0, 12.0)),
            )
            .show(ctx, |ui| {
                ui::topbar::show_topbar(self, ui);
            });

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(24.0)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_PANEL)
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.status_message)
                            .font(ui::theme::font_status())
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!("Tasks: {}", self.store.len()))
                                .font(ui::theme::font_status())
                                .color(ui::theme::TEXT_DIM),
                        );
                    });
                });
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_DARK)
                    .inner_margin(egui::Margin::symmetric(16.0, 8.0)),
            )
            .show(ctx, |ui| match self.view {
                View::Dashboard => {
                    ui::filter_bar::show_filter_bar(&mut self.filter, ui);
                    ui.add_space(6.0);

                    let action =
                        ui::entry_list::show_entry_list(&mut self.store, self.filter, ui);
                    match action {
                        ui::entry_list::EntryListAction::ToggleCompleted(i) => {
                            self.toggle_completed(i)
                        }
                        ui::entry_list::EntryListAction::CyclePriority(i) => {
                            self.cycle_priority(i)
                        }
                        ui::entry_list::EntryListAction::StartEdit(i) => self.start_edit(i),
                        ui::entry_list::EntryListAction::CommitEdit(i) => self.commit_edit(i),
                        ui::entry_list::EntryListAction::CancelEdit(i) => self.cancel_edit(i),
                        ui::entry_list::EntryListAction::Delete(i) => self.delete_entry(i),
                        ui::entry_list::EntryListAction::None => {}
                    }
                }
                View::NewTask => {
                    ui::new_task::show_new_task(self, ui);
                }
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Final flush; every mutation already saved, this covers the tail end.
        if let Err(err) = io::save_entries(self.store.entries(), &self.data_path) {
            log::error!("final save failed: {}", err);
        }
    }
}
