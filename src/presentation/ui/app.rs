use crate::application::RecipeBook;
use crate::domain::entities::{AppConfig, ThemeMode};
use crate::infrastructure::ConfigRepository;
use crate::presentation::components::{LogEntry, LogManager};
use crate::presentation::style::configure_style;
use crate::presentation::ui::panels::{BookPanel, LogAction, LogPanel};
use std::sync::mpsc::Receiver;

/// Page shell: header, footer and the mounted recipe book.
pub struct RecipeBookApp {
    book: RecipeBook,
    config: AppConfig,
    config_repository: ConfigRepository,
    log_manager: LogManager,
    log_rx: Receiver<LogEntry>,
}

impl RecipeBookApp {
    pub fn new(
        book: RecipeBook,
        config: AppConfig,
        config_repository: ConfigRepository,
        log_rx: Receiver<LogEntry>,
    ) -> Self {
        Self {
            book,
            config,
            config_repository,
            log_manager: LogManager::new(),
            log_rx,
        }
    }

    fn poll_logs(&mut self) {
        while let Ok(entry) = self.log_rx.try_recv() {
            self.log_manager.push(entry);
        }
    }

    fn save_config(&self) {
        match self.config_repository.save(&self.config) {
            Ok(()) => tracing::debug!("Saved settings"),
            Err(e) => tracing::error!("Failed to save settings: {:#}", e),
        }
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        let mut theme_changed = false;
        let mut log_toggled = false;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.heading("Recipe Book");
                ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    log_toggled = ui
                        .checkbox(&mut self.config.show_activity_log, "Activity log")
                        .changed();

                    egui::ComboBox::new("theme_combo", "")
                        .selected_text(format!("{:?}", self.config.theme))
                        .show_ui(ui, |ui| {
                            for (mode, label) in [
                                (ThemeMode::System, "System"),
                                (ThemeMode::Light, "Light"),
                                (ThemeMode::Dark, "Dark"),
                            ] {
                                theme_changed |= ui
                                    .selectable_value(&mut self.config.theme, mode, label)
                                    .changed();
                            }
                        });
                    ui.label("Theme:");
                });
            });
            ui.add_space(4.0);
        });

        if theme_changed {
            tracing::info!("Switched theme to {:?}", self.config.theme);
            configure_style(ctx, self.config.theme);
        }
        if theme_changed || log_toggled {
            self.save_config();
        }
    }

    fn show_footer(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            if self.config.show_activity_log {
                ui.add_space(4.0);
                for action in LogPanel::show(ui, &mut self.log_manager) {
                    match action {
                        LogAction::CopyAll => ctx.copy_text(self.log_manager.export_text()),
                        LogAction::Clear => self.log_manager.clear(),
                    }
                }
                ui.separator();
            }

            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("© 2023 Recipe Book").small().weak());
            });
            ui.add_space(4.0);
        });
    }
}

impl eframe::App for RecipeBookApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_logs();

        self.show_header(ctx);
        self.show_footer(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            let view = self.book.view();
            for event in BookPanel::show(ui, &view) {
                self.book.handle(event);
            }
        });
    }
}
