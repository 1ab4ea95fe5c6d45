use crate::presentation::components::{LogLevel, LogManager};
use eframe::egui;

pub enum LogAction {
    CopyAll,
    Clear,
}

pub struct LogPanel;

impl LogPanel {
    pub fn show(ui: &mut egui::Ui, log_manager: &mut LogManager) -> Vec<LogAction> {
        let mut actions = Vec::new();

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Activity").strong());
            ui.separator();
            if ui.button("📋 Copy All").clicked() {
                actions.push(LogAction::CopyAll);
            }
            if ui.button("🗑 Clear").clicked() {
                actions.push(LogAction::Clear);
            }
            ui.separator();

            for (level, label) in [
                (LogLevel::Debug, "Debug"),
                (LogLevel::Info, "Info"),
                (LogLevel::Warn, "Warn"),
                (LogLevel::Error, "Error"),
            ] {
                let mut visible = log_manager.is_level_visible(level);
                if ui.checkbox(&mut visible, label).changed() {
                    log_manager.set_level_visible(level, visible);
                }
            }
        });

        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .stick_to_bottom(true)
            .max_height(160.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                for entry in log_manager.filtered_logs() {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(format!("[{}]", entry.format_timestamp()))
                                .color(egui::Color32::GRAY)
                                .monospace(),
                        );
                        ui.monospace(level_tag(entry.level));
                        ui.monospace(&entry.message);
                    });
                }
            });

        actions
    }
}

fn level_tag(level: LogLevel) -> egui::RichText {
    let (text, color) = match level {
        LogLevel::Debug => ("DEBUG", egui::Color32::GRAY),
        LogLevel::Info => ("INFO ", egui::Color32::from_rgb(0, 200, 0)),
        LogLevel::Warn => ("WARN ", egui::Color32::from_rgb(255, 165, 0)),
        LogLevel::Error => ("ERROR", egui::Color32::from_rgb(255, 0, 0)),
    };
    egui::RichText::new(text).color(color).monospace()
}
