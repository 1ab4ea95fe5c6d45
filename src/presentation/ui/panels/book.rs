use crate::application::BookEvent;
use crate::application::dto::BookView;
use crate::presentation::components::{ControlBar, RecipeCard};
use eframe::egui;

pub struct BookPanel;

impl BookPanel {
    pub fn show(ui: &mut egui::Ui, view: &BookView) -> Vec<BookEvent> {
        let mut events = ControlBar::show(ui, view);

        ui.separator();

        if view.cards.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(60.0);
                if view.total_count == 0 {
                    ui.label("No recipes available.");
                } else {
                    ui.label("No recipes match the current search and filters.");
                }
            });
            return events;
        }

        ui.label(
            egui::RichText::new(format!(
                "Showing {} of {} recipes",
                view.cards.len(),
                view.total_count
            ))
            .small()
            .weak(),
        );

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for card in &view.cards {
                    ui.push_id(card.id.0, |ui| {
                        if let Some(event) = RecipeCard::show(ui, card) {
                            events.push(event);
                        }
                    });
                }
            });

        events
    }
}
