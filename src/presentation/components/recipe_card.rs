use crate::application::BookEvent;
use crate::application::dto::RecipeCardView;
use egui::{Color32, RichText};

pub struct RecipeCard;

impl RecipeCard {
    /// Paints one card. Favorite status comes from the book's favorite set via
    /// `card.is_favorite`; the card keeps no state of its own.
    pub fn show(ui: &mut egui::Ui, card: &RecipeCardView) -> Option<BookEvent> {
        let mut event = None;

        egui::Frame::group(ui.style())
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.set_width(140.0);
                        ui.label(RichText::new("🖼").size(48.0))
                            .on_hover_text(&card.image_name);
                        ui.label(RichText::new(&card.image_name).small().weak());
                    });

                    ui.vertical(|ui| {
                        ui.heading(&card.name);
                        ui.label(&card.description);
                        ui.label(RichText::new(&card.time_line).color(Color32::GRAY));
                        ui.label(RichText::new(&card.dietary_line).italics());

                        let label = if card.is_favorite {
                            RichText::new(card.favorite_button_label)
                                .color(Color32::from_rgb(255, 200, 0))
                        } else {
                            RichText::new(card.favorite_button_label)
                        };
                        if ui.button(label).clicked() {
                            event = Some(BookEvent::FavoriteToggled(card.id));
                        }
                    });
                });
            });

        event
    }
}
