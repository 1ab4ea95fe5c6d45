use crate::application::BookEvent;
use crate::application::dto::BookView;

pub struct ControlBar;

impl ControlBar {
    pub fn show(ui: &mut egui::Ui, view: &BookView) -> Vec<BookEvent> {
        let mut events = Vec::new();

        ui.horizontal_wrapped(|ui| {
            let mut search_term = view.search_term.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut search_term)
                    .hint_text("Search recipes")
                    .desired_width(240.0),
            );
            if response.changed() {
                events.push(BookEvent::SearchChanged(search_term));
            }

            ui.separator();

            for button in &view.filter_buttons {
                if ui.selectable_label(button.active, button.tag).clicked() {
                    events.push(BookEvent::FilterToggled(button.tag.to_string()));
                }
            }
            if ui.button("Clear Filters").clicked() {
                events.push(BookEvent::FiltersCleared);
            }

            ui.separator();

            if ui
                .selectable_label(view.show_favorites_only, view.favorites_button_label)
                .clicked()
            {
                events.push(BookEvent::ShowFavoritesToggled);
            }
            ui.label(format!("★ {}", view.favorite_count));
        });

        events
    }
}
