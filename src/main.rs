mod application;
mod domain;
mod infrastructure;
mod presentation;

use application::RecipeBook;
use application::use_cases::LoadRecipes;
use domain::entities::AppConfig;
use domain::repositories::RecipeRepository;
use infrastructure::{ConfigRepository, EmbeddedRecipeRepository};
use presentation::services::init_log_capture;
use presentation::style::configure_style;
use presentation::ui::RecipeBookApp;
use std::sync::Arc;

fn main() -> eframe::Result<()> {
    let log_rx = init_log_capture();

    let config_repository = ConfigRepository::new();
    let config = config_repository.load().unwrap_or_else(|e| {
        tracing::error!("Failed to load settings, using defaults: {:#}", e);
        AppConfig::default()
    });

    let repository: Arc<dyn RecipeRepository> = Arc::new(EmbeddedRecipeRepository::new());
    let recipes = LoadRecipes::new(repository).execute().unwrap_or_else(|e| {
        tracing::error!("Failed to load recipes: {:#}", e);
        Vec::new()
    });
    let book = RecipeBook::new(recipes);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 760.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Recipe Book",
        options,
        Box::new(move |cc| {
            configure_style(&cc.egui_ctx, config.theme);
            Ok(Box::new(RecipeBookApp::new(
                book,
                config,
                config_repository,
                log_rx,
            )))
        }),
    )
}
