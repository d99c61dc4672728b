mod app;
mod components;
mod dialogs;
mod screens;
mod theme;
mod utils;

use stagehand_app_core::StudioApplication;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

pub fn run() -> eframe::Result<()> {
    setup_logging();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([720.0, 540.0])
            .with_title("Stagehand"),
        ..Default::default()
    };

    eframe::run_native(
        "Stagehand",
        options,
        Box::new(|cc| {
            theme::setup(&cc.egui_ctx);
            let core = StudioApplication::new();
            Ok(Box::new(app::StagehandUiApp::new(core)))
        }),
    )
}
