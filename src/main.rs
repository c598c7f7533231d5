use dotenv::dotenv;
use log::info;
use tires_quiz::QuizApp;
use tires_quiz::config::AppConfig;

fn main() -> eframe::Result<()> {
    // El .env es opcional: sin él se usan las variables del entorno
    dotenv().ok();
    pretty_env_logger::init();

    let config = AppConfig::from_env();
    info!("starting Tire Knowledge Quiz v{}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 820.0])
            .with_min_inner_size([420.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Tire Knowledge Quiz",
        options,
        Box::new(move |cc| Ok(Box::new(QuizApp::new(cc, &config)?))),
    )
}
