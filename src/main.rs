use std::fs::File;
use std::sync::Mutex;

use campus_jugaad::app::App;
use campus_jugaad::config::AppConfig;
use campus_jugaad::util::log::init_logger;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = AppConfig::load()?;
    init_logger(&config.log_dir)?;

    // stdout belongs to the TUI, so tracing goes to a file next to the other logs
    let trace_file = File::create(config.log_dir.join("trace.log"))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(trace_file))
        .with_ansi(false)
        .init();

    tracing::info!(data_dir = %config.data_dir.display(), in_memory = config.in_memory, "starting");

    let terminal = ratatui::init();
    let result = match App::new(&config) {
        Ok(app) => app.run(terminal).await,
        Err(e) => Err(e),
    };
    ratatui::restore();
    result
}
