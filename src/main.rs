use dbd_tracker::{App, Settings, logging, settings::get_data_dir, tui::restore_terminal};
use std::panic;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // The logger goes first so that loading the settings is itself logged.
    if let Err(e) = logging::init(&get_data_dir(), log::LevelFilter::Info) {
        eprintln!("Logging disabled: {e}");
    }
    let settings = Settings::load();
    logging::set_level(settings.log_level());
    log::info!("DBD Tracker start: {}", chrono::Local::now());

    // Leave the alternate screen before the panic report is printed.
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        log::error!("Panic: {panic_info}");
        default_hook(panic_info);
    }));

    App::new(settings).run().await
}
