use anyhow::{Context, Result};
use clap::Parser;
use slidewheel::cli::Cli;
use slidewheel::config::Config;
use slidewheel::logging::{default_log_path, init_tracing};
use slidewheel::shutdown::ShutdownHandle;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };
    cli.apply(&mut config);
    config.validate().context("invalid settings")?;

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    if let Err(err) = init_tracing(&log_path) {
        eprintln!("slidewheel: logging disabled: {err}");
    }
    tracing::info!(
        slides = config.slides.len(),
        interval_ms = config.render.autoplay_interval_ms,
        "starting slidewheel"
    );

    let shutdown = ShutdownHandle::new();
    shutdown
        .install_signal_handlers()
        .context("installing signal handlers")?;

    slidewheel::ui::run(&config, shutdown).context("terminal UI failed")?;
    tracing::info!("slidewheel exited");
    Ok(())
}
