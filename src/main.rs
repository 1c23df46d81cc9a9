use anyhow::Result;
use console::style;
use jellyfin_episode_renamer::component::EpisodeRenamer;
use jellyfin_episode_renamer::config::Config;
use jellyfin_episode_renamer::init;
use jellyfin_episode_renamer::signal::setup_shutdown_signal;
use log::{error, info};

fn main() {
    init::init();

    if let Err(e) = run() {
        error!("Program error: {e:#}");
        eprintln!("{} {:#}", style("錯誤:").red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let shutdown_signal = setup_shutdown_signal()?;
    let config = Config::new()?;

    let renamer = EpisodeRenamer::new(config, shutdown_signal);
    renamer.run()?;

    info!("Program exited normally");
    Ok(())
}
