// Draft assistant entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config (copying defaults on first run)
// 3. Load the player pool
// 4. Start a fresh draft session
// 5. Run the TUI until the user quits

use porp_core::config;
use porp_core::valuation::projections;
use porp_tui::app::App;
use porp_tui::tui;

use anyhow::Context;
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    info!("PORP draft assistant starting up");

    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: league={}, {} teams, {} roster slots",
        config.league.name,
        config.num_teams(),
        config.league.roster.roster_size()
    );

    let pool = projections::load_pool(&config).context("failed to load player data")?;

    let mut app = App::new(config, pool).context("failed to start draft session")?;
    info!(
        "Draft ready: {} teams in draft order, {} players available",
        app.session.teams().len(),
        app.pool.len()
    );

    if let Err(e) = tui::run(&mut app) {
        error!("TUI exited with error: {:#}", e);
        return Err(e);
    }

    info!(
        "Shutting down after {} picks",
        app.session.drafted_count()
    );
    Ok(())
}

fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("porp.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("porp_core=info,porp_tui=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
