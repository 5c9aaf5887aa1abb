use clap::Parser;
use memory_game::logging::setup_logging;
use memory_game::{GameConfig, SessionManager, WebUiConfig, WebUiServer};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "memory_game", version, about = "Memory matching game served in the browser")]
struct Config {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port for the web UI
    #[arg(short = 'p', long, default_value_t = 51051)]
    port: u16,

    /// Directory holding app.js and style.css
    #[arg(long, default_value = "web")]
    web_dir: PathBuf,

    /// Number of symbol pairs on the board (1-18)
    #[arg(long, default_value_t = 18)]
    pairs: usize,

    /// How long a mismatched pair stays face up, in milliseconds
    #[arg(long, default_value_t = 1000)]
    flip_back_ms: u64,

    /// Fixed shuffle seed (session n uses seed + n)
    #[arg(long)]
    seed: Option<u64>,

    /// Close unwatched sessions after this many idle seconds
    #[arg(long, default_value_t = 1800)]
    session_idle_secs: u64,

    /// Write rotated log files here instead of stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

// ============================================================================
// FONCTION PRINCIPALE
// ============================================================================

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    let _logger = setup_logging(config.log_dir.as_deref())?;

    let game_config = GameConfig {
        pairs: config.pairs,
        flip_back_delay: Duration::from_millis(config.flip_back_ms),
        seed: config.seed,
    }
    .validate()?;

    log::info!(
        "🧩 {} v{}: {} pairs, flip-back {:?}{}",
        memory_game::NAME,
        memory_game::VERSION,
        game_config.pairs,
        game_config.flip_back_delay,
        match game_config.seed {
            Some(seed) => format!(", seed {}", seed),
            None => String::new(),
        }
    );

    let sessions = SessionManager::new(game_config);

    // Ménage des sessions abandonnées
    let max_idle = Duration::from_secs(config.session_idle_secs);
    let reaper_sessions = sessions.clone();
    let reaper = tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(60));
        loop {
            interval.tick().await;
            reaper_sessions.reap_idle(max_idle).await;
        }
    });

    let web_config = WebUiConfig {
        port: config.port,
        host: config.host,
        web_dir: config.web_dir,
    };
    let server = WebUiServer::new(web_config, sessions);

    let result = server.start(shutdown_signal()).await;
    reaper.abort();
    result?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("❌ Unable to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("🛑 Shutdown requested");
}
