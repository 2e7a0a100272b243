mod cli;
mod host;
mod replay;

use std::process::ExitCode;

use fasemo_common::{ConfigError, Event};
use fasemo_config::FasemoConfig;
use fasemo_tiling::StripManager;
use tokio::sync::broadcast::error::TryRecvError;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use host::LoggingContentHost;

const DEFAULT_DIRECTIVE: &str = "fasemo=info";

/// `--log-level` wins over the config file, which wins over the default.
fn log_directive(flag: Option<&str>, config: Option<&FasemoConfig>) -> String {
    flag.map(str::to_string)
        .or_else(|| config.map(|c| c.logging.level.directive().to_string()))
        .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string())
}

/// An out-of-range config falls back to defaults; only a config that
/// cannot be read or parsed is fatal. Returns the validation message to
/// report once logging is up.
fn resolve_config(
    loaded: Result<FasemoConfig, ConfigError>,
) -> Result<(FasemoConfig, Option<String>), ConfigError> {
    match loaded {
        Ok(config) => Ok((config, None)),
        Err(ConfigError::ValidationError(msg)) => Ok((FasemoConfig::default(), Some(msg))),
        Err(e) => Err(e),
    }
}

fn init_logging(directive: &str) {
    let directive: Result<Directive, _> = directive
        .parse()
        .or_else(|_| DEFAULT_DIRECTIVE.parse());
    let filter = match directive {
        Ok(d) => EnvFilter::from_default_env().add_directive(d),
        Err(_) => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config is loaded before logging so its level can apply.
    let config = resolve_config(fasemo_config::load_config(args.config.as_deref()));
    init_logging(&log_directive(
        args.log_level.as_deref(),
        config.as_ref().ok().map(|(c, _)| c),
    ));

    tracing::info!("Fasemo v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match config {
        Ok((config, None)) => config,
        Ok((config, Some(problems))) => {
            tracing::warn!("Config invalid, using defaults: {problems}");
            config
        }
        Err(e) => {
            tracing::error!("Config load failed: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }

    let steps = match args.script.as_deref().map(replay::load_script).transpose() {
        Ok(steps) => steps.unwrap_or_default(),
        Err(e) => {
            tracing::error!("Script load failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut mgr = StripManager::from_config(&config, LoggingContentHost::default());
    let mut events = mgr.events().subscribe();
    mgr.set_viewport(args.viewport.width, args.viewport.height);
    let opened = mgr.open_initial(config.startup.initial_addresses.as_slice());
    tracing::info!(panes = opened.len(), viewport = %args.viewport, "strip ready");

    replay::run(&mut mgr, &steps);
    mgr.events().publish(Event::Shutdown);

    let mut published = 0usize;
    loop {
        match events.try_recv() {
            Ok(event) => {
                published += 1;
                tracing::debug!(?event, "layout event");
            }
            Err(TryRecvError::Lagged(skipped)) => {
                published += skipped as usize;
                tracing::debug!(skipped, "layout events dropped from log");
            }
            Err(_) => break,
        }
    }
    tracing::info!(
        events = published,
        content_requests = mgr.host().requests(),
        "Shutdown complete"
    );

    match serde_json::to_string_pretty(&mgr.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::error!("Snapshot serialization failed: {e}"),
    }
    ExitCode::SUCCESS
}
