use clap::Parser;
use cookiebox::cli::{execute_command, get_log_level, Cli};
use cookiebox::config::{load_config, ShopConfig};
use cookiebox::error::ShopError;
use tracing::{debug, error, trace};

fn main() {
    let cli = Cli::parse();

    // Config decides the default log level, so it is read before logging starts
    let config = load_config(cli.config.as_deref());
    let configured_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| ShopConfig::default().log_level);

    tracing_subscriber::fmt()
        .with_env_filter(get_log_level(cli.verbose, &configured_level))
        .with_target(cli.verbose >= 2)
        .with_writer(std::io::stderr)
        .init();

    debug!("cookiebox started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let result = config
        .map_err(anyhow::Error::from)
        .and_then(|config| execute_command(cli.command, &config));

    if let Err(e) = result {
        error!("Fatal error: {:#}", e);
        let code = match e.downcast_ref::<ShopError>() {
            Some(err) => {
                eprintln!("Error: {}", err.report());
                err.exit_code()
            }
            None => {
                eprintln!("Error: {e:#}");
                1
            }
        };
        std::process::exit(code);
    }
}
