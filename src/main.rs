use clap::{App, Arg};
use instigator::build::build_site;
use instigator::config::{Config, DEFAULT_CONFIG_FILE};
use std::path::Path;
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = App::new("instigator")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Builds a static site from a directory of dated markdown posts")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("FILE")
                .default_value(DEFAULT_CONFIG_FILE)
                .help("The JSON file naming the source, template, and output directories"),
        )
        .get_matches();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_writer(std::io::stdout)
        .init();

    let config_file = Path::new(matches.value_of("config").unwrap_or(DEFAULT_CONFIG_FILE));
    let config = match Config::from_file(config_file) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    if let Err(e) = build_site(&config) {
        error!("{}", e);
        process::exit(1);
    }
}
