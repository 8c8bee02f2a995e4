use clap::Parser;
use tracing_subscriber::EnvFilter;

use docmeta::cli::Args;
use docmeta::config::{ConfigFile, SearchConfigFile};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut config = ConfigFile::load_or_default()?;
    if let Some(path) = args.db {
        config.search = SearchConfigFile::Sqlite { path };
    }

    let output = args.command.run(&config, args.format)?;
    println!("{}", output);
    Ok(())
}
