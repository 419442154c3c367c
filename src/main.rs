use clap::Parser;
use pokedex::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "pokedex", about = "Terminal Pokédex backed by PokéAPI")]
struct Args {
    /// PokéAPI base URL (e.g. a local mirror)
    #[arg(long)]
    base_url: Option<String>,

    /// Pokémon per page on the Home list
    #[arg(long)]
    page_size: Option<u32>,

    /// Accumulate every page as it arrives, even repeats
    #[arg(long)]
    allow_duplicate_pages: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to pokedex.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("pokedex.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        config::PokedexConfig::default()
    });
    let cli = CliOverrides {
        base_url: args.base_url,
        page_size: args.page_size,
        allow_duplicate_pages: args.allow_duplicate_pages,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "Pokedex starting up against {} (page size {})",
        resolved.base_url,
        resolved.list.page_size
    );

    pokedex::tui::run(resolved)
}
