mod cli;

use vidserve::{config, playlist, scanner, server};

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;

fn enabled(flag: bool) -> &'static str {
    if flag {
        "enabled"
    } else {
        "disabled"
    }
}

async fn start_server(config: config::Config) -> Result<()> {
    let port = config.server.port;
    let playlist_name = config.playlist.file_name.clone();

    let ctx = server::AppContext::new(config)?;
    let listening = server::bind(ctx).await?;

    println!("Server is running at http://localhost:{}", port);
    println!(
        "Playlist available at http://localhost:{}/{}",
        port, playlist_name
    );

    listening.serve().await
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::load_config_or_default(cli.config.as_deref())?
        .with_overrides(cli.port, cli.recursive, cli.verbose);
    config::validate_config(&config)?;

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if config.verbose {
            "vidserve=debug,vidserve_common=debug,tower_http=debug".to_string()
        } else {
            "vidserve=info,vidserve_common=info,tower_http=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    println!("Running server with options:");
    println!("-p > port: {}", config.server.port);
    println!("-r > recursive search: {}", enabled(config.scan.recursive));
    println!("-v > verbose logging: {}", enabled(config.verbose));
    println!();

    let videos = scanner::scan(&config.scan.root, config.scan.recursive)?;
    if videos.is_empty() {
        println!("No video files found.");
        return Ok(());
    }
    println!("Found video files: {}", videos.len());

    let playlist_path = config.playlist_path();
    playlist::write_playlist(&playlist_path, &videos)
        .with_context(|| format!("Failed to write playlist {:?}", playlist_path))?;
    println!("{} has been created.", config.playlist.file_name);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(start_server(config))
}
