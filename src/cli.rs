use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vidserve")]
#[command(
    author,
    version,
    about = "Scan for video files, write playlist.m3u and serve both over HTTP"
)]
pub struct Cli {
    /// Port to listen on [default: 2222]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Scan subdirectories recursively
    #[arg(short, long)]
    pub recursive: bool,

    /// Log every discovered file and every request
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
