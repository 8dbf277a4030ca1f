use clap::Parser;
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  playgen -l \"http://example.com/episode_*.mp3\" -s 1 -e 10 -p playlist.m3u -f m3u
  playgen -l \"http://cdn.example.com/video_*.mp4\" -s 1 -e 100 -p videos.m3u8 -f m3u8 -z 3 -v";

#[derive(Parser, Debug)]
#[command(name = "playgen")]
#[command(author, version, about = "Generate playlists from numbered URL templates")]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// URL template with wildcard (*)
    #[arg(short, long, value_name = "TEMPLATE")]
    pub link: String,

    /// Starting number
    #[arg(short, long, allow_negative_numbers = true)]
    pub start: i64,

    /// Ending number
    #[arg(short, long, allow_negative_numbers = true)]
    pub end: i64,

    /// Output playlist file ("-" for stdout)
    #[arg(short, long, value_name = "FILE")]
    pub playlist: String,

    /// Playlist format: plain|m3u|m3u8|pls|xspf (default: plain)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Zero-pad numbers (e.g. -z 3 for 001, 002, ...)
    #[arg(short = 'z', long)]
    pub padding: Option<usize>,

    /// Verify URLs (check if accessible)
    #[arg(short, long)]
    pub verify: bool,

    /// Verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Number of threads for URL verification (default: 4)
    #[arg(short, long, allow_negative_numbers = true)]
    pub threads: Option<i64>,

    /// Add prefix text to each entry
    #[arg(short = 'P', long)]
    pub prefix: Option<String>,

    /// Add suffix text to each entry
    #[arg(short = 'S', long)]
    pub suffix: Option<String>,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,
}
