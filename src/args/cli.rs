use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::time::Duration;

use super::defaults::{
    DEFAULT_BIND, DEFAULT_CAPACITY, DEFAULT_FADE_IN, DEFAULT_FADE_OUT, DEFAULT_FRAME_INTERVAL,
    DEFAULT_HIDE_AFTER, DEFAULT_MAX_LINES, DEFAULT_SEND_INTERVAL, DEFAULT_TAIL,
};
use super::parsers::{parse_bool_env, parse_duration_arg, parse_positive_usize};
use super::types::PositiveUsize;

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Replay the cues of an .srt file as fragment datagrams
    Send(SendArgs),
}

#[derive(Debug, Args, Clone)]
pub struct SendArgs {
    /// Subtitle file to replay (.srt)
    #[arg(long, short = 'f')]
    pub file: String,

    /// Overlay address to send datagrams to
    #[arg(long, short = 't', default_value = "127.0.0.1:5555")]
    pub target: SocketAddr,

    /// Pause between consecutive datagrams (supports ms/s/m/h)
    #[arg(long, default_value = DEFAULT_SEND_INTERVAL, value_parser = parse_duration_arg)]
    pub interval: Duration,

    /// Send each cue as growing word-prefix revisions before the full text
    #[arg(long)]
    pub grow: bool,
}

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Live subtitle overlay: receives subtitle fragments over UDP, merges revisions into a line-limited window and fades new text in."
)]
pub struct OverlayArgs {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// UDP address to receive fragments on
    #[arg(long, short = 'b', default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// Maximum number of fragments kept in the buffer
    #[arg(long, default_value = DEFAULT_CAPACITY, value_parser = parse_positive_usize)]
    pub capacity: PositiveUsize,

    /// Maximum number of display lines in the window
    #[arg(
        long = "max-lines",
        short = 'l',
        default_value = DEFAULT_MAX_LINES,
        value_parser = parse_positive_usize
    )]
    pub max_lines: PositiveUsize,

    /// Number of newest fragments considered for each update
    #[arg(long, default_value = DEFAULT_TAIL, value_parser = parse_positive_usize)]
    pub tail: PositiveUsize,

    /// Wrap width in cells (defaults to the terminal width)
    #[arg(long, short = 'w', value_parser = parse_positive_usize)]
    pub width: Option<PositiveUsize>,

    /// Fade-in duration for new or edited text (supports ms/s/m/h)
    #[arg(long = "fade-in", default_value = DEFAULT_FADE_IN, value_parser = parse_duration_arg)]
    pub fade_in: Duration,

    /// Inactivity period before the overlay fades out (supports ms/s/m/h)
    #[arg(long = "hide-after", default_value = DEFAULT_HIDE_AFTER, value_parser = parse_duration_arg)]
    pub hide_after: Duration,

    /// Duration of the overlay fade-out (supports ms/s/m/h)
    #[arg(long = "fade-out", default_value = DEFAULT_FADE_OUT, value_parser = parse_duration_arg)]
    pub fade_out: Duration,

    /// Redraw interval while an animation is running (supports ms/s/m/h)
    #[arg(
        long = "frame-interval",
        default_value = DEFAULT_FRAME_INTERVAL,
        value_parser = parse_duration_arg
    )]
    pub frame_interval: Duration,

    /// Disable the terminal overlay and log windows instead
    #[arg(long = "no-ui", alias = "no-tui")]
    pub no_ui: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,

    /// Enable verbose logging (sets log level to debug unless overridden by SUBCAST_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Path to config file (TOML/JSON). Defaults to ./subcast.toml or ./subcast.json if present.
    #[arg(long)]
    pub config: Option<String>,

    /// Write logs to this file while the terminal overlay is active
    #[arg(long = "log-file")]
    pub log_file: Option<String>,
}
