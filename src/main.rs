use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::error;

use ytquery::yt::YtClient;
use ytquery::{Config, commands, logging};

#[derive(Parser, Debug)]
#[command(version, about = "Query the YouTube Data API from the terminal")]
struct Args {
    /// Search term
    #[arg(long, global = true, default_value = "Google")]
    query: String,

    /// Video/channel/playlist id (the channel name for `channel-id`)
    #[arg(long, visible_alias = "video", global = true, default_value = "")]
    id: String,

    /// Max YouTube results
    #[arg(long, global = true, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    max_results: u32,

    /// Read API_KEY from this file instead of ./.env
    #[arg(long, global = true, value_name = "PATH")]
    env_file: Option<PathBuf>,

    /// Give up on a request after this many seconds
    #[arg(long, global = true, default_value_t = 30, value_name = "SECONDS")]
    timeout_secs: u64,

    /// More logging on stderr (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Group videos, channels and playlists matching --query (default)
    Search,

    /// Show one video as JSON
    Video {
        #[arg(long, value_delimiter = ',', default_values = ["snippet", "player", "topicDetails", "recordingDetails"])]
        parts: Vec<String>,
    },

    /// List one page (3 items) of a playlist
    PlaylistItems {
        #[arg(long, value_delimiter = ',', default_values = ["snippet"])]
        parts: Vec<String>,

        /// Continue from a previous nextPageToken
        #[arg(long)]
        page_token: Option<String>,
    },

    /// List the playlists of the channel given by --id
    Playlists {
        #[arg(long, value_delimiter = ',', default_values = ["snippet"])]
        parts: Vec<String>,
    },

    /// Show a channel as JSON
    Channels {
        #[arg(long, value_delimiter = ',', default_values = ["contentDetails"])]
        parts: Vec<String>,
    },

    /// Resolve a channel name (--id) to its channel id
    ChannelId,

    /// Print the uploads playlist id of a channel
    UploadsId,

    /// Print the uploads playlist id of a channel, then its latest items
    Uploads {
        #[arg(long, value_delimiter = ',', default_values = ["snippet"])]
        parts: Vec<String>,

        #[arg(long)]
        page_token: Option<String>,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Search => "search",
            Command::Video { .. } => "show video details",
            Command::PlaylistItems { .. } => "show playlist",
            Command::Playlists { .. } => "show playlists",
            Command::Channels { .. } => "show channels",
            Command::ChannelId => "get channel id",
            Command::UploadsId => "get uploads playlist id",
            Command::Uploads { .. } => "show uploads",
        }
    }

    fn needs_id(&self) -> bool {
        !matches!(self, Command::Search)
    }
}

async fn dispatch<W: Write>(
    client: &YtClient,
    args: &Args,
    command: &Command,
    out: &mut W,
) -> ytquery::Result<()> {
    let id = args.id.trim();
    match command {
        Command::Search => {
            commands::search(client, &args.query, args.max_results, out).await?;
        }
        Command::Video { parts } => commands::video_details(client, id, parts, out).await?,
        Command::PlaylistItems { parts, page_token } => {
            commands::playlist_items(client, id, parts, page_token.as_deref(), out).await?
        }
        Command::Playlists { parts } => commands::playlists(client, id, parts, out).await?,
        Command::Channels { parts } => commands::channels(client, id, parts, out).await?,
        Command::ChannelId => {
            let channel_id = commands::channel_id(client, id, out).await?;
            writeln!(out, "{channel_id}")?;
        }
        Command::UploadsId => {
            let uploads = commands::uploads_playlist_id(client, id).await?;
            writeln!(out, "{uploads}")?;
        }
        Command::Uploads { parts, page_token } => {
            commands::uploads(client, id, parts, page_token.as_deref(), out).await?
        }
    }
    Ok(())
}

async fn run(args: Args) -> Result<()> {
    let command = args.command.clone().unwrap_or(Command::Search);
    if command.needs_id() && args.id.trim().is_empty() {
        bail!("`{}` needs --id", command.name());
    }

    let config = Config::load(args.env_file.as_deref()).context("Error loading config")?;
    let client = YtClient::new(&config, Duration::from_secs(args.timeout_secs))
        .context("Error creating new YouTube client")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    dispatch(&client, &args, &command, &mut out)
        .await
        .context(command.name())?;
    out.flush()?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
