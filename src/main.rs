use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tracing::info;

use mentionscan::{
    apply, collect_mentions, filter, locate, load_options_async, mention_spans, normalize_line_endings,
    render_highlighted, scan, MentionOption, NamedOption,
};

#[derive(Parser, Debug)]
#[command(name = "mentionscan")]
#[command(about = "Trigger-symbol mention detection for text buffers")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(ClapArgs, Debug)]
struct BufferArgs {
    /// Text file holding the buffer (reads stdin when omitted)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Character that opens a mention
    #[arg(long, default_value_t = '@')]
    trigger: char,
}

#[derive(ClapArgs, Debug)]
struct CursorArgs {
    /// Cursor offset in chars (defaults to the end of the buffer)
    #[arg(long)]
    cursor: Option<usize>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the live mention token under the cursor
    Locate {
        #[command(flatten)]
        buffer: BufferArgs,
        #[command(flatten)]
        cursor: CursorArgs,
    },
    /// Print every completed mention, rightmost first
    Scan {
        #[command(flatten)]
        buffer: BufferArgs,
    },
    /// Print the options matching the live token
    Suggest {
        #[command(flatten)]
        buffer: BufferArgs,
        #[command(flatten)]
        cursor: CursorArgs,
        /// JSON option list
        #[arg(long)]
        options: PathBuf,
    },
    /// Insert an option over the live token and print the new buffer and cursor
    Select {
        #[command(flatten)]
        buffer: BufferArgs,
        #[command(flatten)]
        cursor: CursorArgs,
        /// JSON option list
        #[arg(long)]
        options: PathBuf,
        /// Name of the option to insert
        #[arg(long)]
        name: String,
    },
    /// Print the options mentioned in the buffer, in document order
    Collect {
        #[command(flatten)]
        buffer: BufferArgs,
        /// JSON option list
        #[arg(long)]
        options: PathBuf,
    },
    /// Print the buffer with known mentions wrapped in markers
    Highlight {
        #[command(flatten)]
        buffer: BufferArgs,
        /// JSON option list
        #[arg(long)]
        options: PathBuf,
        #[arg(long, default_value = "<u>")]
        open: String,
        #[arg(long, default_value = "</u>")]
        close: String,
    },
}

async fn read_buffer(args: &BufferArgs) -> Result<String> {
    let raw = match &args.input {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read buffer: {}", path.display()))?,
        None => {
            let mut content = String::new();
            tokio::io::stdin()
                .read_to_string(&mut content)
                .await
                .context("Failed to read buffer from stdin")?;
            content
        }
    };
    Ok(normalize_line_endings(&raw))
}

fn cursor_in(buffer: &str, cursor: &CursorArgs) -> usize {
    let len = buffer.chars().count();
    cursor.cursor.map_or(len, |c| c.min(len))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the JSON result
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    match args.command {
        Command::Locate { buffer, cursor } => {
            let text = read_buffer(&buffer).await?;
            let word = locate(&text, cursor_in(&text, &cursor), buffer.trigger);
            print_json(&word)?;
        }
        Command::Scan { buffer } => {
            let text = read_buffer(&buffer).await?;
            print_json(&scan(&text, buffer.trigger))?;
        }
        Command::Suggest { buffer, cursor, options } => {
            let text = read_buffer(&buffer).await?;
            let options = load_options_async(&options).await?;
            let word = locate(&text, cursor_in(&text, &cursor), buffer.trigger);
            if word.is_empty() {
                info!("No live mention under the cursor");
                print_json::<[NamedOption]>(&[])?;
            } else {
                print_json(&filter(&word.text, &options, buffer.trigger))?;
            }
        }
        Command::Select { buffer, cursor, options, name } => {
            let text = read_buffer(&buffer).await?;
            let options = load_options_async(&options).await?;
            let Some(option) = options.iter().find(|o| o.name() == name) else {
                anyhow::bail!("No option named {name:?} in the option list");
            };
            let word = locate(&text, cursor_in(&text, &cursor), buffer.trigger);
            if word.is_empty() {
                anyhow::bail!("No live mention under the cursor to replace");
            }
            print_json(&apply(&text, &word, option, buffer.trigger))?;
        }
        Command::Collect { buffer, options } => {
            let text = read_buffer(&buffer).await?;
            let options = load_options_async(&options).await?;
            let mentioned = collect_mentions(&text, &options, buffer.trigger);
            info!("Collected {} mentions", mentioned.len());
            print_json(&mentioned)?;
        }
        Command::Highlight { buffer, options, open, close } => {
            let text = read_buffer(&buffer).await?;
            let options = load_options_async(&options).await?;
            let spans = mention_spans(&text, &options, buffer.trigger);
            let rendered = render_highlighted(&text, &spans, |_, token| format!("{open}{token}{close}"));
            print!("{rendered}");
        }
    }

    Ok(())
}
