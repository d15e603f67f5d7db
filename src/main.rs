use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::Result;
use ratatui::DefaultTerminal;

use tagmatter::app::App;
use tagmatter::config::{self, Config};
use tagmatter::error::TagmatterError;
use tagmatter::host::document::{NoteBuffer, Position};
use tagmatter::host::tag_index::{StaticTags, TagIndex, VaultIndex};
use tagmatter::suggest::TagSuggest;

#[derive(Parser)]
#[command(name = "tagmatter", version, about = "Frontmatter tag autocomplete for markdown notes")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open a note in the interactive editor
    Edit {
        /// Note file to edit
        note: PathBuf,

        /// Vault directory to index for tags (defaults to the note's
        /// directory)
        #[arg(long)]
        vault: Option<PathBuf>,

        /// Read the tag list from a file instead of scanning a vault, one
        /// tag per line
        #[arg(long, conflicts_with = "vault")]
        tags: Option<PathBuf>,
    },
    /// Print tag suggestions for a cursor position and exit
    Suggest {
        /// Note file to inspect
        note: PathBuf,

        /// Cursor line, zero-based
        #[arg(long)]
        line: usize,

        /// Cursor column in characters, zero-based
        #[arg(long)]
        ch: usize,

        /// Vault directory to index for tags (defaults to the note's
        /// directory)
        #[arg(long)]
        vault: Option<PathBuf>,

        /// Read the tag list from a file instead of scanning a vault, one
        /// tag per line
        #[arg(long, conflicts_with = "vault")]
        tags: Option<PathBuf>,

        /// Print suggestions as a JSON array
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    #[cfg(debug_assertions)]
    env_logger::init();

    let cli = Cli::parse();
    let config = config::load()?;

    match cli.command {
        Command::Edit { note, vault, tags } => {
            let text = read_note(&note)?;
            let index = build_index(&note, vault.as_deref(), tags.as_deref(), &config)?;

            let terminal = ratatui::init();
            let result = run(terminal, App::new(note, &text, index));
            ratatui::restore();
            result
        }
        Command::Suggest {
            note,
            line,
            ch,
            vault,
            tags,
            json,
        } => {
            let text = read_note(&note)?;
            let index = build_index(&note, vault.as_deref(), tags.as_deref(), &config)?;

            let buffer = NoteBuffer::new(&text);
            let suggester = TagSuggest::new(index);
            let suggestions = suggester.suggest_at(Position::new(line, ch), &buffer);

            if json {
                println!("{}", serde_json::to_string(&suggestions)?);
            } else {
                for tag in suggestions {
                    println!("{tag}");
                }
            }
            Ok(())
        }
    }
}

fn read_note(note: &Path) -> Result<String, TagmatterError> {
    if !note.is_file() {
        return Err(TagmatterError::NoteNotFound(note.to_path_buf()));
    }
    Ok(fs::read_to_string(note)?)
}

/// Tag source precedence: explicit tag file, explicit vault, then the
/// note's own directory.
fn build_index(
    note: &Path,
    vault: Option<&Path>,
    tags: Option<&Path>,
    config: &Config,
) -> Result<Box<dyn TagIndex>, TagmatterError> {
    if let Some(tags) = tags {
        return Ok(Box::new(StaticTags::from_file(tags)?));
    }
    let root = match vault {
        Some(dir) => dir.to_path_buf(),
        None => note
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };
    Ok(Box::new(VaultIndex::scan(&root, &config.tags)?))
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Handle events
        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
