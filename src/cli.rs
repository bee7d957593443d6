use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "paneltree",
    version,
    about = "Render a directory as file explorer panel rows",
    after_help = "Examples:\n  paneltree -L 2 src\n  paneltree --icons --select src/lib.rs --current src\n  paneltree --quickfix errors.txt --filter '*.rs'"
)]
pub struct Args {
    /// Directory to render (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Expand folders down to this depth
    #[arg(short = 'L', long = "level")]
    pub expand_depth: Option<usize>,

    /// Folders to expand (repeatable)
    #[arg(long = "open", action = clap::ArgAction::Append)]
    pub open: Vec<PathBuf>,

    /// Name globs to exclude (repeatable)
    #[arg(short = 'I', long = "ignore", action = clap::ArgAction::Append)]
    pub ignore: Vec<String>,

    /// Path globs to exclude (repeatable)
    #[arg(long = "ignore-path", action = clap::ArgAction::Append)]
    pub ignore_path: Vec<String>,

    /// Show hidden and ignored entries
    #[arg(short = 'a', long = "all")]
    pub show_hidden: bool,

    /// Decorate entries with icons
    #[arg(long = "icons")]
    pub icons: bool,

    /// JSON settings file
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Paths to mark as selected (repeatable)
    #[arg(long = "select", action = clap::ArgAction::Append)]
    pub select: Vec<PathBuf>,

    /// Path under the cursor
    #[arg(long = "current")]
    pub current: Option<PathBuf>,

    /// Only show entries whose name matches this glob, with their parents
    #[arg(long = "filter")]
    pub filter: Option<String>,

    /// File listing quickfix entries, one file name per line
    #[arg(long = "quickfix")]
    pub quickfix: Option<PathBuf>,

    /// Follow symbolic links when expanding folders
    #[arg(short = 'f', long = "follow-symlinks")]
    pub follow_symlinks: bool,

    /// Panel width used to right-align badges (minimum 20)
    #[arg(short = 'w', long = "width", default_value = "60")]
    pub width: usize,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.width < 20 {
            self.width = 20;
        }
        if self.filter.as_deref() == Some("") {
            self.filter = None;
        }
        self
    }
}
