#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use paneltree::cli::Args;
use paneltree::render::{line_to_plain_text, row_line};
use paneltree::tree::{load_tree, render_tree, LoadConfig};
use paneltree::{FilterPattern, Index, QuickFix, Settings, SettingsFile, ViewState};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("paneltree: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();
    init_logging(args.verbose);

    let path = args
        .path
        .canonicalize()
        .with_context(|| format!("{}: failed to resolve path", args.path.display()))?;

    anyhow::ensure!(path.is_dir(), "{}: Not a directory", path.display());

    let settings = build_settings(&args)?;

    let mut index: Index = args.open.iter().map(|p| absolutize(p)).collect();
    let load_config = LoadConfig {
        expand_depth: args.expand_depth,
        follow_symlinks: args.follow_symlinks,
    };
    let root = load_tree(&path, &mut index, &load_config)
        .with_context(|| format!("{}: failed to read tree", path.display()))?;

    let qf = match &args.quickfix {
        Some(file) => {
            let text = std::fs::read_to_string(file)
                .with_context(|| format!("{}: failed to read quickfix list", file.display()))?;
            QuickFix::from_files(&path, text.lines().map(str::trim).filter(|l| !l.is_empty()))
        }
        None => QuickFix::default(),
    };

    let view = ViewState {
        index,
        selection: args.select.iter().map(|p| absolutize(p)).collect(),
        qf,
        filter: FilterPattern {
            pattern: args.filter.clone().unwrap_or_default(),
            ..Default::default()
        },
        show_hidden: args.show_hidden,
        current: args.current.as_deref().map(absolutize),
        ..Default::default()
    };

    tracing::info!(
        root = %path.display(),
        icons = settings.use_icons,
        show_hidden = view.show_hidden,
        "rendering"
    );
    let rendered = render_tree(&root, &settings, &view);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for render in &rendered.renders {
        writeln!(out, "{}", line_to_plain_text(&row_line(render, args.width)))?;
    }
    out.flush()?;
    Ok(())
}

/// Settings file (if any) with command-line flags layered on top.
fn build_settings(args: &Args) -> Result<Settings> {
    let mut file = match &args.config {
        Some(config) => SettingsFile::read(config)?,
        None => SettingsFile::default(),
    };
    file.use_icons |= args.icons;
    file.name_ignore.extend(args.ignore.iter().cloned());
    file.path_ignore.extend(args.ignore_path.iter().cloned());
    Settings::try_from(file).context("invalid settings")
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Absolute form of a command-line path. The parent is canonicalized but the
/// final component is kept, so a symlink names itself rather than its target.
fn absolutize(path: &Path) -> String {
    let abs = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };
    let resolved: PathBuf = match (abs.parent(), abs.file_name()) {
        (Some(parent), Some(name)) if !parent.as_os_str().is_empty() => parent
            .canonicalize()
            .map(|dir| dir.join(name))
            .unwrap_or_else(|_| abs.clone()),
        _ => abs.canonicalize().unwrap_or_else(|_| abs.clone()),
    };
    resolved.to_string_lossy().into_owned()
}
