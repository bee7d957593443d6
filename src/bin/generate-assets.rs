#![forbid(unsafe_code)]

use anyhow::Context;
use clap::CommandFactory;
use clap_complete::{generate_to, Shell};
use clap_mangen::Man;
use paneltree::cli::Args;
use std::fs;
use std::path::{Path, PathBuf};

const BIN_NAME: &str = "paneltree";

fn main() -> anyhow::Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dist"));

    write_completions(&out_dir.join("completions"))?;
    write_man_page(&out_dir.join("man"))?;

    eprintln!(
        "generated shell completions and man page under {}",
        out_dir.display()
    );
    Ok(())
}

fn write_completions(dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("{}: cannot create", dir.display()))?;
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell] {
        let mut cmd = Args::command();
        generate_to(shell, &mut cmd, BIN_NAME, dir)?;
    }
    Ok(())
}

fn write_man_page(dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("{}: cannot create", dir.display()))?;
    let mut buffer = Vec::new();
    Man::new(Args::command()).render(&mut buffer)?;
    fs::write(dir.join(format!("{BIN_NAME}.1")), buffer)?;
    Ok(())
}
