//! Developer tasks for the copy-critique workspace.
//!
//! ```text
//! cargo xtask completions [--out-dir DIR]
//! cargo xtask man [--out-dir DIR]
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "copy-critique development tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate shell completions for every supported shell
    Completions {
        #[arg(long, default_value = "target/completions")]
        out_dir: PathBuf,
    },
    /// Generate man pages for the CLI and each subcommand
    Man {
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> io::Result<()> {
    match Xtask::parse().task {
        Task::Completions { out_dir } => completions(&out_dir),
        Task::Man { out_dir } => man(&out_dir),
    }
}

fn completions(out_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(out_dir)?;
    let mut cmd = copy_critique::command();
    let name = cmd.get_name().to_string();
    for shell in [
        Shell::Bash,
        Shell::Elvish,
        Shell::Fish,
        Shell::PowerShell,
        Shell::Zsh,
    ] {
        let path = clap_complete::generate_to(shell, &mut cmd, &name, out_dir)?;
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn man(out_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(out_dir)?;
    let cmd = copy_critique::command();
    let name = cmd.get_name().to_string();
    write_man_page(out_dir, &name, cmd.clone())?;
    for sub in cmd.get_subcommands() {
        let page = format!("{name}-{}", sub.get_name());
        write_man_page(out_dir, &page, sub.clone())?;
    }
    Ok(())
}

fn write_man_page(out_dir: &Path, page: &str, cmd: clap::Command) -> io::Result<()> {
    let mut buf = Vec::new();
    clap_mangen::Man::new(cmd).render(&mut buf)?;
    let path = out_dir.join(format!("{page}.1"));
    fs::write(&path, buf)?;
    println!("wrote {}", path.display());
    Ok(())
}
