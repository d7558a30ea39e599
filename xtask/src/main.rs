//! Build helpers: man pages and shell completions.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "Project maintenance tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Render man pages for the CLI and each subcommand.
    Man {
        /// Output directory.
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
    /// Generate shell completion scripts.
    Completions {
        /// Output directory.
        #[arg(long, default_value = "target/completions")]
        out: PathBuf,
        /// Only generate for these shells (default: all).
        #[arg(long, value_enum)]
        shell: Vec<Shell>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    match Xtask::parse().task {
        Task::Man { out } => man(&out),
        Task::Completions { out, shell } => completions(&out, &shell),
    }
}

fn man(out: &Path) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(out)?;
    let cmd = textlens::command();
    clap_mangen::generate_to(cmd, out)?;
    println!("man pages written to {}", out.display());
    Ok(())
}

fn completions(out: &Path, shells: &[Shell]) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(out)?;
    let shells = if shells.is_empty() {
        Shell::value_variants()
    } else {
        shells
    };
    for shell in shells {
        let mut cmd = textlens::command();
        let path = clap_complete::generate_to(*shell, &mut cmd, "textlens", out)?;
        println!("{shell}: {}", path.display());
    }
    Ok(())
}
