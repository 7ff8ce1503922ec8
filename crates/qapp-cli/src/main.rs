mod output;
mod prompt;

use anyhow::Context;
use clap::Parser;
use qapp_core::{Remote, Scaffold, ScaffoldConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "create-qapp", about = "Create a new Qortal App", version)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    // RUST_LOG wins when set; otherwise only warnings and errors.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let config = ScaffoldConfig::default();
    let mut ui = prompt::TerminalUi;

    let done = Scaffold::new(&config, &cwd).run(&mut ui, &Remote)?;
    tracing::debug!(
        name = %done.name,
        template = %done.template,
        editor_opened = done.editor_opened,
        "project created"
    );
    Ok(())
}
