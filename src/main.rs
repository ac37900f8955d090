//! Selection Replay.
//!
//! Spielt ein Input-Skript headless auf einer Szene ab und gibt jede
//! "Selektion geändert"-Benachrichtigung als JSON-Zeile aus.

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use viewer_selection::SelectionOptions;
use viewer_selection::replay::{SceneFile, ScriptFile, run_script};

/// Kommandozeilen-Argumente.
#[derive(Debug, Parser)]
#[command(name = "selection-replay", version, about)]
struct Cli {
    /// Szenen-Datei (TOML: surface, camera, entities)
    #[arg(long)]
    scene: PathBuf,
    /// Input-Skript (TOML: steps)
    #[arg(long)]
    script: PathBuf,
    /// Optionen-Datei; ohne Angabe: viewer_selection.toml neben der Binary
    #[arg(long)]
    options: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    log::info!("Selection Replay v{} startet...", env!("CARGO_PKG_VERSION"));

    let options_path = cli.options.unwrap_or_else(SelectionOptions::config_path);
    let options = SelectionOptions::load_from_file(&options_path);
    let scene = SceneFile::load(&cli.scene)?;
    let script = ScriptFile::load(&cli.script)?;

    let records = run_script(&scene, &script, options).await;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for record in &records {
        serde_json::to_writer(&mut out, record)?;
        writeln!(out)?;
    }
    log::info!("{} Benachrichtigungen ausgegeben", records.len());
    Ok(())
}
