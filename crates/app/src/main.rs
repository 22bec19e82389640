//! Skinbox - replays painting command scripts onto character skins

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use painting::{default_template, render, ModelVariant, PaintingSession};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod io;

use cli::{Cli, Commands};
use commands::CommandDispatcher;
use config::AppConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .without_time()
        .compact()
        .init();

    let cli = Cli::parse();
    info!("Skinbox v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Render {
            script,
            out,
            input,
            config,
        } => run_script(&script, &out, input.as_deref(), config.as_deref()),
        Commands::Template { out, slim } => {
            let variant = if slim { ModelVariant::Slim } else { ModelVariant::Standard };
            io::save_png(&render(&default_template(variant)), &out)
        }
    }
}

fn run_script(script: &Path, out: &Path, input: Option<&Path>, config: Option<&Path>) -> Result<()> {
    let config = AppConfig::load(config).context("failed to load configuration")?;
    info!("Starting {:?} session", config.variant);

    let options = config.session_options();
    let mut session = match input {
        Some(path) => PaintingSession::with_canvas(io::load_skin(path)?, options),
        None => PaintingSession::new(options),
    };
    session.set_radius(config.brush_radius);
    session.set_mirror(config.mirror);

    let source = std::fs::read_to_string(script)
        .with_context(|| format!("failed to read {}", script.display()))?;
    let commands = skinbox_ipc::parse_script(&source)?;

    let mut dispatcher = CommandDispatcher::new(&session);
    for command in commands {
        for event in dispatcher.dispatch(&mut session, command) {
            info!("{}", skinbox_ipc::encode_event(&event)?);
        }
    }
    if session.is_gesturing() {
        session.end_gesture();
    }

    info!(
        "Script done: {} undo / {} redo levels",
        session.history().undo_count(),
        session.history().redo_count()
    );
    io::save_png(&session.render(), out)
}
