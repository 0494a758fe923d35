use anyhow::Context;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use xiangqi::assets::{FsAssetSource, LoadOptions, DEFAULT_ASSET_TIMEOUT};
use xiangqi::core::{init_tracing, BoardLayoutConfig, CorePlugin, WindowConfig};
use xiangqi::game::{GameController, GameSession};
use xiangqi::input::PointerInputPlugin;
use xiangqi::rendering::{BoardSpritePlugin, DrawList};

/// Xiangqi board
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory the theme's asset paths are resolved against
    #[arg(long, default_value = ".")]
    assets: PathBuf,

    /// JSON layout theme; the built-in reference layout when omitted
    #[arg(long)]
    theme: Option<PathBuf>,

    /// Per-asset load timeout in seconds
    #[arg(long, default_value_t = DEFAULT_ASSET_TIMEOUT.as_secs())]
    asset_timeout_secs: u64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let layout = match &args.theme {
        Some(path) => BoardLayoutConfig::load_theme(path)
            .with_context(|| format!("loading theme {}", path.display()))?,
        None => BoardLayoutConfig::reference(),
    };
    let window = WindowConfig::from_layout(&layout);

    let source = FsAssetSource::new(args.assets.clone());
    let options = LoadOptions {
        per_asset_timeout: Duration::from_secs(args.asset_timeout_secs),
    };

    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    let mut frame = DrawList::new();
    let controller = runtime
        .block_on(GameController::init(layout, &source, options, &mut frame))
        .context("initializing game")?;
    drop(runtime);

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(window.to_window()),
                    ..default()
                })
                .disable::<LogPlugin>(),
        )
        .add_plugins(CorePlugin { window })
        .insert_resource(GameSession::new(controller, frame))
        .add_plugins(BoardSpritePlugin)
        // Input last: clicks need the session in place
        .add_plugins(PointerInputPlugin)
        .run();

    Ok(())
}
