use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing_subscriber::EnvFilter;

mod assets;
mod config;
mod constants;
mod deck;
mod engine;
mod error;
mod input;
mod layout;
mod navigator;
mod presenter;
mod render;
mod session;
mod slide;
mod state;
mod talk;
mod texture_loader;

use crate::assets::FsAssetLoader;
use crate::config::Config;
use crate::constants::*;
use crate::deck::Deck;
use crate::input::JumpBuffer;
use crate::navigator::Navigator;
use crate::presenter::{Presenter, to_color};
use crate::render::outline;
use crate::session::{NavEvent, Session};
use crate::texture_loader::load_deck_textures;

/// Present the "Flow & TypeScript" talk.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// TOML file with theme and transition settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the talk's images (overrides the config)
    #[arg(short, long)]
    assets: Option<PathBuf>,

    /// Zero-based slide to open on
    #[arg(short, long)]
    start: Option<isize>,

    #[arg(short, long)]
    fullscreen: bool,

    /// Print one line per slide and exit
    #[arg(long)]
    outline: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(assets) = args.assets {
        config.asset_dir = assets;
    }

    // --- Resolve every asset before anything is shown ---
    let mut loader = FsAssetLoader::new(&config.asset_dir);
    let deck = Deck::new(talk::slides(), &mut loader)
        .with_context(|| format!("Failed to build the deck from assets in {}", config.asset_dir.display()))?
        .with_default_transition(config.transition.clone());

    if args.outline {
        for line in outline(&deck) {
            println!("{line}");
        }
        return Ok(());
    }

    let mut builder = raylib::init();
    builder.size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2).title("Flow & TypeScript").vsync().resizable();
    if args.fullscreen {
        builder.fullscreen();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let textures = load_deck_textures(&mut rl, &thread, &deck)?;
    let presenter = Presenter::new(config.theme.clone(), textures, config.transition_seconds());
    let slide_count = deck.len();
    let mut session = Session::new(Navigator::new(deck), presenter);

    match args.start {
        Some(index) => {
            session.handle(NavEvent::JumpTo(index)).context("Invalid --start slide")?;
        }
        None => session.start(),
    }

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as _, RENDER_HEIGHT as _)
        .map_err(|e| anyhow::anyhow!("Failed to create render texture: {}", e))?;
    let mut jump_buffer = JumpBuffer::default();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        for event in input::poll(&rl, &mut jump_buffer, slide_count) {
            if let Err(e) = session.handle(event) {
                tracing::warn!("{}", e);
            }
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let mouse = rl.get_mouse_position();
            let x = mouse.x * RENDER_WIDTH as f32 / rl.get_screen_width() as f32;
            let y = mouse.y * RENDER_HEIGHT as f32 / rl.get_screen_height() as f32;
            if let Some(url) = session.engine().link_at(x, y) {
                tracing::info!("Opening {}", url);
                if let Err(e) = open::that(url) {
                    tracing::error!("Failed to open {}: {}", url, e);
                }
            }
        }

        session.engine_mut().update(dt);

        // --- Render the slide into the fixed size canvas ---
        let presenter = session.engine();
        rl.draw_texture_mode(&thread, &mut framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(&thread);
            presenter.draw_scene(&mut d);
        });

        let mut d = rl.begin_drawing(&thread);
        presenter.blit(&mut d, &framebuffer);

        let pending = jump_buffer.pending();
        if !pending.is_empty() {
            let y = d.get_screen_height() - 40;
            d.draw_text(&format!("Go to {pending}"), 20, y, 20, to_color(config.theme.tertiary));
        }
    }

    tracing::info!("Closed on slide {}", session.navigator().cursor().slide);
    Ok(())
}
