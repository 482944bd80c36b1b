mod clipboard;
mod marker;
mod module;
mod notify;
mod scheduler;

use std::error::Error;
use std::path::PathBuf;

use serde_json::json;
use tracing::info;

use huespot_render::{export_png, stamp_markers};

use clipboard::MemoryClipboard;
use marker::REVEAL_STAGGER;
use module::{BackgroundModule, MenuModule, PlacementMode};
use notify::LogNotifier;

/// Default export resolution.
const DEFAULT_WIDTH: u32 = 1920;
const DEFAULT_HEIGHT: u32 = 1080;

struct CliArgs {
    width: u32,
    height: u32,
    output: PathBuf,
    seed: Option<u64>,
}

/// `huespot [WIDTH HEIGHT] [OUTPUT] [SEED]`
fn parse_args() -> Result<CliArgs, Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut parsed = CliArgs {
        width: DEFAULT_WIDTH,
        height: DEFAULT_HEIGHT,
        output: PathBuf::from("gradient.png"),
        seed: None,
    };
    if args.len() >= 2 {
        parsed.width = args[0].parse()?;
        parsed.height = args[1].parse()?;
    }
    if let Some(path) = args.get(2) {
        parsed.output = PathBuf::from(path);
    }
    if let Some(seed) = args.get(3) {
        parsed.seed = Some(seed.parse()?);
    }
    Ok(parsed)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting Huespot");

    let args = parse_args()?;
    let mut module = match args.seed {
        Some(seed) => BackgroundModule::with_seed(
            args.width,
            args.height,
            PlacementMode::Sampled,
            LogNotifier,
            seed,
        ),
        None => BackgroundModule::new(args.width, args.height, PlacementMode::Sampled, LogNotifier),
    };

    module.activate();

    // Fast-forward past the staggered reveals so every marker is up.
    let marker_count = module.board().active_count() as u32;
    module
        .board_mut()
        .advance(REVEAL_STAGGER * marker_count.saturating_sub(1));

    // Exercise the copy interaction with the in-process clipboard.
    let clipboard = MemoryClipboard::default();
    if let Some(first) = module.board().markers().next().map(|m| m.id.clone()) {
        module.board().copy_color(&first, &clipboard, &LogNotifier);
    }
    if let Some(hex) = clipboard.contents() {
        info!(hex, "clipboard now holds the first palette color");
    }

    let Some(outcome) = module.take_outcome() else {
        return Err("activation produced no outcome".into());
    };

    if let Some(mut buffer) = outcome.buffer {
        let positions: Vec<_> = outcome.placements.iter().map(|(_, p)| *p).collect();
        stamp_markers(&mut buffer, &positions);
        export_png(&buffer, &outcome.descriptor, &args.output)?;
        info!(path = %args.output.display(), "exported gradient");
    }

    let report = json!({
        "angle_degrees": outcome.descriptor.angle_degrees,
        "css": outcome.descriptor.css(),
        "palette": outcome
            .placements
            .iter()
            .map(|(color, position)| {
                json!({
                    "hex": color.hex(),
                    "hue": color.hue,
                    "saturation": color.saturation,
                    "lightness": color.lightness,
                    "x": position.x,
                    "y": position.y,
                })
            })
            .collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
