use clap::Parser;
use ephemeris::{Observer, SiderealEphemeris};
use skylens::{DrawInstruction, OrientationSample, OverlayConfig, OverlayEngine};
use time::OffsetDateTime;

/// Command line arguments for the overlay demo
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Sky overlay demo: sweeps a simulated device orientation and prints draw lists"
)]
struct Args {
    /// Observer latitude in degrees
    #[arg(long, default_value_t = 48.85)]
    latitude: f64,

    /// Observer longitude in degrees
    #[arg(long, default_value_t = 2.35)]
    longitude: f64,

    /// Horizontal field of view in degrees
    #[arg(short, long, default_value_t = 70.0)]
    fov: f64,

    /// Initial pollution level in percent (0-100)
    #[arg(short, long, default_value_t = 30)]
    pollution: u8,

    /// Number of frames to render
    #[arg(short = 'n', long, default_value_t = 36)]
    frames: usize,

    /// Simulate a denied location fix (default observer fallback)
    #[arg(long)]
    no_location: bool,

    /// Run the clean animation during the sweep
    #[arg(long)]
    clean: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = OverlayConfig {
        horizontal_fov_deg: args.fov,
        pollution_percent: args.pollution,
        ..OverlayConfig::default()
    };
    let mut engine = OverlayEngine::new(config, SiderealEphemeris::new())?;

    if args.no_location {
        engine.use_default_observer();
    } else {
        engine.set_observer(Observer::new(args.latitude, args.longitude, 0.0));
    }

    if args.clean {
        engine.start_clean();
    }

    println!("Sky overlay demo");
    println!("================");

    // Sweep the full compass at a fixed 30 degree tilt, one frame per
    // heading step.
    for frame in 0..args.frames {
        let heading = (frame as f64 / args.frames as f64) * 360.0;
        engine.on_orientation_sample(&OrientationSample {
            compass_heading: Some(heading),
            beta: Some(120.0),
            ..Default::default()
        });

        let draw_list = engine.render_frame(OffsetDateTime::now_utc());

        let stars: Vec<&str> = draw_list
            .iter()
            .filter_map(|d| match d {
                DrawInstruction::Star { name, .. } => Some(*name),
                _ => None,
            })
            .collect();
        let moon = draw_list
            .iter()
            .any(|d| matches!(d, DrawInstruction::Moon { .. }));

        println!(
            "az {heading:6.1}  pollution {:4.0}%  stars: {:<40} moon: {}",
            engine.pollution() * 100.0,
            if stars.is_empty() {
                "-".to_string()
            } else {
                stars.join(", ")
            },
            if moon { "yes" } else { "no" }
        );

        engine.tick_clean();
    }

    Ok(())
}
