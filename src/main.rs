use std::time::Duration;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};

use raycast::output::{frame_path, save_image_as_png};
use raycast::{load_scene, Animation, Camera, ImageCanvas, RenderConfig, RenderMode, Scene};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

/// Frames rendered per mode in benchmark mode.
const BENCH_FRAMES: u32 = 10;

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!("Raycast - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    let scene = match &args.scene {
        Some(path) => match load_scene(path) {
            Ok(scene) => scene,
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        },
        None => Scene::demo(),
    };
    info!(
        "Image resolution: {}x{}, {} spheres, {} lights",
        args.width,
        args.height,
        scene.spheres.len(),
        scene.lights.len()
    );

    if args.bench {
        run_benchmark(scene, args.width, args.height);
        return;
    }

    if let Err(e) = render_frames(scene, &args) {
        error!("Failed to save image: {}", e);
        std::process::exit(1);
    }
}

/// Render the requested frames, advancing the animation between them.
fn render_frames(mut scene: Scene, args: &Args) -> image::ImageResult<()> {
    let camera = Camera::new();
    let config = RenderConfig::from(args.mode);
    let animate = args.animate || args.frames > 1;
    let mut animation = Animation::default();

    info!("Render mode {:?}: {:?}", args.mode, config);

    let pb = progress_bar(args.frames);
    for index in 0..args.frames {
        if animate {
            animation.advance(&mut scene);
        }

        let mut canvas = ImageCanvas::new(args.width, args.height);
        let elapsed = camera.render(&scene, &config, &mut canvas);
        info!("Frame {} rendered in {} ms", index, elapsed.as_millis());

        save_image_as_png(canvas.image(), frame_path(&args.output, index, args.frames))?;
        pb.inc(1);
    }
    pb.finish();

    Ok(())
}

/// Run benchmark comparing average frame time across render modes
fn run_benchmark(mut scene: Scene, width: u32, height: u32) {
    info!("🏁 Starting benchmark mode - {} animated frames per render mode", BENCH_FRAMES);

    let camera = Camera::new();
    let mut canvas = ImageCanvas::new(width, height);
    let pb = progress_bar(BENCH_FRAMES * RenderMode::ALL.len() as u32);

    let mut results: Vec<(RenderMode, Duration)> = Vec::new();
    for mode in RenderMode::ALL {
        let config = RenderConfig::from(mode);
        let mut animation = Animation::default();
        let mut total = Duration::ZERO;
        for _ in 0..BENCH_FRAMES {
            animation.advance(&mut scene);
            total += camera.render(&scene, &config, &mut canvas);
            pb.inc(1);
        }
        results.push((mode, total / BENCH_FRAMES));
    }
    pb.finish();

    // Summary table
    info!("================== BENCHMARK RESULTS ==================");
    info!("Resolution: {}x{}, Frames per mode: {}", width, height, BENCH_FRAMES);
    info!("--------------------------------------------------------");
    let baseline = results[0].1.as_secs_f32();
    for (mode, average) in &results {
        let cost = average.as_secs_f32() / baseline.max(f32::EPSILON);
        info!("{:<10} {:>8.2} ms/frame   {:>6.2}x", format!("{:?}", mode), average.as_secs_f32() * 1000.0, cost);
    }
    info!("========================================================");
}

fn progress_bar(len: u32) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar().template("{bar:40} {pos}/{len} ETA: {eta}") {
        pb.set_style(style);
    }
    pb
}
