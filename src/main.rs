use circular_queue::CircularQueue;
use gray_scott_grid::{
    ChemicalSpecies, Config, Grid, GridError, ParameterField, ParameterPattern, model_presets,
    seed,
};
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::process;
use std::time::{Duration, Instant};

const FRAME_TIME_WINDOW: usize = 10;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error!("{}", e);
        if let GridError::UnknownPreset(_) = e {
            error!("available presets: {}", model_presets::names().join(", "));
        }
        process::exit(1);
    }
}

fn run() -> Result<(), GridError> {
    let config = Config::from_env()?;
    info!(
        "{}x{} grid, preset '{}' (feed {}, kill {}), {} frames of {} iterations",
        config.width,
        config.height,
        config.preset_name,
        config.preset.0,
        config.preset.1,
        config.frames,
        config.iterations_per_frame
    );

    let mut grid = Grid::new(config.width, config.height)?;
    grid.set_preset(config.preset);

    let mut rng = SmallRng::seed_from_u64(config.seed);
    seed::seed_center_square(&mut grid, config.width.min(config.height) / 10);
    seed::seed_random_points(&mut grid, 100, &mut rng);

    let feed = ParameterField::new(
        ParameterPattern::VerticalStripes,
        0.0543,
        0.0547,
        config.width,
        config.height,
    );
    let kill = ParameterField::new(
        ParameterPattern::VerticalGradient,
        0.060,
        0.065,
        config.width,
        config.height,
    );

    let mut frame_times = CircularQueue::with_capacity(FRAME_TIME_WINDOW);
    for frame in 0..config.frames {
        let started = Instant::now();

        if config.advanced {
            let percent = frame as f64 / config.frames as f64;
            let kill = kill.clone().flipped(percent > 0.5);
            let (diffuse_a, diffuse_b) = (grid.diffuse_a, grid.diffuse_b);
            grid.update_advanced(
                config.iterations_per_frame,
                feed.sampler(),
                kill.sampler(),
                move |_, _| diffuse_a,
                move |_, _| diffuse_b,
                config.feedback,
            );
        } else {
            grid.update(config.iterations_per_frame, config.feedback);
        }

        frame_times.push(started.elapsed());
        let image = grid.get_image_data(ChemicalSpecies::A);
        info!(
            "frame {}/{}: mean A {:.4}, avg frame time {:?}",
            frame + 1,
            config.frames,
            mean_intensity(&image),
            average(frame_times.iter())
        );
    }

    Ok(())
}

fn mean_intensity(rgba: &[u8]) -> f64 {
    let pixels = rgba.len() / 4;
    let total: u64 = rgba.chunks_exact(4).map(|px| u64::from(px[0])).sum();
    total as f64 / pixels.max(1) as f64 / 255.0
}

fn average<'a>(times: impl Iterator<Item = &'a Duration>) -> Duration {
    let (total, count) = times.fold((Duration::ZERO, 0u32), |(total, count), t| {
        (total + *t, count + 1)
    });
    total.checked_div(count).unwrap_or_default()
}
