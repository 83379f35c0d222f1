mod caves;
mod interactive;
mod mask;
mod render;


// Re-export public API
pub use caves::generate_caves;
pub use interactive::{InteractiveViewer, ViewerConfig};
pub use mask::LightMask;
pub use render::{mask_to_string, save_ppm, shade, to_byte};

fn main() {
    env_logger::init();

    // Check for command line arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "--interactive" {
        run_interactive();
    } else if args.len() > 1 && args[1] == "--benchmark" {
        run_benchmark();
    } else {
        println!("Light Mask");
        println!("Run with --interactive for the minifb cave viewer");
        println!("Run with --benchmark to test performance");
    }
}

fn run_benchmark() {
    use rayon::prelude::*;
    use std::time::Instant;

    println!("=== Light Mask Benchmark ===\n");

    // Test parameters
    let sizes = [(80, 60), (160, 120), (320, 240)];
    let iterations = 100;

    for (width, height) in sizes {
        println!("Grid size: {}x{}", width, height);
        println!("-----------------------");

        let walls = generate_caves(width, height, 20, 500);
        let mut lightmask = LightMask::new(width, height);
        lightmask.set_intensity(40.0);
        lightmask.set_ambient(0.4);

        // Full per-frame cycle: reset, add a light, compute
        let start = Instant::now();
        for _ in 0..iterations {
            lightmask.reset();
            lightmask.add_light(width / 2, height / 2, 1.0);
            lightmask.compute_mask(&walls);
        }
        let avg_ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;

        println!("  Frame: {:.3} ms ({:.1} FPS)", avg_ms, 1000.0 / avg_ms);
        println!();
    }

    // Four independent masks computed in parallel (e.g. split-screen or
    // layered lighting). Each instance owns its scratch buffers, so rayon
    // can fan them out safely.
    println!("=== 4-Mask Parallel Scenario ===\n");

    let (width, height) = (160, 120);
    let walls = generate_caves(width, height, 20, 500);
    let positions = [
        (width / 4, height / 4),
        (3 * width / 4, height / 4),
        (width / 4, 3 * height / 4),
        (3 * width / 4, 3 * height / 4),
    ];

    let mut masks: Vec<LightMask> = (0..positions.len())
        .map(|_| {
            let mut m = LightMask::new(width, height);
            m.set_intensity(40.0);
            m.set_ambient(0.4);
            m
        })
        .collect();

    // Sequential baseline
    let start = Instant::now();
    for _ in 0..iterations {
        for (mask, &(x, y)) in masks.iter_mut().zip(&positions) {
            mask.reset();
            mask.add_light(x, y, 1.0);
            mask.compute_mask(&walls);
        }
    }
    let avg_sequential_ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;

    // Parallel with rayon
    let start = Instant::now();
    for _ in 0..iterations {
        masks
            .par_iter_mut()
            .zip(positions.par_iter())
            .for_each(|(mask, &(x, y))| {
                mask.reset();
                mask.add_light(x, y, 1.0);
                mask.compute_mask(&walls);
            });
    }
    let avg_parallel_ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;

    println!("Grid size: {}x{}, 4 masks", width, height);
    println!("-----------------------");
    println!("  Sequential: {:.3} ms/iter", avg_sequential_ms);
    println!("  Parallel:   {:.3} ms/iter", avg_parallel_ms);
    println!("  Speedup: {:.2}x", avg_sequential_ms / avg_parallel_ms);
}

fn run_interactive() {
    let config = ViewerConfig::default();

    match InteractiveViewer::new(config) {
        Ok(mut viewer) => {
            if let Err(e) = viewer.run() {
                eprintln!("Error: {}", e);
            }
        }
        Err(e) => {
            eprintln!("Failed to create viewer: {}", e);
        }
    }
}
