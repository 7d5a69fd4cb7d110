use std::time::Instant;

use centre_maze::{
    generators::{MazeConfig, generate},
    logging::init_tracing,
};

fn main() -> std::io::Result<()> {
    let _guard = init_tracing();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(10);
    let size = args.next().and_then(|s| s.parse::<i32>().ok()).unwrap_or(1000);

    let config = MazeConfig::default();
    let started = Instant::now();
    for _ in 0..num_iters {
        let result = generate(size, size, &config);
        tracing::debug!("generated maze with exit {:?}", result.exit());
    }
    let elapsed = started.elapsed();
    println!(
        "{} mazes of {}x{} in {:?} ({:?} each)",
        num_iters,
        size,
        size,
        elapsed,
        elapsed / num_iters.max(1) as u32
    );
    Ok(())
}
