use centre_maze::{
    generators::{MazeConfig, generate},
    logging::init_tracing,
    render::Picture,
};

fn main() -> std::io::Result<()> {
    let _guard = init_tracing();

    // Usage: centre-maze [rows] [columns] [seed]
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let rows = args.next().and_then(|s| s.parse::<i32>().ok()).unwrap_or(10);
    let columns = args.next().and_then(|s| s.parse::<i32>().ok()).unwrap_or(10);
    let seed = args.next().and_then(|s| s.parse::<u64>().ok());

    let config = MazeConfig {
        seed,
        ..MazeConfig::default()
    };
    let result = generate(rows, columns, &config);

    println!(
        "{}x{} maze, start {:?}, exit {:?} side of {:?}",
        result.columns(),
        result.rows(),
        result.start(),
        result.exit().direction,
        result.exit().cell
    );
    Picture::new(&result).render(&mut std::io::stdout())
}
