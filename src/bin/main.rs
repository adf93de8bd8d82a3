use clap::Parser;
use indoc::indoc;

use maze_search::dispatch;
use maze_search::maze::GridMaze;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Search method: bfs, dfs, astar or astar_multi
    #[arg(short, long, env = "METHOD", default_value = "astar")]
    method: String,

    /// Built-in demo maze: single, corners or blocked
    #[arg(short, long, default_value = "single")]
    demo: String,
}

fn demo_maze(name: &str) -> Option<&'static str> {
    match name {
        "single" => Some(indoc! {"
            S..#......
            .#.#.####.
            .#.#.#..#.
            .#...#.##.
            .#####.#..
            .#...#.#.#
            .#.###.#.#
            .#.....#.#
            .#######.#
            .........G
        "}),
        "corners" => Some(indoc! {"
            G...#...G
            .#..#..#.
            ....#....
            .##...##.
            ....S....
            .##...##.
            ....#....
            .#..#..#.
            G...#...G
        "}),
        "blocked" => Some(indoc! {"
            S....#..G
            .....#...
            .....#...
            .....#...
            .....#...
        "}),
        _ => None,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let Some(text) = demo_maze(&args.demo) else {
        return Err(format!("Unknown demo maze '{}'", args.demo).into());
    };
    let maze = GridMaze::try_from(text)?;
    print!("{maze}");

    let path = dispatch::search(&maze, &args.method)?;
    if path.is_empty() {
        println!("{}: no path", args.method);
    } else {
        println!(
            "{}: {} cells ({} moves)",
            args.method,
            path.len(),
            path.len() - 1
        );
        let cells: Vec<String> = path.iter().map(ToString::to_string).collect();
        println!("{}", cells.join(" "));
    }

    Ok(())
}
