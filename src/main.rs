use docopt::Docopt;
use error_chain::bail;
use eyemaze::{
    generate_with_config,
    ActiveCellPolicy,
    EdgeKind,
    Maze,
    MazeConfigBuilder,
};
use log::info;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use serde::Deserialize;
use std::{
    fs::File,
    io,
    io::prelude::*,
};

const USAGE: &str = "EyeMaze

Usage:
    eyemaze_driver -h | --help
    eyemaze_driver [(--size=<n>|[--width=<w> --depth=<d>])] [--seed=<s>] [--policy=<p>] [--text-out=<path>] [--save-edges=<path>] [--place-player]

Options:
    -h --help              Show this screen.
    --size=<n>             The maze is n * n cells.
    --width=<w>            Number of cells along x in a w*d maze [default: 20].
    --depth=<d>            Number of cells along z in a w*d maze [default: 20].
    --seed=<s>             Seed the random number generator for a reproducible maze.
    --policy=<p>           Which active cell grows next, newest (long corridors) or random (many branches) [default: newest].
    --text-out=<path>      Output file path for a textual rendering of the maze instead of stdout.
    --save-edges=<path>    Serialize the maze to a text file: each line is a pair of numbers. Line 1: n(#vertices) m(#edges). Line 2+ passage between vertices. Uses 1-based vertex indices.
    --place-player         Choose a random cell to place a player on and print it.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_size: Option<usize>,
    flag_width: usize,
    flag_depth: usize,
    flag_seed: Option<u64>,
    flag_policy: String,
    flag_text_out: String,
    flag_save_edges: String,
    flag_place_player: bool,
}

mod errors {
    use error_chain::*;
    error_chain! {
        links {
            Maze(::eyemaze::errors::Error, ::eyemaze::errors::ErrorKind);
        }

        foreign_links {
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {
    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    let (width, depth) = if let Some(square_size) = args.flag_size {
        (square_size, square_size)
    } else {
        (args.flag_width, args.flag_depth)
    };

    let config = MazeConfigBuilder::new()
        .width(width)
        .depth(depth)
        .seed(args.flag_seed)
        .policy(parse_policy(&args.flag_policy)?)
        .build()?;

    let maze = generate_with_config(&config);
    info!("Generated {} x {} maze: {} passages, {} walls",
          width,
          depth,
          maze.passage_count(),
          maze.wall_count());

    if !args.flag_save_edges.is_empty() {
        save_maze_graph(&maze, &args.flag_save_edges)?;
        info!("Saved maze edges to {}", args.flag_save_edges);
    }

    if args.flag_text_out.is_empty() {
        println!("{}", maze);
    } else {
        write_text_to_file(&format!("{}", maze), &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
        info!("Saved maze text to {}", args.flag_text_out);
    }

    if args.flag_place_player {
        // A different stream from the maze's own so placement does not shift with maze size.
        let mut rng = match args.flag_seed {
            Some(seed) => XorShiftRng::seed_from_u64(seed.wrapping_add(1)),
            None => XorShiftRng::from_entropy(),
        };
        let spawn = maze.random_coordinates(&mut rng);
        println!("player: {}", spawn);
    }

    Ok(())
}

fn parse_policy(policy: &str) -> Result<ActiveCellPolicy> {
    match policy.to_lowercase().as_ref() {
        "newest" => Ok(ActiveCellPolicy::Newest),
        "random" => Ok(ActiveCellPolicy::Random),
        other => bail!("Unknown policy '{}', expected newest or random", other),
    }
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

fn save_maze_graph(maze: &Maze, file_path: &str) -> Result<()> {

    let mut graph_data = String::new();
    graph_data.push_str(maze.size().to_string().as_ref());
    graph_data.push(' ');
    graph_data.push_str(maze.passage_count().to_string().as_ref());
    graph_data.push('\n');

    for (src, dst, kind) in maze.iter_links() {
        if kind != EdgeKind::Passage {
            continue;
        }
        let index_a = maze.coordinates_to_index(src)
            .expect("Links iter should give valid coordinates");
        let index_b = maze.coordinates_to_index(dst)
            .expect("Links iter should give valid coordinates");

        graph_data.push_str((index_a + 1).to_string().as_ref());
        graph_data.push(' ');
        graph_data.push_str((index_b + 1).to_string().as_ref());
        graph_data.push('\n');
    }

    write_text_to_file(&graph_data, file_path)
        .chain_err(|| format!("Failed to write maze graph to text file {}", file_path))?;

    Ok(())
}
