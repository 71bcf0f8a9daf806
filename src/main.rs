// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]

use std::env;
use std::error::Error;
use std::process;

use clap::{App, Arg, ArgMatches};
use log::debug;

use sokoban_astar::config::Config;
use sokoban_astar::level::Level;
use sokoban_astar::{LoadLevel, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("sokoban-astar")
        .author("martin-t")
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("Print only the solution (or \"No solution\")"),
        )
        .arg(
            Arg::with_name("text")
                .short("t")
                .long("text")
                .help("Treat LEVEL as the level itself, rows separated by \\n"),
        )
        .arg(
            Arg::with_name("max-visited")
                .short("m")
                .long("max-visited")
                .takes_value(true)
                .value_name("N")
                .help("Give up after visiting N unique states"),
        )
        .arg(
            Arg::with_name("level")
                .required(true)
                .value_name("LEVEL")
                .help("Path to a level in XSB format"),
        )
        .get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches<'_>) -> Result<(), Box<dyn Error>> {
    let quiet = matches.is_present("quiet");
    let level_arg = matches.value_of("level").ok_or("Missing level")?;

    let mut config = Config::new().print_status(!quiet);
    if let Some(max_visited) = matches.value_of("max-visited") {
        let max_visited = max_visited
            .parse::<usize>()
            .map_err(|err| format!("Invalid --max-visited {}: {}", max_visited, err))?;
        config = config.max_visited(max_visited);
    }

    let level = if matches.is_present("text") {
        level_arg.replace("\\n", "\n").parse::<Level>()?
    } else {
        level_arg.load_level().map_err(|err| {
            let current_dir = env::current_dir()
                .map(|dir| dir.display().to_string())
                .unwrap_or_default();
            format!("Can't load level {} in {}: {}", level_arg, current_dir, err)
        })?
    };
    debug!("Loaded level:\n{}", level);

    if !quiet {
        println!("Solving {}...", level_arg);
    }
    let solver_ok = level.solve(&config)?;

    if quiet {
        match solver_ok.moves {
            Some(moves) => println!("{}", moves),
            None => println!("No solution"),
        }
        return Ok(());
    }

    println!("{}", solver_ok.stats);
    match solver_ok.moves {
        Some(moves) => {
            println!("Found solution:");
            print!("{}", level.format_solution(&moves, false));
            println!("{}", moves);
            println!("Moves: {}", moves.move_cnt());
            println!("Pushes: {}", moves.push_cnt());
        }
        None => println!("No solution"),
    }
    Ok(())
}
