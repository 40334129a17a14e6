use std::error::Error;
use std::io::{self, Read};
use std::process;

use clap::{App, Arg, ArgGroup, ArgMatches};
use log::{debug, info};

use eight_puzzle_solver::config::{Format, Method};
use eight_puzzle_solver::data::Board;
use eight_puzzle_solver::puzzle::Puzzle;
use eight_puzzle_solver::solver::Outcome;
use eight_puzzle_solver::{LoadPuzzle, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("eight-puzzle-solver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Solves the 8-puzzle from any initial board to any goal board")
        .arg(
            Arg::with_name("greedy")
                .short("g")
                .long("greedy")
                .help("order the frontier by heuristic only (default)"),
        )
        .arg(
            Arg::with_name("optimal")
                .short("o")
                .long("optimal")
                .help("order the frontier by moves + heuristic (A*) to find a shortest solution"),
        )
        .group(ArgGroup::with_name("method").args(&["greedy", "optimal"]))
        .arg(
            Arg::with_name("compact")
                .short("c")
                .long("compact")
                .help("print boards on a single line"),
        )
        .arg(
            Arg::with_name("stats")
                .short("s")
                .long("stats")
                .help("print search statistics"),
        )
        .arg(
            Arg::with_name("steps")
                .long("steps")
                .help("print the board after every move"),
        )
        .arg(
            Arg::with_name("status")
                .short("v")
                .long("status")
                .help("print progress while searching"),
        )
        .arg(
            Arg::with_name("file")
                .short("f")
                .long("file")
                .takes_value(true)
                .value_name("FILE")
                .conflicts_with_all(&["initial", "goal"])
                .help("read both boards from a file (- for stdin)"),
        )
        .arg(
            Arg::with_name("initial")
                .required_unless("file")
                .help("initial board, e.g. 123456780 or 1,2,3,4,5,6,7,8,0 (0 is the blank)"),
        )
        .arg(
            Arg::with_name("goal")
                .required_unless("file")
                .help("goal board in the same format"),
        )
        .get_matches();

    let method = if matches.is_present("optimal") {
        Method::AStar
    } else {
        Method::Greedy
    };
    let format = if matches.is_present("compact") {
        Format::Compact
    } else {
        Format::Grid
    };

    let puzzle = load_puzzle(&matches).unwrap_or_else(|err| {
        eprintln!("Failed to load puzzle: {}", err);
        process::exit(1);
    });
    debug!("Loaded puzzle {:?}", puzzle);
    if !puzzle.is_solvable() {
        info!("Boards have different parity, the search will visit all reachable boards");
    }

    println!("Initial state:\n{}", puzzle.initial.format(format));
    println!("Goal state:\n{}", puzzle.goal.format(format));
    println!("Solving using {}...", method);

    let solver_ok = puzzle.solve(method, matches.is_present("status"));
    if matches.is_present("stats") {
        println!("{}", solver_ok.stats);
    }

    match solver_ok.outcome {
        Outcome::Solved {
            ref moves,
            ref final_board,
        } => {
            println!("Found solution:");
            println!("{}", moves);
            println!("Moves: {}", moves.move_cnt());
            if matches.is_present("steps") {
                print!("{}", puzzle.solution(moves, format));
            } else {
                println!("Final state:\n{}", final_board.format(format));
            }
        }
        Outcome::NoSolution => println!("No solution"),
    }
}

fn load_puzzle(matches: &ArgMatches<'_>) -> Result<Puzzle, Box<dyn Error>> {
    match matches.value_of("file") {
        Some("-") => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            return Ok(text.parse::<Puzzle>()?);
        }
        Some(path) => return path.load_puzzle(),
        None => {}
    }
    let initial: Board = matches.value_of("initial").unwrap_or_default().parse()?;
    let goal: Board = matches.value_of("goal").unwrap_or_default().parse()?;
    Ok(Puzzle::new(initial, goal))
}
