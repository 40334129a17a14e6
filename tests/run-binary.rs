use assert_cmd::prelude::*;
use std::process::Command;

#[test]
fn run_one_move() {
    let output = r"Initial state:
 1 | 2 | 3
---|---|---
 4 | 5 | 6
---|---|---
 7 | 8 | 0

Goal state:
 1 | 2 | 3
---|---|---
 4 | 5 | 6
---|---|---
 7 | 0 | 8

Solving using greedy...
Found solution:
Left
Moves: 1
Final state:
 1 | 2 | 3
---|---|---
 4 | 5 | 6
---|---|---
 7 | 0 | 8

";

    Command::main_binary()
        .unwrap()
        .env_remove("RUST_LOG")
        .arg("123456780")
        .arg("1,2,3,4,5,6,7,0,8")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_file_optimal_steps_compact() {
    let output = r"Initial state:
1,2,3,4,5,6,0,7,8
Goal state:
1,2,3,4,5,6,7,8,0
Solving using a-star...
States created total: 5
Unique visited total: 3
Reached duplicates total: 0
Created but not reached total: 2

Depth          Created        Unique         Duplicates     Unknown (not reached)
0:             1              1              0              0
1:             2              1              0              1
2:             2              1              0              1

Found solution:
Right Right
Moves: 2
1,2,3,4,5,6,0,7,8
Right:
1,2,3,4,5,6,7,0,8
Right:
1,2,3,4,5,6,7,8,0
";

    Command::main_binary()
        .unwrap()
        .env_remove("RUST_LOG")
        .arg("--optimal")
        .arg("--compact")
        .arg("--stats")
        .arg("--steps")
        .arg("--file")
        .arg("puzzles/two-moves.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_no_solution() {
    let output = r"Initial state:
1,2,3,4,5,6,7,8,0
Goal state:
2,1,3,4,5,6,7,8,0
Solving using greedy...
No solution
";

    Command::main_binary()
        .unwrap()
        .env_remove("RUST_LOG")
        .arg("-c")
        .arg("-f")
        .arg("puzzles/no-solution.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_stdin() {
    let output = r"Initial state:
1,2,3,4,5,6,7,8,0
Goal state:
1,2,3,4,5,6,7,0,8
Solving using greedy...
Found solution:
Left
Moves: 1
Final state:
1,2,3,4,5,6,7,0,8
";

    Command::main_binary()
        .unwrap()
        .env_remove("RUST_LOG")
        .arg("-c")
        .arg("-f")
        .arg("-")
        .with_stdin()
        .buffer("123456780\n123456708\n")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_invalid_board() {
    Command::main_binary()
        .unwrap()
        .env_remove("RUST_LOG")
        .arg("123456788")
        .arg("123456780")
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn run_conflicting_args() {
    // clap decides which of the two conflicts it reports so stderr isn't checked

    Command::main_binary()
        .unwrap()
        .arg("--greedy")
        .arg("--optimal")
        .arg("123456780")
        .arg("123456780")
        .assert()
        .failure()
        .stdout("");
}
