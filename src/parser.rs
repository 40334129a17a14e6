use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::data::{Board, BoardErr, CELLS};
use crate::puzzle::Puzzle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserErr {
    Cell(String),
    CellCount(usize),
    Board(BoardErr),
    BoardCount(usize),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Cell(ref token) => write!(f, "Invalid cell: {}", token),
            ParserErr::CellCount(cnt) => {
                write!(f, "Expected {} cells, found {}", CELLS, cnt)
            }
            ParserErr::Board(err) => write!(f, "Invalid board: {}", err),
            ParserErr::BoardCount(cnt) => {
                write!(f, "Expected initial and goal board, found {} boards", cnt)
            }
        }
    }
}

impl Error for ParserErr {}

impl From<BoardErr> for ParserErr {
    fn from(err: BoardErr) -> Self {
        ParserErr::Board(err)
    }
}

impl FromStr for Board {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_board(s)
    }
}

impl FromStr for Puzzle {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_puzzle(s)
    }
}

/// Accepts `123456780` as well as numbers separated by commas and/or whitespace.
/// Separators of the grid format (`|` and lines of `-`) are skipped.
pub(crate) fn parse_board(text: &str) -> Result<Board, ParserErr> {
    let tokens: Vec<_> = text
        .split(|c: char| c == ',' || c == '|' || c.is_whitespace())
        .filter(|token| !token.is_empty() && !token.chars().all(|c| c == '-'))
        .collect();

    let tiles: Vec<u8> = if tokens.len() == 1
        && tokens[0].len() == CELLS
        && tokens[0].chars().all(|c| c.is_ascii_digit())
    {
        tokens[0].bytes().map(|b| b - b'0').collect()
    } else {
        tokens
            .iter()
            .map(|token| {
                token
                    .parse::<u8>()
                    .map_err(|_| ParserErr::Cell(token.to_string()))
            })
            .collect::<Result<Vec<u8>, ParserErr>>()?
    };

    if tiles.len() != CELLS {
        return Err(ParserErr::CellCount(tiles.len()));
    }
    let mut cells = [0; CELLS];
    cells.copy_from_slice(&tiles);
    Ok(Board::new(cells)?)
}

/// Two boards separated by an empty line or two lines with one board each.
/// Lines starting with `;` are ignored.
pub(crate) fn parse_puzzle(text: &str) -> Result<Puzzle, ParserErr> {
    let mut blocks: Vec<Vec<&str>> = vec![Vec::new()];
    for line in text.lines().map(str::trim) {
        if line.starts_with(';') {
            continue;
        }
        if line.is_empty() {
            if blocks.last().map_or(false, |block| !block.is_empty()) {
                blocks.push(Vec::new());
            }
        } else if let Some(block) = blocks.last_mut() {
            block.push(line);
        }
    }
    blocks.retain(|block| !block.is_empty());

    if blocks.len() == 1 && blocks[0].len() == 2 {
        let lines = blocks.remove(0);
        blocks = lines.into_iter().map(|line| vec![line]).collect();
    }

    if blocks.len() != 2 {
        return Err(ParserErr::BoardCount(blocks.len()));
    }
    let initial = parse_board(&blocks[0].join("\n"))?;
    let goal = parse_board(&blocks[1].join("\n"))?;
    Ok(Puzzle::new(initial, goal))
}
