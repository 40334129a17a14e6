use std::borrow::Cow;
use std::fs;
use std::io::{self, ErrorKind};
use std::process::Command;

use dot::{self, Edges, GraphWalk, Id, LabelText, Labeller, Nodes, Style};
use fnv::FnvHashMap;

use crate::data::Board;
use crate::solver::search_node::SearchNode;

type Nd = usize;
type Ed = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Type {
    Queued,
    Duplicate,
    Unique,
}

#[derive(Debug, Clone, Copy)]
struct Node {
    board: Board,
    dist: u32,
    h: u32,
    cost: u32,
}

/// The explored part of the state space, one node per board.
///
/// Only the first path to a board gets a node, later ones only add an edge.
#[derive(Debug)]
pub(crate) struct Graph {
    board_to_index: FnvHashMap<Board, usize>,
    nodes: Vec<(Node, Type)>,
    edges: Vec<Ed>,
}

impl Graph {
    pub(crate) fn new() -> Self {
        Self {
            board_to_index: FnvHashMap::default(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, search_node: &SearchNode<'_>, prev: Option<&Board>) {
        let board = *search_node.state.board();
        let node_index = match self.board_to_index.get(&board) {
            Some(&index) => index,
            None => {
                let index = self.nodes.len();
                self.board_to_index.insert(board, index);
                let node = Node {
                    board,
                    dist: search_node.dist,
                    h: search_node.h,
                    cost: search_node.cost,
                };
                self.nodes.push((node, Type::Queued));
                index
            }
        };

        if let Some(prev) = prev {
            let prev_index = self.board_to_index[prev];
            self.edges.push((prev_index, node_index));
        }
    }

    pub(crate) fn mark_duplicate(&mut self, board: &Board) {
        // a board reached through another path first stays unique
        let index = self.board_to_index[board];
        if self.nodes[index].1 == Type::Queued {
            self.nodes[index].1 = Type::Duplicate;
        }
    }

    pub(crate) fn mark_unique(&mut self, board: &Board) {
        self.nodes[self.board_to_index[board]].1 = Type::Unique;
    }

    pub(crate) fn draw_states(&self) -> io::Result<()> {
        let mut writer = Vec::new();
        dot::render(self, &mut writer)?;
        let s = String::from_utf8(writer).map_err(|err| io::Error::new(ErrorKind::InvalidData, err))?;
        let s = s.replace("digraph G {", "digraph G {\n    graph [fontname = \"hack\"];\n    node [fontname = \"hack\"];\n    edge [fontname = \"hack\"];");
        fs::write("state-space.dot", &s)?;

        let status = Command::new("dot")
            .args(&["-Tsvg", "-O", "state-space.dot"])
            .status()?;
        if status.success() {
            Ok(())
        } else {
            Err(io::Error::new(ErrorKind::Other, format!("dot exited with {}", status)))
        }
    }
}

impl<'a> GraphWalk<'a, Nd, Ed> for Graph {
    fn nodes(&'a self) -> Nodes<'a, Nd> {
        (0..self.nodes.len()).collect()
    }

    fn edges(&'a self) -> Edges<'a, Ed> {
        Cow::from(&self.edges)
    }

    fn source(&'a self, e: &Ed) -> Nd {
        e.0
    }

    fn target(&'a self, e: &Ed) -> Nd {
        e.1
    }
}

impl<'a> Labeller<'a, Nd, Ed> for Graph {
    fn graph_id(&'a self) -> Id<'a> {
        Id::new("G").unwrap()
    }

    fn node_id(&'a self, n: &Nd) -> Id<'a> {
        Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label(&'a self, n: &Nd) -> LabelText<'a> {
        let node = self.nodes[*n].0;
        LabelText::EscStr(
            format!(
                "d: {}, h: {}\ncost: {}\n{}",
                node.dist,
                node.h,
                node.cost,
                node.board.grid()
            )
            .into(),
        )
    }

    fn node_style(&'a self, n: &Nd) -> Style {
        let node_type = self.nodes[*n].1;
        if node_type == Type::Queued {
            Style::Solid
        } else {
            Style::Filled
        }
    }

    fn node_color(&'a self, n: &Nd) -> Option<LabelText<'a>> {
        let node_type = self.nodes[*n].1;
        Some(LabelText::LabelStr(
            match node_type {
                Type::Unique => "red",
                Type::Duplicate => "gray",
                Type::Queued => return None,
            }
            .into(),
        ))
    }
}
