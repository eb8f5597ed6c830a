#![cfg(feature = "std")]

use std::fmt::Write;

use crate::{
    board::{Board, Cell},
    common::ShotResult,
    config::BOARD_SIZE,
};

/// Symbol drawn for a cell; ships on a hidden board look like open water.
pub fn cell_symbol(cell: Cell, hidden: bool) -> char {
    match cell {
        Cell::Empty => 'O',
        Cell::Ship if hidden => 'O',
        Cell::Ship => '■',
        Cell::Hit => 'X',
        Cell::Miss => '.',
    }
}

fn header() -> String {
    let mut line = String::from("   |");
    for c in 0..BOARD_SIZE {
        let _ = write!(line, " {} |", c + 1);
    }
    line
}

fn row(board: &Board, r: usize) -> String {
    let mut line = format!("{:<3}|", r + 1);
    for cell in board.rows()[r].iter() {
        let _ = write!(line, " {} |", cell_symbol(*cell, board.is_hidden()));
    }
    line
}

/// Draw a single board with 1-based labels.
pub fn render_board(board: &Board) -> String {
    let mut out = header();
    for r in 0..BOARD_SIZE {
        out.push('\n');
        out.push_str(&row(board, r));
    }
    out
}

/// Draw two boards next to each other.
pub fn render_boards(left_title: &str, left: &Board, right_title: &str, right: &Board) -> String {
    let head = header();
    let width = head.chars().count() + 8;
    let mut out = String::new();
    let _ = writeln!(out, "{:<width$}{}", left_title, right_title, width = width);
    let _ = writeln!(out, "{:<width$}{}", head, head, width = width);
    for r in 0..BOARD_SIZE {
        let left_row = row(left, r);
        let pad = width - left_row.chars().count();
        let _ = writeln!(out, "{}{}{}", left_row, " ".repeat(pad), row(right, r));
    }
    out
}

/// Greeting and input instructions.
pub fn greeting() -> &'static str {
    "-------------------\n\
     \x20 Welcome to the  \n\
     \x20   sea battle    \n\
     -------------------\n\
     \x20input format: x y\n\
     \x20x - row number   \n\
     \x20y - column number"
}

/// What a landed shot did, for the player who fired it.
pub fn shot_message(result: ShotResult) -> &'static str {
    match result {
        ShotResult::Miss => "Miss!",
        ShotResult::Hit => "Ship hit!",
        ShotResult::Sunk => "Ship destroyed!",
    }
}
