#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::{
    common::{BoardError, Coord},
    player::{HumanPlayer, TargetSource},
};

/// Human player reading targets from the terminal.
pub type CliPlayer = HumanPlayer<LineTargets<StdinLock<'static>, Stdout>>;

impl CliPlayer {
    pub fn stdio() -> Self {
        HumanPlayer::new(LineTargets::new(io::stdin().lock(), io::stdout()))
    }
}

/// Parse `"row col"`, both 1-based, into a board coordinate.
///
/// Only the shape of the input is checked here; numbers past the board edge
/// parse fine and are refused when the shot is fired.
pub fn parse_coord(input: &str) -> Result<Coord, String> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.len() != 2 {
        return Err("Enter 2 coordinates!".to_string());
    }
    let mut nums = [0usize; 2];
    for (slot, part) in nums.iter_mut().zip(&parts) {
        if !part.chars().all(|ch| ch.is_ascii_digit()) {
            return Err("Enter numbers!".to_string());
        }
        *slot = part
            .parse()
            .map_err(|_| format!("Number '{}' is too large", part))?;
        if *slot == 0 {
            return Err("Rows and columns start at 1".to_string());
        }
    }
    Ok(Coord::new(nums[0] - 1, nums[1] - 1))
}

/// Prompts on `output`, reads one target per line from `input`.
/// Malformed lines are explained and asked again.
pub struct LineTargets<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineTargets<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> TargetSource for LineTargets<R, W> {
    fn next_target(&mut self) -> Option<Coord> {
        loop {
            // a broken terminal is treated like end of input
            if let Err(e) = write!(self.output, "Your move: ").and_then(|_| self.output.flush()) {
                log::warn!("cannot prompt for input: {}", e);
                return None;
            }
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => {
                    log::warn!("cannot read input: {}", e);
                    return None;
                }
            }
            match parse_coord(&line) {
                Ok(at) => return Some(at),
                Err(msg) => {
                    let _ = writeln!(self.output, " {} ", msg);
                }
            }
        }
    }

    fn reject(&mut self, _target: Coord, err: &BoardError) {
        let _ = writeln!(self.output, "{}", err);
    }
}
