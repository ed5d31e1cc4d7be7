//! Interactive placement session front-end.
//!
//! Prompts for the seed square, re-prompting until the input parses and lands
//! on the board, then narrates each greedy round and the verification sweep,
//! printing the board after every placement.

use std::io::{self, BufRead, Write};

use crate::board::board_types::{square_index, Square};
use crate::errors::{PlacementError, PlacementResult};
use crate::placement::placement_engine::PlacementEngine;
use crate::utils::algebraic::{column_from_letter, row_from_rank, square_to_label};
use crate::utils::render_board::render_board;

pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    run_session(&mut stdin.lock(), &mut io::stdout())
}

pub fn run_session(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<()> {
    let seed = prompt_seed_square(input, out)?;
    let mut engine = PlacementEngine::new();

    engine.place_initial(seed).map_err(to_io_error)?;
    announce_placement(out, &engine, seed)?;

    while let Some(placement) = engine.place_next_greedy().map_err(to_io_error)? {
        let label = label_for(placement.square)?;
        writeln!(
            out,
            "Centaur placed at {label} because it had the biggest value: {}",
            placement.value
        )?;
        writeln!(out)?;
        write!(out, "{}", render_board(engine.board()))?;
        writeln!(out)?;
    }

    let rescued = engine.verification_sweep().map_err(to_io_error)?;
    if rescued.is_empty() {
        writeln!(out, "No missed positions found.")?;
    } else {
        for &square in &rescued {
            writeln!(out, "Found missed centaur position at {}", label_for(square)?)?;
        }
        writeln!(out)?;
        write!(out, "{}", render_board(engine.board()))?;
        writeln!(out)?;
    }

    writeln!(out, "Done. Total centaurs placed: {}", engine.board().piece_count())?;
    writeln!(out, "Centaur positions:")?;
    for &square in engine.board().pieces() {
        writeln!(out, "  {}", label_for(square)?)?;
    }

    Ok(())
}

fn announce_placement(out: &mut impl Write, engine: &PlacementEngine, square: Square) -> io::Result<()> {
    writeln!(out, "Centaur placed at {}", label_for(square)?)?;
    writeln!(out)?;
    write!(out, "{}", render_board(engine.board()))?;
    writeln!(out)
}

fn prompt_seed_square(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<Square> {
    loop {
        write!(out, "Enter letter (A-H): ")?;
        out.flush()?;
        let letter_line = read_line(input)?;

        write!(out, "Enter number (1-8): ")?;
        out.flush()?;
        let number_line = read_line(input)?;

        match parse_seed(&letter_line, &number_line) {
            Ok(square) => {
                writeln!(out, "User placed centaur at {}", label_for(square)?)?;
                writeln!(out)?;
                return Ok(square);
            }
            Err(err) => writeln!(out, "Invalid square: {err}")?,
        }
    }
}

fn parse_seed(letter_line: &str, number_line: &str) -> PlacementResult<Square> {
    let letter = letter_line
        .trim()
        .chars()
        .next()
        .ok_or_else(|| PlacementError::InvalidFormat(letter_line.trim().to_owned()))?;
    let col = column_from_letter(letter)?;

    let rank: i8 = number_line
        .trim()
        .parse()
        .map_err(|_| PlacementError::InvalidFormat(number_line.trim().to_owned()))?;
    let row = row_from_rank(rank)?;

    Ok(square_index(row, col))
}

fn read_line(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before a seed square was chosen",
        ));
    }
    Ok(line)
}

fn label_for(square: Square) -> io::Result<String> {
    square_to_label(square).map_err(to_io_error)
}

fn to_io_error(err: PlacementError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::{parse_seed, run_session};
    use crate::board::board_types::square_index;
    use std::io::Cursor;

    #[test]
    fn parse_seed_translates_letter_and_rank() {
        assert_eq!(
            parse_seed("D\n", "4\n").expect("D4 should parse"),
            square_index(4, 3)
        );
        assert!(parse_seed("Z\n", "4\n").is_err());
        assert!(parse_seed("D\n", "9\n").is_err());
        assert!(parse_seed("D\n", "four\n").is_err());
    }

    #[test]
    fn session_reprompts_on_bad_input_and_runs_to_summary() {
        let mut input = Cursor::new("Z\n4\nd\n4\n");
        let mut out = Vec::new();

        run_session(&mut input, &mut out).expect("session should complete");
        let transcript = String::from_utf8(out).expect("output should be utf-8");

        assert!(transcript.contains("Invalid square:"));
        assert!(transcript.contains("User placed centaur at D4"));
        assert!(transcript.contains("Done. Total centaurs placed:"));
        assert!(transcript.contains("  D4"));
    }

    #[test]
    fn session_fails_cleanly_when_input_ends() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();
        assert!(run_session(&mut input, &mut out).is_err());
    }
}
