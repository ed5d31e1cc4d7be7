//! Placement state machine: manual seed, greedy rounds, verification sweep.
//!
//! The engine owns the board outright and drives every mutation. After each
//! placement it rebuilds the attack marks and the per-cell potential cache in
//! full, so the next decision always reads fresh state.

use crate::board::board_state::Board;
use crate::board::board_types::{CellState, Square, SQUARE_COUNT};
use crate::errors::PlacementResult;
use crate::placement::attack_marking::compute_attacked;
use crate::placement::potential::potential_value;
use crate::placement::safety_check::is_safe_position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementPhase {
    AwaitingInitial,
    GreedyLoop,
    VerificationSweep,
    Done,
}

/// One greedy round's decision: the chosen square and its winning value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreedyPlacement {
    pub square: Square,
    pub value: u8,
}

#[derive(Debug, Clone)]
pub struct PlacementEngine {
    board: Board,
    phase: PlacementPhase,
}

impl Default for PlacementEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PlacementEngine {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            phase: PlacementPhase::AwaitingInitial,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn phase(&self) -> PlacementPhase {
        self.phase
    }

    /// Consume the externally validated seed square and enter the greedy loop.
    pub fn place_initial(&mut self, square: Square) -> PlacementResult<()> {
        assert_eq!(
            self.phase,
            PlacementPhase::AwaitingInitial,
            "seed placement is only legal once, before the greedy loop"
        );

        self.board.occupy(square)?;
        refresh_board(&mut self.board);
        self.phase = PlacementPhase::GreedyLoop;
        Ok(())
    }

    /// Run one greedy round: place the highest-valued free square, scanning in
    /// row-major order so the first cell wins ties. Returns `None` once no
    /// valued cell remains, after moving on to the verification sweep.
    pub fn place_next_greedy(&mut self) -> PlacementResult<Option<GreedyPlacement>> {
        assert_eq!(
            self.phase,
            PlacementPhase::GreedyLoop,
            "greedy rounds run between the seed and the sweep"
        );

        let mut best: Option<GreedyPlacement> = None;
        for square in 0..SQUARE_COUNT as Square {
            if let CellState::Value(value) = self.board.cell_state(square) {
                if best.map_or(true, |b| value > b.value) {
                    best = Some(GreedyPlacement { square, value });
                }
            }
        }

        match best {
            Some(placement) => {
                self.board.occupy(placement.square)?;
                refresh_board(&mut self.board);
                Ok(Some(placement))
            }
            None => {
                self.phase = PlacementPhase::VerificationSweep;
                Ok(None)
            }
        }
    }

    /// Scan every square against the direct safety predicate and rescue any
    /// the greedy loop missed. The board is refreshed after each rescue so
    /// later iterations of the same scan see the updated state.
    pub fn verification_sweep(&mut self) -> PlacementResult<Vec<Square>> {
        assert_eq!(
            self.phase,
            PlacementPhase::VerificationSweep,
            "the sweep runs once, after the greedy loop drains"
        );

        let mut rescued = Vec::new();
        for square in 0..SQUARE_COUNT as Square {
            if is_safe_position(&self.board, square) {
                self.board.occupy(square)?;
                refresh_board(&mut self.board);
                rescued.push(square);
            }
        }

        self.phase = PlacementPhase::Done;
        Ok(rescued)
    }

    /// Drive the remaining phases to `Done` and return the rescued squares.
    pub fn run_to_completion(&mut self) -> PlacementResult<Vec<Square>> {
        while self.place_next_greedy()?.is_some() {}
        self.verification_sweep()
    }
}

/// Rebuild the attack marks from the piece list, then the potential cache for
/// every free square. Idempotent between mutations.
pub fn refresh_board(board: &mut Board) {
    board.set_attacked_mask(compute_attacked(board.pieces()));

    for square in 0..SQUARE_COUNT as Square {
        if board.is_free(square) {
            let value = potential_value(board, square);
            board.set_value(square, value);
        }
    }
}
