//! Crate root module declarations for the Centaur Chess placement project.
//!
//! This file exposes all top-level subsystems (board model, attack tables,
//! placement engine, and boundary helpers) so binaries, tests, and benches
//! can import stable module paths.

pub mod errors;

pub mod board {
    pub mod board_state;
    pub mod board_types;
}

pub mod moves {
    pub mod centaur_attacks;
}

pub mod placement {
    pub mod attack_marking;
    pub mod placement_engine;
    pub mod potential;
    pub mod safety_check;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_board;
}

pub mod cli {
    pub mod cli_top;
}
