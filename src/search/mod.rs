//! Move search for the Gomoku AI
//!
//! The computer does not look ahead: it scores every candidate cell once
//! with the pattern heuristic. This module supplies the candidates.

pub mod movegen;

pub use movegen::{candidates, CANDIDATE_RADIUS};
