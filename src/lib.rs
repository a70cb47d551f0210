//! Mastermind Solver
//!
//! Plays and solves Mastermind with Knuth's minimax five-guess algorithm.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{Code, GameSettings};
//! use mastermind_solver::game::MastermindGame;
//! use mastermind_solver::solver::{KnuthSolver, Solver};
//!
//! let settings = GameSettings::new(6, 4, 6).unwrap();
//! let secret = Code::parse("CAFE", &settings).unwrap();
//! let mut game = MastermindGame::new(secret, settings).unwrap();
//!
//! let result = KnuthSolver.solve(&mut game).unwrap();
//! assert!(result.succeeded);
//! println!("Solved {} in {} rounds", result.final_answer, result.rounds_used);
//! ```

// Core domain types
pub mod core;

// Code space enumeration
pub mod codespace;

// Game sessions
pub mod game;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
