//! Self-contained exercise functions.
//!
//! Each module holds independent, single-purpose functions over simple
//! in-memory inputs: numbers, strings, small structs. Nothing here shares
//! state, performs I/O, or calls across modules; every function is testable
//! by direct input/output comparison.

/// Plane-geometry checks over points, circles, and axis-aligned rectangles.
pub mod geometry;
/// Matrix multiplication over row-major `f64` matrices.
pub mod matrix;
/// Number katas: `FizzBuzz`, factorial, digit games, Luhn, radix conversion.
pub mod numbers;
/// Serialization helpers and the classic rectangle-with-area constructor.
pub mod objects;
/// String katas: reversal, interval notation, bracket matching, path prefix.
pub mod strings;
/// Tic-tac-toe position evaluation.
pub mod tictactoe;
