//! Domain logic for the Lexdraft letter editor.
//!
//! Pure types and rules only: no database access, no HTTP. The version
//! history pointer machine lives in [`pointer`], snapshot payloads in
//! [`snapshot`], and the closed set of recordable change types in [`change`].

pub mod change;
pub mod document;
pub mod error;
pub mod pointer;
pub mod snapshot;
pub mod types;
