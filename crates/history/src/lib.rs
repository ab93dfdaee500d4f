//! Document version control: an append-only snapshot log per document with
//! undo, redo, and restore-to-version on top.
//!
//! - [`snapshot`] captures live document state into storable payloads
//! - [`restore`] writes a stored payload back onto the live tables
//! - [`service`] is the state machine tying both to the pointer triple
//! - [`error`] is the error taxonomy the HTTP layer maps to status codes
//!
//! Version rows are never updated or deleted once written. Editing after an
//! undo appends on top and strands the undone range; stranded versions stay
//! readable for audit.

pub mod error;
pub mod restore;
pub mod service;
pub mod snapshot;
