//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Methods named `*_in_tx`
//! take an open transaction instead and are meant to be composed by the
//! history engine into one atomic unit.

pub mod document_repo;
pub mod pointer_repo;
pub mod section_repo;
pub mod version_repo;

pub use document_repo::DocumentRepo;
pub use pointer_repo::PointerRepo;
pub use section_repo::SectionRepo;
pub use version_repo::VersionRepo;
