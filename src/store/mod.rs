//! # Storage Layer
//!
//! All persistent state lives in a local key-value facility: each key
//! holds one serialized JSON blob. The [`backend::StorageBackend`] trait
//! handles the "how" of storage (filesystem vs memory), while
//! [`collection::CollectionStore`] handles the "what": the recipe
//! collection contract built on top of it.
//!
//! ## Keys
//!
//! - `customrecipes` — the full ordered recipe collection, one blob.
//! - `favorites` — the set of favorited recipe ids (see
//!   [`crate::favorites`]).
//!
//! ## Blob format
//!
//! The collection blob is a versioned envelope:
//!
//! ```text
//! { "version": 7, "recipes": [ { "id": ..., "title": ... }, ... ] }
//! ```
//!
//! The version stamp is an optimistic-concurrency token: every mutation
//! records the version it loaded and refuses to persist if the stored
//! version has moved in the meantime, so a racing writer surfaces as an
//! error instead of a silent lost update. A legacy blob that is a bare
//! JSON array of records is accepted on read as version 0 and upgraded
//! to the envelope on the next persist.
//!
//! ## Failure policy
//!
//! - Absent key: an empty collection (lazy materialization).
//! - Malformed blob: treated as empty, reported to the caller as a
//!   structured warning rather than a hard failure.
//! - Write failure: the error propagates and the stored sequence is
//!   untouched; writes are atomic (tmp file + rename), so a blob is
//!   either fully replaced or left as it was.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production, one `<key>.json` file per
//!   key under the data directory.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem
//!   I/O, with write-error simulation.

pub mod backend;
pub mod collection;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::StorageBackend;
pub use collection::{CollectionStore, LoadSource, Loaded, RECIPES_KEY};
pub use fs_backend::FsBackend;
pub use mem_backend::MemBackend;
