//! # Recipebox Architecture
//!
//! Recipebox is a **UI-agnostic recipe collection library** with a thin
//! CLI client. The library is the product; the binary is one consumer.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Parses index selectors, dispatches, returns CmdResult    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over domain types                    │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, favorites.rs)                       │
//! │  - StorageBackend trait: raw key-value blobs                │
//! │  - CollectionStore: the recipe collection contract          │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never
//! calls `std::process::exit`, and never assumes a terminal. The same
//! core could serve a GUI or a web API.
//!
//! ## Identity
//!
//! The CLI addresses recipes by 1-based display index (their position
//! in the listed order); the store addresses them by stable generated
//! `Uuid`. Indexes are resolved to ids once per operation, up front, so
//! batched mutations never act on shifted positions. See [`index`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction, collection contract, backends
//! - [`favorites`]: The favorites repository (explicit dependency,
//!   never ambient global state)
//! - [`model`]: Core data types ([`model::Recipe`],
//!   [`model::RecipeDraft`])
//! - [`index`]: Display indexing and selector parsing
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod favorites;
pub mod index;
pub mod model;
pub mod store;
