//! # Pastebox Architecture
//!
//! Pastebox is a **UI-agnostic paste-management library** with a thin CLI
//! client. The library owns the authoritative paste collection, its
//! persistence, and the outcome of every mutation; the CLI only parses
//! arguments and renders what comes back.
//!
//! ## Layers
//!
//! ```text
//! CLI (main.rs + args.rs)
//!   parses arguments, prints output, owns the terminal notifier
//!        │
//! API (api.rs)
//!   thin facade, dispatches to commands, returns Result<CmdResult>
//!        │
//! Commands (commands/*.rs)
//!   per-operation logic: validation, id/timestamp handling, filtering
//!        │
//! Store (store/)
//!   PasteStore: in-memory collection mirrored to a StorageSlot after
//!   every mutation; FileSlot in production, MemorySlot in tests
//! ```
//!
//! ## Consistency and notifications
//!
//! The store persists the full serialized collection immediately after each
//! in-memory change, so the durable copy always equals the in-memory one.
//! Each mutation additionally reports its outcome through an injected
//! [`notify::Notifier`] port ("Paste created successfully", "Paste not
//! found", ...), while the operation itself returns an explicit status
//! value — callers never have to parse user-facing messages.
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never
//! assumes a terminal, so the same core could back a TUI or a web frontend.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade — entry point for all operations
//! - [`commands`]: per-operation logic and validation
//! - [`store`]: the paste store and its storage-slot backends
//! - [`model`]: the `Paste` record and id generation
//! - [`notify`]: the notification port and its implementations
//! - [`config`]: share-URL configuration
//! - [`editor`]: external `$EDITOR` integration
//! - [`clipboard`]: cross-platform clipboard support
//! - [`error`]: error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod model;
pub mod notify;
pub mod store;
