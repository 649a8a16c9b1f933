//! unfurl - resolve media page URLs into direct, playable resource URLs.
//!
//! Extraction is delegated to yt-dlp running as a subprocess; this crate
//! picks the best format the engine reports and serves the result over a
//! small HTTP API (`/health`, `/extract?url=...`).

pub mod config;
pub mod error;
pub mod media;
pub mod server;

pub use server::{build_router, AppState};
