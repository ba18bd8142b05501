//! Embernote — single-owner note capture with a time-decayed lifecycle
//!
//! Embernote captures short free-form notes into named partitions ("spaces")
//! and ages each note through a visible lifecycle — alive, warming, cooling,
//! archived — computed on read from the time since last edit. No background
//! job ever runs; the decay tiers are never persisted.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                      HTTP Gateway (axum)                  │
//! │  ┌─────────────────────────────────────────────────────┐  │
//! │  │                 Identity Resolver                    │  │
//! │  │  - static dev owner, or trusted proxy header         │  │
//! │  └──────────────────────────┬──────────────────────────┘  │
//! │                             │ owner id                    │
//! │  ┌──────────────────────────▼──────────────────────────┐  │
//! │  │                  Note Registry                       │  │
//! │  │  - owner id → actor handle, lazy get-or-create       │  │
//! │  └──────────────────────────┬──────────────────────────┘  │
//! └─────────────────────────────┼─────────────────────────────┘
//!                               │ command channel
//! ┌─────────────────────────────▼─────────────────────────────┐
//! │                 Note Actor (one per owner)                │
//! │  - serialized list / create / edit / archive              │
//! │  - status decay computed on every list                    │
//! │  - private durable store, one JSON file per note          │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! Each owner's actor processes operations strictly in arrival order against
//! its private store, which is the system's entire concurrency guarantee:
//! same-owner requests cannot interleave, and different owners share nothing.
//!
//! ## Modules
//!
//! - [`notes`]: note data model, decay engine, store, actor, REST handlers
//! - [`router`]: identity resolution and the owner → actor registry
//! - [`api`]: unified HTTP router
//! - [`config`]: configuration management

pub mod api;
pub mod config;
pub mod error;
pub mod notes;
pub mod router;

pub use config::EmbernoteConfig;
pub use error::{Error, Result};
