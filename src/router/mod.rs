//! Router module — identity resolution and owner actor routing
//!
//! Resolves the caller's identity, then locates (or lazily spawns) the actor
//! instance owning that identity's notes. Everything behind the registry is
//! single-writer per owner; the router itself holds no note state.

pub mod identity;
pub mod registry;

pub use identity::IdentityResolver;
pub use registry::NoteRegistry;
