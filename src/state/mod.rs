//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `toast`, `stats`) so individual
//! components can depend on small focused models. `auth` and `toast`
//! are provided as `RwSignal` contexts from the root `App`.

pub mod auth;
pub mod stats;
pub mod toast;
