//! Aloft — stage tracking for the Gnome Restaurant delivery minigame.
//!
//! Order in, plan out. Inventory snapshots drive a forward-only stage
//! machine; the tracker always knows what to cook next and what to gather.

pub mod cli;
pub mod core;
