//! Notification stream consumed by the presentation layer.
//!
//! The engine owns all state; the view only reads snapshots and drains
//! these events. This keeps "what changed" decoupled from "how it is
//! rendered".

mod notification;

pub use notification::{DanceKind, Notification, SoundCue};
