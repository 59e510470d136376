//! replog - personal rep tracker
//!
//! Records exercise sets in a local key-value store and derives every
//! motivational statistic from the recorded history: time-windowed totals,
//! daily streaks, levels, and a fixed achievement catalog with one-shot
//! unlock notifications. Single user, fully offline, synchronous.

pub mod store;
pub mod tracker;
