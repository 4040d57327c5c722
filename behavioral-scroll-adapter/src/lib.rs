//! Adapter utilities for the `behavioral-scroll` crate.
//!
//! The `behavioral-scroll` coordinator is UI-agnostic: it only *requests* animations and
//! expects the host to feed fling deltas. This crate provides small, framework-neutral
//! drivers for both:
//!
//! - Tween-based execution of animation requests (settling, spring-back)
//! - Constant-deceleration flings fed through the coordinator's arbitration
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod fling;
mod options;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use fling::Fling;
pub use options::ControllerOptions;
pub use tween::{Easing, Tween};
