// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

//! Sliding-window replay protection for nonce-labelled transports.
//!
//! Each secured session owns a [`ReplayWindow`] that tracks which sequence
//! counters it has already accepted within a fixed-width, forward-moving
//! range. Counters below the range are rejected outright, counters inside it
//! are accepted exactly once, and counters above it slide the range forward.

pub mod bitmap;
pub mod serialisation;
pub mod window;

pub use bitmap::Bitmap;
pub use serialisation::WindowSnapshotError;
pub use window::{Reason, ReplayWindow, ReplayWindow256};
