// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for the few conversions that can fail.
//!
//! Layout itself never fails: degenerate input is clamped. Errors only arise
//! at the boundary where loosely typed host values are turned into layout
//! parameters.

/// Errors produced when converting host values into layout parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// A numeric direction code outside the known enumerants.
    #[error("invalid waterfall direction code: {0}")]
    InvalidDirection(u8),

    /// A direction name that does not match any known direction.
    #[error("unknown waterfall direction name")]
    UnknownDirection,

    /// A desired column size that is zero, negative, or not finite.
    #[error("desired column size must be finite and strictly positive")]
    InvalidColumnSize,
}
