// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 slipway contributors

//! Utility modules

pub mod spinner;

pub use spinner::create_spinner;
