// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Pixel-level image analysis
//!
//! This module provides:
//! - Dominant colour extraction on a fixed 100x100 grid
//! - Brightness, contrast and edge-strength statistics at full resolution
//! - Composition classification from edge strength and aspect ratio
//!
//! Everything here is synchronous and side-effect free.

pub mod color;
pub mod composition;
pub mod edges;
pub mod stats;

pub use color::{analyze_colors_and_composition, dominant_colors, AnalysisError, ColorAnalysis, HexColor};
pub use composition::{classify_composition, CompositionTag};
pub use edges::find_edges;
pub use stats::ChannelStats;
