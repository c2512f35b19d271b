// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Composition classification from edge strength and aspect ratio

use serde::{Deserialize, Serialize};
use std::fmt;

/// Edge strength above which an image counts as strongly structured
pub const STRONG_EDGE_THRESHOLD: f64 = 50.0;

/// Aspect ratio above which a structured image is horizontal
pub const HORIZONTAL_RATIO: f64 = 1.5;

/// Aspect ratio below which a structured image is vertical
pub const VERTICAL_RATIO: f64 = 0.7;

/// Aspect ratio above which a soft image is panoramic
pub const PANORAMIC_RATIO: f64 = 1.3;

/// Coarse layout classification of an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompositionTag {
    Horizontal,
    Vertical,
    Balanced,
    Panoramic,
    Organic,
}

impl CompositionTag {
    pub const ALL: [CompositionTag; 5] = [
        CompositionTag::Horizontal,
        CompositionTag::Vertical,
        CompositionTag::Balanced,
        CompositionTag::Panoramic,
        CompositionTag::Organic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompositionTag::Horizontal => "horizontal",
            CompositionTag::Vertical => "vertical",
            CompositionTag::Balanced => "balanced",
            CompositionTag::Panoramic => "panoramic",
            CompositionTag::Organic => "organic",
        }
    }
}

impl fmt::Display for CompositionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify the composition of an image
///
/// | edge_strength | aspect_ratio | result     |
/// |---------------|--------------|------------|
/// | > 50          | > 1.5        | horizontal |
/// | > 50          | < 0.7        | vertical   |
/// | > 50          | [0.7, 1.5]   | balanced   |
/// | <= 50         | > 1.3        | panoramic  |
/// | <= 50         | <= 1.3       | organic    |
///
/// NaN inputs fail every strict comparison and land in the fallthrough branch.
pub fn classify_composition(edge_strength: f64, aspect_ratio: f64) -> CompositionTag {
    if edge_strength > STRONG_EDGE_THRESHOLD {
        if aspect_ratio > HORIZONTAL_RATIO {
            CompositionTag::Horizontal
        } else if aspect_ratio < VERTICAL_RATIO {
            CompositionTag::Vertical
        } else {
            CompositionTag::Balanced
        }
    } else if aspect_ratio > PANORAMIC_RATIO {
        CompositionTag::Panoramic
    } else {
        CompositionTag::Organic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_table() {
        assert_eq!(classify_composition(60.0, 2.0), CompositionTag::Horizontal);
        assert_eq!(classify_composition(60.0, 0.5), CompositionTag::Vertical);
        assert_eq!(classify_composition(60.0, 1.0), CompositionTag::Balanced);
        assert_eq!(classify_composition(30.0, 1.4), CompositionTag::Panoramic);
        assert_eq!(classify_composition(30.0, 1.0), CompositionTag::Organic);
    }

    #[test]
    fn test_threshold_boundaries() {
        // edge strength of exactly 50 is not "strong"
        assert_eq!(classify_composition(50.0, 2.0), CompositionTag::Panoramic);
        assert_eq!(classify_composition(50.01, 1.5), CompositionTag::Balanced);
        assert_eq!(classify_composition(50.01, 0.7), CompositionTag::Balanced);
        assert_eq!(classify_composition(10.0, 1.3), CompositionTag::Organic);
    }

    #[test]
    fn test_nan_inputs() {
        assert_eq!(classify_composition(f64::NAN, 2.0), CompositionTag::Panoramic);
        assert_eq!(classify_composition(80.0, f64::NAN), CompositionTag::Balanced);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&CompositionTag::Panoramic).unwrap();
        assert_eq!(json, "\"panoramic\"");
        assert_eq!(CompositionTag::Organic.to_string(), "organic");
    }
}
