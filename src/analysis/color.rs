// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Colour, contrast, edge and composition analysis of a decoded raster

use image::imageops::{self, FilterType};
use image::RgbImage;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;
use tracing::debug;

use super::composition::{classify_composition, CompositionTag};
use super::edges::find_edges;
use super::stats::ChannelStats;

/// Side length of the grid the colour histogram is computed on
pub const SAMPLE_GRID_SIZE: u32 = 100;

/// Maximum number of dominant colours reported
pub const MAX_DOMINANT_COLORS: usize = 5;

#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("Invalid image: {0}")]
    InvalidImage(String),
}

/// An RGB triple rendered as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HexColor(pub [u8; 3]);

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Pixel-level metrics for one image
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorAnalysis {
    /// Most frequent colours of the downsampled grid, most frequent first
    pub dominant_colors: Vec<HexColor>,
    /// Mean channel intensity (0-255)
    pub brightness: f64,
    /// Mean channel standard deviation
    pub contrast: f64,
    /// Mean intensity of the edge-filtered image
    pub edge_strength: f64,
    pub composition: CompositionTag,
    pub width: u32,
    pub height: u32,
}

impl ColorAnalysis {
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Dominant colours as `#rrggbb` strings
    pub fn dominant_color_strings(&self) -> Vec<String> {
        self.dominant_colors.iter().map(|c| c.to_string()).collect()
    }
}

/// Analyse colours and composition of a decoded RGB raster
///
/// Dominant colours come from a 100x100 bicubic downsample; brightness, contrast and
/// edge strength are computed on the full-resolution raster.
///
/// # Errors
/// `AnalysisError::InvalidImage` when the raster has zero width or height.
pub fn analyze_colors_and_composition(image: &RgbImage) -> Result<ColorAnalysis, AnalysisError> {
    let (width, height) = image.dimensions();
    if height == 0 {
        return Err(AnalysisError::InvalidImage("image height is zero".to_string()));
    }
    if width == 0 {
        return Err(AnalysisError::InvalidImage("image width is zero".to_string()));
    }

    let dominant_colors = dominant_colors(image);

    let stats = ChannelStats::from_image(image)
        .ok_or_else(|| AnalysisError::InvalidImage("no pixel statistics".to_string()))?;

    let edges = find_edges(image);
    let edge_stats = ChannelStats::from_image(&edges)
        .ok_or_else(|| AnalysisError::InvalidImage("no edge statistics".to_string()))?;

    let brightness = stats.average_mean();
    let contrast = stats.average_stddev();
    let edge_strength = edge_stats.average_mean();
    let aspect_ratio = width as f64 / height as f64;
    let composition = classify_composition(edge_strength, aspect_ratio);

    debug!(
        "Colour analysis {}x{}: brightness={:.1}, contrast={:.1}, edges={:.1}, composition={}",
        width, height, brightness, contrast, edge_strength, composition
    );

    Ok(ColorAnalysis {
        dominant_colors,
        brightness,
        contrast,
        edge_strength,
        composition,
        width,
        height,
    })
}

/// Top colours of the 100x100 downsample by descending pixel count
///
/// Equal counts keep ascending RGB order.
pub fn dominant_colors(image: &RgbImage) -> Vec<HexColor> {
    if image.width() == 0 || image.height() == 0 {
        return Vec::new();
    }

    let sample = imageops::resize(image, SAMPLE_GRID_SIZE, SAMPLE_GRID_SIZE, FilterType::CatmullRom);

    let mut counts: BTreeMap<[u8; 3], u32> = BTreeMap::new();
    for pixel in sample.pixels() {
        *counts.entry(pixel.0).or_insert(0) += 1;
    }

    let mut ranked: Vec<([u8; 3], u32)> = counts.into_iter().collect();
    // stable sort: BTreeMap order survives among equal counts
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(MAX_DOMINANT_COLORS)
        .map(|(rgb, _)| HexColor(rgb))
        .collect()
}
