// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Per-channel pixel statistics

use image::RgbImage;

/// Mean and population standard deviation of each RGB channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelStats {
    pub mean: [f64; 3],
    pub stddev: [f64; 3],
}

impl ChannelStats {
    /// Compute statistics over every pixel; `None` for an empty raster
    pub fn from_image(image: &RgbImage) -> Option<Self> {
        let count = image.width() as u64 * image.height() as u64;
        if count == 0 {
            return None;
        }

        let mut sum = [0u64; 3];
        let mut sum_sq = [0u64; 3];
        for pixel in image.pixels() {
            for c in 0..3 {
                let value = pixel[c] as u64;
                sum[c] += value;
                sum_sq[c] += value * value;
            }
        }

        let n = count as f64;
        let mut mean = [0.0; 3];
        let mut stddev = [0.0; 3];
        for c in 0..3 {
            let m = sum[c] as f64 / n;
            let variance = (sum_sq[c] as f64 / n - m * m).max(0.0);
            mean[c] = m;
            stddev[c] = variance.sqrt();
        }

        Some(Self { mean, stddev })
    }

    /// Mean of the three channel means
    pub fn average_mean(&self) -> f64 {
        self.mean.iter().sum::<f64>() / 3.0
    }

    /// Mean of the three channel standard deviations
    pub fn average_stddev(&self) -> f64 {
        self.stddev.iter().sum::<f64>() / 3.0
    }
}
