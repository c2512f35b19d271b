// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Edge detection filter used for the edge-strength metric

use image::{Rgb, RgbImage};

/// 3x3 Laplacian-style kernel (centre 8, neighbours -1)
pub const FIND_EDGES_KERNEL: [[i32; 3]; 3] = [[-1, -1, -1], [-1, 8, -1], [-1, -1, -1]];

/// Apply the edge kernel to every channel
///
/// Results are clamped to 0..=255. Border pixels are copied from the source and
/// rasters narrower or shorter than the kernel are returned unchanged.
pub fn find_edges(image: &RgbImage) -> RgbImage {
    let (width, height) = image.dimensions();
    let mut output = image.clone();
    if width < 3 || height < 3 {
        return output;
    }

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let mut acc = [0i32; 3];
            for (ky, row) in FIND_EDGES_KERNEL.iter().enumerate() {
                for (kx, weight) in row.iter().enumerate() {
                    let pixel = image.get_pixel(x + kx as u32 - 1, y + ky as u32 - 1);
                    for c in 0..3 {
                        acc[c] += weight * pixel[c] as i32;
                    }
                }
            }
            output.put_pixel(x, y, Rgb([clamp_u8(acc[0]), clamp_u8(acc[1]), clamp_u8(acc[2])]));
        }
    }

    output
}

fn clamp_u8(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}
