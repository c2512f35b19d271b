// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Pixel analysis on synthesised rasters

use image::{Rgb, RgbImage};
use image_insight::analysis::{
    analyze_colors_and_composition, AnalysisError, CompositionTag, HexColor,
};

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

fn checkerboard(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| if (x + y) % 2 == 0 { WHITE } else { BLACK })
}

#[test]
fn test_split_wide_image_is_panoramic() {
    let img = RgbImage::from_fn(200, 50, |x, _| if x < 100 { BLACK } else { WHITE });

    let analysis = analyze_colors_and_composition(&img).unwrap();

    assert_eq!(analysis.width, 200);
    assert_eq!(analysis.height, 50);
    assert!((analysis.brightness - 127.5).abs() < 1e-9);
    assert!((analysis.contrast - 127.5).abs() < 1e-9);
    assert!(analysis.edge_strength <= 50.0, "edges: {}", analysis.edge_strength);
    assert_eq!(analysis.composition, CompositionTag::Panoramic);
    assert!(analysis.dominant_colors[..2].contains(&HexColor([0, 0, 0])));
    assert!(analysis.dominant_colors[..2].contains(&HexColor([255, 255, 255])));
}

#[test]
fn test_checkerboard_has_strong_edges() {
    let square = analyze_colors_and_composition(&checkerboard(60, 60)).unwrap();
    assert!(square.edge_strength > 50.0);
    assert_eq!(square.composition, CompositionTag::Balanced);

    let wide = analyze_colors_and_composition(&checkerboard(120, 60)).unwrap();
    assert_eq!(wide.composition, CompositionTag::Horizontal);

    let tall = analyze_colors_and_composition(&checkerboard(30, 90)).unwrap();
    assert_eq!(tall.composition, CompositionTag::Vertical);
}

#[test]
fn test_flat_image() {
    let img = RgbImage::from_pixel(64, 64, Rgb([12, 34, 56]));

    let analysis = analyze_colors_and_composition(&img).unwrap();

    assert_eq!(analysis.dominant_color_strings(), vec!["#0c2238"]);
    assert_eq!(analysis.contrast, 0.0);
    assert_eq!(analysis.composition, CompositionTag::Organic);
}

#[test]
fn test_at_most_five_dominant_colors() {
    let img = RgbImage::from_fn(100, 100, |x, y| Rgb([(x * 2) as u8, (y * 2) as u8, 0]));

    let analysis = analyze_colors_and_composition(&img).unwrap();

    assert_eq!(analysis.dominant_colors.len(), 5);
}

#[test]
fn test_empty_raster_rejected() {
    let err = analyze_colors_and_composition(&RgbImage::new(0, 10)).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidImage(_)));

    let err = analyze_colors_and_composition(&RgbImage::new(10, 0)).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidImage(_)));
}

#[test]
fn test_analysis_is_deterministic() {
    let img = checkerboard(37, 23);
    assert_eq!(
        analyze_colors_and_composition(&img).unwrap(),
        analyze_colors_and_composition(&img).unwrap()
    );
}
