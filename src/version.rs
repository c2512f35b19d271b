// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for the image analysis service

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "Multi-Language Image Analysis API";

/// Full version string with feature description
pub const VERSION: &str = "v6.0.0-multilang-reports-2025-10-20";

/// Semantic version number
pub const VERSION_NUMBER: &str = "6.0.0";

/// Major version number
pub const VERSION_MAJOR: u32 = 6;

/// Minor version number
pub const VERSION_MINOR: u32 = 0;

/// Patch version number
pub const VERSION_PATCH: u32 = 0;

/// Build date
pub const BUILD_DATE: &str = "2025-10-20";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "color-analysis",
    "composition-classification",
    "vlm-captions",
    "onnx-classification",
    "machine-translation",
    "dictionary-fallback",
    "reports-en-fr-ar",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("{} {} ({})", SERVICE_NAME, VERSION_NUMBER, BUILD_DATE)
}

/// Get full version info for API responses
pub fn get_version_info() -> serde_json::Value {
    serde_json::json!({
        "service": SERVICE_NAME,
        "version": VERSION_NUMBER,
        "build": VERSION,
        "date": BUILD_DATE,
        "features": FEATURES,
    })
}
