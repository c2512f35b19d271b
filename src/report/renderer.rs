// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Multi-language report rendering

use std::sync::Arc;

use super::dictionary::{self, LANDSCAPE_KEYWORDS, URBAN_KEYWORDS};
use super::language::Language;
use super::templates::{TemplateCatalog, TemplateError, TemplateKey};
use crate::analysis::ColorAnalysis;
use crate::translation::{effective_translation, TranslationLookup};
use crate::vision::ClassificationResult;

/// Classifications listed under content analysis
pub const MAX_LISTED_CATEGORIES: usize = 3;
/// Dominant colours listed under visual analysis
pub const MAX_LISTED_COLORS: usize = 3;
/// Recommendation lines kept at the end of a report
pub const MAX_RECOMMENDATIONS: usize = 4;

const HIGH_BRIGHTNESS: f64 = 150.0;
const MEDIUM_BRIGHTNESS: f64 = 100.0;
const HIGH_CONTRAST: f64 = 60.0;
const SHARP_EDGES: f64 = 40.0;
const HARMONY_MIN_COLORS: usize = 3;

const BULLET: &str = "  • ";
const BULLET_BREAK: &str = "\n  • ";

/// Renders the textual analysis report for one language
///
/// Rendering is pure: translations come from a pre-resolved `TranslationLookup`,
/// so identical inputs always produce identical bytes.
#[derive(Debug, Clone)]
pub struct ReportRenderer {
    catalog: Arc<TemplateCatalog>,
}

impl ReportRenderer {
    pub fn new(catalog: TemplateCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Renderer over the bundled template tables
    pub fn builtin() -> Result<Self, TemplateError> {
        Ok(Self::new(TemplateCatalog::builtin()?))
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// Texts worth translating before rendering: the caption and the listed labels
    pub fn translation_inputs<'a>(
        caption: Option<&'a str>,
        classifications: &'a [ClassificationResult],
    ) -> Vec<&'a str> {
        caption
            .map(str::trim)
            .into_iter()
            .chain(
                classifications
                    .iter()
                    .take(MAX_LISTED_CATEGORIES)
                    .map(|c| c.label.as_str()),
            )
            .collect()
    }

    pub fn render(
        &self,
        caption: Option<&str>,
        classifications: &[ClassificationResult],
        color_analysis: Option<&ColorAnalysis>,
        language: Language,
        lookup: &dyn TranslationLookup,
    ) -> String {
        let t = |key| self.catalog.text(language, key);
        let heading_suffix = t(TemplateKey::HeadingSuffix);
        let separator = t(TemplateKey::ItemSeparator);

        let mut report = format!("🖼️ {}\n\n", t(TemplateKey::ReportTitle));

        report.push_str(&format!("📋 {}\n", t(TemplateKey::ExecutiveSummary)));
        report.push_str(&format!(
            "{}{}\n\n",
            t(TemplateKey::AiDescription),
            self.translate_caption(caption, language, lookup)
        ));

        report.push_str(&format!("🔍 {}\n", t(TemplateKey::ContentAnalysis)));
        if classifications.is_empty() {
            report.push_str(&format!("{}{}\n", BULLET, t(TemplateKey::NoCategories)));
        } else {
            report.push_str(&format!("{}{}\n", t(TemplateKey::MainCategories), heading_suffix));
            for result in classifications.iter().take(MAX_LISTED_CATEGORIES) {
                report.push_str(&format!(
                    "{}{} ({}: {:.1}%)\n",
                    BULLET,
                    self.translate_label(&result.label, language, lookup),
                    t(TemplateKey::Confidence),
                    f64::from(result.confidence) * 100.0
                ));
            }
        }

        report.push_str(&format!("\n{}{}\n", t(TemplateKey::VisualAnalysis), heading_suffix));
        match color_analysis {
            Some(analysis) => {
                let colors: Vec<String> = analysis
                    .dominant_colors
                    .iter()
                    .take(MAX_LISTED_COLORS)
                    .map(|c| c.to_string())
                    .collect();
                let lines = [
                    (
                        TemplateKey::Resolution,
                        format!("{} × {} {}", analysis.width, analysis.height, t(TemplateKey::Pixels)),
                    ),
                    (TemplateKey::AspectRatio, format!("{:.2}:1", analysis.aspect_ratio())),
                    (TemplateKey::DominantColors, colors.join(", ")),
                    (
                        TemplateKey::CompositionType,
                        t(TemplateKey::for_composition(analysis.composition)).to_string(),
                    ),
                    (
                        TemplateKey::BrightnessLevel,
                        t(brightness_bucket(analysis.brightness)).to_string(),
                    ),
                ];
                for (key, value) in lines {
                    report.push_str(&format!("{}{}{}{}\n", BULLET, t(key), separator, value));
                }
            }
            None => report.push_str(&format!("{}{}\n", BULLET, t(TemplateKey::NoVisualData))),
        }

        report.push_str(&format!("\n🎨 {}\n", t(TemplateKey::TechnicalAnalysis)));
        for key in technical_findings(color_analysis, classifications) {
            report.push_str(&format!("{}{}\n", BULLET, t(key)));
        }

        report.push_str(&format!("\n💡 {}\n", t(TemplateKey::Recommendations)));
        let advice: Vec<&str> = recommendations(caption).into_iter().map(t).collect();
        report.push_str(BULLET);
        report.push_str(&advice.join(BULLET_BREAK));

        report
    }

    /// Caption in the target language
    ///
    /// Falls back from machine translation to the bundled phrase dictionary, then to
    /// the placeholder sentence. A missing or blank caption always yields the placeholder.
    pub fn translate_caption(
        &self,
        caption: Option<&str>,
        language: Language,
        lookup: &dyn TranslationLookup,
    ) -> String {
        let placeholder = self.catalog.text(language, TemplateKey::CaptionFallback);
        let caption = match caption.map(str::trim) {
            Some(text) if !text.is_empty() => text,
            _ => return placeholder.to_string(),
        };
        if language.is_english() {
            return caption.to_string();
        }

        effective_translation(lookup.lookup(caption, language), caption)
            .or_else(|| dictionary::translate_caption_phrases(language, caption))
            .unwrap_or_else(|| placeholder.to_string())
    }

    /// Classification label in the target language, or the label itself
    pub fn translate_label(
        &self,
        label: &str,
        language: Language,
        lookup: &dyn TranslationLookup,
    ) -> String {
        if language.is_english() {
            return label.to_string();
        }
        effective_translation(lookup.lookup(label, language), label)
            .or_else(|| dictionary::lookup_label(language, label).map(str::to_string))
            .unwrap_or_else(|| label.to_string())
    }
}

fn brightness_bucket(brightness: f64) -> TemplateKey {
    if brightness > HIGH_BRIGHTNESS {
        TemplateKey::BrightnessHigh
    } else if brightness > MEDIUM_BRIGHTNESS {
        TemplateKey::BrightnessMedium
    } else {
        TemplateKey::BrightnessLow
    }
}

fn technical_findings(
    color_analysis: Option<&ColorAnalysis>,
    classifications: &[ClassificationResult],
) -> Vec<TemplateKey> {
    let mut findings = Vec::new();

    if let Some(analysis) = color_analysis {
        if analysis.contrast > HIGH_CONTRAST {
            findings.push(TemplateKey::HighContrast);
        }
        if analysis.edge_strength > SHARP_EDGES {
            findings.push(TemplateKey::SharpDetails);
        }
        if analysis.dominant_colors.len() >= HARMONY_MIN_COLORS {
            findings.push(TemplateKey::ColorHarmony);
        }
    }

    if let Some(top) = classifications.first() {
        let label = top.label.to_lowercase();
        if label.contains("landscape") {
            findings.push(TemplateKey::LandscapeDepth);
        } else if label.contains("building") {
            findings.push(TemplateKey::ArchitecturalElements);
        } else if label.contains("person") {
            findings.push(TemplateKey::HumanFocalPoint);
        }
    }

    findings
}

fn recommendations(caption: Option<&str>) -> Vec<TemplateKey> {
    let caption = caption.unwrap_or_default();
    let mut keys = Vec::new();

    if dictionary::mentions_any(caption, LANDSCAPE_KEYWORDS) {
        keys.extend([TemplateKey::EnvironmentalPresentations, TemplateKey::NaturalBackgrounds]);
    }
    if dictionary::mentions_any(caption, URBAN_KEYWORDS) {
        keys.extend([TemplateKey::UrbanProjects, TemplateKey::ArchitecturalDesign]);
    }
    keys.extend([TemplateKey::ProfessionalUse, TemplateKey::PrintAndDigital]);

    keys.truncate(MAX_RECOMMENDATIONS);
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{CompositionTag, HexColor};
    use crate::translation::{NoTranslation, TranslationError};

    struct EchoLookup;

    impl TranslationLookup for EchoLookup {
        fn lookup(&self, text: &str, _target: Language) -> Result<String, TranslationError> {
            Ok(text.to_string())
        }
    }

    fn renderer() -> ReportRenderer {
        ReportRenderer::builtin().unwrap()
    }

    fn classification(label: &str, confidence: f32) -> ClassificationResult {
        ClassificationResult {
            label: label.to_string(),
            confidence,
        }
    }

    fn analysis(brightness: f64) -> ColorAnalysis {
        ColorAnalysis {
            dominant_colors: vec![
                HexColor([255, 255, 255]),
                HexColor([0, 0, 0]),
                HexColor([128, 128, 128]),
            ],
            brightness,
            contrast: 70.0,
            edge_strength: 45.0,
            composition: CompositionTag::Panoramic,
            width: 300,
            height: 200,
        }
    }

    #[test]
    fn test_english_layout() {
        let classes = [classification("alp", 0.8234), classification("valley", 0.1)];
        let report = renderer().render(
            Some("A mountain landscape at sunset"),
            &classes,
            Some(&analysis(120.0)),
            Language::En,
            &NoTranslation,
        );

        let expected = concat!(
            "🖼️ COMPREHENSIVE IMAGE ANALYSIS REPORT\n\n",
            "📋 Executive Summary\n",
            "AI Description: A mountain landscape at sunset\n\n",
            "🔍 Content Analysis\n",
            "Main Categories:\n",
            "  • alp (confidence: 82.3%)\n",
            "  • valley (confidence: 10.0%)\n",
            "\nVisual Analysis:\n",
            "  • Resolution: 300 × 200 pixels\n",
            "  • Aspect Ratio: 1.50:1\n",
            "  • Dominant Colors: #ffffff, #000000, #808080\n",
            "  • Composition Type: Open panoramic landscape\n",
            "  • Brightness Level: Medium\n",
            "\n🎨 Technical Analysis\n",
            "  • High contrast enhances clarity\n",
            "  • Sharp details and defined edges\n",
            "  • Multi-spectral color harmony\n",
            "\n💡 Recommendations\n",
            "  • Environmental presentations\n",
            "  • Natural backgrounds\n",
            "  • Professional use\n",
            "  • Print and digital display",
        );
        assert_eq!(report, expected);
    }

    #[test]
    fn test_missing_caption_uses_placeholder() {
        let r = renderer();
        for (language, placeholder) in [
            (Language::En, "Image containing various visual elements"),
            (Language::Fr, "Image contenant divers éléments visuels"),
            (Language::Ar, "صورة تحتوي على عناصر بصرية متنوعة"),
        ] {
            let report = r.render(None, &[], None, language, &NoTranslation);
            assert!(report.contains(placeholder), "{}: {}", language, report);
            let blank = r.render(Some("   "), &[], None, language, &NoTranslation);
            assert!(blank.contains(placeholder));
        }
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let r = renderer();
        let classes = [classification("zebra", 0.9)];
        let a = r.render(Some("a zebra"), &classes, Some(&analysis(90.0)), Language::Fr, &NoTranslation);
        let b = r.render(Some("a zebra"), &classes, Some(&analysis(90.0)), Language::Fr, &NoTranslation);
        assert_eq!(a, b);
    }

    #[test]
    fn test_brightness_boundaries() {
        let r = renderer();
        let cases = [
            (Language::En, 150.0, "Medium"),
            (Language::En, 150.01, "High"),
            (Language::En, 100.0, "Low"),
            (Language::Fr, 150.0, "Moyen"),
            (Language::Fr, 150.01, "Élevé"),
            (Language::Ar, 150.0, "متوسط"),
            (Language::Ar, 150.01, "مرتفع"),
        ];
        for (language, brightness, bucket) in cases {
            let report = r.render(None, &[], Some(&analysis(brightness)), language, &NoTranslation);
            let level = r.catalog().text(language, TemplateKey::BrightnessLevel);
            let separator = r.catalog().text(language, TemplateKey::ItemSeparator);
            let line = format!("{}{}{}\n", level, separator, bucket);
            assert!(report.contains(&line), "{} {}: {}", language, brightness, report);
        }
    }

    #[test]
    fn test_nan_brightness_is_low() {
        assert_eq!(brightness_bucket(f64::NAN), TemplateKey::BrightnessLow);
    }

    #[test]
    fn test_missing_inputs_use_default_lines() {
        let report = renderer().render(Some("a cat"), &[], None, Language::En, &NoTranslation);
        assert!(report.contains("  • No classification results available\n"));
        assert!(report.contains("  • Visual metrics unavailable\n"));
        assert!(!report.contains("Main Categories"));
    }

    #[test]
    fn test_echoed_translation_falls_back_to_dictionary() {
        let r = renderer();
        let classes = [classification("zebra", 0.5)];
        let report = r.render(
            Some("a man with a stick in his hand in the jungle"),
            &classes,
            None,
            Language::Fr,
            &EchoLookup,
        );
        assert!(report.contains("Description IA : Un homme tenant un bâton dans sa main dans la jungle\n"));
        assert!(report.contains("  • Zèbre (confiance: 50.0%)\n"));
    }

    #[test]
    fn test_unknown_caption_without_translation_uses_placeholder() {
        let caption = renderer().translate_caption(Some("a red car"), Language::Ar, &NoTranslation);
        assert_eq!(caption, "صورة تحتوي على عناصر بصرية متنوعة");
    }

    #[test]
    fn test_unknown_label_kept() {
        let label = renderer().translate_label("spaceship", Language::Fr, &NoTranslation);
        assert_eq!(label, "spaceship");
    }

    #[test]
    fn test_only_top_three_categories() {
        let classes = [
            classification("a", 0.5),
            classification("b", 0.2),
            classification("c", 0.1),
            classification("d", 0.1),
        ];
        let report = renderer().render(None, &classes, None, Language::En, &NoTranslation);
        assert!(report.contains("  • c (confidence: 10.0%)"));
        assert!(!report.contains("  • d (confidence"));
    }

    #[test]
    fn test_recommendations_capped_at_four() {
        let keys = recommendations(Some("a city street by the beach"));
        assert_eq!(
            keys,
            vec![
                TemplateKey::EnvironmentalPresentations,
                TemplateKey::NaturalBackgrounds,
                TemplateKey::UrbanProjects,
                TemplateKey::ArchitecturalDesign,
            ]
        );
        assert_eq!(
            recommendations(None),
            vec![TemplateKey::ProfessionalUse, TemplateKey::PrintAndDigital]
        );
    }

    #[test]
    fn test_top_label_findings_checked_in_order() {
        let classes = [classification("Person near a building", 0.9)];
        assert_eq!(
            technical_findings(None, &classes),
            vec![TemplateKey::ArchitecturalElements]
        );
        let classes = [classification("person", 0.9)];
        assert_eq!(technical_findings(None, &classes), vec![TemplateKey::HumanFocalPoint]);
    }

    #[test]
    fn test_translation_inputs() {
        let classes = [
            classification("a", 0.5),
            classification("b", 0.2),
            classification("c", 0.1),
            classification("d", 0.1),
        ];
        let inputs = ReportRenderer::translation_inputs(Some("cap"), &classes);
        assert_eq!(inputs, vec!["cap", "a", "b", "c"]);
    }
}
