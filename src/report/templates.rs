// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Typed per-language report templates
//!
//! Each language ships a table of `(TemplateKey, text)` pairs. The tables are merged
//! into a `TemplateCatalog` once at startup; building the catalog fails if any
//! language is missing a key, so lookups during rendering cannot miss.

use thiserror::Error;

use super::language::Language;
use crate::analysis::CompositionTag;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("template '{key:?}' missing for language '{language}'")]
    MissingKey { language: Language, key: TemplateKey },

    #[error("template '{key:?}' defined twice for language '{language}'")]
    DuplicateKey { language: Language, key: TemplateKey },

    #[error("no template table for language '{0}'")]
    MissingLanguage(Language),
}

/// Every piece of fixed report text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKey {
    ReportTitle,
    ExecutiveSummary,
    AiDescription,
    ContentAnalysis,
    MainCategories,
    Confidence,
    VisualAnalysis,
    Resolution,
    Pixels,
    AspectRatio,
    DominantColors,
    CompositionType,
    BrightnessLevel,
    BrightnessHigh,
    BrightnessMedium,
    BrightnessLow,
    CompositionHorizontal,
    CompositionVertical,
    CompositionBalanced,
    CompositionPanoramic,
    CompositionOrganic,
    TechnicalAnalysis,
    HighContrast,
    SharpDetails,
    ColorHarmony,
    LandscapeDepth,
    ArchitecturalElements,
    HumanFocalPoint,
    Recommendations,
    EnvironmentalPresentations,
    NaturalBackgrounds,
    UrbanProjects,
    ArchitecturalDesign,
    ProfessionalUse,
    PrintAndDigital,
    CaptionFallback,
    NoCategories,
    NoVisualData,
    HeadingSuffix,
    ItemSeparator,
}

impl TemplateKey {
    pub const COUNT: usize = 40;

    pub const ALL: [TemplateKey; TemplateKey::COUNT] = [
        TemplateKey::ReportTitle,
        TemplateKey::ExecutiveSummary,
        TemplateKey::AiDescription,
        TemplateKey::ContentAnalysis,
        TemplateKey::MainCategories,
        TemplateKey::Confidence,
        TemplateKey::VisualAnalysis,
        TemplateKey::Resolution,
        TemplateKey::Pixels,
        TemplateKey::AspectRatio,
        TemplateKey::DominantColors,
        TemplateKey::CompositionType,
        TemplateKey::BrightnessLevel,
        TemplateKey::BrightnessHigh,
        TemplateKey::BrightnessMedium,
        TemplateKey::BrightnessLow,
        TemplateKey::CompositionHorizontal,
        TemplateKey::CompositionVertical,
        TemplateKey::CompositionBalanced,
        TemplateKey::CompositionPanoramic,
        TemplateKey::CompositionOrganic,
        TemplateKey::TechnicalAnalysis,
        TemplateKey::HighContrast,
        TemplateKey::SharpDetails,
        TemplateKey::ColorHarmony,
        TemplateKey::LandscapeDepth,
        TemplateKey::ArchitecturalElements,
        TemplateKey::HumanFocalPoint,
        TemplateKey::Recommendations,
        TemplateKey::EnvironmentalPresentations,
        TemplateKey::NaturalBackgrounds,
        TemplateKey::UrbanProjects,
        TemplateKey::ArchitecturalDesign,
        TemplateKey::ProfessionalUse,
        TemplateKey::PrintAndDigital,
        TemplateKey::CaptionFallback,
        TemplateKey::NoCategories,
        TemplateKey::NoVisualData,
        TemplateKey::HeadingSuffix,
        TemplateKey::ItemSeparator,
    ];

    fn index(&self) -> usize {
        *self as usize
    }

    /// Phrase describing a composition tag
    pub fn for_composition(tag: CompositionTag) -> TemplateKey {
        match tag {
            CompositionTag::Horizontal => TemplateKey::CompositionHorizontal,
            CompositionTag::Vertical => TemplateKey::CompositionVertical,
            CompositionTag::Balanced => TemplateKey::CompositionBalanced,
            CompositionTag::Panoramic => TemplateKey::CompositionPanoramic,
            CompositionTag::Organic => TemplateKey::CompositionOrganic,
        }
    }
}

/// A language's template table
pub type TemplateTable = &'static [(TemplateKey, &'static str)];

pub const ENGLISH: TemplateTable = &[
    (TemplateKey::ReportTitle, "COMPREHENSIVE IMAGE ANALYSIS REPORT"),
    (TemplateKey::ExecutiveSummary, "Executive Summary"),
    (TemplateKey::AiDescription, "AI Description: "),
    (TemplateKey::ContentAnalysis, "Content Analysis"),
    (TemplateKey::MainCategories, "Main Categories"),
    (TemplateKey::Confidence, "confidence"),
    (TemplateKey::VisualAnalysis, "Visual Analysis"),
    (TemplateKey::Resolution, "Resolution"),
    (TemplateKey::Pixels, "pixels"),
    (TemplateKey::AspectRatio, "Aspect Ratio"),
    (TemplateKey::DominantColors, "Dominant Colors"),
    (TemplateKey::CompositionType, "Composition Type"),
    (TemplateKey::BrightnessLevel, "Brightness Level"),
    (TemplateKey::BrightnessHigh, "High"),
    (TemplateKey::BrightnessMedium, "Medium"),
    (TemplateKey::BrightnessLow, "Low"),
    (TemplateKey::CompositionHorizontal, "Horizontal composition with strong lines"),
    (TemplateKey::CompositionVertical, "Vertical composition with slender elements"),
    (TemplateKey::CompositionBalanced, "Balanced and geometric composition"),
    (TemplateKey::CompositionPanoramic, "Open panoramic landscape"),
    (TemplateKey::CompositionOrganic, "Fluid and organic composition"),
    (TemplateKey::TechnicalAnalysis, "Technical Analysis"),
    (TemplateKey::HighContrast, "High contrast enhances clarity"),
    (TemplateKey::SharpDetails, "Sharp details and defined edges"),
    (TemplateKey::ColorHarmony, "Multi-spectral color harmony"),
    (TemplateKey::LandscapeDepth, "Panoramic landscape with field depth"),
    (TemplateKey::ArchitecturalElements, "Structured architectural elements"),
    (TemplateKey::HumanFocalPoint, "Human elements as focal point"),
    (TemplateKey::Recommendations, "Recommendations"),
    (TemplateKey::EnvironmentalPresentations, "Environmental presentations"),
    (TemplateKey::NaturalBackgrounds, "Natural backgrounds"),
    (TemplateKey::UrbanProjects, "Urban projects"),
    (TemplateKey::ArchitecturalDesign, "Architectural design"),
    (TemplateKey::ProfessionalUse, "Professional use"),
    (TemplateKey::PrintAndDigital, "Print and digital display"),
    (TemplateKey::CaptionFallback, "Image containing various visual elements"),
    (TemplateKey::NoCategories, "No classification results available"),
    (TemplateKey::NoVisualData, "Visual metrics unavailable"),
    (TemplateKey::HeadingSuffix, ":"),
    (TemplateKey::ItemSeparator, ": "),
];

pub const FRENCH: TemplateTable = &[
    (TemplateKey::ReportTitle, "RAPPORT COMPLET D'ANALYSE D'IMAGE"),
    (TemplateKey::ExecutiveSummary, "Résumé Exécutif"),
    (TemplateKey::AiDescription, "Description IA : "),
    (TemplateKey::ContentAnalysis, "Analyse du Contenu"),
    (TemplateKey::MainCategories, "Catégories Principales"),
    (TemplateKey::Confidence, "confiance"),
    (TemplateKey::VisualAnalysis, "Analyse Visuelle"),
    (TemplateKey::Resolution, "Résolution"),
    (TemplateKey::Pixels, "pixels"),
    (TemplateKey::AspectRatio, "Ratio d'Aspect"),
    (TemplateKey::DominantColors, "Couleurs Dominantes"),
    (TemplateKey::CompositionType, "Type de Composition"),
    (TemplateKey::BrightnessLevel, "Niveau de Luminosité"),
    (TemplateKey::BrightnessHigh, "Élevé"),
    (TemplateKey::BrightnessMedium, "Moyen"),
    (TemplateKey::BrightnessLow, "Faible"),
    (TemplateKey::CompositionHorizontal, "Composition horizontale avec lignes fortes"),
    (TemplateKey::CompositionVertical, "Composition verticale avec éléments élancés"),
    (TemplateKey::CompositionBalanced, "Composition équilibrée et géométrique"),
    (TemplateKey::CompositionPanoramic, "Paysage panoramique ouvert"),
    (TemplateKey::CompositionOrganic, "Composition fluide et organique"),
    (TemplateKey::TechnicalAnalysis, "Analyse Technique"),
    (TemplateKey::HighContrast, "Contraste élevé améliore la clarté"),
    (TemplateKey::SharpDetails, "Détails nets et bords définis"),
    (TemplateKey::ColorHarmony, "Harmonie colorimétrique multi-spectrale"),
    (TemplateKey::LandscapeDepth, "Paysage panoramique avec profondeur de champ"),
    (TemplateKey::ArchitecturalElements, "Éléments architecturaux structurés"),
    (TemplateKey::HumanFocalPoint, "Présence d'éléments humains comme point focal"),
    (TemplateKey::Recommendations, "Recommandations"),
    (TemplateKey::EnvironmentalPresentations, "Présentations environnementales"),
    (TemplateKey::NaturalBackgrounds, "Arrière-plans naturels"),
    (TemplateKey::UrbanProjects, "Projets urbains"),
    (TemplateKey::ArchitecturalDesign, "Design architectural"),
    (TemplateKey::ProfessionalUse, "Usage professionnel"),
    (TemplateKey::PrintAndDigital, "Impression et affichage numérique"),
    (TemplateKey::CaptionFallback, "Image contenant divers éléments visuels"),
    (TemplateKey::NoCategories, "Aucun résultat de classification disponible"),
    (TemplateKey::NoVisualData, "Métriques visuelles indisponibles"),
    (TemplateKey::HeadingSuffix, " :"),
    (TemplateKey::ItemSeparator, " : "),
];

pub const ARABIC: TemplateTable = &[
    (TemplateKey::ReportTitle, "التقرير الشامل لتحليل الصورة"),
    (TemplateKey::ExecutiveSummary, "ملخص تنفيذي"),
    (TemplateKey::AiDescription, "الوصف بالذكاء الاصطناعي: "),
    (TemplateKey::ContentAnalysis, "تحليل المحتوى"),
    (TemplateKey::MainCategories, "الفئات الرئيسية"),
    (TemplateKey::Confidence, "ثقة"),
    (TemplateKey::VisualAnalysis, "التحليل البصري"),
    (TemplateKey::Resolution, "الدقة"),
    (TemplateKey::Pixels, "بكسل"),
    (TemplateKey::AspectRatio, "نسبة الأبعاد"),
    (TemplateKey::DominantColors, "الألوان المسيطرة"),
    (TemplateKey::CompositionType, "نوع التركيب"),
    (TemplateKey::BrightnessLevel, "مستوى السطوع"),
    (TemplateKey::BrightnessHigh, "مرتفع"),
    (TemplateKey::BrightnessMedium, "متوسط"),
    (TemplateKey::BrightnessLow, "منخفض"),
    (TemplateKey::CompositionHorizontal, "تركيب أفقي مع خطوط قوية"),
    (TemplateKey::CompositionVertical, "تركيب عمودي مع عناصر رفيعة"),
    (TemplateKey::CompositionBalanced, "تركيب متوازن وهندسي"),
    (TemplateKey::CompositionPanoramic, "منظر طبيعي بانورامي مفتوح"),
    (TemplateKey::CompositionOrganic, "تركيب سائل وعضوي"),
    (TemplateKey::TechnicalAnalysis, "التحليل الفني"),
    (TemplateKey::HighContrast, "تباين عالي يعزز الوضوح"),
    (TemplateKey::SharpDetails, "تفاصيل حادة وحواف واضحة"),
    (TemplateKey::ColorHarmony, "تناغم لوني متعدد الأطياف"),
    (TemplateKey::LandscapeDepth, "منظر طبيعي بانورامي بعمق مجالي"),
    (TemplateKey::ArchitecturalElements, "عناصر معمارية بتصميم منظم"),
    (TemplateKey::HumanFocalPoint, "وجود عناصر بشرية كمركز الاهتمام"),
    (TemplateKey::Recommendations, "التوصيات"),
    (TemplateKey::EnvironmentalPresentations, "عروض بيئية"),
    (TemplateKey::NaturalBackgrounds, "خلفيات طبيعية"),
    (TemplateKey::UrbanProjects, "مشاريع عمرانية"),
    (TemplateKey::ArchitecturalDesign, "تصميم معماري"),
    (TemplateKey::ProfessionalUse, "استخدام مهني"),
    (TemplateKey::PrintAndDigital, "طباعة وعرض رقمي"),
    (TemplateKey::CaptionFallback, "صورة تحتوي على عناصر بصرية متنوعة"),
    (TemplateKey::NoCategories, "لا توجد نتائج تصنيف متاحة"),
    (TemplateKey::NoVisualData, "المقاييس البصرية غير متاحة"),
    (TemplateKey::HeadingSuffix, ":"),
    (TemplateKey::ItemSeparator, " : "),
];

/// Validated `(language, key) -> text` mapping
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    texts: [[&'static str; TemplateKey::COUNT]; 3],
}

impl TemplateCatalog {
    /// Catalog built from the bundled English, French and Arabic tables
    pub fn builtin() -> Result<Self, TemplateError> {
        Self::from_tables(&[
            (Language::En, ENGLISH),
            (Language::Fr, FRENCH),
            (Language::Ar, ARABIC),
        ])
    }

    /// Build a catalog, requiring every language to define every key exactly once
    pub fn from_tables(tables: &[(Language, TemplateTable)]) -> Result<Self, TemplateError> {
        let mut texts = [[""; TemplateKey::COUNT]; 3];

        for language in Language::ALL {
            let table = tables
                .iter()
                .find(|(lang, _)| *lang == language)
                .map(|(_, table)| *table)
                .ok_or(TemplateError::MissingLanguage(language))?;

            let mut seen = [false; TemplateKey::COUNT];
            for (key, text) in table {
                if seen[key.index()] {
                    return Err(TemplateError::DuplicateKey { language, key: *key });
                }
                seen[key.index()] = true;
                texts[language.index()][key.index()] = *text;
            }

            if let Some(key) = TemplateKey::ALL.iter().find(|key| !seen[key.index()]) {
                return Err(TemplateError::MissingKey { language, key: *key });
            }
        }

        Ok(Self { texts })
    }

    pub fn text(&self, language: Language, key: TemplateKey) -> &'static str {
        self.texts[language.index()][key.index()]
    }
}
