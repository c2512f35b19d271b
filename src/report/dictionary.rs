// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Bundled fallback dictionaries used when machine translation is unavailable

use super::language::Language;

/// Caption vocabulary that triggers landscape recommendations
pub const LANDSCAPE_KEYWORDS: &[&str] = &["landscape", "mountain", "beach", "paysage", "جبل", "شاطئ"];

/// Caption vocabulary that triggers urban recommendations
pub const URBAN_KEYWORDS: &[&str] = &[
    "city", "building", "street", "ville", "bâtiment", "مدينة", "مبنى",
];

/// English caption phrases, checked in order
const FRENCH_PHRASES: &[(&str, &str)] = &[
    (
        "a man with a stick in his hand in the jungle",
        "Un homme tenant un bâton dans sa main dans la jungle",
    ),
    ("in his hand", "dans sa main"),
    ("in the jungle", "dans la jungle"),
    ("with a stick", "tenant un bâton"),
    ("a man", "un homme"),
];

const ARABIC_PHRASES: &[(&str, &str)] = &[
    ("a man with a stick in his hand in the jungle", "رجل يحمل عصا في يده في الغابة"),
    ("in his hand", "في يده"),
    ("in the jungle", "في الغابة"),
    ("with a stick", "يحمل عصا"),
    ("a man", "رجل"),
];

const FRENCH_LABELS: &[(&str, &str)] = &[
    ("building", "Bâtiment"),
    ("street", "Rue"),
    ("city", "Ville"),
    ("landscape", "Paysage"),
    ("mountain", "Montagne"),
    ("beach", "Plage"),
    ("forest", "Forêt"),
    ("person", "Personne"),
    ("car", "Voiture"),
    ("animal", "Animal"),
    ("tree", "Arbre"),
    ("water", "Eau"),
    ("sky", "Ciel"),
    ("food", "Nourriture"),
    ("indoor", "Intérieur"),
    ("outdoor", "Extérieur"),
    ("zebra", "Zèbre"),
    ("gazelle", "Gazelle"),
    ("impala", "Impala"),
    ("giraffe", "Girafe"),
    ("comic book", "Bande dessinée"),
    ("book jacket", "Couverture de livre"),
    ("dust cover", "Couverture protectrice"),
    ("dust jacket", "Couverture de livre"),
    ("dust wrapper", "Emballage protecteur"),
    ("bow", "Arc"),
    ("book", "Livre"),
];

const ARABIC_LABELS: &[(&str, &str)] = &[
    ("building", "مبنى"),
    ("street", "شارع"),
    ("city", "مدينة"),
    ("landscape", "منظر طبيعي"),
    ("mountain", "جبل"),
    ("beach", "شاطئ"),
    ("forest", "غابة"),
    ("person", "شخص"),
    ("car", "سيارة"),
    ("animal", "حيوان"),
    ("tree", "شجرة"),
    ("water", "ماء"),
    ("sky", "سماء"),
    ("food", "طعام"),
    ("indoor", "داخلي"),
    ("outdoor", "خارجي"),
    ("zebra", "حمار وحشي"),
    ("gazelle", "غزال"),
    ("impala", "إمبالا"),
    ("giraffe", "زرافة"),
    ("comic book", "كتاب مصور"),
    ("book jacket", "غلاف كتاب"),
    ("dust cover", "غطاء واقي"),
    ("dust jacket", "غلاف كتاب"),
    ("dust wrapper", "غلاف واقي"),
    ("bow", "قوس"),
    ("book", "كتاب"),
];

/// Exact (case-insensitive) label lookup; `None` for English or unknown labels
pub fn lookup_label(language: Language, label: &str) -> Option<&'static str> {
    let table = match language {
        Language::En => return None,
        Language::Fr => FRENCH_LABELS,
        Language::Ar => ARABIC_LABELS,
    };
    let key = label.trim().to_lowercase();
    table
        .iter()
        .find(|(english, _)| *english == key)
        .map(|(_, translated)| *translated)
}

/// Replace the first known English phrase in a caption
///
/// The caption is lower-cased before matching. French output is capitalised.
pub fn translate_caption_phrases(language: Language, caption: &str) -> Option<String> {
    let table = match language {
        Language::En => return None,
        Language::Fr => FRENCH_PHRASES,
        Language::Ar => ARABIC_PHRASES,
    };
    let lowered = caption.to_lowercase();
    let (english, translated) = table.iter().find(|(english, _)| lowered.contains(english))?;
    let replaced = lowered.replace(english, translated);

    Some(match language {
        Language::Fr => capitalize(&replaced),
        _ => replaced,
    })
}

/// Whether the caption mentions any keyword of the list
pub fn mentions_any(caption: &str, keywords: &[&str]) -> bool {
    let lowered = caption.to_lowercase();
    keywords.iter().any(|keyword| lowered.contains(keyword))
}

/// Upper-case the first character, lower-case the rest
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
