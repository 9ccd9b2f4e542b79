//! Text Pattern Matcher: raw label or product text to partial record.
//!
//! Pure functions with no I/O. All patterns are compiled once into lazy
//! statics; given the same text, the matcher always produces the same
//! partial [`FilamentRecord`]. A field that does not match is simply left
//! `None` - no-match is never an error.

use crate::text::vocab;
use crate::types::FilamentRecord;
use once_cell::sync::Lazy;
use regex::Regex;

/// Label-anchored filament code: "Filament Code" then a 5-digit number,
/// tolerating OCR noise (dots, newlines) in between.
static FILAMENT_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)Filament\s*Code.*?(\d{5})").expect("filament code pattern"));

/// Generic SKU/Ref/P-N code fallback.
static SKU_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:SKU|Ref|P/N)[\s.:)]+([A-Z0-9-]{4,15})").expect("sku pattern"));

/// Base polymer tokens, longest alternative first so "PLA+" and "ABS-GF"
/// win over their prefixes. The regex crate has no lookahead, so the
/// trailing word boundary for alternatives ending in '+' is checked by hand
/// in [`match_material`].
static MATERIAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(PLA\+|PLA plus|PLA|PETG|ABS-GF|ABS|TPU|ASA|NYLON|PC|PVA|CF)").expect("material pattern")
});

/// Subtype descriptor searched independently of the base polymer token.
static SUBTYPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(Basic|Matte|Silk|Translucent|Galaxy|Sparkle|Wood|Carbon Fiber)\b").expect("subtype pattern")
});

static WEIGHT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(\d{1,4})\s?(kg|g)\b").expect("weight pattern"));

static TEMP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d{2,3})\s*-\s*(\d{2,3})\s*°?\s*C\b").expect("temperature pattern"));

static DIAMETER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(1\.75|2\.85|3\.00)\s?mm").expect("diameter pattern"));

/// Brand patterns in vocabulary precedence order.
static BRAND_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    vocab::BRANDS
        .iter()
        .map(|brand| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(brand));
            (*brand, Regex::new(&pattern).expect("brand pattern"))
        })
        .collect()
});

/// Color patterns sorted by name length descending, so "Pine Green" is
/// tried before "Green".
static COLOR_PATTERNS: Lazy<Vec<(&'static str, &'static str, Regex)>> = Lazy::new(|| {
    let mut colors: Vec<_> = vocab::COLORS.to_vec();
    colors.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    colors
        .into_iter()
        .map(|(name, hex)| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(name));
            (name, hex, Regex::new(&pattern).expect("color pattern"))
        })
        .collect()
});

/// Parse a full label text blob into a partial record.
///
/// Every field is matched independently; the result contains only the
/// fields the patterns were confident about. `raw_text` is left empty -
/// the orchestrator owns it.
pub fn parse_label_text(text: &str) -> FilamentRecord {
    FilamentRecord {
        filament_code: match_filament_code(text),
        brand: match_brand(text),
        material: match_material(text),
        weight_g: match_weight(text),
        temp_nozzle: match_temp(text),
        diameter: match_diameter(text),
        color_name: match_color(text).map(|(name, _)| name.to_string()),
        color_hex: match_color(text).map(|(_, hex)| hex.to_string()),
        ..Default::default()
    }
}

/// Reduced inference for catalog product title/description text: material,
/// weight and diameter only. Brand comes from catalog metadata, and a
/// product title is not a place to trust code or temperature patterns.
pub fn parse_product_text(text: &str) -> FilamentRecord {
    FilamentRecord {
        material: match_material(text),
        weight_g: match_weight(text),
        diameter: match_diameter(text),
        ..Default::default()
    }
}

fn match_filament_code(text: &str) -> Option<String> {
    if let Some(caps) = FILAMENT_CODE_RE.captures(text) {
        return Some(caps[1].to_string());
    }
    SKU_RE.captures(text).map(|caps| caps[1].to_string())
}

fn match_brand(text: &str) -> Option<String> {
    BRAND_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(text))
        .map(|(brand, _)| vocab::canonical_brand(brand).to_string())
}

fn match_material(text: &str) -> Option<String> {
    for m in MATERIAL_RE.find_iter(text) {
        // Manual trailing boundary: reject "PLAY" matching as "PLA".
        let followed_by_word = text[m.end()..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric());
        if followed_by_word {
            continue;
        }

        let mut material = m.as_str().to_uppercase();
        if let Some(subtype) = SUBTYPE_RE.find(text) {
            material = format!("{} {}", material, subtype.as_str());
        }
        return Some(material);
    }
    None
}

/// Single weight-unit rule for every matcher call site: kg converts to
/// grams, and a bare gram value below 10 is read as a kilogram figure whose
/// unit lost its 'k' in OCR ("1 g" on a spool label means 1 kg).
fn normalize_weight(value: u32, unit: &str) -> u32 {
    if unit.eq_ignore_ascii_case("kg") || value < 10 {
        value * 1000
    } else {
        value
    }
}

fn match_weight(text: &str) -> Option<u32> {
    let caps = WEIGHT_RE.captures(text)?;
    let value: u32 = caps[1].parse().ok()?;
    Some(normalize_weight(value, &caps[2]))
}

fn match_temp(text: &str) -> Option<String> {
    TEMP_RE
        .captures(text)
        .map(|caps| format!("{}-{}", &caps[1], &caps[2]))
}

fn match_diameter(text: &str) -> Option<f64> {
    let caps = DIAMETER_RE.captures(text)?;
    caps[1].parse().ok()
}

fn match_color(text: &str) -> Option<(&'static str, &'static str)> {
    COLOR_PATTERNS
        .iter()
        .find(|(_, _, re)| re.is_match(text))
        .map(|(name, hex, _)| (*name, *hex))
}
