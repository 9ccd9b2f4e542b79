//! Shared vocabularies for label and product-text matching.
//!
//! One copy of each dictionary, used by every matcher call site: the OCR
//! text path, the catalog title/description path and the web-search result
//! path all resolve against the same tables.

/// Known filament brands, in precedence order. The matcher takes the first
/// whole-word hit, so list order is meaningful, not alphabetical: "Bambu
/// Lab" must come before its "Bambu" alias.
pub const BRANDS: &[&str] = &[
    "Bambu Lab",
    "Bambu",
    "Overture",
    "eSun",
    "Sunlu",
    "Polymaker",
    "Hatchbox",
    "Prusament",
    "Creality",
    "Eryone",
    "Amolen",
    "Inland",
    "Flashforge",
    "Elegoo",
    "Voxelab",
];

/// Canonical form of a matched brand. The "Bambu" alias collapses into
/// "Bambu Lab"; everything else keeps its vocabulary casing.
pub fn canonical_brand(brand: &str) -> &str {
    if brand.eq_ignore_ascii_case("bambu") { "Bambu Lab" } else { brand }
}

/// Color name to hex dictionary.
///
/// Compound names ("Pine Green") must win over their substrings ("Green");
/// the matcher sorts this table by name length descending before compiling
/// patterns, so insertion order here does not matter.
pub const COLORS: &[(&str, &str)] = &[
    ("Black", "#000000"),
    ("White", "#FFFFFF"),
    ("Gray", "#808080"),
    ("Grey", "#808080"),
    ("Red", "#FF0000"),
    ("Blue", "#0000FF"),
    ("Green", "#008000"),
    ("Yellow", "#FFFF00"),
    ("Orange", "#FFA500"),
    ("Purple", "#800080"),
    ("Pink", "#FFC0CB"),
    ("Brown", "#A52A2A"),
    ("Silver", "#C0C0C0"),
    ("Gold", "#FFD700"),
    ("Copper", "#B87333"),
    ("Bronze", "#CD7F32"),
    ("Teal", "#008080"),
    ("Cyan", "#00FFFF"),
    ("Magenta", "#FF00FF"),
    ("Lime", "#00FF00"),
    ("Olive", "#808000"),
    ("Maroon", "#800000"),
    ("Navy", "#000080"),
    ("Aquamarine", "#7FFFD4"),
    ("Turquoise", "#40E0D0"),
    ("Violet", "#EE82EE"),
    ("Indigo", "#4B0082"),
    ("Beige", "#F5F5DC"),
    ("Ivory", "#FFFFF0"),
    ("Khaki", "#F0E68C"),
    ("Coral", "#FF7F50"),
    ("Salmon", "#FA8072"),
    ("Crimson", "#DC143C"),
    ("Lavender", "#E6E6FA"),
    ("Plum", "#DDA0DD"),
    ("Tan", "#D2B48C"),
    ("Mint", "#98FF98"),
    ("Peach", "#FFDAB9"),
    ("Charcoal", "#36454F"),
    ("Space Gray", "#717378"),
    ("Slate", "#708090"),
    ("Galaxy", "#222222"),
    ("Sparkle", "#444444"),
    ("Glow", "#CCFFCC"),
    ("Transparent", "#EFEFEF"),
    ("Clear", "#EFEFEF"),
    ("Natural", "#F5F5DC"),
    ("Pine Green", "#01796F"),
];
