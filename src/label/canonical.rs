//! Lexical canonicalizer
//!
//! Rewrites a raw label into the canonical form consumed by the segmenter:
//! every component is declared as `name:`, every proportion is a
//! space-delimited `N%` token, and item separators are single spaces.
//!
//! ```text
//! Raw:        "(body) 82% nylon 18% spandex (forro)100% polyester"
//! Canonical:  "body: 82% nylon 18% spandex forro: 100% polyester"
//! ```
//!
//! The rewrite table lives in [`CANONICAL_STAGES`] and is applied in order.
//! A handful of labels cannot be repaired by general rules; those are listed in
//! [`CANONICAL_OVERRIDES`] and looked up before any rule runs.

use crate::label::rules::{apply_all, RewriteRule, RuleSet};
use once_cell::sync::Lazy;
use tracing::trace;

/// Exact raw labels mapped straight to their canonical form.
///
/// Technical debt: entries here are not derived from any rule and must not be
/// generalized. Keep the list as short as possible.
pub const CANONICAL_OVERRIDES: &[(&str, &str)] = &[(
    "100% polyester woven (pant) and 95% viscose  5%spandex knitted top",
    "pants: 100% polyester knitted_top 95% viscose 5%spandex",
)];

/// The ordered rewrite table.
pub static CANONICAL_STAGES: Lazy<Vec<RuleSet>> = Lazy::new(|| {
    use RewriteRule as R;
    vec![
        RuleSet::new(
            "component-markers",
            vec![
                R::pattern(r"\((\w+)\)", "${1}: "),
                R::pattern(r"(\w+) -", "${1}: "),
            ],
        ),
        RuleSet::new("alternative-separators", vec![R::literal("/", " ")]),
        RuleSet::new(
            "percent-and-colon-spacing",
            vec![R::literal(" %", "%"), R::literal("：", ": ")],
        ),
        RuleSet::new(
            "numbered-fabric",
            vec![R::pattern(r"fabric \d:", "fabric:")],
        ),
        RuleSet::new(
            "proportion-spacing",
            vec![R::pattern(r"(\d+\.?\d*)%", " ${1}%")],
        ),
        RuleSet::new(
            "compound-phrases",
            vec![
                R::literal("top body", "top_body"),
                R::literal("op body", "top_body"),
                R::literal("body & panty", "body_panty"),
                R::literal("edge lace", "edge_lace"),
                R::literal("edg lace", "edge_lace"),
                R::literal("cup shell", "cup_shell"),
                R::literal("centre front and wings", "centre_front_and_wings"),
                R::literal("cup lining", "cup_lining"),
                R::literal("front panel", "front_panel"),
                R::literal("back panel", "back_panel"),
                R::literal("marl fabric", "marl_fabric"),
                R::literal("knited top", "knitted_top"),
                R::literal("striped mesh", "striped_mesh"),
                R::literal("trim lace", "trim_lace"),
                R::literal("body-", "body:"),
                R::literal("liner-", "liner:"),
                R::literal("mesh-", "mesh:"),
                R::literal("&", " "),
            ],
        ),
        RuleSet::new(
            "component-keywords",
            vec![
                R::literal("lace ", "lace: "),
                R::literal("mesh ", "mesh: "),
                R::literal("gusset ", "gusset: "),
                R::literal("top ", "top: "),
                R::literal("body ", "body: "),
                R::literal("fabric ", " fabric: "),
                R::literal("bottom ", " bottom: "),
            ],
        ),
        RuleSet::new("colon-tightening", vec![R::literal(" :", ":")]),
        RuleSet::new(
            "item-separators",
            vec![
                R::literal(";", " "),
                R::literal(",", " "),
                R::literal(". ", " "),
                R::literal("，", " "),
            ],
        ),
        RuleSet::new(
            "label-corrections",
            vec![
                R::literal("pa-00462-tho pa-00464-tho", "pa-00464-tho"),
                R::literal("pa-00462-tho:", ""),
                R::literal("g string ", "g-string: "),
                R::literal("95% 5%", "100%"),
            ],
        ),
        RuleSet::new(
            "whitespace-and-symbols",
            vec![
                R::literal(":", ": "),
                R::literal("\t", " "),
                R::literal("$", "%"),
                R::literal(" with ", " "),
                R::literal("  ", " "),
                R::literal("%s ", "% "),
                R::literal("bci cotton", "cotton"),
                R::pattern(r"pa-\d{5}-tho:", ""),
                R::literal("spandexbottom:", "spandex bottom:"),
            ],
        ),
        RuleSet::new(
            "typos",
            vec![
                R::literal("sapndex", "spandex"),
                R::literal("spadnex", "spandex"),
                R::literal("spandexndex", "spandex"),
                R::pattern(r"span$", "spandex"),
                R::pattern(r"spande$", "spandex"),
                R::literal("polyest ", "polyester "),
                R::pattern(r"polyeste$", "polyester"),
                R::pattern(r"poly$", "polyester"),
                R::literal("polyster", "polyester"),
                R::literal("polyeste ", "polyester "),
                R::literal("elastanee", "elastane"),
                R::literal(" poly ", " polyester "),
                R::literal("cotton algodón coton", "cotton"),
                R::literal("poliamide", "polyamide"),
                R::literal("recycle polyamide", "recycled polyamide"),
                R::literal("polyester poliéster", "polyester"),
                R::literal("polystester", "polyester"),
                R::literal("regualar polyamide", "regular polyamide"),
                R::literal("recycle nylon", "recycled nylon"),
                R::literal("buttom", "bottom"),
                R::literal("recycle polyester", "recycled polyester"),
                R::literal("125", "12%"),
                R::literal("135", "13%"),
                R::literal("recycled polyeser", "recycled polyester"),
                R::literal("polyeter", "polyester"),
                R::literal("polyeseter", "polyester"),
                R::literal("viscouse", "viscose"),
                R::literal("ctton", "cotton"),
                R::literal("ryaon", "rayon"),
            ],
        ),
        RuleSet::new("final-spacing", vec![R::literal("  ", " ")]),
    ]
});

/// Look up a raw label in the override table.
pub fn override_for(text: &str) -> Option<&'static str> {
    CANONICAL_OVERRIDES
        .iter()
        .find(|(raw, _)| *raw == text)
        .map(|(_, canonical)| *canonical)
}

/// Canonicalize a raw label. Total and deterministic.
pub fn normalize(text: &str) -> String {
    if let Some(canonical) = override_for(text) {
        trace!(input = text, "canonical override hit");
        return canonical.to_string();
    }

    apply_all(&CANONICAL_STAGES, text).trim().to_string()
}
