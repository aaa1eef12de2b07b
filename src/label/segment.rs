//! Component segmenter
//!
//! Splits a canonical label into `component -> raw material text` blocks.
//! A whitespace-delimited token ending in `:` opens a component; every token up
//! to the next such token belongs to it.
//!
//! ```text
//! "fabric: 80% polyamide 20% elastane lining: 100% polyester"
//!   fabric -> "80% polyamide 20% elastane"
//!   lining -> "100% polyester"
//! ```
//!
//! Tokens before the first component carry no component and are dropped. A
//! component that collects no tokens produces no block. When a name is declared
//! twice the later block replaces the earlier one in place.

use indexmap::IndexMap;

/// Segment a canonical label into ordered component blocks.
pub fn segment(text: &str) -> IndexMap<String, String> {
    let mut blocks = IndexMap::new();
    let mut component: Option<&str> = None;
    let mut materials: Vec<&str> = Vec::new();

    for token in text.split_whitespace() {
        if token.ends_with(':') {
            flush(&mut blocks, component, &mut materials);
            component = Some(token.trim_end_matches(':'));
        } else {
            materials.push(token);
        }
    }
    flush(&mut blocks, component, &mut materials);

    blocks
}

fn flush(blocks: &mut IndexMap<String, String>, component: Option<&str>, materials: &mut Vec<&str>) {
    if materials.is_empty() {
        return;
    }
    if let Some(name) = component {
        blocks.insert(name.to_string(), materials.join(" "));
    }
    materials.clear();
}
