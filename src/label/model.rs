//! Composition data model
//!
//! A [`CompositionRecord`] maps component names to the ordered list of
//! [`MaterialRecord`]s found for that component. Both serialize to the same
//! shape as the gold corpus:
//!
//! ```text
//! {"fabric": [{"material": "polyamide", "proportion": 80.0}, ...], ...}
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One `(proportion, material)` pair of a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    pub material: String,
    /// Percentage value in `[0, 100]`, never a percent-suffixed string.
    pub proportion: f64,
}

impl MaterialRecord {
    pub fn new(material: impl Into<String>, proportion: f64) -> Self {
        Self {
            material: material.into(),
            proportion,
        }
    }
}

/// Component name to materials, in first-seen component order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompositionRecord {
    components: IndexMap<String, Vec<MaterialRecord>>,
}

impl CompositionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert materials for a component, keeping the position of an existing key.
    pub fn insert(&mut self, component: impl Into<String>, materials: Vec<MaterialRecord>) {
        self.components.insert(component.into(), materials);
    }

    pub fn get(&self, component: &str) -> Option<&[MaterialRecord]> {
        self.components.get(component).map(Vec::as_slice)
    }

    /// Component names in iteration order.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[MaterialRecord])> {
        self.components
            .iter()
            .map(|(name, materials)| (name.as_str(), materials.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Sum of proportions declared for one component.
    pub fn proportion_total(&self, component: &str) -> Option<f64> {
        self.get(component)
            .map(|materials| materials.iter().map(|m| m.proportion).sum())
    }
}

impl FromIterator<(String, Vec<MaterialRecord>)> for CompositionRecord {
    fn from_iter<T: IntoIterator<Item = (String, Vec<MaterialRecord>)>>(iter: T) -> Self {
        Self {
            components: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CompositionRecord {
        let mut record = CompositionRecord::new();
        record.insert(
            "fabric",
            vec![
                MaterialRecord::new("polyamide", 80.0),
                MaterialRecord::new("elastane", 20.0),
            ],
        );
        record.insert("lining", vec![MaterialRecord::new("polyester", 100.0)]);
        record
    }

    #[test]
    fn test_serializes_like_gold_corpus() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"fabric":[{"material":"polyamide","proportion":80.0},{"material":"elastane","proportion":20.0}],"lining":[{"material":"polyester","proportion":100.0}]}"#
        );
    }

    #[test]
    fn test_deserializes_integer_proportions() {
        let record: CompositionRecord =
            serde_json::from_str(r#"{"lining": [{"material": "polyester", "proportion": 100}]}"#)
                .unwrap();
        assert_eq!(
            record.get("lining"),
            Some(&[MaterialRecord::new("polyester", 100.0)][..])
        );
    }

    #[test]
    fn test_component_order_is_insertion_order() {
        let binding = sample();
        let names: Vec<_> = binding.components().collect();
        assert_eq!(names, vec!["fabric", "lining"]);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut record = sample();
        record.insert("fabric", vec![]);
        let names: Vec<_> = record.components().collect();
        assert_eq!(names, vec!["fabric", "lining"]);
        assert_eq!(record.get("fabric"), Some(&[][..]));
    }

    #[test]
    fn test_proportion_total() {
        let record = sample();
        assert_eq!(record.proportion_total("fabric"), Some(100.0));
        assert_eq!(record.proportion_total("gusset"), None);
    }
}
