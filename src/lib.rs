//! # garment-label
//!
//! Extracts material composition from free-form garment label text.
//!
//! ```text
//! "fabric - 80% polyamide 20% elastane/lining - 100% polyester"
//!   -> {"fabric": [80% polyamide, 20% elastane], "lining": [100% polyester]}
//! ```

pub mod label;

pub use label::canonical::normalize;
pub use label::model::{CompositionRecord, MaterialRecord};
pub use label::pipeline::{extract, parse_label, LabelParser};
