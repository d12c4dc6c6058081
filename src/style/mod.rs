//! Style text builder: ordered rules, selector-scoped sheets, presets.

pub mod presets;
pub mod rule;
pub mod sheet;

pub use presets::{Cursor, Display, FontWeight, TextAlign, WordWrap};
pub use rule::StyleRule;
pub use sheet::StyleSheet;
