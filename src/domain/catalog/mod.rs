//! Catalog module - the life areas and the copy that frames each scenario.
//!
//! The catalog is immutable content handed to the wizard engine and the
//! analysis services at construction time.

mod area_catalog;
mod guide;
mod life_area;

pub use area_catalog::{AreaCatalog, AREA_COUNT};
pub use guide::{ScenarioGuide, TutorialCopy, KEY_TAKEAWAY, REFLECTION_HINT};
pub use life_area::{LifeArea, ScenarioPrompts};
