pub mod autosave;
pub mod calc;
pub mod compass;
pub mod fields;
pub mod geometry;
pub mod profile;
pub mod shots;

pub use autosave::{AutoSaveSnapshot, AUTO_SAVE_VERSION};
pub use compass::{bearing_endpoint, label_anchor, parse_bearing, LabelAnchor};
pub use fields::{display_id, field_registry, is_distance_label, mobile_display_id, DISTANCES};
pub use geometry::{NormalizedPoint, SurfaceSize};
pub use profile::{Profile, ProfileBook, PROFILE_BOOK_VERSION};
pub use shots::ShotSet;
