//! Entity ids and the records consultsim reads and generates.

pub mod deliverable_range;
pub mod ids;
pub mod insert_shape;
pub mod progress;
pub mod title_history;

pub use deliverable_range::DeliverableRange;
pub use ids::{ConsultantId, DeliverableId, TitleId};
pub use insert_shape::InsertShape;
pub use progress::ProgressRecord;
pub use title_history::TitleHistoryRecord;
