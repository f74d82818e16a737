pub mod review_content;
pub mod review_state;

pub use review_content::ReviewContent;
pub use review_state::{ReviewState, ReviewStateKind};
