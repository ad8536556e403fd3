pub mod augment;
pub mod policy;
pub mod traits;

mod engine;
mod extended;

pub use augment::{Augment, PathStats};
pub use engine::LinkCutTree;
pub use extended::ExtendedLinkCutTree;

pub use traits::{DynamicForest, PathQueries};
