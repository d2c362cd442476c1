pub mod eco_score_ops;
mod recommendation;

pub use eco_score_ops::score;
pub use recommendation::{recommend, Recommendation};
