pub mod classify;
pub mod colors;
pub mod model;

pub use classify::{NO_DATA_XP, RankStatus, classify};
pub use colors::{DEFAULT_RANK_COLOR, rank_color};
pub use model::*;
