pub mod calculations;
pub mod constants;

pub use calculations::{find_duplicate, is_over_goal, malformed_entries, parse_calories, total_calories};
pub use constants::*;
