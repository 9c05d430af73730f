/// Color applied to rank names the table does not know.
pub const DEFAULT_RANK_COLOR: &str = "#ffd700";

/// Display color for a rank name. Unknown names (new ranks shipped by a
/// newer backend) fall back to [`DEFAULT_RANK_COLOR`] rather than erroring.
pub fn rank_color(name: &str) -> &'static str {
    match name {
        "Bronze" => "#cd7f32",
        "Silver" => "#c0c0c0",
        "Gold" => "#ffd700",
        "Platinum" => "#00d4ff",
        "Ruby" => "#e53935",
        "Emerald" => "#00c853",
        "Obsidian" => "#aa00ff",
        "Mythril" => "#40c4ff",
        "Adamant" => "#00bcd4",
        "Grandmaster" => "#ffd740",
        "King" => "#ffab40",
        "Legend" => "#ff6d00",
        "Champion" => "#d500f9",
        "God" => "#ffff00",
        "Demon King" => "#f44336",
        _ => DEFAULT_RANK_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_RANK_COLOR, rank_color};
    use crate::model::TERMINAL_RANK;

    #[test]
    fn known_ranks_have_distinct_colors() {
        assert_eq!(rank_color("Bronze"), "#cd7f32");
        assert_eq!(rank_color("Platinum"), "#00d4ff");
        assert_ne!(rank_color("Silver"), rank_color("Gold"));
    }

    #[test]
    fn terminal_rank_is_in_the_table() {
        assert_ne!(rank_color(TERMINAL_RANK), DEFAULT_RANK_COLOR);
    }

    #[test]
    fn unknown_rank_falls_back_to_default() {
        assert_eq!(rank_color("Cardboard"), DEFAULT_RANK_COLOR);
        assert_eq!(rank_color(""), DEFAULT_RANK_COLOR);
    }
}
