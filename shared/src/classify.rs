use crate::model::RankDefinition;

/// Sentinel XP used when the user's current snapshot could not be
/// fetched. Below every catalog threshold (including 0), so classification
/// degrades to "everything locked" instead of silently marking entries
/// achieved.
pub const NO_DATA_XP: i64 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankStatus {
    Locked,
    Achieved,
    Current,
}

impl RankStatus {
    /// CSS modifier class used by the catalog panel.
    pub fn css_class(self) -> &'static str {
        match self {
            RankStatus::Locked => "locked",
            RankStatus::Achieved => "achieved",
            RankStatus::Current => "current",
        }
    }

    pub fn badge_label(self) -> &'static str {
        match self {
            RankStatus::Locked => "🔒",
            RankStatus::Achieved => "✓ Done",
            RankStatus::Current => "◀ Current",
        }
    }
}

/// Classify one catalog entry against the user's current rank and XP.
pub fn classify(def: &RankDefinition, current_rank: Option<&str>, total_xp: i64) -> RankStatus {
    if current_rank == Some(def.name.as_str()) {
        RankStatus::Current
    } else if total_xp >= def.xp_required {
        RankStatus::Achieved
    } else {
        RankStatus::Locked
    }
}

#[cfg(test)]
mod tests {
    use super::{NO_DATA_XP, RankStatus, classify};
    use crate::model::RankDefinition;

    fn def(name: &str, xp: i64) -> RankDefinition {
        RankDefinition {
            name: name.to_string(),
            icon: "⭐".to_string(),
            xp_required: xp,
        }
    }

    #[test]
    fn classifies_past_current_and_future_ranks() {
        let catalog = [def("Bronze", 0), def("Silver", 300), def("Gold", 1000)];
        let statuses: Vec<_> = catalog
            .iter()
            .map(|d| classify(d, Some("Silver"), 500))
            .collect();
        assert_eq!(
            statuses,
            [
                RankStatus::Achieved,
                RankStatus::Current,
                RankStatus::Locked
            ]
        );
    }

    #[test]
    fn no_data_sentinel_locks_every_entry() {
        let catalog = [def("Bronze", 0), def("Silver", 300)];
        for d in &catalog {
            assert_eq!(classify(d, None, NO_DATA_XP), RankStatus::Locked);
        }
    }

    #[test]
    fn exact_threshold_counts_as_achieved() {
        assert_eq!(
            classify(&def("Silver", 300), Some("Gold"), 300),
            RankStatus::Achieved
        );
    }

    #[test]
    fn current_wins_over_achieved() {
        assert_eq!(
            classify(&def("Gold", 1000), Some("Gold"), 5000),
            RankStatus::Current
        );
    }
}
