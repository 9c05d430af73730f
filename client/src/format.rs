/// Thousands-separated XP amount (9000 -> "9,000").
pub fn fmt_xp(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    let first_group = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - first_group) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Compact duration for settings labels: "45s", "10 min", "1.5h".
pub fn fmt_secs(secs: i64) -> String {
    if secs >= 3600 {
        let hours = secs as f64 / 3600.0;
        if (hours * 10.0).round() as i64 % 10 == 0 {
            format!("{}h", hours.round() as i64)
        } else {
            format!("{hours:.1}h")
        }
    } else if secs >= 60 {
        format!("{} min", (secs as f64 / 60.0).round() as i64)
    } else {
        format!("{secs}s")
    }
}

/// Hours value for the binge labels, trimming a trailing ".0".
pub fn fmt_hours(hours: f64) -> String {
    if (hours * 10.0).round() as i64 % 10 == 0 {
        format!("{}", hours.round() as i64)
    } else {
        format!("{hours:.1}")
    }
}

/// Leaderboard position column: medal glyphs for the podium, plain
/// numbers below it.
pub fn medal(position: usize) -> String {
    match position {
        1 => "🥇".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        other => other.to_string(),
    }
}

/// Extra CSS class for podium positions, empty otherwise.
pub fn tier_class(position: usize) -> &'static str {
    match position {
        1 => "t1",
        2 => "t2",
        3 => "t3",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::{fmt_hours, fmt_secs, fmt_xp, medal, tier_class};

    #[test]
    fn xp_grouping() {
        assert_eq!(fmt_xp(0), "0");
        assert_eq!(fmt_xp(999), "999");
        assert_eq!(fmt_xp(1000), "1,000");
        assert_eq!(fmt_xp(6_000_000), "6,000,000");
        assert_eq!(fmt_xp(152_400), "152,400");
    }

    #[test]
    fn xp_negative_sentinel_still_formats() {
        assert_eq!(fmt_xp(-1), "-1");
    }

    #[test]
    fn seconds_scale_to_minutes_and_hours() {
        assert_eq!(fmt_secs(45), "45s");
        assert_eq!(fmt_secs(60), "1 min");
        assert_eq!(fmt_secs(600), "10 min");
        assert_eq!(fmt_secs(3600), "1h");
        assert_eq!(fmt_secs(5400), "1.5h");
    }

    #[test]
    fn hours_trim_trailing_zero() {
        assert_eq!(fmt_hours(3.0), "3");
        assert_eq!(fmt_hours(2.5), "2.5");
    }

    #[test]
    fn podium_gets_medals_and_tiers() {
        assert_eq!(medal(1), "🥇");
        assert_eq!(medal(3), "🥉");
        assert_eq!(medal(4), "4");
        assert_eq!(tier_class(2), "t2");
        assert_eq!(tier_class(9), "");
    }
}
