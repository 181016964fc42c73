/// Formats an episode duration for a pager message.
///
/// Three non-overlapping tiers, integer division throughout:
///
/// - under an hour: `"42 min"`
/// - under a day: `"3h 7min"`
/// - otherwise: `"2j 5h"` (j for jours)
pub fn format_duration(seconds: u64) -> String {
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if minutes < 60 {
        format!("{minutes} min")
    } else if hours < 24 {
        format!("{hours}h {}min", minutes % 60)
    } else {
        format!("{days}j {}h", hours % 24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, "0 min" ; "zero")]
    #[test_case(59, "0 min" ; "sub minute truncates")]
    #[test_case(5 * 60, "5 min" ; "minutes")]
    #[test_case(59 * 60, "59 min" ; "last minute tier value")]
    #[test_case(59 * 60 + 59, "59 min" ; "tier boundary from below")]
    #[test_case(60 * 60, "1h 0min" ; "exactly one hour")]
    #[test_case(3 * 3600 + 7 * 60, "3h 7min" ; "hours and minutes")]
    #[test_case(23 * 3600 + 59 * 60, "23h 59min" ; "last hour tier value")]
    #[test_case(24 * 3600, "1j 0h" ; "exactly one day")]
    #[test_case(2 * 86400 + 5 * 3600, "2j 5h" ; "days and hours")]
    fn formats(seconds: u64, expected: &str) {
        assert_eq!(format_duration(seconds), expected);
    }
}
