//! Compact solar-conditions bulletin for POCSAG pagers.

use crate::source::SolarData;

/// POCSAG messages are capped at 80 characters.
pub const MAX_POCSAG_LEN: usize = 80;

/// Build the `KEY:value` summary message. Empty feed fields are
/// skipped; the result is truncated to `max_len` and right-trimmed.
/// Returns an empty string when the feed had nothing usable.
pub fn build_message(data: &SolarData, max_len: usize) -> String {
    let fields = [
        ("SFI", &data.solarflux),
        ("SN", &data.sunspots),
        ("A", &data.aindex),
        ("K", &data.kindex),
        ("X", &data.xray),
        ("Noise", &data.signalnoise),
        ("Geomag", &data.geomagfield),
    ];

    let parts: Vec<String> = fields
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(key, value)| format!("{key}:{}", value.trim()))
        .collect();

    let message = parts.join(" ");
    let truncated: String = message.chars().take(max_len).collect();
    truncated.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SolarData {
        SolarData {
            solarflux: "142".into(),
            sunspots: "96".into(),
            aindex: "8".into(),
            kindex: "2".into(),
            xray: " M1.2 ".into(),
            signalnoise: "S1-S2".into(),
            geomagfield: "QUIET".into(),
        }
    }

    #[test]
    fn joins_fields_in_feed_order() {
        assert_eq!(
            build_message(&sample(), MAX_POCSAG_LEN),
            "SFI:142 SN:96 A:8 K:2 X:M1.2 Noise:S1-S2 Geomag:QUIET"
        );
    }

    #[test]
    fn skips_empty_fields() {
        let data = SolarData {
            sunspots: String::new(),
            signalnoise: "  ".into(),
            ..sample()
        };
        assert_eq!(
            build_message(&data, MAX_POCSAG_LEN),
            "SFI:142 A:8 K:2 X:M1.2 Geomag:QUIET"
        );
    }

    #[test]
    fn truncates_and_trims() {
        let message = build_message(&sample(), 14);
        assert_eq!(message, "SFI:142 SN:96");
        assert!(message.len() <= 14);
    }

    #[test]
    fn empty_feed_builds_empty_message() {
        assert_eq!(build_message(&SolarData::default(), MAX_POCSAG_LEN), "");
    }
}
