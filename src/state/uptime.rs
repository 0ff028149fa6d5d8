//! Human-readable uptime formatting

/// Formats uptime seconds as `1d 2h 3m 4s`
///
/// Zero-valued day/hour/minute units are left out; seconds are always shown.
pub fn format_uptime(seconds: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total = seconds.max(0.0) as u64;

    let days = total / 86400;
    let hours = (total % 86400) / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    let mut parts = Vec::with_capacity(4);
    if days > 0 {
        parts.push(format!("{days}d"));
    }
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes}m"));
    }
    parts.push(format!("{secs}s"));

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(0.0), "0s");
        assert_eq!(format_uptime(59.9), "59s");
        assert_eq!(format_uptime(65.0), "1m 5s");
        assert_eq!(format_uptime(3600.0), "1h 0s");
        assert_eq!(format_uptime(93784.0), "1d 2h 3m 4s");
        assert_eq!(format_uptime(86401.0), "1d 1s");
    }

    #[test]
    fn test_format_uptime_negative_clamps_to_zero() {
        assert_eq!(format_uptime(-5.0), "0s");
    }
}
