use chrono::{DateTime, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Data/hora do backend no formato brasileiro. Valores que não parseiam
/// são exibidos como vieram.
pub fn format_timestamp(raw: &str) -> String {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.naive_local().format(DISPLAY_FORMAT).to_string();
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format(DISPLAY_FORMAT).to_string();
        }
    }

    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_common_backend_shapes() {
        assert_eq!(format_timestamp("2024-03-01T08:05:00"), "01/03/2024 08:05");
        assert_eq!(format_timestamp("2024-03-01 17:30:12.123"), "01/03/2024 17:30");
        assert_eq!(format_timestamp("2024-03-01T08:05:00-03:00"), "01/03/2024 08:05");
    }

    #[test]
    fn unknown_shapes_pass_through() {
        assert_eq!(format_timestamp("ontem"), "ontem");
    }
}
