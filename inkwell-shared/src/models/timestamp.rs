use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// UTC timestamp newtype used by every dated model.
///
/// Serializes as the RFC 3339 form the backend emits.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    /// Render the timestamp the way article bylines display it,
    /// e.g. `Mar 4, 2026, 10:52 AM`.
    #[must_use]
    pub fn format_long(&self) -> String {
        self.0.format("%b %-d, %Y, %-I:%M %p").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_serializes_transparently() {
        let ts = Timestamp(Utc.with_ymd_and_hms(2026, 3, 4, 10, 52, 0).unwrap());
        let json = serde_json::to_string(&ts).unwrap();
        assert!(json.starts_with("\"2026-03-04T10:52:00"));

        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }

    #[test]
    fn timestamp_format_long() {
        let ts = Timestamp(Utc.with_ymd_and_hms(2026, 3, 4, 10, 52, 0).unwrap());
        assert_eq!(ts.format_long(), "Mar 4, 2026, 10:52 AM");
    }

    #[test]
    fn timestamp_ordering() {
        let earlier = Timestamp(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        let later = Timestamp(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
        assert!(earlier < later);
    }
}
