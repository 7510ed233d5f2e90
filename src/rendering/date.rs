use chrono::{DateTime, Utc};

/// Format a release timestamp as a long-form en-US date ("May 1, 2024").
///
/// The date is taken in UTC. A timestamp that is not valid RFC 3339 is
/// returned unchanged.
pub fn format_release_date(published_at: &str) -> String {
    match DateTime::parse_from_rfc3339(published_at) {
        Ok(parsed) => parsed
            .with_timezone(&Utc)
            .format("%B %-d, %Y")
            .to_string(),
        Err(e) => {
            tracing::warn!("Unparseable release date '{published_at}': {e}");
            published_at.to_string()
        }
    }
}
