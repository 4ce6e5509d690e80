//! URL builders for the dashboard
//!
//! The backend owns these routes; the frontend only constructs them. Keeping
//! the builders pure makes the shapes easy to pin down in tests.

/// Shareable RSS URL for a feed, e.g. `https://example.com/feed/my-show/rss`.
///
/// Tolerates a trailing slash on `origin` so callers can pass
/// `location.origin()` verbatim.
pub fn rss_feed_url(origin: &str, url_slug: &str) -> String {
    format!("{}/feed/{}/rss", origin.trim_end_matches('/'), url_slug)
}

/// Form action for deleting an episode.
///
/// The delete itself happens server-side when the confirmation form posts
/// to this path.
pub fn episode_delete_path(feed_id: i64, episode_id: i64) -> String {
    format!("/feed/{}/episode/{}/delete", feed_id, episode_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rss_feed_url() {
        assert_eq!(
            rss_feed_url("https://example.com", "my-show"),
            "https://example.com/feed/my-show/rss"
        );
    }

    #[test]
    fn test_rss_feed_url_trailing_slash() {
        assert_eq!(
            rss_feed_url("https://example.com/", "my-show"),
            "https://example.com/feed/my-show/rss"
        );
    }

    #[test]
    fn test_episode_delete_path() {
        assert_eq!(episode_delete_path(3, 17), "/feed/3/episode/17/delete");
        assert_eq!(episode_delete_path(0, 0), "/feed/0/episode/0/delete");
    }
}
