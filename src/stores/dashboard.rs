use dioxus::prelude::*;
use serde::Deserialize;

use crate::utils::DataState;

/// An episode row as rendered on the dashboard
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EpisodeSummary {
    pub id: i64,
    pub title: String,
    pub release_date: String,
}

/// A feed card as rendered on the dashboard
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeedSummary {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub url_slug: String,
    #[serde(default)]
    pub episodes: Vec<EpisodeSummary>,
}

/// The episode a delete button was clicked for, carried into the
/// confirmation modal. Replaces the old data-attribute triple.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteTarget {
    pub feed_id: i64,
    pub episode_id: i64,
    pub episode_title: String,
}

impl DeleteTarget {
    pub fn for_episode(feed: &FeedSummary, episode: &EpisodeSummary) -> Self {
        Self {
            feed_id: feed.id,
            episode_id: episode.id,
            episode_title: episode.title.clone(),
        }
    }
}

/// Global signal holding the dashboard's feed list
pub static DASHBOARD: GlobalSignal<DataState<Vec<FeedSummary>>> =
    Signal::global(|| DataState::Pending);

/// Fetch the signed-in user's feeds from the backend.
///
/// Updates [`DASHBOARD`] through the load; callers render off the signal
/// rather than the returned result.
pub async fn load_dashboard() -> Result<(), String> {
    *DASHBOARD.write() = DataState::Loading;

    match fetch_feeds().await {
        Ok(feeds) => {
            log::info!("Loaded {} feeds", feeds.len());
            *DASHBOARD.write() = DataState::Loaded(feeds);
            Ok(())
        }
        Err(e) => {
            log::error!("Failed to load dashboard: {}", e);
            *DASHBOARD.write() = DataState::Error(e.clone());
            Err(e)
        }
    }
}

async fn fetch_feeds() -> Result<Vec<FeedSummary>, String> {
    let response = gloo_net::http::Request::get("/api/dashboard")
        .send()
        .await
        .map_err(|e| format!("HTTP request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<Vec<FeedSummary>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_summary_deserialization() {
        let json = r#"[{
            "id": 1,
            "name": "My Show",
            "description": "A show about things",
            "url_slug": "my-show",
            "episodes": [
                {"id": 10, "title": "Pilot", "release_date": "2024-01-01"}
            ]
        }]"#;

        let feeds: Vec<FeedSummary> = serde_json::from_str(json).unwrap();
        assert_eq!(feeds.len(), 1);
        assert_eq!(feeds[0].url_slug, "my-show");
        assert_eq!(feeds[0].episodes[0].title, "Pilot");
    }

    #[test]
    fn test_feed_summary_optional_fields_default() {
        // Feeds with no episodes yet omit both optional fields
        let json = r#"{"id": 2, "name": "Empty", "url_slug": "empty"}"#;
        let feed: FeedSummary = serde_json::from_str(json).unwrap();
        assert_eq!(feed.description, "");
        assert!(feed.episodes.is_empty());
    }

    #[test]
    fn test_feed_summary_rejects_bad_shape() {
        let json = r#"{"id": "not-a-number", "name": "X", "url_slug": "x"}"#;
        assert!(serde_json::from_str::<FeedSummary>(json).is_err());
    }

    #[test]
    fn test_delete_target_carries_triple() {
        let feed = FeedSummary {
            id: 3,
            name: "Show".to_string(),
            description: String::new(),
            url_slug: "show".to_string(),
            episodes: vec![EpisodeSummary {
                id: 17,
                title: "Finale".to_string(),
                release_date: "2024-06-01".to_string(),
            }],
        };

        let target = DeleteTarget::for_episode(&feed, &feed.episodes[0]);
        assert_eq!(target.feed_id, 3);
        assert_eq!(target.episode_id, 17);
        assert_eq!(target.episode_title, "Finale");
    }
}
