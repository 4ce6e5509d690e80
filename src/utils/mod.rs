// Utility functions
// Helper functions for common operations

pub mod clipboard;
pub mod data_state;
pub mod urls;

pub use data_state::DataState;
pub use urls::{episode_delete_path, rss_feed_url};
