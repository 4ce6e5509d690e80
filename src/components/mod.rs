pub mod copy_feed_url;
pub mod delete_episode_modal;

pub use copy_feed_url::CopyFeedUrlButton;
pub use delete_episode_modal::DeleteEpisodeModal;
