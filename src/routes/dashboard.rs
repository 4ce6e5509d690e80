use dioxus::prelude::*;

use crate::components::{CopyFeedUrlButton, DeleteEpisodeModal};
use crate::stores::dashboard::{self, DeleteTarget, DASHBOARD};
use crate::utils::rss_feed_url;

/// Origin of the page we are served from, used to build shareable RSS URLs.
fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

#[component]
pub fn Dashboard() -> Element {
    // Which episode a delete button was clicked for; None means the
    // confirmation modal is not shown at all
    let mut delete_target = use_signal(|| None::<DeleteTarget>);

    // Load feeds on mount
    use_effect(move || {
        spawn(async move {
            let _ = dashboard::load_dashboard().await;
        });
    });

    let state = DASHBOARD.read();
    let origin = page_origin();

    rsx! {
        h1 {
            class: "text-2xl font-bold mb-6",
            "Your Feeds"
        }

        if state.is_loading() {
            p {
                class: "text-muted-foreground",
                "Loading feeds..."
            }
        }

        if let Some(msg) = state.error() {
            p {
                class: "text-destructive",
                "Could not load your feeds: {msg}"
            }
        }

        if let Some(feeds) = state.data() {
            if feeds.is_empty() {
                p {
                    class: "text-muted-foreground",
                    "You don't have any feeds yet."
                }
            }

            div {
                class: "space-y-6",
                for feed in feeds.iter() {
                    div {
                        key: "{feed.id}",
                        class: "border border-border rounded-xl p-6",

                        div {
                            class: "flex items-center justify-between mb-2",
                            h2 {
                                class: "text-lg font-semibold",
                                "{feed.name}"
                            }
                            CopyFeedUrlButton {
                                feed_url: rss_feed_url(&origin, &feed.url_slug),
                            }
                        }

                        if !feed.description.is_empty() {
                            p {
                                class: "text-sm text-muted-foreground mb-4",
                                "{feed.description}"
                            }
                        }

                        if feed.episodes.is_empty() {
                            p {
                                class: "text-sm text-muted-foreground",
                                "No episodes yet."
                            }
                        }

                        ul {
                            class: "divide-y divide-border",
                            for episode in feed.episodes.iter() {
                                li {
                                    key: "{episode.id}",
                                    class: "py-3 flex items-center justify-between",

                                    div {
                                        p { class: "font-medium", "{episode.title}" }
                                        p {
                                            class: "text-sm text-muted-foreground",
                                            "{episode.release_date}"
                                        }
                                    }

                                    {
                                        let target = DeleteTarget::for_episode(feed, episode);
                                        rsx! {
                                            button {
                                                class: "px-3 py-1.5 text-sm text-destructive border border-destructive/50 rounded-lg hover:bg-destructive/10 transition",
                                                onclick: move |_| delete_target.set(Some(target.clone())),
                                                "Delete"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(target) = delete_target.read().clone() {
            DeleteEpisodeModal {
                target,
                on_cancel: move |_| delete_target.set(None),
            }
        }
    }
}
