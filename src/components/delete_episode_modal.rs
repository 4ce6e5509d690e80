use dioxus::prelude::*;

use crate::stores::dashboard::DeleteTarget;
use crate::utils::episode_delete_path;

/// Confirmation modal shown before deleting an episode.
///
/// The deletion itself is a plain form POST to the backend's delete route;
/// this component only asks for confirmation and aims the form.
#[component]
pub fn DeleteEpisodeModal(target: DeleteTarget, on_cancel: EventHandler<()>) -> Element {
    let action = episode_delete_path(target.feed_id, target.episode_id);

    rsx! {
        // Modal overlay - clicking outside cancels
        div {
            class: "fixed inset-0 bg-black/50 z-50 flex items-center justify-center p-4",
            onclick: move |_| on_cancel.call(()),

            div {
                class: "bg-card border border-border rounded-xl max-w-sm w-full p-6 shadow-xl",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "delete-episode-title",
                onclick: move |e| e.stop_propagation(),

                h2 {
                    class: "text-lg font-bold mb-2",
                    id: "delete-episode-title",
                    "Delete Episode"
                }

                p {
                    class: "text-muted-foreground mb-6",
                    "Are you sure you want to delete \""
                    span { class: "font-semibold", "{target.episode_title}" }
                    "\"? This cannot be undone."
                }

                form {
                    class: "flex gap-3 justify-end",
                    action: "{action}",
                    method: "post",

                    button {
                        r#type: "button",
                        class: "px-4 py-2 rounded-lg hover:bg-accent transition",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }

                    button {
                        r#type: "submit",
                        class: "px-4 py-2 bg-destructive text-destructive-foreground rounded-lg hover:bg-destructive/90 transition",
                        "Delete Episode"
                    }
                }
            }
        }
    }
}
