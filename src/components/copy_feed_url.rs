use dioxus::prelude::*;

use crate::utils::clipboard::copy_to_clipboard;

/// A pending label restore may only fire if no later copy superseded it.
///
/// Generations wrap; the check only needs equality, not ordering.
fn restore_is_current(latest: u32, scheduled: u32) -> bool {
    latest == scheduled
}

/// Button that copies a feed's RSS URL to the clipboard.
///
/// Shows "Copied!" for 2 seconds after a successful write, then restores the
/// label. Each click bumps a generation counter and the restore task only
/// fires if it is still the latest one, so rapid re-clicks cannot revert the
/// label early.
#[component]
pub fn CopyFeedUrlButton(feed_url: String) -> Element {
    let mut copied = use_signal(|| false);
    let mut restore_gen = use_signal(|| 0u32);

    let handle_copy = move |_| {
        let url = feed_url.clone();
        spawn(async move {
            match copy_to_clipboard(&url).await {
                Ok(_) => {
                    copied.set(true);
                    let my_gen = restore_gen.read().wrapping_add(1);
                    restore_gen.set(my_gen);
                    spawn(async move {
                        gloo_timers::future::TimeoutFuture::new(2000).await;
                        if restore_is_current(*restore_gen.read(), my_gen) {
                            copied.set(false);
                        }
                    });
                }
                Err(e) => {
                    // No user-visible error surface for clipboard failures
                    log::error!("Failed to copy feed URL: {}", e);
                }
            }
        });
    };

    rsx! {
        button {
            class: "px-3 py-1.5 text-sm border border-border rounded-lg hover:bg-accent transition",
            onclick: handle_copy,
            if *copied.read() { "Copied!" } else { "Copy RSS URL" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_restore_reverts() {
        // Single click: its own restore is the latest one and may fire
        let my_gen = 0u32.wrapping_add(1);
        assert!(restore_is_current(my_gen, my_gen));
    }

    #[test]
    fn test_superseded_restore_backs_off() {
        // Two clicks inside the 2-second window: the first click's restore
        // sees the bumped generation and must not revert the label early
        let first_gen = 1u32;
        let latest = first_gen.wrapping_add(1);
        assert!(!restore_is_current(latest, first_gen));
        // Only the second click's restore may revert
        assert!(restore_is_current(latest, latest));
    }

    #[test]
    fn test_generation_wraps_without_panic() {
        let next = u32::MAX.wrapping_add(1);
        assert_eq!(next, 0);
        assert!(!restore_is_current(next, u32::MAX));
    }
}
