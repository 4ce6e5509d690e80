use dioxus::prelude::*;

pub mod dashboard;

use dashboard::Dashboard;

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Dashboard {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-background transition-colors",

            header {
                class: "border-b border-border",
                div {
                    class: "max-w-4xl mx-auto px-6 py-4 flex items-center justify-between",
                    Link {
                        to: Route::Dashboard {},
                        class: "text-xl font-bold",
                        "Podhost"
                    }
                }
            }

            main {
                class: "max-w-4xl mx-auto px-6 py-8",
                Outlet::<Route> {}
            }
        }
    }
}
