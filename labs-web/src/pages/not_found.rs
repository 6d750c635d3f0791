use crate::Route;
use dioxus::prelude::*;
use tracing::debug;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    debug!(%path, "No route matched");

    rsx! {
        document::Title { "Page not found" }
        div { class: "min-h-screen flex items-center justify-center bg-gray-50",
            div { class: "text-center",
                h1 { class: "text-2xl font-semibold text-gray-900", "Page not found" }
                p { class: "mt-2 text-gray-600", "Nothing lives at {path}." }
                Link {
                    to: Route::LabsIndex {},
                    class: "mt-6 inline-block text-sm text-gray-600 hover:text-gray-900".to_string(),
                    "Back to labs"
                }
            }
        }
    }
}
