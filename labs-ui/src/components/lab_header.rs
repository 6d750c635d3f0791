//! Sticky lab header with the back link and lab title

use dioxus::prelude::*;
use labs_common::LABS_INDEX_PATH;

pub const BACK_LINK_CLASS: &str =
    "inline-block text-xs sm:text-sm text-gray-600 hover:text-gray-900";

/// Lab header view (pure, props-based)
///
/// The back link defaults to a plain anchor to the labs index. Routed apps
/// pass their own router link so navigation stays client-side.
#[component]
pub fn LabHeaderView(
    title: String,
    #[props(default)] back_link: Option<Element>,
) -> Element {
    rsx! {
        header {
            class: "border-b border-gray-200 bg-white sticky top-0 z-30",
            "data-testid": "lab-header",
            div { class: "max-w-7xl mx-auto px-3 sm:px-4 lg:px-8",
                div { class: "py-3 sm:py-4 space-y-1 sm:space-y-2",
                    if let Some(link) = back_link {
                        {link}
                    } else {
                        a { class: BACK_LINK_CLASS, href: LABS_INDEX_PATH, "← Labs" }
                    }
                    h1 { class: "text-base sm:text-lg lg:text-xl font-semibold text-gray-900",
                        "{title}"
                    }
                }
            }
        }
    }
}
