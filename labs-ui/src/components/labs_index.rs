//! Labs index page - lists every registered lab as a card

use crate::components::icons::{ChevronRightIcon, FileTextIcon};
use dioxus::prelude::*;
use labs_common::{LAB_REGISTRY, LABS_INDEX_PATH};

/// Full-page index of all labs, in registry order
///
/// Card clicks go through `on_lab_click` so the caller decides how to
/// navigate; the cards still carry real hrefs.
#[component]
pub fn LabsIndexView(on_lab_click: EventHandler<String>) -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-50",
            div { class: "max-w-4xl mx-auto px-4 py-10 sm:py-16",
                h1 { class: "text-2xl sm:text-3xl font-bold text-gray-900", "Labs" }
                p { class: "mt-2 text-gray-600",
                    "Hands-on walkthroughs, one lab per week. Work through them in order."
                }
                div { class: "mt-8 grid gap-4 sm:grid-cols-2", "data-testid": "labs-index",
                    for (lab_id, lab) in LAB_REGISTRY.iter() {
                        LabCardView {
                            key: "{lab_id}",
                            lab_id: lab_id.to_string(),
                            title: lab.title.to_string(),
                            section_count: lab.sections.len(),
                            on_click: on_lab_click,
                        }
                    }
                }
            }
        }
    }
}

/// Individual lab card (pure view with callback)
#[component]
pub fn LabCardView(
    lab_id: String,
    title: String,
    section_count: usize,
    on_click: EventHandler<String>,
) -> Element {
    let href = format!("{LABS_INDEX_PATH}/{lab_id}");
    let noun = if section_count == 1 {
        "section"
    } else {
        "sections"
    };

    rsx! {
        a {
            class: "group block p-5 bg-white rounded-lg border border-gray-200 hover:border-gray-400 hover:shadow-md transition",
            href: "{href}",
            "data-testid": "lab-card",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                on_click.call(lab_id.clone());
            },
            div { class: "flex items-start justify-between gap-3",
                div {
                    h2 { class: "font-semibold text-gray-900", "{title}" }
                    div { class: "mt-2 flex items-center gap-1.5 text-sm text-gray-500",
                        FileTextIcon { class: "w-4 h-4" }
                        "{section_count} {noun}"
                    }
                }
                ChevronRightIcon { class: "w-5 h-5 text-gray-400 group-hover:text-gray-700 transition-colors" }
            }
        }
    }
}
