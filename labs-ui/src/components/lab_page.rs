//! Lab page body: one anchored block per section

use crate::components::icons::ArrowLeftIcon;
use dioxus::prelude::*;
use labs_common::{LabSection, LAB_REGISTRY, LABS_INDEX_PATH};

/// Body of a lab page. Unknown ids render the not-found notice.
#[component]
pub fn LabPageView(
    lab_id: String,
    #[props(default)] back_link: Option<Element>,
) -> Element {
    let Some(lab) = LAB_REGISTRY.get(&lab_id) else {
        return rsx! {
            LabNotFoundView { lab_id, back_link }
        };
    };

    rsx! {
        article { class: "space-y-10", "data-testid": "lab-page",
            for section in lab.sections.iter() {
                LabSectionBlock { key: "{section.id}", section: *section }
            }
        }
    }
}

#[component]
fn LabSectionBlock(section: LabSection) -> Element {
    if section.is_step() {
        rsx! {
            section { id: "{section.id}", class: "scroll-mt-28",
                h3 { class: "text-lg font-semibold text-gray-900", "{section.title}" }
            }
        }
    } else {
        rsx! {
            section {
                id: "{section.id}",
                class: "scroll-mt-28 pt-2 border-t border-gray-100 first:border-t-0",
                h2 { class: "text-xl sm:text-2xl font-bold text-gray-900", "{section.title}" }
            }
        }
    }
}

/// Shown when the path names a lab that is not registered
#[component]
pub fn LabNotFoundView(
    lab_id: String,
    #[props(default)] back_link: Option<Element>,
) -> Element {
    rsx! {
        div { class: "py-16 text-center", "data-testid": "lab-not-found",
            h2 { class: "text-xl font-semibold text-gray-900", "Lab not found" }
            p { class: "mt-2 text-gray-600", "There is no lab called \"{lab_id}\"." }
            div { class: "mt-6",
                if let Some(link) = back_link {
                    {link}
                } else {
                    a {
                        class: "inline-flex items-center gap-2 text-sm text-gray-600 hover:text-gray-900",
                        href: LABS_INDEX_PATH,
                        ArrowLeftIcon { class: "w-4 h-4" }
                        "All labs"
                    }
                }
            }
        }
    }
}
