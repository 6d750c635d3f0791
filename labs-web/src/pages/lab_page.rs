use crate::Route;
use dioxus::prelude::*;
use labs_common::LAB_REGISTRY;
use labs_ui::LabPageView;

#[component]
pub fn LabPage(lab_id: String) -> Element {
    let title = LAB_REGISTRY
        .get(&lab_id)
        .map(|lab| lab.title)
        .unwrap_or("Lab not found");

    rsx! {
        document::Title { "{title}" }
        LabPageView {
            lab_id,
            back_link: rsx! {
                Link {
                    to: Route::LabsIndex {},
                    class: "text-sm text-gray-600 hover:text-gray-900".to_string(),
                    "All labs"
                }
            },
        }
    }
}
