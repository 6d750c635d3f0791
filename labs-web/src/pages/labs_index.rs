use crate::Route;
use dioxus::prelude::*;
use labs_ui::LabsIndexView;

#[component]
pub fn LabsIndex() -> Element {
    rsx! {
        LabsIndexView {
            on_lab_click: move |lab_id: String| {
                navigator().push(Route::LabPage { lab_id });
            },
        }
    }
}
