use crate::Route;
use dioxus::prelude::*;
use labs_ui::lab_header::BACK_LINK_CLASS;
use labs_ui::LabsShell;

/// Wraps every `/labs` route. The index page bypasses the chrome; see `LabsShell`.
#[component]
pub fn LabsLayout() -> Element {
    let path = use_route::<Route>().to_string();

    rsx! {
        LabsShell {
            path,
            back_link: rsx! {
                Link { to: Route::LabsIndex {}, class: BACK_LINK_CLASS.to_string(), "← Labs" }
            },
            Outlet::<Route> {}
        }
    }
}
