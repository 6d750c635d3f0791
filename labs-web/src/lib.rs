pub mod pages;

use dioxus::prelude::*;
use pages::{LabPage, LabsIndex, LabsLayout, NotFound};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(LabsLayout)]
    #[route("/labs")]
    LabsIndex {},
    #[route("/labs/:lab_id")]
    LabPage { lab_id: String },
    #[end_layout]
    #[redirect("/", || Route::LabsIndex {})]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
