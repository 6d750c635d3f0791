//! labs web - documentation site for the course labs

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("Starting labs web");
    dioxus::launch(labs_web::App);
}
