//! Labs layout view component
//!
//! Provides the page structure with slots for the header, the desktop
//! sidebar, the mobile navigation and the main content.

use dioxus::prelude::*;

/// Labs layout view (pure, props-based)
#[component]
pub fn LabsLayoutView(
    /// Main content (typically the router outlet)
    children: Element,
    /// Sticky header at the top
    header: Element,
    /// Navigation shown at the `lg` breakpoint and above
    sidebar: Element,
    /// Navigation shown below the `lg` breakpoint
    mobile_nav: Element,
) -> Element {
    rsx! {
        div { class: "min-h-screen bg-white",
            {header}

            div { class: "flex",
                div { class: "w-full lg:max-w-7xl lg:mx-auto lg:px-8 lg:py-6 lg:flex lg:gap-6",
                    // Desktop sidebar, scrolls independently of the page
                    div {
                        class: "hidden lg:block lg:flex-shrink-0",
                        "data-testid": "lab-sidebar",
                        div { class: "sticky top-24 max-h-[calc(100vh-7rem)] overflow-y-auto",
                            {sidebar}
                        }
                    }

                    main { class: "flex-1 lg:max-w-4xl px-3 sm:px-4 lg:px-0 py-4 lg:py-0",
                        div { class: "pb-16 lg:pb-20", {children} }
                    }
                }
            }

            div { class: "lg:hidden", "data-testid": "lab-mobile-nav", {mobile_nav} }
        }
    }
}
