//! Lab section navigation
//!
//! Two placements render the same section list: a fixed sidebar for wide
//! viewports and an off-canvas drawer for narrow ones. The drawer keeps its
//! links mounted while closed and hides them with a transform.

use crate::components::icons::{MenuIcon, XIcon};
use dioxus::prelude::*;
use labs_common::{LabSection, LABS_INDEX_PATH};

/// Where a navigation instance is mounted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavPlacement {
    Sidebar,
    Drawer,
}

/// Link target for a section, scoped to its lab page when the lab is known.
pub fn section_href(lab_id: Option<&str>, section: &LabSection) -> String {
    match lab_id {
        Some(lab_id) => format!("{LABS_INDEX_PATH}/{lab_id}{}", section.anchor()),
        None => section.anchor(),
    }
}

/// Stateful navigation wrapper
///
/// Owns the active section and the drawer open flag. Mount one instance per
/// placement and key it by lab so a new lab starts from fresh state.
#[component]
pub fn LabNavigation(
    placement: NavPlacement,
    lab_id: Option<String>,
    sections: &'static [LabSection],
) -> Element {
    let mut active_section = use_signal(|| sections.first().map(|s| s.id.to_string()));
    let mut drawer_open = use_signal(|| false);

    rsx! {
        LabNavigationView {
            placement,
            lab_id,
            sections,
            active_section: active_section(),
            is_open: drawer_open(),
            on_select: move |id: String| {
                active_section.set(Some(id));
                drawer_open.set(false);
            },
            on_toggle: move |_| drawer_open.set(!drawer_open()),
            on_close: move |_| drawer_open.set(false),
        }
    }
}

/// Lab navigation view (pure, props-based)
#[component]
pub fn LabNavigationView(
    placement: NavPlacement,
    lab_id: Option<String>,
    sections: &'static [LabSection],
    active_section: Option<String>,
    /// Drawer only
    #[props(default)]
    is_open: bool,
    on_select: EventHandler<String>,
    on_toggle: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let list = rsx! {
        SectionList {
            lab_id,
            sections,
            active_section,
            on_select,
        }
    };

    match placement {
        NavPlacement::Sidebar => rsx! {
            nav {
                class: "w-64",
                "aria-label": "Lab sections",
                "data-testid": "lab-nav-sidebar",
                h2 { class: "px-3 mb-2 text-xs font-semibold text-gray-500 uppercase tracking-wide",
                    "On this page"
                }
                {list}
            }
        },
        NavPlacement::Drawer => {
            let panel_class = if is_open {
                "translate-x-0"
            } else {
                "-translate-x-full"
            };
            let toggle_label = if is_open {
                "Close sections"
            } else {
                "Open sections"
            };
            let hidden = !is_open;

            rsx! {
                div { "data-testid": "lab-nav-drawer",
                    button {
                        class: "fixed bottom-4 right-4 z-50 w-12 h-12 rounded-full bg-gray-900 text-white shadow-lg flex items-center justify-center",
                        "aria-label": toggle_label,
                        "aria-expanded": "{is_open}",
                        onclick: move |_| on_toggle.call(()),
                        if is_open {
                            XIcon { class: "w-5 h-5" }
                        } else {
                            MenuIcon { class: "w-5 h-5" }
                        }
                    }

                    if is_open {
                        div {
                            class: "fixed inset-0 z-40 bg-black/30",
                            "data-testid": "lab-nav-backdrop",
                            onclick: move |_| on_close.call(()),
                        }
                    }

                    nav {
                        class: "fixed inset-y-0 left-0 z-50 w-72 bg-white shadow-xl overflow-y-auto transition-transform {panel_class}",
                        "aria-label": "Lab sections",
                        "aria-hidden": "{hidden}",
                        div { class: "flex items-center justify-between px-3 py-3 border-b border-gray-200",
                            h2 { class: "text-sm font-semibold text-gray-900", "Sections" }
                            button {
                                class: "text-gray-500 hover:text-gray-900",
                                "aria-label": "Close sections",
                                onclick: move |_| on_close.call(()),
                                XIcon { class: "w-5 h-5" }
                            }
                        }
                        div { class: "py-2", {list} }
                    }
                }
            }
        }
    }
}

#[component]
fn SectionList(
    lab_id: Option<String>,
    sections: &'static [LabSection],
    active_section: Option<String>,
    on_select: EventHandler<String>,
) -> Element {
    if sections.is_empty() {
        return rsx! {
            p { class: "px-3 py-2 text-sm text-gray-400", "No sections" }
        };
    }

    rsx! {
        ul { class: "space-y-0.5",
            for section in sections.iter() {
                SectionLink {
                    key: "{section.id}",
                    href: section_href(lab_id.as_deref(), section),
                    section: *section,
                    is_active: active_section.as_deref() == Some(section.id),
                    on_select,
                }
            }
        }
    }
}

#[component]
fn SectionLink(
    href: String,
    section: LabSection,
    is_active: bool,
    on_select: EventHandler<String>,
) -> Element {
    let indent = if section.is_step() {
        "pl-6"
    } else {
        "pl-3 font-medium"
    };
    let state = if is_active {
        "bg-gray-100 text-gray-900"
    } else {
        "text-gray-600 hover:text-gray-900 hover:bg-gray-50"
    };
    let aria_current = if is_active { "location" } else { "false" };

    rsx! {
        li {
            a {
                class: "block pr-3 py-1.5 text-sm rounded-md transition-colors {indent} {state}",
                href: "{href}",
                "aria-current": aria_current,
                "data-testid": "lab-nav-link",
                onclick: move |_| on_select.call(section.id.to_string()),
                "{section.title}"
            }
        }
    }
}
