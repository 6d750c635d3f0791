//! Route-driven labs shell
//!
//! Turns the current path into a layout: the labs index passes its content
//! through untouched, every other path gets the header plus both navigation
//! placements fed from the static registry.

use crate::components::lab_header::LabHeaderView;
use crate::components::lab_navigation::{LabNavigation, NavPlacement};
use crate::components::labs_layout::LabsLayoutView;
use dioxus::prelude::*;
use labs_common::{resolve, LayoutPlan, LAB_REGISTRY};
use tracing::debug;

#[component]
pub fn LabsShell(
    /// Current request path, e.g. `/labs/lab2`
    path: String,
    /// Back link override for the header (router link in the web app)
    #[props(default)]
    back_link: Option<Element>,
    /// Nested page content
    children: Element,
) -> Element {
    let frame = match resolve(&path, &LAB_REGISTRY) {
        LayoutPlan::Bare => return children,
        LayoutPlan::Framed(frame) => frame,
    };

    if !frame.is_known() {
        debug!(%path, lab_id = ?frame.lab_id, "No lab registered for path, using fallback");
    }

    let sections = frame.sections();
    let nav_key = frame.lab_id.clone().unwrap_or_default();

    rsx! {
        LabsLayoutView {
            header: rsx! {
                LabHeaderView { title: frame.title().to_string(), back_link }
            },
            sidebar: rsx! {
                LabNavigation {
                    key: "sidebar-{nav_key}",
                    placement: NavPlacement::Sidebar,
                    lab_id: frame.lab_id.clone(),
                    sections,
                }
            },
            mobile_nav: rsx! {
                LabNavigation {
                    key: "drawer-{nav_key}",
                    placement: NavPlacement::Drawer,
                    lab_id: frame.lab_id.clone(),
                    sections,
                }
            },
            {children}
        }
    }
}
