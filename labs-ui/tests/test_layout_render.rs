//! Server-side render checks for the labs shell and its views

use dioxus::prelude::*;
use labs_common::LAB_REGISTRY;
use labs_ui::{LabPageView, LabsIndexView, LabsShell};

fn nested_content() -> Element {
    rsx! {
        p { "data-testid": "page-body", "nested page" }
    }
}

fn render_path(path: &str) -> String {
    let path = path.to_string();
    dioxus_ssr::render_element(rsx! {
        LabsShell { path, {nested_content()} }
    })
}

/// Slice of `html` from the first occurrence of `start` up to `end` (or the end).
fn segment<'a>(html: &'a str, start: &str, end: Option<&str>) -> &'a str {
    let from = html
        .find(start)
        .unwrap_or_else(|| panic!("missing {start}"));
    let rest = &html[from..];
    match end.and_then(|e| rest.find(e)) {
        Some(to) => &rest[..to],
        None => rest,
    }
}

/// Section ids linked from a navigation segment, in document order
fn linked_section_ids(nav_html: &str, lab_id: &str) -> Vec<String> {
    let prefix = format!("href=\"/labs/{lab_id}#");
    nav_html
        .match_indices(&prefix)
        .map(|(idx, _)| {
            let rest = &nav_html[idx + prefix.len()..];
            rest[..rest.find('"').unwrap()].to_string()
        })
        .collect()
}

#[test]
fn test_index_path_renders_only_nested_content() {
    let html = render_path("/labs");
    assert_eq!(html, dioxus_ssr::render_element(nested_content()));
    assert!(!html.contains("lab-header"));
    assert!(!html.contains("lab-nav"));
}

#[test]
fn test_lab2_header_and_both_navigations() {
    let html = render_path("/labs/lab2");
    let header = segment(&html, "data-testid=\"lab-header\"", Some("</header>"));
    assert!(header.contains("Lab 2: AI Lifecycle"));
    assert!(header.contains("MLOps Integration"));
    assert!(header.contains("href=\"/labs\""));
    assert!(header.contains("← Labs"));

    let expected: Vec<String> = LAB_REGISTRY
        .get("lab2")
        .unwrap()
        .sections
        .iter()
        .map(|s| s.id.to_string())
        .collect();
    assert_eq!(expected.len(), 18);

    let sidebar = segment(
        &html,
        "data-testid=\"lab-nav-sidebar\"",
        Some("data-testid=\"lab-mobile-nav\""),
    );
    let drawer = segment(&html, "data-testid=\"lab-nav-drawer\"", None);

    let sidebar_ids = linked_section_ids(sidebar, "lab2");
    let drawer_ids = linked_section_ids(drawer, "lab2");
    assert_eq!(sidebar_ids, expected);
    assert_eq!(drawer_ids, expected);

    assert_eq!(html.matches("data-testid=\"lab-nav-link\"").count(), 36);
}

#[test]
fn test_nested_content_inside_main() {
    let html = render_path("/labs/lab1");
    let main = segment(&html, "<main", Some("</main>"));
    assert!(main.contains("nested page"));
    assert_eq!(html.matches("nested page").count(), 1);
}

#[test]
fn test_unknown_lab_falls_back() {
    let html = render_path("/labs/not-a-lab");
    assert!(html.contains(">Lab</h1>"));
    assert!(!html.contains("data-testid=\"lab-nav-link\""));
    // Both navigation placements still render, each with the empty state
    assert!(html.contains("data-testid=\"lab-nav-sidebar\""));
    assert!(html.contains("data-testid=\"lab-nav-drawer\""));
    assert_eq!(html.matches("No sections").count(), 2);
    assert!(html.contains("nested page"));
}

#[test]
fn test_first_section_active_and_drawer_closed() {
    let html = render_path("/labs/lab3");
    assert_eq!(html.matches("aria-current=\"location\"").count(), 2);
    let first_active = segment(&html, "aria-current=\"location\"", Some("</a>"));
    assert!(first_active.contains("Lab Overview"));

    let drawer = segment(&html, "data-testid=\"lab-nav-drawer\"", None);
    assert!(drawer.contains("aria-expanded=\"false\""));
    assert!(drawer.contains("-translate-x-full"));
    assert!(!drawer.contains("lab-nav-backdrop"));
}

#[test]
fn test_render_is_deterministic() {
    for path in ["/labs", "/labs/lab2", "/labs/lab4", "/labs/unknown", "/"] {
        assert_eq!(render_path(path), render_path(path), "path {path}");
    }
}

#[test]
fn test_lab_page_anchors_every_section() {
    let html = dioxus_ssr::render_element(rsx! {
        LabPageView { lab_id: "lab4".to_string() }
    });
    for section in LAB_REGISTRY.get("lab4").unwrap().sections {
        assert!(
            html.contains(&format!("id=\"{}\"", section.id)),
            "missing anchor {}",
            section.id
        );
    }
    assert!(!html.contains("lab-not-found"));
}

#[test]
fn test_lab_page_unknown_lab() {
    let html = dioxus_ssr::render_element(rsx! {
        LabPageView { lab_id: "lab42".to_string() }
    });
    assert!(html.contains("data-testid=\"lab-not-found\""));
    assert!(html.contains("Lab not found"));
    assert!(html.contains("href=\"/labs\""));
}

#[component]
fn IndexHarness() -> Element {
    rsx! {
        LabsIndexView { on_lab_click: |_| {} }
    }
}

#[test]
fn test_index_lists_labs_in_order() {
    let mut dom = VirtualDom::new(IndexHarness);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert_eq!(html.matches("data-testid=\"lab-card\"").count(), 4);
    let positions: Vec<usize> = ["/labs/lab1", "/labs/lab2", "/labs/lab3", "/labs/lab4"]
        .iter()
        .map(|href| html.find(&format!("href=\"{href}\"")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(html.contains("20 sections"));
    assert!(html.contains("19 sections"));
}
