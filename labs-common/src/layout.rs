//! Path to layout decision
//!
//! The labs index supplies its own page design, so it is rendered without
//! chrome. Every other path gets the header and navigation, whether or not
//! its last segment names a registered lab.

use crate::lab::{LabConfig, LabSection};
use crate::registry::LabRegistry;

/// Path of the labs index page
pub const LABS_INDEX_PATH: &str = "/labs";

/// Header title shown when the path does not name a registered lab
pub const FALLBACK_TITLE: &str = "Lab";

#[derive(Clone, Debug, PartialEq)]
pub enum LayoutPlan {
    /// Render the nested content as-is
    Bare,
    /// Render header, navigation and content slot
    Framed(LabFrame),
}

/// Everything the framed layout needs for one render
#[derive(Clone, Debug, PartialEq)]
pub struct LabFrame {
    /// Last path segment, `None` when empty
    pub lab_id: Option<String>,
    /// Registry entry for `lab_id`, if any
    pub lab: Option<&'static LabConfig>,
}

impl LabFrame {
    pub fn title(&self) -> &'static str {
        self.lab.map(|lab| lab.title).unwrap_or(FALLBACK_TITLE)
    }

    pub fn sections(&self) -> &'static [LabSection] {
        self.lab.map(|lab| lab.sections).unwrap_or(&[])
    }

    pub fn is_known(&self) -> bool {
        self.lab.is_some()
    }
}

/// Drop query/fragment and a trailing slash.
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    }
}

/// Final segment of the path, taken as a raw lab id.
pub fn current_lab_id(path: &str) -> Option<&str> {
    normalize_path(path)
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
}

pub fn resolve(path: &str, registry: &LabRegistry) -> LayoutPlan {
    if normalize_path(path) == LABS_INDEX_PATH {
        return LayoutPlan::Bare;
    }

    let lab_id = current_lab_id(path);
    LayoutPlan::Framed(LabFrame {
        lab: lab_id.and_then(|id| registry.get(id)),
        lab_id: lab_id.map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::LAB_REGISTRY;

    fn framed(path: &str) -> LabFrame {
        match resolve(path, &LAB_REGISTRY) {
            LayoutPlan::Framed(frame) => frame,
            LayoutPlan::Bare => panic!("{path} should be framed"),
        }
    }

    #[test]
    fn test_index_is_bare() {
        assert_eq!(resolve("/labs", &LAB_REGISTRY), LayoutPlan::Bare);
        assert_eq!(resolve("/labs/", &LAB_REGISTRY), LayoutPlan::Bare);
        assert_eq!(resolve("/labs?tab=all", &LAB_REGISTRY), LayoutPlan::Bare);
    }

    #[test]
    fn test_known_lab() {
        let frame = framed("/labs/lab2");
        assert_eq!(frame.lab_id.as_deref(), Some("lab2"));
        assert!(frame.is_known());
        assert_eq!(frame.title(), "Lab 2: AI Lifecycle & MLOps Integration");
        assert_eq!(frame.sections().len(), 18);
        assert_eq!(frame.sections(), LAB_REGISTRY.get("lab2").unwrap().sections);
    }

    #[test]
    fn test_fragment_and_trailing_slash_ignored() {
        assert_eq!(framed("/labs/lab3/").lab_id.as_deref(), Some("lab3"));
        assert_eq!(framed("/labs/lab3#part-b").lab_id.as_deref(), Some("lab3"));
        assert_eq!(framed("/labs/lab3?x=1#y").title(), "Lab 3: Testing AI Systems");
    }

    #[test]
    fn test_unknown_lab_falls_back() {
        let frame = framed("/labs/lab9");
        assert_eq!(frame.lab_id.as_deref(), Some("lab9"));
        assert!(!frame.is_known());
        assert_eq!(frame.title(), FALLBACK_TITLE);
        assert!(frame.sections().is_empty());
    }

    #[test]
    fn test_only_last_segment_matters() {
        let frame = framed("/somewhere/else/lab1");
        assert_eq!(frame.title(), "Lab 1: Environment Setup & Project Introduction");
        assert!(!framed("/labs/lab1/extra").is_known());
    }

    #[test]
    fn test_empty_segment_has_no_lab_id() {
        for path in ["", "/", "//"] {
            let frame = framed(path);
            assert_eq!(frame.lab_id, None, "path {path:?}");
            assert_eq!(frame.title(), FALLBACK_TITLE);
        }
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/labs/lab1/"), "/labs/lab1");
        assert_eq!(normalize_path("/labs/lab1?a=b"), "/labs/lab1");
        assert_eq!(normalize_path("/labs#top"), "/labs");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(""), "");
    }

    #[test]
    fn test_resolve_is_deterministic() {
        for path in ["/labs", "/labs/lab4", "/labs/nope", ""] {
            assert_eq!(resolve(path, &LAB_REGISTRY), resolve(path, &LAB_REGISTRY));
        }
    }
}
