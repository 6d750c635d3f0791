/// One anchorable subsection of a lab.
///
/// `id` doubles as the fragment the navigation links to, so it must be
/// unique within its lab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabSection {
    pub id: &'static str,
    pub title: &'static str,
}

impl LabSection {
    pub const fn new(id: &'static str, title: &'static str) -> Self {
        Self { id, title }
    }

    /// Fragment link target, e.g. `#overview`
    pub fn anchor(&self) -> String {
        format!("#{}", self.id)
    }

    /// Numbered steps ("1. GitHub Setup") sit under the part heading before them.
    pub fn is_step(&self) -> bool {
        let digits = self
            .title
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
        digits > 0 && self.title[digits..].starts_with(". ")
    }
}

/// Title and ordered sections of a single lab
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabConfig {
    pub title: &'static str,
    pub sections: &'static [LabSection],
}

impl LabConfig {
    pub fn section(&self, id: &str) -> Option<&'static LabSection> {
        self.sections.iter().find(|s| s.id == id)
    }
}
