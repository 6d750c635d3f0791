//! Shared UI components

pub mod icons;
pub mod lab_header;
pub mod lab_navigation;
pub mod lab_page;
pub mod labs_index;
pub mod labs_layout;
pub mod labs_shell;

pub use icons::{ArrowLeftIcon, ChevronRightIcon, FileTextIcon, MenuIcon, XIcon};
pub use lab_header::LabHeaderView;
pub use lab_navigation::{LabNavigation, LabNavigationView, NavPlacement};
pub use lab_page::{LabNotFoundView, LabPageView};
pub use labs_index::{LabCardView, LabsIndexView};
pub use labs_layout::LabsLayoutView;
pub use labs_shell::LabsShell;
