pub mod lab;
pub mod layout;
pub mod registry;

pub use lab::{LabConfig, LabSection};
pub use layout::{resolve, LabFrame, LayoutPlan, FALLBACK_TITLE, LABS_INDEX_PATH};
pub use registry::{LabRegistry, LAB_REGISTRY};
