mod lab_page;
mod labs_index;
mod layout;
mod not_found;

pub use lab_page::LabPage;
pub use labs_index::LabsIndex;
pub use layout::LabsLayout;
pub use not_found::NotFound;
