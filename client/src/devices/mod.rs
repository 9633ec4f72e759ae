pub mod details;
pub mod groups;
pub mod list;
