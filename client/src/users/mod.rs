pub mod create;
pub mod groups;
pub mod list;
pub mod similar;
