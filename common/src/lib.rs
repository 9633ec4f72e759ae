pub mod devices;
pub mod groups;
pub mod lenient;
pub mod locations;
pub mod lookup;
pub mod placeholders;
pub mod profiles;
pub mod serial;
pub mod username;
pub mod users;
