pub mod placeholders;
