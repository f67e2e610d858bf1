pub mod expected;
pub mod surplus;
pub mod timeline;
