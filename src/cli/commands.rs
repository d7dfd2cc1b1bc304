pub mod ask;
pub mod chat;
pub mod render;

pub use ask::ask;
pub use chat::chat;
pub use render::render;
