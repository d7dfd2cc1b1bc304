mod chart;
mod input;
mod message;
mod table;
mod view;

pub use view::ChatPage;
