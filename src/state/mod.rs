mod history;
mod session;

pub use history::History;
pub use session::Session;
