// Portfolio Models
// Data structures for the application

mod document;
mod notification;
mod project;
mod settings;

pub use document::*;
pub use notification::*;
pub use project::*;
pub use settings::*;
