mod folder;
mod tables;

pub use folder::WidthFolder;
pub use tables::{CharClass, char_class};
