pub mod document;
pub mod line_item;

pub use document::{Document, DocumentKind, DocumentStatus};
pub use line_item::LineItem;
