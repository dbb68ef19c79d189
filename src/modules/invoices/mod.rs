pub mod models;
pub mod services;

pub use models::{Document, DocumentKind, DocumentStatus, LineItem};
pub use services::{TotalsPresenter, TotalsSummary};
