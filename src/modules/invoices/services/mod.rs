pub mod totals;

pub use totals::{TotalsPresenter, TotalsSummary};
