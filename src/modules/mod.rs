pub mod invoices;
pub mod subscriptions;
pub mod taxes;
