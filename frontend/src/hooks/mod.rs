pub mod use_customers;
pub mod use_overview;
pub mod use_payments;
