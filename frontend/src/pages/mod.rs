pub mod customers;
pub mod daily_entry;
pub mod dashboard;
pub mod export;
pub mod forgot_password;
pub mod login;
pub mod overview;
pub mod payments;
pub mod register;
pub mod reset_password;
