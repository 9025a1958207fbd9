pub mod customer_edit_modal;
pub mod litre_stepper;
pub mod month_filter;
