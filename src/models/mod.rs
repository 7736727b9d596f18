pub mod form;
pub mod quote;
