pub mod account_input;
pub mod help_bar;
