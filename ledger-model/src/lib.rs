pub mod accounts;
pub mod chart;
mod error;

pub use crate::accounts::{Account, AccountId, AccountType, AccountTypeId, ActiveFlag};
pub use crate::chart::{Chart, ChartWarning};
pub use crate::error::ChartError;
