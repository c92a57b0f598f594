use std::path::PathBuf;
use thiserror::Error;

use crate::accounts::{AccountId, AccountTypeId};

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Could not read chart file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate account id {0}")]
    DuplicateAccountId(AccountId),

    #[error("Duplicate account type id {0}")]
    DuplicateAccountTypeId(AccountTypeId),
}
