//! Domain-level command types.
//!
//! The REST layer maps the public DTOs of the `shared` crate to these.

use shared::{Novena, RegisterDonationRequest, RegisterNovenaRequest};

/// Input for registering a novena
#[derive(Debug, Clone)]
pub struct RegisterNovenaCommand {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
}

impl From<RegisterNovenaRequest> for RegisterNovenaCommand {
    fn from(request: RegisterNovenaRequest) -> Self {
        Self {
            name: request.novena,
            start_date: request.dateinicio,
            end_date: request.datefim,
        }
    }
}

/// Input for registering a donation; the novena is created if unknown
#[derive(Debug, Clone)]
pub struct RegisterDonationCommand {
    pub novena_name: String,
    pub contributor_name: String,
    pub amount: String,
    pub date: String,
}

impl From<RegisterDonationRequest> for RegisterDonationCommand {
    fn from(request: RegisterDonationRequest) -> Self {
        Self {
            novena_name: request.novena,
            contributor_name: request.name,
            amount: request.donation,
            date: request.date,
        }
    }
}

/// Result of registering a novena
#[derive(Debug, Clone)]
pub struct RegisterNovenaResult {
    /// The novena now stored under the requested name
    pub novena: Novena,
    /// False when the name already existed and nothing changed
    pub created: bool,
}
