//! # Domain Module
//!
//! Business rules for novenas and their donations.
//!
//! ## Module Organization
//!
//! - **identity**: integer id allocation for new novenas
//! - **novena_store**: the in-memory collection and its lookup-or-create rules
//! - **novena_service**: the shared, locked store instance that saves after
//!   every write
//! - **commands**: inputs accepted by the service
//!
//! ## Business Rules
//!
//! - A novena name identifies at most one novena (exact, case-sensitive match)
//! - Registering a novena that already exists leaves it untouched
//! - Donations are only ever appended, in arrival order
//! - Ids are never reused, including across restarts
//! - Dates and amounts are free text and are not validated

pub mod commands;
pub mod identity;
pub mod novena_service;
pub mod novena_store;

pub use commands::*;
pub use identity::{IdAllocator, IdsExhausted};
pub use novena_service::NovenaService;
pub use novena_store::NovenaStore;
