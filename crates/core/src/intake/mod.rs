//! Intake module - contracts for the external document/portfolio
//! collaborators.
//!
//! The analysis and upload backends are opaque HTTP endpoints; this module
//! holds their typed wire shapes, a reqwest client, and the request-ticket
//! guard that keeps a superseded upload from clobbering a newer one.

mod intake_client;
mod intake_model;
mod intake_traits;

pub use intake_client::{IntakeClient, RequestTicket, RequestTickets};
pub use intake_model::{
    ConfidenceLevel, DocumentAnalysis, Holding, NigoFinding, NigoStatus, PortfolioPayload,
    PortfolioUpload, Tracked,
};
pub use intake_traits::IntakeClientTrait;
