//! HTTP client for the intake collaborators.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use log::debug;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;

use super::intake_model::{DocumentAnalysis, PortfolioUpload, Tracked};
use super::intake_traits::IntakeClientTrait;
use crate::errors::{Error, IntakeError, Result};

const ANALYZE_PATH: &str = "/api/textract/analyze";
const UPLOAD_PATH: &str = "/api/portfolio/upload";

/// Ticket identifying one intake request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Monotonic ticket counter.
///
/// Uploads are not cancellable; when the user selects a new file while a
/// request is in flight, the newer request takes a higher ticket and the
/// older response is discarded on arrival instead of overwriting fresher
/// state.
#[derive(Debug, Default)]
pub struct RequestTickets {
    latest: AtomicU64,
}

impl RequestTickets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next ticket, superseding all earlier ones.
    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `ticket` is still the most recently issued.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

/// Client for the document-analysis and portfolio-upload collaborators.
pub struct IntakeClient {
    http: reqwest::Client,
    base_url: String,
    tickets: RequestTickets,
}

impl IntakeClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        IntakeClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            tickets: RequestTickets::new(),
        }
    }

    async fn post_file<T: DeserializeOwned>(
        &self,
        path: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        debug!("Posting {file_name} to {url}");

        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                Error::Intake(IntakeError::RequestFailed {
                    endpoint: path.to_string(),
                    message: e.to_string(),
                })
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Intake(IntakeError::BadStatus {
                endpoint: path.to_string(),
                status: status.as_u16(),
            }));
        }

        response.json::<T>().await.map_err(|e| {
            Error::Intake(IntakeError::DecodeFailed {
                endpoint: path.to_string(),
                message: e.to_string(),
            })
        })
    }
}

#[async_trait]
impl IntakeClientTrait for IntakeClient {
    async fn analyze_document(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Tracked<DocumentAnalysis>> {
        let ticket = self.tickets.issue();
        let value = self.post_file(ANALYZE_PATH, file_name, bytes).await?;
        Ok(Tracked { ticket, value })
    }

    async fn upload_portfolio(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Tracked<PortfolioUpload>> {
        let ticket = self.tickets.issue();
        let value = self.post_file(UPLOAD_PATH, file_name, bytes).await?;
        Ok(Tracked { ticket, value })
    }

    fn is_current(&self, ticket: RequestTicket) -> bool {
        self.tickets.is_current(ticket)
    }
}
