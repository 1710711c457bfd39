use async_trait::async_trait;

use crate::errors::Result;
use crate::intake::{DocumentAnalysis, PortfolioUpload, RequestTicket, Tracked};

/// Trait for the intake collaborator client.
#[async_trait]
pub trait IntakeClientTrait: Send + Sync {
    /// Sends a document to the analysis collaborator.
    async fn analyze_document(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Tracked<DocumentAnalysis>>;

    /// Sends a portfolio document to the upload collaborator.
    async fn upload_portfolio(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Tracked<PortfolioUpload>>;

    /// Whether no newer intake request has been started since `ticket` was
    /// issued. Responses failing this check must be discarded.
    fn is_current(&self, ticket: RequestTicket) -> bool;
}
