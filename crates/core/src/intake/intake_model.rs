//! Wire models for the intake collaborators.
//!
//! Shapes are owned by the external backends; unknown enum values degrade
//! to `Unknown` instead of failing the whole response.

use serde::{Deserialize, Serialize};

use super::intake_client::RequestTicket;

/// Compliance status of an analyzed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum NigoStatus {
    Clean,
    /// Not In Good Order - the document has blocking findings.
    Nigo,
    Review,
    #[serde(other)]
    #[default]
    Unknown,
}

/// Human-in-the-loop confidence banding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConfidenceLevel {
    Green,
    Yellow,
    Red,
    #[serde(other)]
    #[default]
    Unknown,
}

/// One compliance finding on an analyzed document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NigoFinding {
    #[serde(default)]
    pub field: Option<String>,
    #[serde(rename = "type", default)]
    pub finding_type: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub confidence: Option<String>,
}

/// Response of the document-analysis collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DocumentAnalysis {
    #[serde(default)]
    pub nigo_status: NigoStatus,
    #[serde(default)]
    pub nigo_errors: Vec<NigoFinding>,
    #[serde(default)]
    pub confidence_score: f64,
    #[serde(default)]
    pub confidence_level: ConfidenceLevel,
    #[serde(default)]
    pub extracted_text: String,
}

/// One holding reported by the portfolio-upload collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    #[serde(rename = "type", default)]
    pub holding_type: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub asset_classes: Vec<String>,
}

/// Extracted portfolio content of an uploaded document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PortfolioPayload {
    #[serde(default)]
    pub holdings: Vec<Holding>,
    #[serde(default)]
    pub source_document: Option<String>,
}

/// Response of the portfolio-upload collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PortfolioUpload {
    #[serde(default)]
    pub portfolio_data: PortfolioPayload,
    /// Opaque; goal cards generated server-side keep whatever shape the
    /// backend gave them.
    #[serde(default)]
    pub goal_cards: Option<serde_json::Value>,
    #[serde(default)]
    pub case_id: Option<String>,
    #[serde(default)]
    pub s3_key: Option<String>,
}

/// A collaborator response bound to the request ticket that produced it.
///
/// Callers check the ticket against the client before applying the value,
/// discarding responses that a newer request has superseded.
#[derive(Debug, Clone, PartialEq)]
pub struct Tracked<T> {
    pub ticket: RequestTicket,
    pub value: T,
}
