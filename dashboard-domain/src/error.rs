use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid risk level '{0}', expected High, Medium or Low")]
    InvalidRiskLevel(String),
    #[error("invalid average basis '{0}', expected score or amount")]
    InvalidAverageBasis(String),
}
