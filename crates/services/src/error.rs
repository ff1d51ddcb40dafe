//! Shared error types for the services crate.
//!
//! Display strings are user-facing and stay in French; the panels render
//! them verbatim.

use thiserror::Error;

/// Errors emitted by `GenerationService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerationError {
    #[error("le serveur a renvoyé une réponse vide")]
    EmptyResponse,
    #[error("Erreur serveur: {}", .0.as_u16())]
    HttpStatus(reqwest::StatusCode),
    /// Application-level error embedded in a 2xx response body.
    #[error("{0}")]
    Server(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `RelayService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RelayError {
    #[error("L'URL ne semble pas pointer vers un fichier PDF")]
    NotPdf,
    #[error("URL invalide. Doit commencer par http:// ou https://")]
    InvalidUrl,
    #[error("Erreur HTTP: {}", .0.as_u16())]
    Http(reqwest::StatusCode),
    #[error("{0}")]
    Server(String),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
