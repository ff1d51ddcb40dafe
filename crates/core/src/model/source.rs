use thiserror::Error;
use url::Url;

/// A PDF picked from the local filesystem, held in memory for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// The source actually used for a generation request.
///
/// When both a file and a URL are present the file wins, but callers still
/// transmit both parts; the server applies the same precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfSource<'a> {
    File(&'a PdfFile),
    Url(&'a str),
}

/// The user's current PDF selection: an optional local file plus a URL field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionInput {
    pub file: Option<PdfFile>,
    pub url: String,
}

impl SessionInput {
    /// The URL field with surrounding whitespace stripped, if non-empty.
    #[must_use]
    pub fn trimmed_url(&self) -> Option<&str> {
        let url = self.url.trim();
        if url.is_empty() { None } else { Some(url) }
    }

    /// Resolve the effective source, or fail when nothing is selected.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Missing` when no file is selected and the URL
    /// field is blank.
    pub fn source(&self) -> Result<PdfSource<'_>, SourceError> {
        if let Some(file) = self.file.as_ref() {
            return Ok(PdfSource::File(file));
        }
        self.trimmed_url()
            .map(PdfSource::Url)
            .ok_or(SourceError::Missing)
    }

    /// Convenience check used before starting any generation flow.
    ///
    /// # Errors
    ///
    /// Same as [`SessionInput::source`].
    pub fn validate(&self) -> Result<(), SourceError> {
        self.source().map(|_| ())
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SourceError {
    #[error("Veuillez sélectionner un fichier PDF ou saisir une URL !")]
    Missing,
}

/// Whether a URL plausibly points at a PDF document.
///
/// Case-insensitive `.pdf` suffix, or `.pdf?` anywhere for links carrying
/// query parameters. This is the relay's precondition; it never touches the
/// network.
#[must_use]
pub fn is_pdf_url(url: &str) -> bool {
    let lower = url.to_lowercase();
    lower.ends_with(".pdf") || lower.contains(".pdf?")
}

/// Whether a URL parses and uses the `http` or `https` scheme.
#[must_use]
pub fn is_http_url(url: &str) -> bool {
    Url::parse(url).is_ok_and(|parsed| matches!(parsed.scheme(), "http" | "https"))
}
