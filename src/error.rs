// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Svg(String),
    Config(String),
    Image(ImageError),
    Project(ProjectError),
    Export(String),
}

/// Specific error types for image loading and preparation.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone)]
pub enum ImageError {
    /// File format is not supported (e.g., unknown extension)
    UnsupportedFormat,

    /// File appears corrupted or has invalid data
    DecodeFailed(String),

    /// Re-encoding during the size-budget pass failed
    EncodeFailed(String),

    /// I/O error (file not found, permission denied, etc.)
    IoError(String),
}

impl ImageError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ImageError::UnsupportedFormat => "error-image-unsupported-format",
            ImageError::DecodeFailed(_) => "error-image-decode-failed",
            ImageError::EncodeFailed(_) => "error-image-encode-failed",
            ImageError::IoError(_) => "error-image-io",
        }
    }
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::UnsupportedFormat => write!(f, "Unsupported image format"),
            ImageError::DecodeFailed(msg) => write!(f, "Image decode failed: {}", msg),
            ImageError::EncodeFailed(msg) => write!(f, "Image encode failed: {}", msg),
            ImageError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

/// Errors raised while reading or writing project files.
#[derive(Debug, Clone)]
pub enum ProjectError {
    /// The file is not valid JSON or misses required fields
    InvalidFormat(String),

    /// The `version` field names a format we do not understand
    UnsupportedVersion(u32),

    /// A step's embedded image payload could not be decoded
    BadImagePayload { step: usize, reason: String },

    /// I/O error while reading or writing the file
    IoError(String),
}

impl ProjectError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ProjectError::InvalidFormat(_) => "error-project-invalid-format",
            ProjectError::UnsupportedVersion(_) => "error-project-unsupported-version",
            ProjectError::BadImagePayload { .. } => "error-project-bad-image",
            ProjectError::IoError(_) => "error-project-io",
        }
    }
}

impl fmt::Display for ProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectError::InvalidFormat(msg) => write!(f, "Invalid project file: {}", msg),
            ProjectError::UnsupportedVersion(v) => {
                write!(f, "Unsupported project file version: {}", v)
            }
            ProjectError::BadImagePayload { step, reason } => {
                write!(f, "Bad image payload for step {}: {}", step + 1, reason)
            }
            ProjectError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl Error {
    /// Returns the i18n message key used when surfacing this error as a
    /// notification.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Svg(_) => "error-svg",
            Error::Config(_) => "error-config",
            Error::Image(e) => e.i18n_key(),
            Error::Project(e) => e.i18n_key(),
            Error::Export(_) => "error-export-failed",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Project(e) => write!(f, "Project Error: {}", e),
            Error::Export(e) => write!(f, "Export Error: {}", e),
        }
    }
}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        Error::Image(err)
    }
}

impl From<ProjectError> for Error {
    fn from(err: ProjectError) -> Self {
        Error::Project(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Project(ProjectError::InvalidFormat(err.to_string()))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
