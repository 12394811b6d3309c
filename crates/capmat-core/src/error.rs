//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CapmatError {
    /// A release could not be made available in the execution environment.
    #[error("ENV/ACTIVATION: {0}")]
    ActivationFailure(String),

    /// The named compiler executable is not present in the active release.
    #[error("ENV/MISSING-COMPILER: {0}")]
    MissingCompiler(String),

    /// The compiler ran but produced no text for the requested invocation.
    #[error("EXTRACT/EMPTY-OUTPUT: {0}")]
    EmptyOutput(String),

    /// None of the known marker dialects matched the diagnostic text.
    #[error("EXTRACT/SECTION-NOT-FOUND: {0}")]
    SectionNotFound(String),

    /// A section was located but normalization yielded zero identifiers.
    #[error("EXTRACT/NO-CAPABILITIES: {0}")]
    NoCapabilitiesFound(String),

    /// Reading or writing an output table failed. Fatal to the run.
    #[error("REPORT/{0}")]
    Report(String),

    /// The release configuration is unreadable or invalid. Fatal at startup.
    #[error("CONFIG/{0}")]
    Config(String),
}

impl CapmatError {
    /// Recoverable conditions are downgraded to warnings by the run loop;
    /// the affected compiler or release contributes nothing and processing
    /// continues. Report and config failures abort the run.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Report(_) | Self::Config(_))
    }
}
