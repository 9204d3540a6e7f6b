use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// No coordinate source (cache, external capability, static table)
    /// produced a location for the postal code. User-correctable;
    /// retrying the same postal code will not change the outcome.
    #[error("could not resolve postal code \"{postal_code}\" to coordinates")]
    GeocodeFailure { postal_code: String },

    /// The selector was handed an empty candidate list. Callers must
    /// guarantee non-emptiness (the search pipeline does, via the
    /// synthetic fallback set).
    #[error("recommendation selection requires at least one candidate store")]
    EmptyCandidateSet,
}
