use thiserror::Error;

#[derive(Error, Debug)]
pub enum AstroError {
    #[error("Unknown body in catalog: {0}")]
    UnknownBody(String),

    #[error("Eccentricity out of the elliptical range [0, 1): {0}")]
    EccentricityOutOfRange(f64),

    #[error("ROOTS finding error: {0}")]
    RootFindingError(#[from] roots::SearchError),

    #[error("Iteration did not converge: {0}")]
    NonConvergence(&'static str),
}

impl PartialEq for AstroError {
    fn eq(&self, other: &Self) -> bool {
        use AstroError::*;
        match (self, other) {
            (UnknownBody(a), UnknownBody(b)) => a == b,
            // NaN eccentricities compare equal to each other
            (EccentricityOutOfRange(a), EccentricityOutOfRange(b)) => {
                a == b || (a.is_nan() && b.is_nan())
            }
            (RootFindingError(a), RootFindingError(b)) => a == b,
            (NonConvergence(a), NonConvergence(b)) => a == b,

            _ => false,
        }
    }
}
