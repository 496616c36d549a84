//! Errors raised while resolving parameters and building products.

use dropshot::HttpError;
use gridparts::PartError;

/// Result type used throughout the catalog.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong between a request and a part list.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No product with this id.
    #[error("product `{0}` not found")]
    UnknownProduct(String),

    /// The product has no preset with this id.
    #[error("product `{product}` has no preset `{preset}`")]
    UnknownPreset {
        /// The product id.
        product: String,
        /// The requested preset.
        preset: String,
    },

    /// A value was supplied for a parameter the product does not declare.
    #[error("unknown parameter `{0}`")]
    UnknownParameter(String),

    /// A declared parameter has no value.
    #[error("missing value for parameter `{0}`")]
    MissingParameter(String),

    /// A value has the wrong type for its parameter.
    #[error("parameter `{id}` expects a {expected} value, got `{found}`")]
    WrongType {
        /// The parameter id.
        id: String,
        /// The expected type.
        expected: &'static str,
        /// The supplied value.
        found: String,
    },

    /// A number outside the declared range.
    #[error("parameter `{id}` must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// The parameter id.
        id: String,
        /// Lowest allowed value.
        min: f64,
        /// Highest allowed value.
        max: f64,
        /// The supplied value.
        value: f64,
    },

    /// A number that does not land on the parameter's step grid.
    #[error("parameter `{id}` moves in steps of {step} from {min}, got {value}")]
    OffStep {
        /// The parameter id.
        id: String,
        /// Lowest allowed value.
        min: f64,
        /// The step size.
        step: f64,
        /// The supplied value.
        value: f64,
    },

    /// A choice that is not among the declared options.
    #[error("parameter `{id}` has no option `{value}`")]
    UnknownChoice {
        /// The parameter id.
        id: String,
        /// The supplied value.
        value: String,
    },

    /// An override that is not of the form `key=value`.
    #[error("malformed assignment `{0}`, expected key=value")]
    MalformedAssignment(String),

    /// The parameters are valid individually but describe impossible geometry.
    #[error("`{product}` cannot be built: {reason}")]
    Unsupported {
        /// The product id.
        product: &'static str,
        /// Why not.
        reason: String,
    },

    /// A product produced a part that breaks the grid rules.
    #[error("`{product}` produced an invalid part: {source}")]
    InvalidPart {
        /// The product id.
        product: String,
        /// The underlying part error.
        #[source]
        source: PartError,
    },
}

impl From<Error> for HttpError {
    fn from(err: Error) -> Self {
        match err {
            Error::UnknownProduct(_) | Error::UnknownPreset { .. } => HttpError::for_not_found(None, err.to_string()),
            _ => HttpError::for_bad_request(None, err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use gridparts::Axis;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_http_status_mapping() {
        let not_found: HttpError = Error::UnknownProduct("sofa".to_string()).into();
        assert_eq!(not_found.status_code.as_u16(), 404);

        let bad: HttpError = Error::OutOfRange {
            id: "width".to_string(),
            min: 10.0,
            max: 60.0,
            value: 65.0,
        }
        .into();
        assert_eq!(bad.status_code.as_u16(), 400);
        assert_eq!(bad.external_message, "parameter `width` must be between 10 and 60, got 65");

        let broken: HttpError = Error::InvalidPart {
            product: "bench".to_string(),
            source: PartError::DegenerateSpan {
                kind: "gridbeam:x",
                axis: Axis::X,
                at: 5.0,
            },
        }
        .into();
        assert_eq!(broken.status_code.as_u16(), 400);
    }
}
