use std::fmt;
use thiserror::Error;

use crate::core::params::ParameterError;

/// The two independent axes of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectorAxis {
    Family,
    Strategy,
}

impl fmt::Display for SelectorAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectorAxis::Family => write!(f, "kernel family"),
            SelectorAxis::Strategy => write!(f, "strategy"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Invalid {axis} id {id}: expected a value below {len}")]
    InvalidSelectorId {
        axis: SelectorAxis,
        id: usize,
        len: usize,
    },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GreenError {
    #[error("Selection failed: {source}")]
    Selection {
        #[from]
        source: SelectionError,
    },

    #[error("Invalid kernel parameters: {source}")]
    Parameter {
        #[from]
        source: ParameterError,
    },

    #[error("Operation '{operation}' is not provided by the '{strategy}' strategy")]
    Unsupported {
        operation: &'static str,
        strategy: &'static str,
    },

    #[error("The {point} point carries no surface normal")]
    MissingNormal { point: &'static str },

    #[error("Unknown {axis} name '{name}'")]
    UnknownName { axis: SelectorAxis, name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_id_message_names_axis_and_bound() {
        let error = SelectionError::InvalidSelectorId {
            axis: SelectorAxis::Strategy,
            id: 7,
            len: 5,
        };
        assert_eq!(
            error.to_string(),
            "Invalid strategy id 7: expected a value below 5"
        );
    }

    #[test]
    fn parameter_errors_convert_into_green_errors() {
        let error: GreenError = ParameterError::Kappa(-1.0).into();
        assert!(matches!(
            error,
            GreenError::Parameter {
                source: ParameterError::Kappa(_)
            }
        ));
    }
}
