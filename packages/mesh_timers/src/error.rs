use thiserror::Error;

/// Errors that can occur when parsing a [`Phase`][crate::Phase] from its name.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParsePhaseError {
    /// The name does not identify any mesh construction phase.
    #[error("unknown mesh construction phase: '{name}'")]
    UnknownPhase {
        /// The name that failed to parse.
        name: String,
    },
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(ParsePhaseError: Send, Sync, Debug, std::error::Error);

    #[test]
    fn message_names_the_input() {
        let error = ParsePhaseError::UnknownPhase {
            name: "vertex_init".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "unknown mesh construction phase: 'vertex_init'"
        );
    }
}
