use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] lienscope_core::ValidationError),

    #[error("command error: {0}")]
    Command(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Command(_) => 2,
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_error_category() {
        let validation = CliError::from(lienscope_core::ValidationError::InvalidMetric {
            value: String::from("gold"),
        });
        let io = CliError::from(std::io::Error::other("broken pipe"));

        assert_eq!(validation.exit_code(), 2);
        assert_eq!(CliError::Command(String::from("bad")).exit_code(), 2);
        assert_eq!(io.exit_code(), 10);
    }
}
