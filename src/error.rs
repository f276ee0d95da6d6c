use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Failed to write demo output: {0}")]
    Output(#[from] io::Error),

    #[error("Unknown manufacturer: '{name}' (expected one of Nokia, Samsung, HTC)")]
    UnknownManufacturer { name: String },
}

impl PatternError {
    pub fn unknown_manufacturer(name: impl Into<String>) -> Self {
        Self::UnknownManufacturer { name: name.into() }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_manufacturer_display() {
        let error = PatternError::unknown_manufacturer("Motorola");
        let display = format!("{}", error);
        assert!(display.contains("'Motorola'"));
        assert!(display.contains("Nokia, Samsung, HTC"));
    }

    #[test]
    fn test_io_error_converts() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let error: PatternError = io_err.into();
        assert!(matches!(error, PatternError::Output(_)));
        assert!(format!("{}", error).contains("pipe closed"));
    }
}
