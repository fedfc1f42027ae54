//! Front-end errors.

/// Errors that end a [`Session`](crate::Session).
///
/// Bad user input is never an error; it is reported and re-prompted.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Reading the input or writing the output failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::CliError;

    #[test]
    fn io_error_converts() {
        let err: CliError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert_eq!(format!("{err}"), "I/O error: pipe closed");
    }
}
