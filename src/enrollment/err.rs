/// Errors that end an enrollment session.
///
/// Bad answers at a prompt are not errors: the console asks again.
#[derive(thiserror::Error, Debug)]
pub enum EnrollmentError {
    /// Reading from or writing to the terminal failed
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// Standard input reached end of file while a prompt was waiting
    #[error("input stream closed while waiting for: {0}")]
    InputClosed(String),
    /// Embedded starter records could not be parsed
    #[error("failed to parse starter records: {0}")]
    StarterDataError(#[from] csv::Error),
    /// An environment setting holds a value we do not understand
    #[error("invalid value {value:?} for {key}")]
    ConfigError { key: String, value: String },
}
