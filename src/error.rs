use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[cfg(feature = "cli")]
    #[error("Error reading from stdin: {source}")]
    ReadStdin {
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Error reading file '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON for --request-json: {source}")]
    ParseRequestJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON in input document: {source}")]
    ParseCmdInputJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Could not serialize output to JSON: {source}")]
    SerializeOutput {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error(
        "Missing input data: provide --value with --temp and --salinity, --input or --request-json"
    )]
    MissingInputData,

    #[error("Numeric domain error: {what} (value={value})")]
    Domain { what: &'static str, value: f64 },

    #[error("Length mismatch: {values} values but {conditions} condition sets")]
    LengthMismatch { values: usize, conditions: usize },

    #[error("Density evaluation failed: {0}")]
    Density(String),

    #[error("Unknown oxygen quantity '{0}' (expected conc, pres or sat)")]
    UnknownQuantity(String),
}
