pub mod error;
pub mod types;

pub use error::Error;
pub use types::{
    HealthResponse, SummarizeRequest, SummarizeResponse, SummaryLength, DEFAULT_MODEL, MOCK_MODEL,
};

pub type Result<T> = std::result::Result<T, Error>;
