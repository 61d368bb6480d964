use prodcsv_core::Lang;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid catalog URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("custom attributes for {lang} are not valid JSON: {source}")]
    NestedDecode {
        lang: Lang,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot convert {field} value {value} to a number")]
    NumericCoercion { field: &'static str, value: String },

    #[error("variant {index}: {source}")]
    Variant {
        index: usize,
        #[source]
        source: Box<ScraperError>,
    },
}
