use chrono::{DateTime, Utc};
use snafu::{Location, Snafu};

pub type CoreResult<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Storage operation failed: {message}"))]
    Storage {
        #[snafu(implicit)]
        location: Location,
        message: String,
    },
    #[snafu(display("Feed request failed"))]
    Feed {
        #[snafu(implicit)]
        location: Location,
        source: wsf_rs::Error,
    },
    #[snafu(display("Prediction request failed: {message}"))]
    Predictor {
        #[snafu(implicit)]
        location: Location,
        message: String,
    },
}

impl From<wsf_rs::Error> for Error {
    #[track_caller]
    fn from(error: wsf_rs::Error) -> Self {
        let caller = std::panic::Location::caller();
        Error::Feed {
            location: Location::new(caller.file(), caller.line(), caller.column()),
            source: error,
        }
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
#[snafu(display(
    "Prediction range is inconsistent: min '{min_time}', pred '{pred_time}', max '{max_time}'"
))]
pub struct PredictionRangeError {
    #[snafu(implicit)]
    pub location: Location,
    pub pred_time: DateTime<Utc>,
    pub min_time: DateTime<Utc>,
    pub max_time: DateTime<Utc>,
}
