use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to fetch vessel locations"))]
    Feed {
        #[snafu(implicit)]
        location: Location,
        source: puget_core::Error,
    },
    #[snafu(display("Failed to persist vessel locations"))]
    Locations {
        #[snafu(implicit)]
        location: Location,
        source: puget_core::Error,
    },
    #[snafu(display("Failed to advance vessel trips"))]
    Trips {
        #[snafu(implicit)]
        location: Location,
        source: puget_core::Error,
    },
}
