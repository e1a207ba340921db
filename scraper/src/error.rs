use snafu::{Location, Snafu};
use wsf_rs::RouteId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display(
        "Failed to sync route '{route_id}', input trips '{input_len}', deduplicated '{deduped_len}'"
    ))]
    RouteSync {
        #[snafu(implicit)]
        location: Location,
        route_id: RouteId,
        input_len: usize,
        deduped_len: usize,
        source: puget_core::Error,
    },
    #[snafu(display("Failed a schedule feed request"))]
    Feed {
        #[snafu(implicit)]
        location: Location,
        source: puget_core::Error,
    },
    #[snafu(display("Failed a storage operation"))]
    Storage {
        #[snafu(implicit)]
        location: Location,
        source: puget_core::Error,
    },
}
