use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

mod route;
mod schedule;
mod vessel_location;

pub use route::*;
pub use schedule::*;
pub use vessel_location::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct RouteId(i32);

impl RouteId {
    pub const fn new(value: i32) -> Self {
        Self(value)
    }
    pub fn into_inner(self) -> i32 {
        self.0
    }
}

impl Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct VesselId(i32);

impl VesselId {
    pub const fn new(value: i32) -> Self {
        Self(value)
    }
    pub fn into_inner(self) -> i32 {
        self.0
    }
}

impl Display for VesselId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
