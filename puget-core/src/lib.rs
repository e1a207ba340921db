#![deny(warnings)]
#![deny(rust_2018_idioms)]

mod domain;
pub mod error;
mod pacific;
mod ports;
mod retry;

#[cfg(feature = "test")]
mod test_helper;

pub use domain::*;
pub use error::*;
pub use pacific::*;
pub use ports::*;
pub use retry::*;

#[cfg(feature = "test")]
pub use test_helper::*;
