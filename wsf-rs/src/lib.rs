#![deny(warnings)]
#![deny(rust_2018_idioms)]

//! Implements a library for downloading schedule and vessel location data
//! from the Washington State Ferries public REST feeds.

mod client;
mod deserialize_utils;
mod error;
mod models;

pub use reqwest::StatusCode;

pub use client::*;
pub use error::{Error, Result};
pub use models::*;
