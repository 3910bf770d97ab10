//! Pendo markdown dialect tests

mod documents;
mod options;
mod round_trip;
