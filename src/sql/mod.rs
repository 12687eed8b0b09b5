//! Safe SQL builder: identifiers from static list specs only, values as parameters.

mod builder;
pub mod params;
pub use builder::*;
pub use params::*;
