mod analyzer;
pub mod defs;
mod die;
mod error;
mod face;
mod game;
pub mod prelude;
pub mod table;
mod weight;

pub use analyzer::Analyzer;
pub use die::Die;
pub use error::{Error, ErrorKind, Result};
pub use face::{Face, FaceKind};
pub use game::{Form, Game};
pub use weight::{IntoWeight, Weight, DEFAULT_WEIGHT};
