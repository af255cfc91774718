pub mod aggregate;
pub mod countries;
pub mod loader;

pub use aggregate::{ChoroplethEntry, CountryWinCount};
pub use loader::{load_dataset, DatasetError, MatchRecord};
