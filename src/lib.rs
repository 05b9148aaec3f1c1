pub mod dune;
pub mod env;
pub mod fetch;
pub mod log;
pub mod paths;
pub mod queries;
pub mod readme;
pub mod row;
mod time;
mod update;

pub use dune::{DuneApi, DuneApiHttp, MockDuneApi};
pub use paths::Paths;
pub use row::Row;
pub use update::update_jpyc_stats;
