pub mod footnotes;
pub mod rate_table;
pub mod status;

pub use footnotes::Footnotes;
pub use rate_table::RateTable;
pub use status::Status;
