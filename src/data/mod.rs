pub mod catalog;
pub mod error;
pub mod save;

pub use catalog::load_catalog;
pub use error::DataError;
pub use save::SaveExport;
