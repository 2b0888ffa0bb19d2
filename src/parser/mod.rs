pub mod record;
pub mod row;

pub use record::*;
pub use row::*;
