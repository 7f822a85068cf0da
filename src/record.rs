//! An assembly file record.

pub mod body;
pub mod cprops;

pub use body::BodyRecord;
pub use body::ContigRef;
pub use cprops::CpropsRecord;
