pub mod info;
pub mod list;
pub mod search;

pub use info::*;
pub use list::*;
pub use search::*;
