pub mod catalog;
pub mod institution;
pub mod text;

pub use catalog::classify;
pub use institution::find_program_id;
pub use text::{has_any, normalize};
