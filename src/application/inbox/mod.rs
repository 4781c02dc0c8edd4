pub mod aggregate;
pub mod selection;

pub use aggregate::aggregate;
pub use selection::select_after_refresh;
