pub mod kind;

pub use symalg_error::Error;
