pub mod builder;
pub mod error;
pub mod fixture;
pub mod readback;

pub use error::FileWriteError;
