pub mod interests;
pub mod sentiment;

pub use interests::aggregate;
pub use sentiment::classify;
