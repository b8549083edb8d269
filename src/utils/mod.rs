pub mod encoding;
pub mod normalize;

pub use encoding::*;
pub use normalize::*;
