pub mod routing;
pub mod validation;

pub use routing::*;
pub use validation::*;
