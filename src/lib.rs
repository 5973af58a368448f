pub mod cs;
pub mod math;

pub use cs::ecc;
pub use cs::error::Error;
pub use math::monte_carlo;
