pub mod error;
pub mod fraction;
pub mod lagrange;
pub mod point;
pub mod prelude;
pub mod radix;

pub use fraction::Fraction;
pub use point::Point;
