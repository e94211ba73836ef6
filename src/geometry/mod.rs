pub mod shape;
pub mod units;
pub mod volume;


pub use shape::*;
pub use units::*;
pub use volume::*;
