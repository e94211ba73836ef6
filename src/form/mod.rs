pub mod fields;
pub mod number;

pub use fields::*;
pub use number::*;
