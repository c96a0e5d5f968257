mod array;
mod object;
mod value;

pub use array::*;
pub use object::*;
pub use value::*;
