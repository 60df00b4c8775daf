mod int_ext;
mod error;
mod ring;
mod elem;

pub use int_ext::*;
pub use error::*;
pub use ring::*;
pub use elem::*;
