pub mod error;
pub mod feature_flags;
pub mod form;
pub mod post;

pub use error::*;
pub use feature_flags::*;
pub use form::*;
pub use post::*;
