pub mod button;
pub mod form;
pub mod page_header;
pub mod text_field;

// Re-exports for convenience
pub use button::*;
pub use form::*;
pub use page_header::*;
pub use text_field::*;
