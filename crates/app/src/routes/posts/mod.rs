mod index;
mod new;

pub use index::PostsIndex;
pub use new::PostsNew;
