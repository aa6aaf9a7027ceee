pub mod comment;
mod error;
pub mod post;

pub use comment::CommentRepository;
pub use error::Error;
pub use post::PostRepository;

#[cfg(test)]
mod test_helpers;
