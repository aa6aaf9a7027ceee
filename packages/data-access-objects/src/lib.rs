pub mod comment;
pub mod post;
pub mod user;

pub use comment::CommentDao;
pub use post::PostDao;
pub use user::UserDao;
