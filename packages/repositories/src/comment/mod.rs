mod create;
mod delete;
mod moderate;
mod read;
mod update;

pub struct CommentRepository;
