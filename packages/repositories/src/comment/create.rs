use data_access_objects::{CommentDao, PostDao};
use models::comments;
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;
use services::validation::ActiveModelValidator;

use super::CommentRepository;
use crate::error::Error;

impl CommentRepository {
    /// Attach a comment to a post. New comments start active; moderation
    /// deactivates them later. Fails with `Error::Integrity` when the post
    /// does not exist.
    pub async fn create_comment(
        db: &DatabaseConnection,
        post_id: Uuid,
        name: String,
        email: String,
        body: String,
    ) -> Result<comments::Model, Error> {
        let model = comments::ActiveModel {
            id: ActiveValue::set(Uuid::new_v4()),
            post_id: ActiveValue::set(post_id),
            name: ActiveValue::set(name),
            email: ActiveValue::set(email),
            body: ActiveValue::set(body),
            ..Default::default()
        };
        model.validate()?;

        if PostDao::find_by_id(db, post_id).await?.is_none() {
            return Err(Error::Integrity(format!(
                "comment references missing post {}",
                post_id
            )));
        }

        let comment = CommentDao::insert(db, model).await?;
        tracing::debug!(comment_id = %comment.id, post_id = %post_id, "comment created");
        Ok(comment)
    }
}
