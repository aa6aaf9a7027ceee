use data_access_objects::CommentDao;
use models::comments::Model;
use sea_orm::entity::prelude::Uuid;
use sea_orm::DatabaseConnection;

use super::CommentRepository;
use crate::error::Error;

impl CommentRepository {
    pub async fn get_comment(db: &DatabaseConnection, id: Uuid) -> Result<Model, Error> {
        CommentDao::find_by_id(db, id).await?.ok_or(Error::NotFound)
    }

    /// Every comment on the post, moderated ones included, oldest first.
    pub async fn list_for_post(
        db: &DatabaseConnection,
        post_id: Uuid,
    ) -> Result<Vec<Model>, Error> {
        CommentDao::find_for_post(db, post_id).await.map_err(Error::from)
    }

    /// The reader-facing thread: active comments only, oldest first.
    pub async fn list_active_for_post(
        db: &DatabaseConnection,
        post_id: Uuid,
    ) -> Result<Vec<Model>, Error> {
        CommentDao::find_active_for_post(db, post_id)
            .await
            .map_err(Error::from)
    }
}
