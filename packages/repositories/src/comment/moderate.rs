use data_access_objects::CommentDao;
use models::comments::Model;
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

use super::CommentRepository;
use crate::error::Error;

impl CommentRepository {
    /// Moderation switch. Deactivating hides the comment from the active
    /// listing without deleting it; reactivating brings it back.
    pub async fn set_active(
        db: &DatabaseConnection,
        id: Uuid,
        active: bool,
    ) -> Result<Model, Error> {
        let existing = CommentDao::find_by_id(db, id).await?.ok_or(Error::NotFound)?;

        let mut am = existing.into_active_model();
        am.active = ActiveValue::set(active);

        let comment = CommentDao::update(db, am).await?;
        tracing::debug!(comment_id = %id, active, "comment moderation updated");
        Ok(comment)
    }
}
