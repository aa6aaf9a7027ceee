use data_access_objects::CommentDao;
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

use super::CommentRepository;
use crate::error::Error;

impl CommentRepository {
    pub async fn delete_comment(db: &DatabaseConnection, id: Uuid) -> Result<Uuid, Error> {
        let existing = CommentDao::find_by_id(db, id).await?.ok_or(Error::NotFound)?;

        CommentDao::delete(db, existing.into_active_model()).await?;
        Ok(id)
    }
}
