use data_access_objects::PostDao;
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

use super::PostRepository;
use crate::error::Error;

impl PostRepository {
    /// Delete a post; the database cascades to its comments.
    pub async fn delete_post(db: &DatabaseConnection, id: Uuid) -> Result<Uuid, Error> {
        let existing = PostDao::find_by_id(db, id).await?.ok_or(Error::NotFound)?;

        PostDao::delete(db, existing.into_active_model()).await?;
        tracing::debug!(post_id = %id, "post deleted");
        Ok(id)
    }
}
