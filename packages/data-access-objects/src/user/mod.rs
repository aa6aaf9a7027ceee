use models::prelude::Users;
use models::users::{ActiveModel, Model};
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

/// Minimal access to the identity anchor table. Everything beyond "exists,
/// can be deleted" belongs to the external identity subsystem.
pub struct UserDao;

impl UserDao {
    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<Model>, DbErr> {
        Users::find_by_id(id).one(db).await
    }

    pub async fn insert(
        db: &DatabaseConnection,
        model: ActiveModel,
    ) -> Result<Model, DbErr> {
        model.insert(db).await
    }

    pub async fn delete(
        db: &DatabaseConnection,
        model: ActiveModel,
    ) -> Result<DeleteResult, DbErr> {
        model.delete(db).await
    }
}
