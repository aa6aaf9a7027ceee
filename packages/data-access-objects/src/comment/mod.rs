use models::comments::{ActiveModel, Column, Model};
use models::prelude::Comments;
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

pub struct CommentDao;

impl CommentDao {
    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<Model>, DbErr> {
        Comments::find_by_id(id).one(db).await
    }

    /// All comments on a post, oldest first.
    pub async fn find_for_post(
        db: &DatabaseConnection,
        post_id: Uuid,
    ) -> Result<Vec<Model>, DbErr> {
        Comments::find()
            .filter(Column::PostId.eq(post_id))
            .order_by_asc(Column::CreatedAt)
            .all(db)
            .await
    }

    /// Same as [`find_for_post`](Self::find_for_post) minus moderated-out
    /// comments.
    pub async fn find_active_for_post(
        db: &DatabaseConnection,
        post_id: Uuid,
    ) -> Result<Vec<Model>, DbErr> {
        Comments::find()
            .filter(Column::PostId.eq(post_id))
            .filter(Column::Active.eq(true))
            .order_by_asc(Column::CreatedAt)
            .all(db)
            .await
    }

    pub async fn insert(
        db: &DatabaseConnection,
        model: ActiveModel,
    ) -> Result<Model, DbErr> {
        model.insert(db).await
    }

    pub async fn update(
        db: &DatabaseConnection,
        model: ActiveModel,
    ) -> Result<Model, DbErr> {
        model.update(db).await
    }

    pub async fn delete(
        db: &DatabaseConnection,
        model: ActiveModel,
    ) -> Result<DeleteResult, DbErr> {
        model.delete(db).await
    }
}
