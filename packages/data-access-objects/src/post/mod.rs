use models::posts::{ActiveModel, Column, Entity, Model, PostStatus};
use models::prelude::Posts;
use sea_orm::entity::prelude::{DateTimeUtc, Uuid};
use sea_orm::*;

pub struct PostDao;

impl PostDao {
    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<Model>, DbErr> {
        Posts::find_by_id(id).one(db).await
    }

    /// Every post, newest publish date first.
    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, DbErr> {
        Posts::find().order_by_desc(Column::Publish).all(db).await
    }

    /// The published view as a reusable query, so callers can stack
    /// further filters onto it before executing.
    pub fn published() -> Select<Entity> {
        Posts::find()
            .filter(Column::Status.eq(PostStatus::Published))
            .order_by_desc(Column::Publish)
    }

    pub async fn find_published(db: &DatabaseConnection) -> Result<Vec<Model>, DbErr> {
        Self::published().all(db).await
    }

    /// Posts carrying `slug` whose publish moment falls in `[start, end)`.
    /// Callers pass a calendar-day window to resolve natural keys and to
    /// police slug-per-date uniqueness.
    pub async fn find_by_slug_in_window(
        db: &DatabaseConnection,
        slug: &str,
        start: DateTimeUtc,
        end: DateTimeUtc,
    ) -> Result<Vec<Model>, DbErr> {
        Posts::find()
            .filter(Column::Slug.eq(slug))
            .filter(Column::Publish.gte(start))
            .filter(Column::Publish.lt(end))
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
