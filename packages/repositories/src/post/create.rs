use chrono::Utc;
use data_access_objects::PostDao;
use models::posts::{self, PostStatus};
use sea_orm::entity::prelude::{DateTimeUtc, Uuid};
use sea_orm::*;
use services::validation::ActiveModelValidator;

use super::{slug_taken_on, PostRepository};
use crate::error::Error;

impl PostRepository {
    /// Persist a new post. `publish` defaults to now when `None`; pass a
    /// future moment to schedule. Fails with `Error::Validation` on bad
    /// fields and `Error::Integrity` when the slug is already used on the
    /// same publish date.
    pub async fn create_post(
        db: &DatabaseConnection,
        author_id: Uuid,
        title: String,
        slug: String,
        body: String,
        publish: Option<DateTimeUtc>,
        status: PostStatus,
    ) -> Result<posts::Model, Error> {
        let publish_at = publish.unwrap_or_else(Utc::now);

        let model = posts::ActiveModel {
            id: ActiveValue::set(Uuid::new_v4()),
            title: ActiveValue::set(title),
            slug: ActiveValue::set(slug.clone()),
            user_id: ActiveValue::set(author_id),
            body: ActiveValue::set(body),
            publish: ActiveValue::set(publish_at),
            status: ActiveValue::set(status),
            ..Default::default()
        };
        model.validate()?;

        if slug_taken_on(db, &slug, publish_at, None).await? {
            return Err(Error::Integrity(format!(
                "slug '{}' is already used on {}",
                slug,
                publish_at.date_naive()
            )));
        }

        let post = PostDao::insert(db, model).await?;
        tracing::debug!(post_id = %post.id, slug = %post.slug, "post created");
        Ok(post)
    }
}
