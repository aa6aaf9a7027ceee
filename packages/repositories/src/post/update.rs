use data_access_objects::PostDao;
use models::posts::{self, PostStatus};
use sea_orm::entity::prelude::{DateTimeUtc, Uuid};
use sea_orm::*;
use services::validation::ActiveModelValidator;

use super::{slug_taken_on, PostRepository};
use crate::error::Error;

impl PostRepository {
    /// Full-record update; the author binding is fixed at creation. The
    /// status flip is unconstrained in both directions, so an accidental
    /// publish can be pulled back to draft.
    pub async fn update_post(
        db: &DatabaseConnection,
        id: Uuid,
        title: String,
        slug: String,
        body: String,
        publish: DateTimeUtc,
        status: PostStatus,
    ) -> Result<posts::Model, Error> {
        let existing = PostDao::find_by_id(db, id).await?.ok_or(Error::NotFound)?;

        let mut am = existing.into_active_model();
        am.title = ActiveValue::set(title);
        am.slug = ActiveValue::set(slug.clone());
        am.body = ActiveValue::set(body);
        am.publish = ActiveValue::set(publish);
        am.status = ActiveValue::set(status);
        am.validate()?;

        if slug_taken_on(db, &slug, publish, Some(id)).await? {
            return Err(Error::Integrity(format!(
                "slug '{}' is already used on {}",
                slug,
                publish.date_naive()
            )));
        }

        PostDao::update(db, am).await.map_err(Error::from)
    }
}
