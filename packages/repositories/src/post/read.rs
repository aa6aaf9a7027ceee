use chrono::NaiveDate;
use data_access_objects::PostDao;
use models::posts::Model;
use sea_orm::entity::prelude::Uuid;
use sea_orm::DatabaseConnection;

use super::{day_bounds, PostRepository};
use crate::error::Error;

impl PostRepository {
    /// Every post, drafts included, newest publish date first.
    pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Model>, Error> {
        PostDao::find_all(db).await.map_err(Error::from)
    }

    /// Only posts with published status, newest publish date first.
    pub async fn list_published(db: &DatabaseConnection) -> Result<Vec<Model>, Error> {
        PostDao::find_published(db).await.map_err(Error::from)
    }

    pub async fn get_post(db: &DatabaseConnection, id: Uuid) -> Result<Model, Error> {
        PostDao::find_by_id(db, id).await?.ok_or(Error::NotFound)
    }

    /// Resolve a post by its public address: publish date parts plus slug.
    /// Zero matches and ambiguous matches both come back as `NotFound`;
    /// ambiguity cannot happen while the slug-per-date rule holds, but
    /// callers still get a clean miss if it ever does.
    pub async fn get_by_natural_key(
        db: &DatabaseConnection,
        year: i32,
        month: u32,
        day: u32,
        slug: &str,
    ) -> Result<Model, Error> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(Error::NotFound)?;
        let (start, end) = day_bounds(date);

        let mut rows = PostDao::find_by_slug_in_window(db, slug, start, end).await?;
        if rows.len() == 1 {
            Ok(rows.remove(0))
        } else {
            Err(Error::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use chrono::{TimeZone, Utc};
    use models::posts::PostStatus;

    #[tokio::test]
    async fn test_list_all_orders_by_publish_desc() {
        let db = setup_test_db().await;
        let author = create_test_user(&db, "order").await;

        create_test_post(&db, author.id, "Old", "old",
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(), PostStatus::Draft).await;
        create_test_post(&db, author.id, "New", "new",
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(), PostStatus::Draft).await;
        create_test_post(&db, author.id, "Middle", "middle",
            Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(), PostStatus::Draft).await;

        let titles: Vec<String> = PostRepository::list_all(&db)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();

        assert_eq!(titles, vec!["New", "Middle", "Old"]);
    }

    #[tokio::test]
    async fn test_list_published_membership_tracks_status() {
        let db = setup_test_db().await;
        let author = create_test_user(&db, "membership").await;

        create_test_post(&db, author.id, "Live", "live",
            Utc::now(), PostStatus::Published).await;
        create_test_post(&db, author.id, "Hidden", "hidden",
            Utc::now(), PostStatus::Draft).await;

        let published = PostRepository::list_published(&db).await.unwrap();

        assert_eq!(published.len(), 1);
        assert_eq!(published[0].title, "Live");
    }

    #[tokio::test]
    async fn test_get_post_by_id() {
        let db = setup_test_db().await;
        let author = create_test_user(&db, "get").await;
        let post = create_test_post(&db, author.id, "Mine", "mine",
            Utc::now(), PostStatus::Draft).await;

        let found = PostRepository::get_post(&db, post.id).await.unwrap();
        assert_eq!(found.id, post.id);

        let err = PostRepository::get_post(&db, Uuid::new_v4()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_get_by_natural_key_hit() {
        let db = setup_test_db().await;
        let author = create_test_user(&db, "natural").await;
        let publish = Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();

        let created = create_test_post(
            &db, author.id, "Hello world", "hello-world", publish, PostStatus::Published,
        )
        .await;

        let found = PostRepository::get_by_natural_key(&db, 2024, 3, 5, "hello-world")
            .await
            .unwrap();

        assert_eq!(found.id, created.id);
    }

    #[tokio::test]
    async fn test_get_by_natural_key_wrong_day_misses() {
        let db = setup_test_db().await;
        let author = create_test_user(&db, "miss").await;
        let publish = Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();

        create_test_post(&db, author.id, "Hello world", "hello-world", publish,
            PostStatus::Published).await;

        let err = PostRepository::get_by_natural_key(&db, 2024, 3, 6, "hello-world")
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_get_by_natural_key_rejects_impossible_date() {
        let db = setup_test_db().await;

        let err = PostRepository::get_by_natural_key(&db, 2024, 2, 31, "whatever")
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }
}
