use data_access_objects::CommentDao;
use models::comments::Model;
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;
use services::validation::ActiveModelValidator;

use super::CommentRepository;
use crate::error::Error;

impl CommentRepository {
    /// Full-record update; the post binding and active flag are managed
    /// elsewhere (the flag through `set_active`).
    pub async fn update_comment(
        db: &DatabaseConnection,
        id: Uuid,
        name: String,
        email: String,
        body: String,
    ) -> Result<Model, Error> {
        let existing = CommentDao::find_by_id(db, id).await?.ok_or(Error::NotFound)?;

        let mut am = existing.into_active_model();
        am.name = ActiveValue::set(name);
        am.email = ActiveValue::set(email);
        am.body = ActiveValue::set(body);
        am.validate()?;

        CommentDao::update(db, am).await.map_err(Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use chrono::Utc;
    use models::posts::PostStatus;

    #[tokio::test]
    async fn test_update_comment_rewrites_fields() {
        let db = setup_test_db().await;
        let author = create_test_user(&db, "cupd").await;
        let post = create_test_post(&db, author.id, "Post", "post",
            Utc::now(), PostStatus::Published).await;
        let comment = CommentRepository::create_comment(
            &db, post.id, "Alice".into(), "alice@example.com".into(), "typo".into(),
        )
        .await
        .unwrap();

        let updated = CommentRepository::update_comment(
            &db, comment.id, "Alice".into(), "alice@example.com".into(), "fixed".into(),
        )
        .await
        .unwrap();

        assert_eq!(updated.body, "fixed");
        assert_eq!(updated.created_at, comment.created_at);
    }

    #[tokio::test]
    async fn test_update_with_bad_email_is_validation_error() {
        let db = setup_test_db().await;
        let author = create_test_user(&db, "cupd_email").await;
        let post = create_test_post(&db, author.id, "Post", "post",
            Utc::now(), PostStatus::Published).await;
        let comment = CommentRepository::create_comment(
            &db, post.id, "Alice".into(), "alice@example.com".into(), "hi".into(),
        )
        .await
        .unwrap();

        let err = CommentRepository::update_comment(
            &db, comment.id, "Alice".into(), "broken".into(), "hi".into(),
        )
        .await
        .unwrap_err();

        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_update_nonexistent_is_not_found() {
        let db = setup_test_db().await;

        let err = CommentRepository::update_comment(
            &db, Uuid::new_v4(), "A".into(), "a@example.com".into(), "b".into(),
        )
        .await
        .unwrap_err();

        assert!(err.is_not_found());
    }
}
