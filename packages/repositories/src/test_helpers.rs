use models::posts::{self, PostStatus};
use models::prelude::{Comments, Posts, Users};
use models::users;
use sea_orm::prelude::DateTimeUtc;
use sea_orm::{ActiveValue, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};
use uuid::Uuid;

/// Fresh in-memory database per test, with the schema generated from the
/// entities. Foreign keys are switched on so cascade behavior is real.
/// The pool is pinned to a single connection; every pooled `:memory:`
/// connection would otherwise be its own empty database.
pub async fn setup_test_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
    opts.max_connections(1).sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .expect("Failed to open in-memory database");

    db.execute_unprepared("PRAGMA foreign_keys = ON;")
        .await
        .expect("Failed to enable foreign keys");

    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    for stmt in [
        schema.create_table_from_entity(Users),
        schema.create_table_from_entity(Posts),
        schema.create_table_from_entity(Comments),
    ] {
        db.execute(backend.build(&stmt))
            .await
            .expect("Failed to create table");
    }

    db
}

pub async fn create_test_user(db: &DatabaseConnection, prefix: &str) -> users::Model {
    let user = users::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        username: ActiveValue::Set(format!("{}_{}", prefix, Uuid::new_v4())),
        ..Default::default()
    };

    data_access_objects::UserDao::insert(db, user)
        .await
        .expect("Failed to create test user")
}

pub async fn create_test_post(
    db: &DatabaseConnection,
    author_id: Uuid,
    title: &str,
    slug: &str,
    publish: DateTimeUtc,
    status: PostStatus,
) -> posts::Model {
    let post = posts::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        title: ActiveValue::Set(title.to_string()),
        slug: ActiveValue::Set(slug.to_string()),
        user_id: ActiveValue::Set(author_id),
        body: ActiveValue::Set("test body".to_string()),
        publish: ActiveValue::Set(publish),
        status: ActiveValue::Set(status),
        ..Default::default()
    };

    data_access_objects::PostDao::insert(db, post)
        .await
        .expect("Failed to create test post")
}
