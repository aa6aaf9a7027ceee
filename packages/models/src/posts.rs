use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Editorial state of a post. Drafts stay out of the published view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum PostStatus {
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "published")]
    Published,
}

impl Default for PostStatus {
    fn default() -> Self {
        PostStatus::Draft
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "String(StringLen::N(250))")]
    pub title: String,
    /// URL-safe identifier; unique per publish date, not globally.
    #[sea_orm(column_type = "String(StringLen::N(250))", indexed)]
    pub slug: String,
    pub user_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    /// Logical publication moment; future-dated for scheduled posts.
    pub publish: DateTimeUtc,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub status: PostStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_delete = "Cascade"
    )]
    Users,
    #[sea_orm(has_many = "super::comments::Entity")]
    Comments,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::comments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Insert-time defaults and timestamp upkeep: `created_at` is written
    /// exactly once, `updated_at` on every save, an unset `publish`
    /// defaults to now and an unset `status` to draft.
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = chrono::Utc::now();
        if insert {
            if matches!(self.publish, ActiveValue::NotSet) {
                self.publish = Set(now);
            }
            if matches!(self.status, ActiveValue::NotSet) {
                self.status = Set(PostStatus::default());
            }
            self.created_at = Set(now);
        }
        self.updated_at = Set(now);
        Ok(self)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample(title: &str) -> Model {
        Model {
            id: Uuid::new_v4(),
            title: title.to_string(),
            slug: "sample".to_string(),
            user_id: Uuid::new_v4(),
            body: "body".to_string(),
            publish: Utc::now(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            status: PostStatus::Draft,
        }
    }

    #[test]
    fn test_display_is_title() {
        assert_eq!(sample("Hello").to_string(), "Hello");
    }

    #[test]
    fn test_status_defaults_to_draft() {
        assert_eq!(PostStatus::default(), PostStatus::Draft);
    }
}
