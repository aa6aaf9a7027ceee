mod create;
mod delete;
mod read;
mod update;

use chrono::{Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use data_access_objects::PostDao;
use sea_orm::entity::prelude::{DateTimeUtc, Uuid};
use sea_orm::DatabaseConnection;

use crate::error::Error;

pub struct PostRepository;

/// UTC `[midnight, next midnight)` window for a calendar date.
pub(crate) fn day_bounds(date: NaiveDate) -> (DateTimeUtc, DateTimeUtc) {
    let start = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
    (start, start + Duration::days(1))
}

/// Slug uniqueness is scoped to the publish date: two posts may share a
/// slug only when published on different calendar days. `exclude` lets an
/// update skip the row being rewritten.
pub(crate) async fn slug_taken_on(
    db: &DatabaseConnection,
    slug: &str,
    publish: DateTimeUtc,
    exclude: Option<Uuid>,
) -> Result<bool, Error> {
    let (start, end) = day_bounds(publish.date_naive());
    let rows = PostDao::find_by_slug_in_window(db, slug, start, end).await?;
    Ok(rows.iter().any(|p| Some(p.id) != exclude))
}
