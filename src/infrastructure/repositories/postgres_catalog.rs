use super::map_sqlx;
use crate::domain::catalog::{Category, CategoryRepository, Series, SeriesRepository};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ids::{CategoryId, PressId, SeriesId};
use crate::domain::locale::Localized;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, types::Json};

#[derive(Clone)]
pub struct PostgresSeriesRepository {
    pool: PgPool,
}

impl PostgresSeriesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SeriesRow {
    id: i64,
    press_id: i64,
    title: Json<Localized<String>>,
    seq: i32,
}

impl TryFrom<SeriesRow> for Series {
    type Error = DomainError;

    fn try_from(row: SeriesRow) -> Result<Self, Self::Error> {
        Ok(Series {
            id: SeriesId::new(row.id)?,
            press_id: PressId::new(row.press_id)?,
            title: row.title.0,
            seq: row.seq,
        })
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    press_id: i64,
    parent_id: Option<i64>,
    title: Json<Localized<String>>,
    seq: i32,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            press_id: PressId::new(row.press_id)?,
            parent_id: row.parent_id.map(CategoryId::new).transpose()?,
            title: row.title.0,
            seq: row.seq,
        })
    }
}

#[async_trait]
impl SeriesRepository for PostgresSeriesRepository {
    async fn list_by_press(&self, press_id: PressId) -> DomainResult<Vec<Series>> {
        let rows = sqlx::query_as::<_, SeriesRow>(
            "SELECT id, press_id, title, seq FROM series WHERE press_id = $1 ORDER BY seq, id",
        )
        .bind(i64::from(press_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        rows.into_iter().map(Series::try_from).collect()
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn list_by_press(&self, press_id: PressId) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, press_id, parent_id, title, seq FROM categories
             WHERE press_id = $1 ORDER BY COALESCE(parent_id, id), parent_id NULLS FIRST, seq, id",
        )
        .bind(i64::from(press_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        rows.into_iter().map(Category::try_from).collect()
    }
}
