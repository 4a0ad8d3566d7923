use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ids::{ChapterId, PublicationId};
use crate::domain::locale::Localized;
use crate::domain::publication::{Chapter, ChapterRepository};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, types::Json};

#[derive(Clone)]
pub struct PostgresChapterRepository {
    pool: PgPool,
}

impl PostgresChapterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ChapterRow {
    id: i64,
    publication_id: i64,
    title: Json<Localized<String>>,
    seq: i32,
    doi_suffix: Option<String>,
    publisher_id: Option<String>,
    doi: Option<String>,
}

impl TryFrom<ChapterRow> for Chapter {
    type Error = DomainError;

    fn try_from(row: ChapterRow) -> Result<Self, Self::Error> {
        Ok(Chapter {
            id: ChapterId::new(row.id)?,
            publication_id: PublicationId::new(row.publication_id)?,
            title: row.title.0,
            seq: row.seq,
            doi_suffix: row.doi_suffix,
            publisher_id: row.publisher_id,
            doi: row.doi,
        })
    }
}

#[async_trait]
impl ChapterRepository for PostgresChapterRepository {
    async fn list_by_publication(&self, publication_id: PublicationId) -> DomainResult<Vec<Chapter>> {
        let rows = sqlx::query_as::<_, ChapterRow>(
            "SELECT id, publication_id, title, seq, doi_suffix, publisher_id, doi
             FROM chapters WHERE publication_id = $1 ORDER BY seq, id",
        )
        .bind(i64::from(publication_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        rows.into_iter().map(Chapter::try_from).collect()
    }

    async fn edit(&self, chapter: &Chapter) -> DomainResult<Chapter> {
        let row = sqlx::query_as::<_, ChapterRow>(
            "UPDATE chapters SET title = $2, seq = $3, doi_suffix = $4, publisher_id = $5, doi = $6
             WHERE id = $1
             RETURNING id, publication_id, title, seq, doi_suffix, publisher_id, doi",
        )
        .bind(i64::from(chapter.id))
        .bind(Json(&chapter.title))
        .bind(chapter.seq)
        .bind(chapter.doi_suffix.as_deref())
        .bind(chapter.publisher_id.as_deref())
        .bind(chapter.doi.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("chapter not found".into()))?;

        Chapter::try_from(row)
    }
}
