// src/infrastructure/repositories/postgres_publication.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ids::{AuthorId, CategoryId, PublicationId, SeriesId, SubmissionId, UserGroupId};
use crate::domain::locale::{Locale, Localized};
use crate::domain::publication::{
    Author, CoverImage, NewAuthor, Publication, PublicationRepository, PublicationStatus,
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, types::Json};
use std::collections::BTreeSet;

#[derive(Clone)]
pub struct PostgresPublicationRepository {
    pool: PgPool,
}

impl PostgresPublicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PublicationRow {
    id: i64,
    submission_id: i64,
    version: i32,
    status: i16,
    locale: String,
    language: String,
    series_id: Option<i64>,
    title: Json<Localized<String>>,
    subtitle: Json<Localized<String>>,
    #[sqlx(rename = "abstract")]
    abstract_text: Json<Localized<String>>,
    keywords: Json<Localized<Vec<String>>>,
    license_url: Option<String>,
    copyright_holder: Json<Localized<String>>,
    copyright_year: Option<i32>,
    cover_image: Json<Localized<CoverImage>>,
    doi_suffix: Option<String>,
    publisher_id: Option<String>,
    doi: Option<String>,
    date_published: Option<NaiveDate>,
    last_modified: DateTime<Utc>,
}

impl PublicationRow {
    fn into_publication(
        self,
        category_ids: BTreeSet<CategoryId>,
        authors: Vec<Author>,
    ) -> DomainResult<Publication> {
        Ok(Publication {
            id: PublicationId::new(self.id)?,
            submission_id: SubmissionId::new(self.submission_id)?,
            version: self.version,
            status: PublicationStatus::from_code(self.status)?,
            locale: Locale::new(self.locale)?,
            language: self.language,
            series_id: self.series_id.map(SeriesId::new).transpose()?,
            category_ids,
            title: self.title.0,
            subtitle: self.subtitle.0,
            abstract_text: self.abstract_text.0,
            keywords: self.keywords.0,
            authors,
            license_url: self.license_url,
            copyright_holder: self.copyright_holder.0,
            copyright_year: self.copyright_year,
            cover_image: self.cover_image.0,
            doi_suffix: self.doi_suffix,
            publisher_id: self.publisher_id,
            doi: self.doi,
            date_published: self.date_published,
            last_modified: self.last_modified,
        })
    }
}

#[derive(Debug, FromRow)]
struct AuthorRow {
    id: i64,
    publication_id: i64,
    given_name: Json<Localized<String>>,
    family_name: Json<Localized<String>>,
    user_group_id: Option<i64>,
    include_in_browse: bool,
    seq: i32,
}

impl TryFrom<AuthorRow> for Author {
    type Error = DomainError;

    fn try_from(row: AuthorRow) -> Result<Self, Self::Error> {
        Ok(Author {
            id: AuthorId::new(row.id)?,
            publication_id: PublicationId::new(row.publication_id)?,
            given_name: row.given_name.0,
            family_name: row.family_name.0,
            user_group_id: row.user_group_id.map(UserGroupId::new).transpose()?,
            include_in_browse: row.include_in_browse,
            seq: row.seq,
        })
    }
}

const PUBLICATION_COLUMNS: &str = "id, submission_id, version, status, locale, language, series_id, \
     title, subtitle, abstract, keywords, license_url, copyright_holder, copyright_year, cover_image, \
     doi_suffix, publisher_id, doi, date_published, last_modified";

const AUTHOR_COLUMNS: &str =
    "id, publication_id, given_name, family_name, user_group_id, include_in_browse, seq";

impl PostgresPublicationRepository {
    async fn hydrate(&self, row: PublicationRow) -> DomainResult<Publication> {
        let category_ids: Vec<i64> = sqlx::query_scalar(
            "SELECT category_id FROM publication_categories WHERE publication_id = $1",
        )
        .bind(row.id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        let category_ids = category_ids
            .into_iter()
            .map(CategoryId::new)
            .collect::<DomainResult<BTreeSet<_>>>()?;

        let author_rows = sqlx::query_as::<_, AuthorRow>(&format!(
            "SELECT {AUTHOR_COLUMNS} FROM authors WHERE publication_id = $1 ORDER BY seq, id"
        ))
        .bind(row.id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        let authors = author_rows
            .into_iter()
            .map(Author::try_from)
            .collect::<DomainResult<Vec<_>>>()?;

        row.into_publication(category_ids, authors)
    }
}

#[async_trait]
impl PublicationRepository for PostgresPublicationRepository {
    async fn get(&self, id: PublicationId) -> DomainResult<Option<Publication>> {
        let row = sqlx::query_as::<_, PublicationRow>(&format!(
            "SELECT {PUBLICATION_COLUMNS} FROM publications WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        match row {
            Some(row) => self.hydrate(row).await.map(Some),
            None => Ok(None),
        }
    }

    async fn current_for_submission(
        &self,
        submission_id: SubmissionId,
    ) -> DomainResult<Option<Publication>> {
        let row = sqlx::query_as::<_, PublicationRow>(&format!(
            "SELECT {PUBLICATION_COLUMNS} FROM publications
             WHERE submission_id = $1 ORDER BY version DESC LIMIT 1"
        ))
        .bind(i64::from(submission_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        match row {
            Some(row) => self.hydrate(row).await.map(Some),
            None => Ok(None),
        }
    }

    async fn edit(&self, publication: &Publication) -> DomainResult<Publication> {
        let row = sqlx::query_as::<_, PublicationRow>(&format!(
            "UPDATE publications
             SET status = $2, locale = $3, language = $4, series_id = $5, title = $6, subtitle = $7,
                 abstract = $8, keywords = $9, license_url = $10, copyright_holder = $11,
                 copyright_year = $12, cover_image = $13, doi_suffix = $14, publisher_id = $15,
                 doi = $16, date_published = $17, last_modified = $18
             WHERE id = $1
             RETURNING {PUBLICATION_COLUMNS}"
        ))
        .bind(i64::from(publication.id))
        .bind(publication.status.code())
        .bind(publication.locale.as_str())
        .bind(&publication.language)
        .bind(publication.series_id.map(i64::from))
        .bind(Json(&publication.title))
        .bind(Json(&publication.subtitle))
        .bind(Json(&publication.abstract_text))
        .bind(Json(&publication.keywords))
        .bind(publication.license_url.as_deref())
        .bind(Json(&publication.copyright_holder))
        .bind(publication.copyright_year)
        .bind(Json(&publication.cover_image))
        .bind(publication.doi_suffix.as_deref())
        .bind(publication.publisher_id.as_deref())
        .bind(publication.doi.as_deref())
        .bind(publication.date_published)
        .bind(publication.last_modified)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("publication not found".into()))?;

        self.hydrate(row).await
    }

    async fn replace_categories(
        &self,
        id: PublicationId,
        categories: &BTreeSet<CategoryId>,
    ) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        sqlx::query("DELETE FROM publication_categories WHERE publication_id = $1")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        if !categories.is_empty() {
            let mut builder: QueryBuilder<Postgres> =
                QueryBuilder::new("INSERT INTO publication_categories (publication_id, category_id) ");
            builder.push_values(categories, |mut row, category_id| {
                row.push_bind(i64::from(id))
                    .push_bind(i64::from(*category_id));
            });
            builder
                .build()
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)
    }

    async fn replace_authors(
        &self,
        id: PublicationId,
        authors: Vec<NewAuthor>,
    ) -> DomainResult<Vec<Author>> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        sqlx::query("DELETE FROM authors WHERE publication_id = $1")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let mut stored = Vec::with_capacity(authors.len());
        for author in authors {
            let row = sqlx::query_as::<_, AuthorRow>(&format!(
                "INSERT INTO authors (publication_id, given_name, family_name, user_group_id, include_in_browse, seq)
                 VALUES ($1, $2, $3, $4, $5, $6)
                 RETURNING {AUTHOR_COLUMNS}"
            ))
            .bind(i64::from(id))
            .bind(Json(&author.given_name))
            .bind(Json(&author.family_name))
            .bind(author.user_group_id.map(i64::from))
            .bind(author.include_in_browse)
            .bind(author.seq)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;
            stored.push(Author::try_from(row)?);
        }

        tx.commit().await.map_err(map_sqlx)?;
        Ok(stored)
    }
}
