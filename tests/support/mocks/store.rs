// tests/support/mocks/store.rs
//! すべてのリポジトリポートを実装するインメモリストア
use async_trait::async_trait;
use quick_submit::domain::{
    catalog::{Category, CategoryRepository, Series, SeriesRepository},
    doi::{DoiSettings, DoiSettingsRepository},
    errors::{DomainError, DomainResult},
    ids::{
        AuthorId, CategoryId, ChapterId, PressId, PublicationId, SubmissionId,
        TemporaryFileId, UserGroupId, UserId,
    },
    locale::Localized,
    press::{Press, PressRepository},
    publication::{
        Author, Chapter, ChapterRepository, NewAuthor, NewPublication, Publication,
        PublicationRepository,
    },
    submission::{NewSubmission, Submission, SubmissionRepository},
    temporary_file::{NewTemporaryFile, TemporaryFile, TemporaryFileRepository},
    user::{Role, StageAssignmentRepository, UserGroup, UserGroupRepository},
};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, MutexGuard};

/// ストアの中身。テストから直接読み書きできるよう公開している
#[derive(Debug, Default)]
pub struct StoreState {
    pub presses: BTreeMap<PressId, Press>,
    pub doi_settings: BTreeMap<PressId, DoiSettings>,
    pub series: Vec<Series>,
    pub categories: Vec<Category>,
    pub user_groups: Vec<UserGroup>,
    pub memberships: Vec<(UserId, UserGroupId)>,
    pub submissions: BTreeMap<SubmissionId, Submission>,
    pub publications: BTreeMap<PublicationId, Publication>,
    pub chapters: BTreeMap<ChapterId, Chapter>,
    pub stage_assignments: Vec<(SubmissionId, UserGroupId, UserId)>,
    pub temporary_files: BTreeMap<TemporaryFileId, TemporaryFile>,
    /// 書き込み系操作の回数
    pub writes: usize,
    next_id: i64,
}

impl StoreState {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn current_publication(&self, submission_id: SubmissionId) -> Option<&Publication> {
        self.publications
            .values()
            .filter(|p| p.submission_id == submission_id)
            .max_by_key(|p| p.version)
    }
}

#[derive(Debug)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StoreState {
                // シードデータと衝突しない番号から採番する
                next_id: 1000,
                ..StoreState::default()
            }),
        }
    }

    pub fn state(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap()
    }

    pub fn writes(&self) -> usize {
        self.state().writes
    }

    pub fn submission(&self, id: SubmissionId) -> Option<Submission> {
        self.state().submissions.get(&id).cloned()
    }

    pub fn current_publication(&self, id: SubmissionId) -> Option<Publication> {
        self.state().current_publication(id).cloned()
    }

    pub fn insert_chapter(&self, chapter: Chapter) {
        self.state().chapters.insert(chapter.id, chapter);
    }

    pub fn chapter(&self, id: ChapterId) -> Option<Chapter> {
        self.state().chapters.get(&id).cloned()
    }
}

#[async_trait]
impl PressRepository for InMemoryStore {
    async fn find_by_id(&self, id: PressId) -> DomainResult<Option<Press>> {
        Ok(self.state().presses.get(&id).cloned())
    }

    async fn find_by_path(&self, path: &str) -> DomainResult<Option<Press>> {
        Ok(self
            .state()
            .presses
            .values()
            .find(|p| p.path == path)
            .cloned())
    }
}

#[async_trait]
impl DoiSettingsRepository for InMemoryStore {
    async fn for_press(&self, press_id: PressId) -> DomainResult<DoiSettings> {
        Ok(self
            .state()
            .doi_settings
            .get(&press_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl SeriesRepository for InMemoryStore {
    async fn list_by_press(&self, press_id: PressId) -> DomainResult<Vec<Series>> {
        let mut series: Vec<Series> = self
            .state()
            .series
            .iter()
            .filter(|s| s.press_id == press_id)
            .cloned()
            .collect();
        series.sort_by_key(|s| (s.seq, s.id));
        Ok(series)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn list_by_press(&self, press_id: PressId) -> DomainResult<Vec<Category>> {
        let mut categories: Vec<Category> = self
            .state()
            .categories
            .iter()
            .filter(|c| c.press_id == press_id)
            .cloned()
            .collect();
        categories.sort_by_key(|c| (c.seq, c.id));
        Ok(categories)
    }
}

#[async_trait]
impl UserGroupRepository for InMemoryStore {
    async fn list_by_press(&self, press_id: PressId) -> DomainResult<Vec<UserGroup>> {
        Ok(self
            .state()
            .user_groups
            .iter()
            .filter(|g| g.press_id == press_id)
            .cloned()
            .collect())
    }

    async fn first_for_user_with_role(
        &self,
        user_id: UserId,
        press_id: PressId,
        role: Role,
    ) -> DomainResult<Option<UserGroup>> {
        let state = self.state();
        Ok(state
            .user_groups
            .iter()
            .filter(|g| g.press_id == press_id && g.role == role)
            .filter(|g| state.memberships.contains(&(user_id, g.id)))
            .min_by_key(|g| g.id)
            .cloned())
    }
}

#[async_trait]
impl StageAssignmentRepository for InMemoryStore {
    async fn assign(
        &self,
        submission_id: SubmissionId,
        user_group_id: UserGroupId,
        user_id: UserId,
    ) -> DomainResult<()> {
        let mut state = self.state();
        let key = (submission_id, user_group_id, user_id);
        if !state.stage_assignments.contains(&key) {
            state.stage_assignments.push(key);
        }
        state.writes += 1;
        Ok(())
    }
}

#[async_trait]
impl SubmissionRepository for InMemoryStore {
    async fn get(&self, id: SubmissionId) -> DomainResult<Option<Submission>> {
        Ok(self.state().submissions.get(&id).cloned())
    }

    async fn add(
        &self,
        submission: NewSubmission,
        publication: NewPublication,
    ) -> DomainResult<Submission> {
        let mut state = self.state();
        let submission_id = SubmissionId(state.next_id());
        let publication_id = PublicationId(state.next_id());
        let created = Submission {
            id: submission_id,
            press_id: submission.press_id,
            status: submission.status(),
            stage: submission.stage(),
            progress: Some(submission.progress().to_string()),
            locale: submission.locale.clone(),
            series_id: submission.series_id,
            work_type: Default::default(),
            date_submitted: None,
            date_status_modified: submission.created_at,
            last_modified: submission.created_at,
        };
        let first = Publication {
            id: publication_id,
            submission_id,
            version: NewPublication::FIRST_VERSION,
            status: publication.status(),
            language: publication.language().to_string(),
            locale: publication.locale.clone(),
            series_id: publication.series_id,
            category_ids: BTreeSet::new(),
            title: Localized::new(),
            subtitle: Localized::new(),
            abstract_text: Localized::new(),
            keywords: Localized::new(),
            authors: Vec::new(),
            license_url: None,
            copyright_holder: Localized::new(),
            copyright_year: None,
            cover_image: Localized::new(),
            doi_suffix: None,
            publisher_id: None,
            doi: None,
            date_published: None,
            last_modified: publication.created_at,
        };
        state.submissions.insert(submission_id, created.clone());
        state.publications.insert(publication_id, first);
        state.writes += 1;
        Ok(created)
    }

    async fn edit(&self, submission: &Submission) -> DomainResult<Submission> {
        let mut state = self.state();
        if !state.submissions.contains_key(&submission.id) {
            return Err(DomainError::NotFound("submission not found".into()));
        }
        state.submissions.insert(submission.id, submission.clone());
        state.writes += 1;
        Ok(submission.clone())
    }

    async fn delete(&self, id: SubmissionId) -> DomainResult<()> {
        let mut state = self.state();
        if state.submissions.remove(&id).is_none() {
            return Err(DomainError::NotFound("submission not found".into()));
        }
        let owned: BTreeSet<PublicationId> = state
            .publications
            .values()
            .filter(|p| p.submission_id == id)
            .map(|p| p.id)
            .collect();
        state.publications.retain(|pid, _| !owned.contains(pid));
        state
            .chapters
            .retain(|_, chapter| !owned.contains(&chapter.publication_id));
        state.stage_assignments.retain(|(sid, _, _)| *sid != id);
        state.writes += 1;
        Ok(())
    }
}

#[async_trait]
impl PublicationRepository for InMemoryStore {
    async fn get(&self, id: PublicationId) -> DomainResult<Option<Publication>> {
        Ok(self.state().publications.get(&id).cloned())
    }

    async fn current_for_submission(
        &self,
        submission_id: SubmissionId,
    ) -> DomainResult<Option<Publication>> {
        Ok(self.state().current_publication(submission_id).cloned())
    }

    async fn edit(&self, publication: &Publication) -> DomainResult<Publication> {
        let mut state = self.state();
        let stored = state
            .publications
            .get(&publication.id)
            .ok_or_else(|| DomainError::NotFound("publication not found".into()))?;
        // カテゴリと著者は専用の置換操作でのみ書き込まれる
        let mut saved = publication.clone();
        saved.category_ids = stored.category_ids.clone();
        saved.authors = stored.authors.clone();
        state.publications.insert(saved.id, saved.clone());
        state.writes += 1;
        Ok(saved)
    }

    async fn replace_categories(
        &self,
        id: PublicationId,
        categories: &BTreeSet<CategoryId>,
    ) -> DomainResult<()> {
        let mut state = self.state();
        let publication = state
            .publications
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("publication not found".into()))?;
        publication.category_ids = categories.clone();
        state.writes += 1;
        Ok(())
    }

    async fn replace_authors(
        &self,
        id: PublicationId,
        authors: Vec<NewAuthor>,
    ) -> DomainResult<Vec<Author>> {
        let mut state = self.state();
        if !state.publications.contains_key(&id) {
            return Err(DomainError::NotFound("publication not found".into()));
        }
        let mut stored = Vec::with_capacity(authors.len());
        for author in authors {
            stored.push(Author {
                id: AuthorId(state.next_id()),
                publication_id: id,
                given_name: author.given_name,
                family_name: author.family_name,
                user_group_id: author.user_group_id,
                include_in_browse: author.include_in_browse,
                seq: author.seq,
            });
        }
        if let Some(publication) = state.publications.get_mut(&id) {
            publication.authors = stored.clone();
        }
        state.writes += 1;
        Ok(stored)
    }
}

#[async_trait]
impl ChapterRepository for InMemoryStore {
    async fn list_by_publication(&self, publication_id: PublicationId) -> DomainResult<Vec<Chapter>> {
        let mut chapters: Vec<Chapter> = self
            .state()
            .chapters
            .values()
            .filter(|c| c.publication_id == publication_id)
            .cloned()
            .collect();
        chapters.sort_by_key(|c| c.seq);
        Ok(chapters)
    }

    async fn edit(&self, chapter: &Chapter) -> DomainResult<Chapter> {
        let mut state = self.state();
        if !state.chapters.contains_key(&chapter.id) {
            return Err(DomainError::NotFound("chapter not found".into()));
        }
        state.chapters.insert(chapter.id, chapter.clone());
        state.writes += 1;
        Ok(chapter.clone())
    }
}

#[async_trait]
impl TemporaryFileRepository for InMemoryStore {
    async fn insert(&self, file: NewTemporaryFile) -> DomainResult<TemporaryFile> {
        let mut state = self.state();
        let stored = TemporaryFile {
            id: TemporaryFileId(state.next_id()),
            user_id: file.user_id,
            file_path: file.file_path,
            original_file_name: file.original_file_name,
            file_type: file.file_type,
            file_size: file.file_size,
            date_uploaded: file.date_uploaded,
        };
        state.temporary_files.insert(stored.id, stored.clone());
        state.writes += 1;
        Ok(stored)
    }

    async fn find_for_user(
        &self,
        id: TemporaryFileId,
        user_id: UserId,
    ) -> DomainResult<Option<TemporaryFile>> {
        Ok(self
            .state()
            .temporary_files
            .get(&id)
            .filter(|f| f.user_id == user_id)
            .cloned())
    }

    async fn delete(&self, id: TemporaryFileId, user_id: UserId) -> DomainResult<()> {
        let mut state = self.state();
        let owned = state
            .temporary_files
            .get(&id)
            .is_some_and(|f| f.user_id == user_id);
        if owned {
            state.temporary_files.remove(&id);
            state.writes += 1;
        }
        Ok(())
    }
}

