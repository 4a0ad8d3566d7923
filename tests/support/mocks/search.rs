// tests/support/mocks/search.rs
use async_trait::async_trait;
use quick_submit::application::{
    ApplicationResult, error::ApplicationError, ports::search::SubmissionSearchIndex,
};
use quick_submit::domain::{ids::SubmissionId, publication::Publication, submission::Submission};
use std::sync::Mutex;

/// 呼び出しを記録する検索インデックス
#[derive(Debug, Default)]
pub struct RecordingSearchIndex {
    pub metadata_changed: Mutex<Vec<SubmissionId>>,
    pub files_changed: Mutex<Vec<SubmissionId>>,
    pub finished: Mutex<usize>,
}

impl RecordingSearchIndex {
    pub fn metadata_changes(&self) -> Vec<SubmissionId> {
        self.metadata_changed.lock().unwrap().clone()
    }

    pub fn file_changes(&self) -> Vec<SubmissionId> {
        self.files_changed.lock().unwrap().clone()
    }

    pub fn finish_count(&self) -> usize {
        *self.finished.lock().unwrap()
    }
}

#[async_trait]
impl SubmissionSearchIndex for RecordingSearchIndex {
    async fn submission_metadata_changed(
        &self,
        submission: &Submission,
        _publication: &Publication,
    ) -> ApplicationResult<()> {
        self.metadata_changed.lock().unwrap().push(submission.id);
        Ok(())
    }

    async fn submission_files_changed(&self, submission: &Submission) -> ApplicationResult<()> {
        self.files_changed.lock().unwrap().push(submission.id);
        Ok(())
    }

    async fn submission_changes_finished(&self) -> ApplicationResult<()> {
        *self.finished.lock().unwrap() += 1;
        Ok(())
    }
}

/// 常に失敗する検索インデックス（失敗が送信処理を止めないことの確認用）
#[derive(Debug, Default)]
pub struct FailingSearchIndex;

#[async_trait]
impl SubmissionSearchIndex for FailingSearchIndex {
    async fn submission_metadata_changed(
        &self,
        _submission: &Submission,
        _publication: &Publication,
    ) -> ApplicationResult<()> {
        Err(ApplicationError::infrastructure("index offline"))
    }

    async fn submission_files_changed(&self, _submission: &Submission) -> ApplicationResult<()> {
        Err(ApplicationError::infrastructure("index offline"))
    }

    async fn submission_changes_finished(&self) -> ApplicationResult<()> {
        Err(ApplicationError::infrastructure("index offline"))
    }
}
