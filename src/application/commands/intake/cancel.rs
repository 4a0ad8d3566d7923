use super::SubmissionIntakeService;
use crate::{
    application::{
        error::ApplicationResult,
        scope::{RequestScope, ensure_editorial_access},
    },
    domain::ids::SubmissionId,
};

pub struct CancelIntakeCommand {
    pub submission_id: i64,
}

impl SubmissionIntakeService {
    /// Discards a draft and everything it owns. Unknown ids are a no-op.
    pub async fn cancel(
        &self,
        scope: &RequestScope,
        command: CancelIntakeCommand,
    ) -> ApplicationResult<()> {
        ensure_editorial_access(self.user_groups.as_ref(), scope).await?;
        let Ok(id) = SubmissionId::new(command.submission_id) else {
            return Ok(());
        };
        let Some(submission) = self.submissions.get(id).await? else {
            tracing::debug!(submission_id = %id, "cancel of unknown submission ignored");
            return Ok(());
        };
        scope.ensure_owns(&submission)?;

        self.submissions.delete(submission.id).await?;
        tracing::info!(submission_id = %submission.id, press = %scope.press.path, "draft submission cancelled");
        Ok(())
    }
}
