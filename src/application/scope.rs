// src/application/scope.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::{
    ids::SubmissionId,
    locale::Locale,
    press::Press,
    publication::{Publication, PublicationRepository},
    submission::{Submission, SubmissionRepository},
    user::{Role, UserGroupRepository},
};

/// Roles that may run the quick submit workflow of a press.
const EDITORIAL_ROLES: [Role; 2] = [Role::Manager, Role::SubEditor];

/// The press and user a request acts for; bound once per request.
#[derive(Debug, Clone)]
pub struct RequestScope {
    pub press: Press,
    pub user: AuthenticatedUser,
}

impl RequestScope {
    pub fn new(press: Press, user: AuthenticatedUser) -> Self {
        Self { press, user }
    }

    pub fn ensure_owns(&self, submission: &Submission) -> ApplicationResult<()> {
        if submission.belongs_to(self.press.id) {
            Ok(())
        } else {
            tracing::error!(
                submission_id = %submission.id,
                submission_press = %submission.press_id,
                acting_press = %self.press.id,
                "submission accessed from another press"
            );
            Err(ApplicationError::context_mismatch(format!(
                "submission {} is not in press {}",
                submission.id, self.press.path
            )))
        }
    }

    /// Requested locale when the press accepts it for submissions, else the
    /// press primary locale.
    pub fn form_locale(&self, requested: Option<&str>) -> ApplicationResult<Locale> {
        match requested.map(str::trim).filter(|l| !l.is_empty()) {
            Some(code) => {
                let locale = Locale::new(code)?;
                if self.press.accepts_submission_locale(&locale) {
                    Ok(locale)
                } else {
                    Ok(self.press.primary_locale.clone())
                }
            }
            None => Ok(self.press.primary_locale.clone()),
        }
    }
}

/// Fails with `Forbidden` unless the acting user is in a manager or
/// sub-editor group of the press.
pub(crate) async fn ensure_editorial_access(
    user_groups: &dyn UserGroupRepository,
    scope: &RequestScope,
) -> ApplicationResult<()> {
    for role in EDITORIAL_ROLES {
        if user_groups
            .first_for_user_with_role(scope.user.id, scope.press.id, role)
            .await?
            .is_some()
        {
            return Ok(());
        }
    }
    tracing::warn!(
        user_id = %scope.user.id,
        press = %scope.press.path,
        "quick submit refused to user without an editorial role"
    );
    Err(ApplicationError::forbidden(
        "acting user holds no editorial role in this press",
    ))
}

/// Loads a submission and checks it belongs to the acting press.
pub(crate) async fn load_owned_submission(
    submissions: &dyn SubmissionRepository,
    scope: &RequestScope,
    id: SubmissionId,
) -> ApplicationResult<Submission> {
    let submission = submissions
        .get(id)
        .await?
        .ok_or_else(|| ApplicationError::not_found("submission not found"))?;
    scope.ensure_owns(&submission)?;
    Ok(submission)
}

pub(crate) async fn load_current_publication(
    publications: &dyn PublicationRepository,
    submission: &Submission,
) -> ApplicationResult<Publication> {
    publications
        .current_for_submission(submission.id)
        .await?
        .ok_or_else(|| ApplicationError::not_found("submission has no current publication"))
}
