use crate::domain::{ids::SubmissionId, submission::WorkflowStage};

/// URL of the cover image endpoint of a submission with the given query pairs.
pub(crate) fn cover_image_url(
    press_path: &str,
    submission_id: SubmissionId,
    params: &[(&str, String)],
) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        query.append_pair(key, value);
    }
    query.append_pair("stageId", &WorkflowStage::Production.code().to_string());
    format!(
        "/api/v1/presses/{press_path}/submissions/{submission_id}/cover-image?{}",
        query.finish()
    )
}
