use crate::domain::errors::DomainError;

const CNT_PRESS_PATH: &str = "presses_path_key";
const CNT_SUBMISSION_PRESS: &str = "submissions_press_id_fkey";
const CNT_PUBLICATION_CATEGORY: &str = "publication_categories_category_id_fkey";
const CNT_STAGE_ASSIGNMENT: &str = "stage_assignments_unique_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_PRESS_PATH => DomainError::Conflict("press path already exists".into()),
                    CNT_SUBMISSION_PRESS => DomainError::NotFound("press not found".into()),
                    CNT_PUBLICATION_CATEGORY => DomainError::NotFound("category not found".into()),
                    CNT_STAGE_ASSIGNMENT => {
                        DomainError::Conflict("user already assigned to the stage".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
