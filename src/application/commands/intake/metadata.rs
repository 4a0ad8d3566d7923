// src/application/commands/intake/metadata.rs
use super::{SubmissionIntakeService, SubmitIntakeCommand};
use crate::{
    application::{
        error::ApplicationResult,
        validation::{Validator, non_blank},
    },
    domain::{
        ids::UserGroupId,
        locale::{Locale, Localized},
        press::{MetadataField, Press},
        publication::{NewAuthor, Publication},
    },
};

/// Descriptive fields entered in the metadata section of the form, all in
/// the submission locale.
#[derive(Debug, Clone, Default)]
pub struct MetadataInput {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub abstract_text: Option<String>,
    pub keywords: Vec<String>,
    /// `None` keeps the stored authors.
    pub authors: Option<Vec<AuthorInput>>,
}

#[derive(Debug, Clone)]
pub struct AuthorInput {
    pub given_name: String,
    pub family_name: Option<String>,
    pub user_group_id: Option<i64>,
    pub include_in_browse: bool,
}

pub(super) fn metadata_rules(
    validator: Validator<SubmitIntakeCommand>,
    press: &Press,
) -> Validator<SubmitIntakeCommand> {
    let keywords_required = press
        .metadata_requirement(MetadataField::Keywords)
        .is_required();

    validator
        .rule("title", "submission.submit.form.titleRequired", |c| {
            non_blank(&c.metadata.title).is_some()
        })
        .rule("keywords", "submission.submit.form.keywordsRequired", move |c| {
            !keywords_required || c.metadata.keywords.iter().any(|k| !k.trim().is_empty())
        })
        .rule("authors", "submission.submit.form.authorGivenNameRequired", |c| {
            c.metadata
                .authors
                .as_ref()
                .map(|authors| authors.iter().all(|a| !a.given_name.trim().is_empty()))
                .unwrap_or(true)
        })
}

fn set_or_remove(field: &mut Localized<String>, locale: &Locale, value: &Option<String>) {
    match non_blank(value) {
        Some(text) => field.set(locale.clone(), text.to_string()),
        None => {
            field.remove(locale);
        }
    }
}

impl SubmissionIntakeService {
    pub(super) async fn apply_metadata(
        &self,
        publication: &mut Publication,
        locale: &Locale,
        input: MetadataInput,
    ) -> ApplicationResult<()> {
        set_or_remove(&mut publication.title, locale, &input.title);
        set_or_remove(&mut publication.subtitle, locale, &input.subtitle);
        set_or_remove(&mut publication.abstract_text, locale, &input.abstract_text);

        let mut keywords: Vec<String> = Vec::new();
        for keyword in input.keywords.iter().map(|k| k.trim()).filter(|k| !k.is_empty()) {
            if !keywords.iter().any(|existing| existing == keyword) {
                keywords.push(keyword.to_string());
            }
        }
        if keywords.is_empty() {
            publication.keywords.remove(locale);
        } else {
            publication.keywords.set(locale.clone(), keywords);
        }

        if let Some(authors) = input.authors {
            let mut new_authors = Vec::with_capacity(authors.len());
            for (seq, author) in authors.into_iter().enumerate() {
                let family_name = match non_blank(&author.family_name) {
                    Some(name) => Localized::single(locale.clone(), name.to_string()),
                    None => Localized::new(),
                };
                new_authors.push(NewAuthor {
                    given_name: Localized::single(
                        locale.clone(),
                        author.given_name.trim().to_string(),
                    ),
                    family_name,
                    user_group_id: author
                        .user_group_id
                        .map(UserGroupId::new)
                        .transpose()?,
                    include_in_browse: author.include_in_browse,
                    seq: seq as i32,
                });
            }
            publication.authors = self
                .publications
                .replace_authors(publication.id, new_authors)
                .await?;
        }

        Ok(())
    }
}
