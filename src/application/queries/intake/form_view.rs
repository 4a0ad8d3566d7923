use std::collections::{BTreeMap, HashMap};

use super::IntakeQueryService;
use crate::{
    application::{
        dto::{IntakeFormViewDto, LinkActionDto, MetadataFieldFlagsDto, OptionDto},
        error::ApplicationResult,
        queries::links::cover_image_url,
        scope::{
            RequestScope, ensure_editorial_access, load_current_publication,
            load_owned_submission,
        },
    },
    domain::{
        catalog::{Category, Series},
        ids::SubmissionId,
        locale::Locale,
        press::{MetadataField, Press},
    },
};

pub struct IntakeFormViewQuery {
    pub submission_id: i64,
    pub locale: Option<String>,
}

impl IntakeQueryService {
    pub async fn form_view(
        &self,
        scope: &RequestScope,
        query: IntakeFormViewQuery,
    ) -> ApplicationResult<IntakeFormViewDto> {
        ensure_editorial_access(self.user_groups.as_ref(), scope).await?;
        let id = SubmissionId::new(query.submission_id)?;
        let submission = load_owned_submission(self.submissions.as_ref(), scope, id).await?;
        let publication = load_current_publication(self.publications.as_ref(), &submission).await?;
        let press = &scope.press;
        let locale = scope.form_locale(query.locale.as_deref())?;

        let series = self.series.list_by_press(press.id).await?;
        let categories = self.categories.list_by_press(press.id).await?;
        let doi = self.doi_settings.for_press(press.id).await?;

        let cover_image_name = publication
            .cover_image
            .resolve(&locale, &press.primary_locale)
            .map(|cover| cover.upload_name.clone())
            .unwrap_or_default();

        let upload_url = cover_image_url(
            &press.path,
            submission.id,
            &[
                ("coverImage", cover_image_name.clone()),
                ("publicationId", publication.id.to_string()),
            ],
        );

        Ok(IntakeFormViewDto {
            submission_id: submission.id.into(),
            publication_id: publication.id.into(),
            locale: locale.to_string(),
            supported_submission_locale_names: press
                .submission_locales()
                .into_iter()
                .map(|l| (l.to_string(), l.display_name()))
                .collect(),
            metadata_fields: metadata_flags(press),
            series_options: series_options(&series, &locale, &press.primary_locale),
            categories_options: category_options(&categories, &locale, &press.primary_locale),
            assign_publication_doi: doi.publication_doi_available(),
            assign_chapter_doi: doi.chapter_doi_available(),
            license_url: publication.license_url.clone().or_else(|| press.license_url.clone()),
            copyright_holder_type: press.copyright_holder_type.map(|t| t.to_string()),
            cover_image_name,
            open_cover_image_link_action: LinkActionDto {
                id: "uploadFile".into(),
                title: "common.upload".into(),
                url: upload_url,
                modal: "modal_add_file".into(),
            },
        })
    }
}

fn metadata_flags(press: &Press) -> BTreeMap<String, MetadataFieldFlagsDto> {
    MetadataField::ALL
        .iter()
        .map(|field| {
            let requirement = press.metadata_requirement(*field);
            (
                field.as_str().to_string(),
                MetadataFieldFlagsDto {
                    enabled: requirement.is_enabled(),
                    required: requirement.is_required(),
                },
            )
        })
        .collect()
}

/// Series choices led by an empty "no series" option.
fn series_options(series: &[Series], locale: &Locale, primary: &Locale) -> Vec<OptionDto> {
    std::iter::once(OptionDto {
        id: 0,
        title: String::new(),
    })
    .chain(series.iter().map(|s| OptionDto {
        id: s.id.into(),
        title: s.localized_title(locale, primary),
    }))
    .collect()
}

/// Category choices; children are titled `Parent > Child`.
fn category_options(categories: &[Category], locale: &Locale, primary: &Locale) -> Vec<OptionDto> {
    let by_id: HashMap<_, _> = categories.iter().map(|c| (c.id, c)).collect();
    categories
        .iter()
        .map(|category| {
            let own = category.localized_title(locale, primary);
            let title = match category.parent_id.and_then(|p| by_id.get(&p)) {
                Some(parent) => format!("{} > {own}", parent.localized_title(locale, primary)),
                None => own,
            };
            OptionDto {
                id: category.id.into(),
                title,
            }
        })
        .collect()
}
