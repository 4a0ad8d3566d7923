use crate::domain::ids::{AuthorId, PublicationId, UserGroupId};
use crate::domain::locale::{Locale, Localized};

#[derive(Debug, Clone)]
pub struct Author {
    pub id: AuthorId,
    pub publication_id: PublicationId,
    pub given_name: Localized<String>,
    pub family_name: Localized<String>,
    pub user_group_id: Option<UserGroupId>,
    pub include_in_browse: bool,
    pub seq: i32,
}

impl Author {
    pub fn full_name(&self, locale: &Locale, primary: &Locale) -> String {
        let given = self.given_name.resolve_text(locale, primary).unwrap_or_default();
        let family = self.family_name.resolve_text(locale, primary).unwrap_or_default();
        format!("{given} {family}").trim().to_string()
    }
}

#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub given_name: Localized<String>,
    pub family_name: Localized<String>,
    pub user_group_id: Option<UserGroupId>,
    pub include_in_browse: bool,
    pub seq: i32,
}

/// Comma separated names of the authors shown in browse listings, in order.
///
/// Only authors whose user group is one of `credited_groups` are listed;
/// an empty slice credits every group.
pub fn author_string(
    authors: &[Author],
    credited_groups: &[UserGroupId],
    locale: &Locale,
    primary: &Locale,
) -> String {
    let mut listed: Vec<&Author> = authors
        .iter()
        .filter(|a| a.include_in_browse)
        .filter(|a| {
            credited_groups.is_empty()
                || a.user_group_id
                    .map(|g| credited_groups.contains(&g))
                    .unwrap_or(false)
        })
        .collect();
    listed.sort_by_key(|a| a.seq);
    listed
        .into_iter()
        .map(|a| a.full_name(locale, primary))
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
