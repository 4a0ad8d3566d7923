// tests/support/builders.rs
use std::collections::BTreeMap;

use quick_submit::domain::{
    catalog::{Category, Series},
    doi::{DoiSettings, SuffixStrategy},
    ids::{CategoryId, ChapterId, PressId, PublicationId, SeriesId, UserGroupId, UserId},
    locale::{Locale, Localized},
    press::{CopyrightHolderType, MetadataField, MetadataRequirement, Press},
    publication::Chapter,
    user::{Role, UserGroup},
};

use super::mocks::InMemoryStore;

pub const DEMO_PRESS: PressId = PressId(1);
pub const OTHER_PRESS: PressId = PressId(2);
pub const DEMO_PATH: &str = "demo";
pub const OTHER_PATH: &str = "other";

pub const FIRST_SERIES: SeriesId = SeriesId(10);
pub const SECOND_SERIES: SeriesId = SeriesId(11);
pub const OTHER_PRESS_SERIES: SeriesId = SeriesId(20);

pub const HISTORY: CategoryId = CategoryId(30);
pub const MODERN_HISTORY: CategoryId = CategoryId(31);
pub const SCIENCE: CategoryId = CategoryId(32);
pub const OTHER_PRESS_CATEGORY: CategoryId = CategoryId(40);

pub const MANAGER_GROUP: UserGroupId = UserGroupId(50);
pub const SECOND_MANAGER_GROUP: UserGroupId = UserGroupId(51);
pub const AUTHOR_GROUP: UserGroupId = UserGroupId(52);
pub const READER_GROUP: UserGroupId = UserGroupId(53);
/// 所属ユーザーなしでシードされる
pub const SUB_EDITOR_GROUP: UserGroupId = UserGroupId(54);
pub const OTHER_PRESS_MANAGER_GROUP: UserGroupId = UserGroupId(60);

pub const MANAGER_USER: UserId = UserId(1);
pub const OUTSIDER_USER: UserId = UserId(2);

pub fn locale(code: &str) -> Locale {
    Locale::new(code).expect("valid locale")
}

fn text(code: &str, value: &str) -> Localized<String> {
    Localized::single(locale(code), value.to_string())
}

pub struct PressBuilder {
    id: PressId,
    path: String,
    acronym: String,
    name: String,
    locales: Vec<Locale>,
    license_url: Option<String>,
    holder_type: Option<CopyrightHolderType>,
    holder_other: Option<String>,
    metadata: BTreeMap<MetadataField, MetadataRequirement>,
}

impl PressBuilder {
    pub fn new(id: PressId, path: &str) -> Self {
        Self {
            id,
            path: path.into(),
            acronym: "PKP".into(),
            name: "Public Knowledge Press".into(),
            locales: vec![locale("en_US"), locale("fr_CA")],
            license_url: Some("https://creativecommons.org/licenses/by/4.0/".into()),
            holder_type: Some(CopyrightHolderType::Context),
            holder_other: None,
            metadata: BTreeMap::new(),
        }
    }

    pub fn acronym(mut self, acronym: &str) -> Self {
        self.acronym = acronym.into();
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.into();
        self
    }

    pub fn locales(mut self, codes: &[&str]) -> Self {
        self.locales = codes.iter().map(|c| locale(c)).collect();
        self
    }

    pub fn copyright_holder(mut self, kind: CopyrightHolderType, other: Option<&str>) -> Self {
        self.holder_type = Some(kind);
        self.holder_other = other.map(str::to_string);
        self
    }

    pub fn require(mut self, field: MetadataField) -> Self {
        self.metadata.insert(field, MetadataRequirement::Require);
        self
    }

    pub fn build(self) -> Press {
        Press {
            id: self.id,
            path: self.path,
            primary_locale: locale("en_US"),
            supported_submission_locales: self.locales,
            acronym: text("en_US", &self.acronym),
            name: text("en_US", &self.name),
            license_url: self.license_url,
            copyright_holder_type: self.holder_type,
            copyright_holder_other: self
                .holder_other
                .map(|other| text("en_US", &other))
                .unwrap_or_default(),
            metadata: self.metadata,
        }
    }
}

fn group(id: UserGroupId, press_id: PressId, role: Role, name: &str) -> UserGroup {
    UserGroup {
        id,
        press_id,
        role,
        name: text("en_US", name),
    }
}

fn series(id: SeriesId, press_id: PressId, title: &str, seq: i32) -> Series {
    Series {
        id,
        press_id,
        title: text("en_US", title),
        seq,
    }
}

fn category(
    id: CategoryId,
    press_id: PressId,
    parent_id: Option<CategoryId>,
    title: &str,
    seq: i32,
) -> Category {
    Category {
        id,
        press_id,
        parent_id,
        title: text("en_US", title),
        seq,
    }
}

pub fn chapter(id: i64, publication_id: PublicationId, seq: i32) -> Chapter {
    Chapter {
        id: ChapterId(id),
        publication_id,
        title: text("en_US", &format!("Chapter {seq}")),
        seq,
        doi_suffix: None,
        publisher_id: None,
        doi: None,
    }
}

pub fn pattern_doi_settings() -> DoiSettings {
    DoiSettings {
        prefix: Some("10.1234".into()),
        enable_publication_doi: true,
        enable_chapter_doi: true,
        suffix_strategy: SuffixStrategy::Pattern,
        publication_suffix_pattern: Some("%p.%m".into()),
        chapter_suffix_pattern: Some("%p.%m.%c".into()),
    }
}

/// 2 つのプレスと、そのシリーズ・カテゴリ・ユーザーグループを登録したストア
pub fn seeded_store() -> InMemoryStore {
    let store = InMemoryStore::new();
    {
        let mut state = store.state();
        state
            .presses
            .insert(DEMO_PRESS, PressBuilder::new(DEMO_PRESS, DEMO_PATH).build());
        state.presses.insert(
            OTHER_PRESS,
            PressBuilder::new(OTHER_PRESS, OTHER_PATH)
                .acronym("OTH")
                .name("Other Press")
                .build(),
        );

        state.series.extend([
            series(SECOND_SERIES, DEMO_PRESS, "Monographs", 2),
            series(FIRST_SERIES, DEMO_PRESS, "Classics", 1),
            series(OTHER_PRESS_SERIES, OTHER_PRESS, "Elsewhere", 1),
        ]);
        state.categories.extend([
            category(HISTORY, DEMO_PRESS, None, "History", 1),
            category(MODERN_HISTORY, DEMO_PRESS, Some(HISTORY), "Modern", 2),
            category(SCIENCE, DEMO_PRESS, None, "Science", 3),
            category(OTHER_PRESS_CATEGORY, OTHER_PRESS, None, "Elsewhere", 1),
        ]);
        state.user_groups.extend([
            group(SECOND_MANAGER_GROUP, DEMO_PRESS, Role::Manager, "Editor in chief"),
            group(MANAGER_GROUP, DEMO_PRESS, Role::Manager, "Press manager"),
            group(AUTHOR_GROUP, DEMO_PRESS, Role::Author, "Author"),
            group(READER_GROUP, DEMO_PRESS, Role::Reader, "Reader"),
            group(SUB_EDITOR_GROUP, DEMO_PRESS, Role::SubEditor, "Series editor"),
            group(OTHER_PRESS_MANAGER_GROUP, OTHER_PRESS, Role::Manager, "Press manager"),
        ]);
        state.memberships.extend([
            (MANAGER_USER, MANAGER_GROUP),
            (MANAGER_USER, SECOND_MANAGER_GROUP),
            (MANAGER_USER, OTHER_PRESS_MANAGER_GROUP),
            (OUTSIDER_USER, READER_GROUP),
        ]);
    }
    store
}
