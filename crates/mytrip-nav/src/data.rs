//! Static menu data shown by the navigation bar.

use serde::{Deserialize, Serialize};

/// Identifier of a category tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u32);

/// A category tab under the bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub name: String,
}

impl CategoryRecord {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: CategoryId(id),
            name: name.into(),
        }
    }
}

/// A text entry in the signed-in profile bar or the dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileMenuEntry {
    pub id: u32,
    pub name: String,
}

impl ProfileMenuEntry {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Label of the flights tab, selected when nothing else is configured.
pub const FLIGHTS_LABEL: &str = "항공권";

/// Category tabs in display order.
pub const CATEGORIES: &[(u32, &str)] = &[
    (1, "항공권"),
    (2, "숙소"),
    (3, "투어·티켓"),
    (4, "렌터카"),
    (5, "패키지"),
];

/// Entries shown next to the avatar when signed in.
pub const LOGIN_PROFILE_MENUS: &[(u32, &str)] = &[(1, "내 여행"), (2, "위시리스트"), (3, "메시지")];

/// Entries of the avatar dropdown.
pub const PROFILE_DROPDOWN_MENUS: &[(u32, &str)] = &[(1, "프로필 관리"), (2, "예약 내역"), (3, "설정")];

/// Returns the built-in category tabs.
#[must_use]
pub fn categories() -> Vec<CategoryRecord> {
    CATEGORIES
        .iter()
        .map(|&(id, name)| CategoryRecord::new(id, name))
        .collect()
}

/// Returns the built-in signed-in profile bar entries.
#[must_use]
pub fn login_profile_menus() -> Vec<ProfileMenuEntry> {
    to_entries(LOGIN_PROFILE_MENUS)
}

/// Returns the built-in dropdown entries.
#[must_use]
pub fn profile_dropdown_menus() -> Vec<ProfileMenuEntry> {
    to_entries(PROFILE_DROPDOWN_MENUS)
}

fn to_entries(raw: &[(u32, &str)]) -> Vec<ProfileMenuEntry> {
    raw.iter()
        .map(|&(id, name)| ProfileMenuEntry::new(id, name))
        .collect()
}
