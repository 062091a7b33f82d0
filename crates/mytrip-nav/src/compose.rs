//! # Render Composer
//!
//! Turns the bar's state and props into a view model. The UI layer only
//! walks the resulting [`NavView`]; every branch and color decision is made
//! here.

use crate::data::{CategoryId, CategoryRecord, ProfileMenuEntry, FLIGHTS_LABEL};
use crate::route::NavTarget;
use crate::state::NavState;
use crate::theme::{search_icon_color, LogoVariant, Palette, ThemeMode};

/// Placeholder text of the search input.
pub const SEARCH_PLACEHOLDER: &str = "여행지나 상품을 검색해보세요";

/// Opaque handle to the avatar element, used to position the dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnchorId(String);

impl AnchorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AnchorId {
    fn default() -> Self {
        Self::new("profile-image")
    }
}

/// External inputs of the bar.
#[derive(Debug, Clone, PartialEq)]
pub struct NavProps {
    pub theme: ThemeMode,
    pub categories: Vec<CategoryRecord>,
    pub profile_menus: Vec<ProfileMenuEntry>,
    /// Tab to mark selected. `None` falls back to the flights tab.
    pub selected_category: Option<CategoryId>,
    pub anchor: AnchorId,
}

impl NavProps {
    pub fn new(
        theme: ThemeMode,
        categories: Vec<CategoryRecord>,
        profile_menus: Vec<ProfileMenuEntry>,
    ) -> Self {
        Self {
            theme,
            categories,
            profile_menus,
            selected_category: None,
            anchor: AnchorId::default(),
        }
    }

    #[must_use]
    pub fn with_selected(mut self, id: Option<CategoryId>) -> Self {
        self.selected_category = id;
        self
    }
}

/// The search box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchView {
    pub icon_color: &'static str,
    pub placeholder: &'static str,
    pub text_color: &'static str,
    pub background: &'static str,
    pub hover_background: &'static str,
    pub placeholder_color: &'static str,
}

/// Dropdown props handed to the menu collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownView {
    pub visible: bool,
    pub anchor: AnchorId,
}

/// One link of the signed-out bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    /// `None` for entries that are not wired to a page yet.
    pub target: Option<NavTarget>,
    pub color: &'static str,
    /// Drawn as an outlined button.
    pub emphasized: bool,
}

/// Right-hand side of the bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileBar {
    LoggedIn {
        entries: Vec<ProfileMenuEntry>,
        text_color: &'static str,
        avatar_color: &'static str,
        dropdown: DropdownView,
    },
    LoggedOut {
        links: Vec<NavLink>,
    },
}

/// A category tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    pub id: CategoryId,
    pub label: String,
    pub selected: bool,
    pub color: &'static str,
    pub underline: Option<&'static str>,
}

/// Everything needed to draw the bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavView {
    pub logo: LogoVariant,
    pub home: NavTarget,
    pub search: SearchView,
    pub profile: ProfileBar,
    pub tabs: Vec<TabView>,
    pub tab_hover_underline: &'static str,
}

/// Resolves the position of the selected tab: the first tab with the
/// configured id if given, otherwise the first tab labelled
/// [`FLIGHTS_LABEL`].
#[must_use]
pub fn selected_index(
    categories: &[CategoryRecord],
    configured: Option<CategoryId>,
) -> Option<usize> {
    match configured {
        Some(id) => categories.iter().position(|c| c.id == id),
        None => categories.iter().position(|c| c.name == FLIGHTS_LABEL),
    }
}

/// Builds the view model for `state` and `props`.
#[must_use]
pub fn compose(state: &NavState, props: &NavProps) -> NavView {
    let palette = Palette::for_theme(props.theme);

    let search = SearchView {
        icon_color: search_icon_color(props.theme, state.search_focus()),
        placeholder: SEARCH_PLACEHOLDER,
        text_color: palette.input_text,
        background: palette.input_background,
        hover_background: palette.input_hover_background,
        placeholder_color: palette.placeholder,
    };

    let profile = if state.auth().is_logged_in() {
        ProfileBar::LoggedIn {
            entries: props.profile_menus.clone(),
            text_color: palette.profile_text,
            avatar_color: palette.avatar,
            dropdown: DropdownView {
                visible: state.profile_menu().is_visible(),
                anchor: props.anchor.clone(),
            },
        }
    } else {
        ProfileBar::LoggedOut {
            links: vec![
                NavLink {
                    label: "파트너 등록하기",
                    target: None,
                    color: palette.profile_text,
                    emphasized: false,
                },
                NavLink {
                    label: "로그인",
                    target: Some(NavTarget::Login),
                    color: palette.profile_text,
                    emphasized: false,
                },
                NavLink {
                    label: "회원가입",
                    target: Some(NavTarget::Signup),
                    color: palette.signup_accent,
                    emphasized: true,
                },
            ],
        }
    };

    let selected = selected_index(&props.categories, props.selected_category);
    let tabs = props
        .categories
        .iter()
        .enumerate()
        .map(|(index, category)| {
            let is_selected = selected == Some(index);
            TabView {
                id: category.id,
                label: category.name.clone(),
                selected: is_selected,
                color: if is_selected {
                    palette.selected_category_text
                } else {
                    palette.category_text
                },
                underline: is_selected.then_some(palette.selected_category_underline),
            }
        })
        .collect();

    NavView {
        logo: palette.logo,
        home: NavTarget::Home,
        search,
        profile,
        tabs,
        tab_hover_underline: palette.category_hover_underline,
    }
}
