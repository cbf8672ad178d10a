//! # Pages and Page Groups
//!
//! Thirteen fine-grained navigation targets (`Page`) fold down into seven
//! renderable views (`PageGroup`). Several pages share a group: `vision` and
//! `history` are sections of the About view, `graduate` and `faculties` of
//! Academics, `how-to-apply` and `scholarships` of Admissions.
//!
//! ```text
//! home ─────────────────────────► Home
//! about, vision, history ───────► About
//! academics, graduate, faculties► Academics
//! admissions, how-to-apply,
//!   scholarships ───────────────► Admissions
//! student-life ─────────────────► StudentLife
//! news ─────────────────────────► News
//! contact ──────────────────────► Contact
//! ```
//!
//! Both sets are closed. Nothing at runtime can add a page.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    About,
    Vision,
    History,
    Academics,
    Graduate,
    Faculties,
    Admissions,
    HowToApply,
    Scholarships,
    StudentLife,
    News,
    Contact,
}

impl Page {
    pub const ALL: [Page; 13] = [
        Page::Home,
        Page::About,
        Page::Vision,
        Page::History,
        Page::Academics,
        Page::Graduate,
        Page::Faculties,
        Page::Admissions,
        Page::HowToApply,
        Page::Scholarships,
        Page::StudentLife,
        Page::News,
        Page::Contact,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Vision => "vision",
            Page::History => "history",
            Page::Academics => "academics",
            Page::Graduate => "graduate",
            Page::Faculties => "faculties",
            Page::Admissions => "admissions",
            Page::HowToApply => "how-to-apply",
            Page::Scholarships => "scholarships",
            Page::StudentLife => "student-life",
            Page::News => "news",
            Page::Contact => "contact",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.tag() == tag)
    }

    /// The view this page is rendered by. Total over all 13 pages.
    pub fn group(self) -> PageGroup {
        match self {
            Page::Home => PageGroup::Home,
            Page::About | Page::Vision | Page::History => PageGroup::About,
            Page::Academics | Page::Graduate | Page::Faculties => PageGroup::Academics,
            Page::Admissions | Page::HowToApply | Page::Scholarships => PageGroup::Admissions,
            Page::StudentLife => PageGroup::StudentLife,
            Page::News => PageGroup::News,
            Page::Contact => PageGroup::Contact,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageGroup {
    #[default]
    Home,
    About,
    Academics,
    Admissions,
    StudentLife,
    News,
    Contact,
}

impl PageGroup {
    pub const ALL: [PageGroup; 7] = [
        PageGroup::Home,
        PageGroup::About,
        PageGroup::Academics,
        PageGroup::Admissions,
        PageGroup::StudentLife,
        PageGroup::News,
        PageGroup::Contact,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            PageGroup::Home => "home",
            PageGroup::About => "about",
            PageGroup::Academics => "academics",
            PageGroup::Admissions => "admissions",
            PageGroup::StudentLife => "student-life",
            PageGroup::News => "news",
            PageGroup::Contact => "contact",
        }
    }

    /// The page a top-level entry for this group navigates to.
    pub fn landing_page(self) -> Page {
        match self {
            PageGroup::Home => Page::Home,
            PageGroup::About => Page::About,
            PageGroup::Academics => Page::Academics,
            PageGroup::Admissions => Page::Admissions,
            PageGroup::StudentLife => Page::StudentLife,
            PageGroup::News => Page::News,
            PageGroup::Contact => Page::Contact,
        }
    }

    /// The nav bar entry for this group.
    pub fn nav_entry(self) -> &'static NavEntry {
        // NAV_ENTRIES holds exactly one entry per group, in `ALL` order.
        &NAV_ENTRIES[self as usize]
    }
}

impl fmt::Display for PageGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Resolve the view for the current page.
pub fn resolve_view(current: Page) -> PageGroup {
    current.group()
}

/// Resolve the view for a raw page tag. Unknown tags land on `Home`.
pub fn resolve_view_tag(tag: &str) -> PageGroup {
    Page::from_tag(tag).map_or(PageGroup::Home, Page::group)
}

// ============================================================================
// Navigation entries
// ============================================================================

/// A dropdown sub-entry: a more specific page within the parent's group.
#[derive(Debug)]
pub struct SubEntry {
    pub page: Page,
    pub label_key: &'static str,
}

/// A top-level nav bar entry.
#[derive(Debug)]
pub struct NavEntry {
    pub group: PageGroup,
    pub label_key: &'static str,
    pub dropdown: &'static [SubEntry],
}

impl NavEntry {
    pub fn page(&self) -> Page {
        self.group.landing_page()
    }

    pub fn has_dropdown(&self) -> bool {
        !self.dropdown.is_empty()
    }

    /// Highlighted when the current page belongs to this entry's group.
    pub fn is_active(&self, current: Page) -> bool {
        current.group() == self.group
    }
}

pub static NAV_ENTRIES: [NavEntry; 7] = [
    NavEntry {
        group: PageGroup::Home,
        label_key: "header.nav.home",
        dropdown: &[],
    },
    NavEntry {
        group: PageGroup::About,
        label_key: "header.nav.about",
        dropdown: &[
            SubEntry { page: Page::About, label_key: "header.dropdowns.about.overview" },
            SubEntry { page: Page::Vision, label_key: "header.dropdowns.about.vision" },
            SubEntry { page: Page::History, label_key: "header.dropdowns.about.history" },
        ],
    },
    NavEntry {
        group: PageGroup::Academics,
        label_key: "header.nav.academics",
        dropdown: &[
            SubEntry { page: Page::Academics, label_key: "header.dropdowns.academics.undergraduate" },
            SubEntry { page: Page::Graduate, label_key: "header.dropdowns.academics.graduate" },
            SubEntry { page: Page::Faculties, label_key: "header.dropdowns.academics.faculties" },
        ],
    },
    NavEntry {
        group: PageGroup::Admissions,
        label_key: "header.nav.admissions",
        dropdown: &[
            SubEntry { page: Page::Admissions, label_key: "header.dropdowns.admissions.whyJIU" },
            SubEntry { page: Page::HowToApply, label_key: "header.dropdowns.admissions.howToApply" },
            SubEntry { page: Page::Scholarships, label_key: "header.dropdowns.admissions.scholarships" },
        ],
    },
    NavEntry {
        group: PageGroup::StudentLife,
        label_key: "header.nav.studentLife",
        dropdown: &[],
    },
    NavEntry {
        group: PageGroup::News,
        label_key: "header.nav.news",
        dropdown: &[],
    },
    NavEntry {
        group: PageGroup::Contact,
        label_key: "header.nav.contact",
        dropdown: &[],
    },
];
