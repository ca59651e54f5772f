// src/gui/router.rs
use super::pages::{self, Page, PageKind};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::add::PAGE,
    &pages::standings::PAGE,
    &pages::team::PAGE,
    &pages::teams::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn index_of(kind: PageKind) -> usize {
    PAGES.iter().position(|p| p.kind() == kind).unwrap_or(0)
}
