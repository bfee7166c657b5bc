//! Route resolution: URL path strings → wizard pages.
//!
//! The wizard is a fixed linear flow, so routing is a flat table: every
//! `"/page-<n>"` string maps to its page, and every other string — empty,
//! `/`, typos, out-of-range numbers — falls back to the index. Resolution
//! is total and pure; there is no error case.

/// One screen/step in the wizard flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageId {
    Index,
    Page1,
    Page2,
    Page3,
    Page4,
    Page5,
    Page6,
    Page7,
    Page8,
    Page9,
    Page10,
    Page11,
    Page12,
    Page13,
    Page14,
    Page15,
    Page16,
    Page17,
    Page18,
    Page19,
    Page20,
}

/// All pages in wizard order, index page first.
pub const ALL_PAGES: [PageId; 21] = [
    PageId::Index,
    PageId::Page1,
    PageId::Page2,
    PageId::Page3,
    PageId::Page4,
    PageId::Page5,
    PageId::Page6,
    PageId::Page7,
    PageId::Page8,
    PageId::Page9,
    PageId::Page10,
    PageId::Page11,
    PageId::Page12,
    PageId::Page13,
    PageId::Page14,
    PageId::Page15,
    PageId::Page16,
    PageId::Page17,
    PageId::Page18,
    PageId::Page19,
    PageId::Page20,
];

impl PageId {
    /// Resolve a raw path string to a page.
    ///
    /// Exact match against the route table; anything that is not a known
    /// `"/page-<n>"` path resolves to [`PageId::Index`]. Safe to call with
    /// any input, any number of times.
    pub fn resolve(path: &str) -> PageId {
        match path {
            "/page-1" => PageId::Page1,
            "/page-2" => PageId::Page2,
            "/page-3" => PageId::Page3,
            "/page-4" => PageId::Page4,
            "/page-5" => PageId::Page5,
            "/page-6" => PageId::Page6,
            "/page-7" => PageId::Page7,
            "/page-8" => PageId::Page8,
            "/page-9" => PageId::Page9,
            "/page-10" => PageId::Page10,
            "/page-11" => PageId::Page11,
            "/page-12" => PageId::Page12,
            "/page-13" => PageId::Page13,
            "/page-14" => PageId::Page14,
            "/page-15" => PageId::Page15,
            "/page-16" => PageId::Page16,
            "/page-17" => PageId::Page17,
            "/page-18" => PageId::Page18,
            "/page-19" => PageId::Page19,
            "/page-20" => PageId::Page20,
            _ => PageId::Index,
        }
    }

    /// The canonical path for this page (inverse of [`resolve`](PageId::resolve)).
    pub fn path(self) -> &'static str {
        match self {
            PageId::Index => "/",
            PageId::Page1 => "/page-1",
            PageId::Page2 => "/page-2",
            PageId::Page3 => "/page-3",
            PageId::Page4 => "/page-4",
            PageId::Page5 => "/page-5",
            PageId::Page6 => "/page-6",
            PageId::Page7 => "/page-7",
            PageId::Page8 => "/page-8",
            PageId::Page9 => "/page-9",
            PageId::Page10 => "/page-10",
            PageId::Page11 => "/page-11",
            PageId::Page12 => "/page-12",
            PageId::Page13 => "/page-13",
            PageId::Page14 => "/page-14",
            PageId::Page15 => "/page-15",
            PageId::Page16 => "/page-16",
            PageId::Page17 => "/page-17",
            PageId::Page18 => "/page-18",
            PageId::Page19 => "/page-19",
            PageId::Page20 => "/page-20",
        }
    }

    /// Ordinal in the wizard flow: index = 0, page n = n.
    pub fn number(self) -> usize {
        ALL_PAGES.iter().position(|&p| p == self).unwrap_or(0)
    }

    /// The following page, or `None` on the last page.
    pub fn next(self) -> Option<PageId> {
        ALL_PAGES.get(self.number() + 1).copied()
    }

    /// The preceding page, or `None` on the index.
    pub fn prev(self) -> Option<PageId> {
        self.number().checked_sub(1).map(|i| ALL_PAGES[i])
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any string outside the route table resolves to Index.
        #[test]
        fn non_table_strings_resolve_to_index(s in "\\PC*") {
            prop_assume!(ALL_PAGES.iter().all(|p| p.path() != s || *p == PageId::Index));
            prop_assert_eq!(PageId::resolve(&s), PageId::Index);
        }

        /// Resolution never panics and always yields one of the known pages.
        #[test]
        fn resolve_is_total(s in "\\PC*") {
            let page = PageId::resolve(&s);
            prop_assert!(ALL_PAGES.contains(&page));
        }
    }
}
