//! Category filter and single-item selection for the galleries.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// A closed set of categories a gallery can be filtered by.
pub trait Category: Copy + Eq + 'static {
    const ALL: &'static [Self];

    fn key(self) -> &'static str;

    fn label(self) -> &'static str;
}

pub const ALL_KEY: &str = "all";

/// Either every category or exactly one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Filter<C> {
    All,
    Only(C),
}

impl<C> Default for Filter<C> {
    fn default() -> Self {
        Self::All
    }
}

impl<C: Category> Filter<C> {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::All => ALL_KEY,
            Self::Only(c) => c.key(),
        }
    }

    #[must_use]
    pub fn matches(self, category: C) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => c == category,
        }
    }

    /// Button order: `All` first, then every category.
    #[must_use]
    pub fn options() -> Vec<Self> {
        std::iter::once(Self::All).chain(C::ALL.iter().copied().map(Self::Only)).collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterState<C> {
    active: Filter<C>,
}

impl<C> Default for FilterState<C> {
    fn default() -> Self {
        Self { active: Filter::All }
    }
}

impl<C: Category> FilterState<C> {
    #[must_use]
    pub fn active(&self) -> Filter<C> {
        self.active
    }

    pub fn select(&mut self, filter: Filter<C>) {
        self.active = filter;
    }

    #[must_use]
    pub fn is_active(&self, filter: Filter<C>) -> bool {
        self.active == filter
    }

    /// Items in the active category, in their original order.
    pub fn apply<'a, T>(&self, items: &'a [T], category_of: impl Fn(&T) -> C) -> Vec<&'a T> {
        items.iter().filter(|item| self.active.matches(category_of(item))).collect()
    }
}

/// At most one selected item, e.g. the project shown in the detail overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection<Id> {
    selected: Option<Id>,
}

impl<Id> Default for Selection<Id> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<Id: Copy + Eq> Selection<Id> {
    /// Select `id`, replacing any previous selection.
    pub fn open(&mut self, id: Id) {
        self.selected = Some(id);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn selected(&self) -> Option<Id> {
        self.selected
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}
