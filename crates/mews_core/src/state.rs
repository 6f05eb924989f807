use crate::view_model::{AppViewModel, CatCard, DetailView, ListView, Screen};
use crate::{CatCollection, Effect, Pager, Route};

/// Which of the two mutually exclusive screens is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    List { page: usize },
    /// `page` is the list page to return to.
    Detail { cat_id: String, page: usize },
}

impl Default for View {
    fn default() -> Self {
        View::List { page: 1 }
    }
}

impl View {
    pub fn route(&self) -> Route {
        match self {
            View::List { page } => Route::List { page: *page },
            View::Detail { cat_id, page } => Route::Detail {
                cat_id: cat_id.clone(),
                page: *page,
            },
        }
    }
}

impl From<Route> for View {
    fn from(route: Route) -> Self {
        match route {
            Route::List { page } => View::List { page },
            Route::Detail { cat_id, page } => View::Detail { cat_id, page },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    collection: CatCollection,
    pager: Pager,
    view: View,
    loading: bool,
    error: Option<String>,
    hovered_name: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            pager: Pager::new(page_size),
            ..Self::default()
        }
    }

    pub fn collection(&self) -> &CatCollection {
        &self.collection
    }

    pub fn current_view(&self) -> &View {
        &self.view
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn view(&self) -> AppViewModel {
        let screen = match &self.view {
            View::List { page } => {
                let page = *page;
                let offset = self.pager.offset(page);
                let cats = self
                    .pager
                    .slice(self.collection.cats(), page)
                    .iter()
                    .enumerate()
                    .map(|(slot, cat)| CatCard {
                        position: offset.saturating_add(slot),
                        id: cat.id().to_string(),
                        name: cat.name.clone(),
                        thumbnail: cat.thumbnail.clone(),
                    })
                    .collect();
                Screen::List(ListView {
                    page,
                    page_count: self.pager.page_count(self.collection.len()),
                    cats,
                    loading: self.loading,
                    hovered_name: self.hovered_name.clone(),
                })
            }
            View::Detail { cat_id, page } => Screen::Detail(DetailView {
                requested_id: cat_id.clone(),
                cat: self.collection.active_cat().cloned(),
                index: self.collection.active_index(),
                total: self.collection.len(),
                page: *page,
                loading: self.loading,
            }),
        };

        AppViewModel {
            screen,
            error: self.error.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether the state changed since the last call and clears
    /// the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn pager(&self) -> Pager {
        self.pager
    }

    pub(crate) fn collection_mut(&mut self) -> &mut CatCollection {
        &mut self.collection
    }

    pub(crate) fn set_view(&mut self, view: View) {
        self.view = view;
    }

    pub(crate) fn set_hovered_name(&mut self, name: Option<String>) {
        self.hovered_name = name;
    }

    /// Single-flight guard: a fetch is requested only while nothing is
    /// cached and nothing is in flight.
    pub(crate) fn request_cats(&mut self) -> Option<Effect> {
        if self.collection.is_populated() || self.loading {
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(Effect::FetchCats)
    }

    pub(crate) fn finish_loading(&mut self, error: Option<String>) {
        self.loading = false;
        self.error = error;
    }
}
