use crate::Cat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub screen: Screen,
    pub error: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    List(ListView),
    Detail(DetailView),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListView {
    pub page: usize,
    pub page_count: usize,
    pub cats: Vec<CatCard>,
    pub loading: bool,
    pub hovered_name: Option<String>,
}

/// One grid cell. `position` is the index in the whole collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatCard {
    pub position: usize,
    pub id: String,
    pub name: String,
    pub thumbnail: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub requested_id: String,
    /// `None` while loading or when the requested id is unknown.
    pub cat: Option<Cat>,
    pub index: Option<usize>,
    pub total: usize,
    pub page: usize,
    pub loading: bool,
}
