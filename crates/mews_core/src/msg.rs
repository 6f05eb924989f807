#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The host location changed (startup, typed path, history).
    RouteChanged(crate::Route),
    /// Engine finished loading and translating the collection.
    CatsLoaded(Vec<crate::Cat>),
    /// Engine could not load the collection.
    CatsFailed(String),
    /// User picked a card in the list view.
    CatClicked { cat_id: String },
    /// User pointed at a card; its name is shown under the grid.
    CatHovered(Option<String>),
    /// User clicked Back in the detail view.
    BackClicked,
    /// Next/Prev in the detail view.
    NextCat,
    PrevCat,
    /// Next/Prev in the list view.
    NextPage,
    PrevPage,
    /// Jump straight to a list page (1-indexed).
    GoToPage(usize),
    /// Fallback for placeholder wiring.
    NoOp,
}
