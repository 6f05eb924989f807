use crate::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Load the cat collection from the configured source.
    FetchCats,
    /// The host should mirror the new location.
    Navigate(Route),
}
