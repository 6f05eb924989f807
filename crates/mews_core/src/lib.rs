//! Mews core: pure collection, pagination and view state machine.
mod cat;
mod collection;
mod effect;
mod msg;
mod pagination;
mod route;
mod state;
mod update;
mod view_model;

pub use cat::{Cat, Sex};
pub use collection::{CatCollection, InvalidIndexError};
pub use effect::Effect;
pub use msg::Msg;
pub use pagination::{Pager, DEFAULT_PAGE_SIZE};
pub use route::Route;
pub use state::{AppState, View};
pub use update::update;
pub use view_model::{AppViewModel, CatCard, DetailView, ListView, Screen};
