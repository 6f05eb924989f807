use mews_logging::{mews_debug, mews_info, mews_warn};

use crate::{AppState, Effect, Msg, Route, View};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::RouteChanged(route) => {
            mews_debug!("Route changed to {}", route);
            let view = View::from(route);
            if let View::Detail { cat_id, .. } = &view {
                if state.collection().is_populated() {
                    select_or_clear(&mut state, cat_id);
                } else {
                    state.collection_mut().clear_active();
                }
            }
            state.set_view(view);
            state.mark_dirty();
            state.request_cats().into_iter().collect()
        }
        Msg::CatsLoaded(cats) => {
            let count = cats.len();
            if state.collection_mut().populate(cats) {
                mews_info!("Loaded {} cats", count);
                state.finish_loading(None);
                if let View::Detail { cat_id, .. } = state.current_view().clone() {
                    select_or_clear(&mut state, &cat_id);
                }
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::CatsFailed(message) => {
            mews_warn!("Loading cats failed: {}", message);
            state.finish_loading(Some(message));
            state.mark_dirty();
            Vec::new()
        }
        Msg::CatClicked { cat_id } => match state.current_view().clone() {
            View::List { page } => {
                if state.collection_mut().select_by_id(&cat_id).is_some() {
                    navigate(&mut state, View::Detail { cat_id, page })
                } else {
                    mews_warn!("Clicked cat {} is not in the collection", cat_id);
                    Vec::new()
                }
            }
            View::Detail { .. } => Vec::new(),
        },
        Msg::CatHovered(name) => {
            if matches!(state.current_view(), View::List { .. }) {
                state.set_hovered_name(name);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::BackClicked => match state.current_view().clone() {
            View::Detail { page, .. } => navigate(&mut state, View::List { page }),
            View::List { .. } => Vec::new(),
        },
        Msg::NextCat => step_cat(&mut state, 1),
        Msg::PrevCat => step_cat(&mut state, -1),
        Msg::NextPage => match state.current_view().clone() {
            View::List { page } => {
                let next = state.pager().next(page, state.collection().len());
                navigate(&mut state, View::List { page: next })
            }
            View::Detail { .. } => Vec::new(),
        },
        Msg::PrevPage => match state.current_view().clone() {
            View::List { page } => {
                let prev = state.pager().prev(page, state.collection().len());
                navigate(&mut state, View::List { page: prev })
            }
            View::Detail { .. } => Vec::new(),
        },
        Msg::GoToPage(page) => {
            if matches!(state.current_view(), View::List { .. }) {
                navigate(&mut state, View::List { page: page.max(1) })
            } else {
                Vec::new()
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn select_or_clear(state: &mut AppState, cat_id: &str) {
    if state.collection_mut().select_by_id(cat_id).is_none() {
        mews_warn!("No cat with id {} in the collection", cat_id);
        state.collection_mut().clear_active();
    }
}

fn step_cat(state: &mut AppState, delta: isize) -> Vec<Effect> {
    let page = match state.current_view() {
        View::Detail { page, .. } => *page,
        View::List { .. } => return Vec::new(),
    };
    // With no active cat, next starts at the first and prev at the last.
    let target = match state.collection().active_index() {
        Some(index) => index as isize + delta,
        None if delta > 0 => 0,
        None => -1,
    };
    let cat_id = match state.collection_mut().cycle_to(target) {
        Some(cat) => cat.id().to_string(),
        None => return Vec::new(),
    };
    navigate(state, View::Detail { cat_id, page })
}

fn navigate(state: &mut AppState, view: View) -> Vec<Effect> {
    let route: Route = view.route();
    state.set_view(view);
    state.mark_dirty();
    vec![Effect::Navigate(route)]
}
