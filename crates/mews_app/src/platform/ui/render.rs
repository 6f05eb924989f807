use std::io::{self, Write};

use mews_core::{AppViewModel, DetailView, ListView, Route, Screen};

const RULE: &str = "------------------------------------------------------------";

/// Writes one full screen for `view` at `location`.
pub fn render(out: &mut impl Write, view: &AppViewModel, location: &Route) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "mews {location}")?;
    if let Some(error) = &view.error {
        writeln!(out, "! could not load cats: {error}")?;
    }
    match &view.screen {
        Screen::List(list) => render_list(out, list),
        Screen::Detail(detail) => render_detail(out, detail),
    }
}

fn render_list(out: &mut impl Write, list: &ListView) -> io::Result<()> {
    if list.loading {
        return writeln!(out, "Loading cats...");
    }
    writeln!(
        out,
        "Adoptable cats, page {} of {}",
        list.page,
        list.page_count.max(1)
    )?;
    if list.cats.is_empty() {
        writeln!(out, "  (no cats on this page)")?;
    }
    for (slot, card) in list.cats.iter().enumerate() {
        let name = if card.name.is_empty() {
            "(unnamed)"
        } else {
            card.name.as_str()
        };
        writeln!(out, "  [{:>2}] {:<24} #{}", slot + 1, name, card.id)?;
    }
    if let Some(name) = &list.hovered_name {
        writeln!(out, "  > {name}")?;
    }
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "n next page | p prev page | <number> open | h <number> name | g <page> | q quit"
    )
}

fn render_detail(out: &mut impl Write, detail: &DetailView) -> io::Result<()> {
    if detail.loading {
        return writeln!(out, "Loading cat {}...", detail.requested_id);
    }
    match &detail.cat {
        Some(cat) => {
            let position = detail.index.map_or(0, |index| index + 1);
            writeln!(out, "{} ({} of {})", cat.name, position, detail.total)?;
            writeln!(out, "  Sex:     {}", cat.sex)?;
            writeln!(out, "  Age:     {}", cat.age)?;
            writeln!(out, "  Size:    {}", cat.size)?;
            writeln!(out, "  Breed:   {}", cat.breed.trim_end())?;
            if !cat.options.is_empty() {
                writeln!(out, "  Options: {}", cat.options)?;
            }
            if !cat.description.is_empty() {
                writeln!(out)?;
                for line in cat.description.lines() {
                    writeln!(out, "  {}", line.trim())?;
                }
            }
            if !cat.pics.is_empty() {
                writeln!(out)?;
                for pic in cat.pics.iter().filter(|pic| !pic.is_empty()) {
                    writeln!(out, "  photo: {pic}")?;
                }
            }
        }
        None => {
            writeln!(out, "No cat with id {} was found.", detail.requested_id)?;
        }
    }
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "n next cat | p prev cat | b back to page {} | q quit",
        detail.page
    )
}

#[cfg(test)]
mod tests {
    use mews_core::{update, AppState, Cat, Msg, Route, Sex};

    use super::render;

    fn render_text(state: &AppState, route: &Route) -> String {
        let mut out = Vec::new();
        render(&mut out, &state.view(), route).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn state_with(route: Route) -> AppState {
        let mut biscuit = Cat::new("42");
        biscuit.name = "Biscuit".to_string();
        biscuit.sex = Sex::Male;
        biscuit.breed = "Tabby ".to_string();
        biscuit.options = "Spayed/Neutered".to_string();
        biscuit.pics = vec!["http://photos/42-x.jpg".to_string()];
        let (state, _) = update(AppState::new(), Msg::RouteChanged(route));
        let (state, _) = update(state, Msg::CatsLoaded(vec![Cat::new("41"), biscuit]));
        state
    }

    #[test]
    fn list_shows_numbered_cards() {
        let route = Route::List { page: 1 };
        let text = render_text(&state_with(route.clone()), &route);
        assert!(text.contains("page 1 of 1"));
        assert!(text.contains("[ 1] (unnamed)"));
        assert!(text.contains("[ 2] Biscuit"));
        assert!(text.contains("#42"));
    }

    #[test]
    fn detail_shows_fields() {
        let route = Route::Detail {
            cat_id: "42".to_string(),
            page: 1,
        };
        let text = render_text(&state_with(route.clone()), &route);
        assert!(text.contains("Biscuit (2 of 2)"));
        assert!(text.contains("Sex:     Male"));
        assert!(text.contains("Breed:   Tabby\n"));
        assert!(text.contains("photo: http://photos/42-x.jpg"));
        assert!(text.contains("b back to page 1"));
    }

    #[test]
    fn unknown_detail_says_not_found() {
        let route = Route::Detail {
            cat_id: "999".to_string(),
            page: 1,
        };
        let text = render_text(&state_with(route.clone()), &route);
        assert!(text.contains("No cat with id 999 was found."));
    }

    #[test]
    fn load_error_is_shown() {
        let route = Route::List { page: 1 };
        let (state, _) = update(AppState::new(), Msg::RouteChanged(route.clone()));
        let (state, _) = update(state, Msg::CatsFailed("io error: cats.json".to_string()));
        let text = render_text(&state, &route);
        assert!(text.contains("could not load cats: io error: cats.json"));
    }

    #[test]
    fn huge_page_renders_an_empty_grid() {
        let route = Route::List { page: usize::MAX };
        let text = render_text(&state_with(route.clone()), &route);
        assert!(text.contains(&format!("page {} of 1", usize::MAX)));
        assert!(text.contains("(no cats on this page)"));
    }
}
