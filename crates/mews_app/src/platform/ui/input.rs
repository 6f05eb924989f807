use mews_core::{AppViewModel, Msg, Route, Screen};

pub const HELP: &str = "\
list:   n next page, p prev page, <number> open cat, h <number> show name, h clear name, g <page> go to page
detail: n next cat, p prev cat, b back to list
any:    r <path> go to a location (/cats/2, /cat/<id>/1), enter redraw, ? help, q quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Msg(Msg),
    Redraw,
    Help,
    Quit,
    Unknown(String),
}

/// Maps one typed line to a command for the screen currently shown.
pub fn parse_command(line: &str, view: &AppViewModel) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match (word, &view.screen) {
        ("", _) => Command::Redraw,
        ("q" | "quit", _) => Command::Quit,
        ("?" | "help", _) => Command::Help,
        ("r", _) if !rest.is_empty() => Command::Msg(Msg::RouteChanged(Route::parse(rest))),
        ("n", Screen::List(_)) => Command::Msg(Msg::NextPage),
        ("p", Screen::List(_)) => Command::Msg(Msg::PrevPage),
        ("g", Screen::List(_)) => match rest.parse::<usize>() {
            Ok(page) => Command::Msg(Msg::GoToPage(page)),
            Err(_) => Command::Unknown(line.to_string()),
        },
        ("h", Screen::List(_)) if rest.is_empty() => Command::Msg(Msg::CatHovered(None)),
        ("h", Screen::List(list)) => match card_at(list, rest) {
            Some(card) => Command::Msg(Msg::CatHovered(Some(card.name.clone()))),
            None => Command::Unknown(line.to_string()),
        },
        (slot, Screen::List(list)) if rest.is_empty() => match card_at(list, slot) {
            Some(card) => Command::Msg(Msg::CatClicked {
                cat_id: card.id.clone(),
            }),
            None => Command::Unknown(line.to_string()),
        },
        ("n", Screen::Detail(_)) => Command::Msg(Msg::NextCat),
        ("p", Screen::Detail(_)) => Command::Msg(Msg::PrevCat),
        ("b", Screen::Detail(_)) => Command::Msg(Msg::BackClicked),
        _ => Command::Unknown(line.to_string()),
    }
}

// Slots are numbered from 1 as printed.
fn card_at<'a>(list: &'a mews_core::ListView, slot: &str) -> Option<&'a mews_core::CatCard> {
    let slot = slot.parse::<usize>().ok()?;
    list.cats.get(slot.checked_sub(1)?)
}

#[cfg(test)]
mod tests {
    use mews_core::{update, AppState, Cat, Msg, Route};

    use super::{parse_command, Command};

    fn list_state() -> AppState {
        let mut luna = Cat::new("7");
        luna.name = "Luna".to_string();
        let (state, _) = update(AppState::new(), Msg::RouteChanged(Route::List { page: 1 }));
        let (state, _) = update(state, Msg::CatsLoaded(vec![Cat::new("5"), luna]));
        state
    }

    #[test]
    fn list_commands() {
        let view = list_state().view();
        assert_eq!(parse_command("n", &view), Command::Msg(Msg::NextPage));
        assert_eq!(parse_command(" p ", &view), Command::Msg(Msg::PrevPage));
        assert_eq!(parse_command("g 3", &view), Command::Msg(Msg::GoToPage(3)));
        assert_eq!(
            parse_command("2", &view),
            Command::Msg(Msg::CatClicked {
                cat_id: "7".to_string()
            })
        );
        assert_eq!(
            parse_command("h 2", &view),
            Command::Msg(Msg::CatHovered(Some("Luna".to_string())))
        );
        assert_eq!(parse_command("h", &view), Command::Msg(Msg::CatHovered(None)));
    }

    #[test]
    fn out_of_range_slot_is_unknown() {
        let view = list_state().view();
        assert_eq!(parse_command("0", &view), Command::Unknown("0".to_string()));
        assert_eq!(parse_command("3", &view), Command::Unknown("3".to_string()));
        assert_eq!(parse_command("b", &view), Command::Unknown("b".to_string()));
    }

    #[test]
    fn detail_commands() {
        let (state, _) = update(
            list_state(),
            Msg::CatClicked {
                cat_id: "7".to_string(),
            },
        );
        let view = state.view();
        assert_eq!(parse_command("n", &view), Command::Msg(Msg::NextCat));
        assert_eq!(parse_command("p", &view), Command::Msg(Msg::PrevCat));
        assert_eq!(parse_command("b", &view), Command::Msg(Msg::BackClicked));
        assert_eq!(parse_command("g 2", &view), Command::Unknown("g 2".to_string()));
    }

    #[test]
    fn shared_commands() {
        let view = list_state().view();
        assert_eq!(parse_command("", &view), Command::Redraw);
        assert_eq!(parse_command("q", &view), Command::Quit);
        assert_eq!(parse_command("?", &view), Command::Help);
        assert_eq!(
            parse_command("r /cat/5/1", &view),
            Command::Msg(Msg::RouteChanged(Route::Detail {
                cat_id: "5".to_string(),
                page: 1
            }))
        );
    }
}
