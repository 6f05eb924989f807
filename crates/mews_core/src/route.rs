use std::fmt;

/// Location of the app: `/cats/:page` or `/cat/:catId/:page`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List { page: usize },
    Detail { cat_id: String, page: usize },
}

impl Default for Route {
    fn default() -> Self {
        Route::List { page: 1 }
    }
}

impl Route {
    /// Parses a location path. Anything unmatched, including a page that is
    /// not a positive number, falls back to the first list page.
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path
            .trim()
            .trim_matches('/')
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        let parsed = match segments.as_slice() {
            ["cats", page] => parse_page(page).map(|page| Route::List { page }),
            ["cat", cat_id, page] => parse_page(page).map(|page| Route::Detail {
                cat_id: (*cat_id).to_string(),
                page,
            }),
            _ => None,
        };
        parsed.unwrap_or_default()
    }

    pub fn path(&self) -> String {
        match self {
            Route::List { page } => format!("/cats/{page}"),
            Route::Detail { cat_id, page } => format!("/cat/{cat_id}/{page}"),
        }
    }

    pub fn page(&self) -> usize {
        match self {
            Route::List { page } | Route::Detail { page, .. } => *page,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn parse_page(raw: &str) -> Option<usize> {
    raw.parse::<usize>().ok().filter(|page| *page >= 1)
}
