use mews_core::Route;

#[test]
fn parses_list_and_detail_paths() {
    assert_eq!(Route::parse("/cats/3"), Route::List { page: 3 });
    assert_eq!(
        Route::parse("/cat/24151882/2"),
        Route::Detail {
            cat_id: "24151882".to_string(),
            page: 2
        }
    );
}

#[test]
fn unmatched_paths_default_to_first_page() {
    for path in [
        "",
        "/",
        "/dogs/2",
        "/cats",
        "/cats/x",
        "/cats/0",
        "/cat/12",
        "/cats/1/2/3",
    ] {
        assert_eq!(Route::parse(path), Route::List { page: 1 }, "path {path:?}");
    }
}

#[test]
fn tolerates_missing_or_trailing_slashes() {
    assert_eq!(Route::parse("cats/2/"), Route::List { page: 2 });
    assert_eq!(Route::parse("  /cats/4  "), Route::List { page: 4 });
}

#[test]
fn path_renders_back_to_parseable_form() {
    let route = Route::Detail {
        cat_id: "7".to_string(),
        page: 5,
    };
    assert_eq!(route.path(), "/cat/7/5");
    assert_eq!(route.to_string(), "/cat/7/5");
    assert_eq!(Route::parse(&route.path()), route);
    assert_eq!(route.page(), 5);
}

#[test]
fn huge_pages_parse_and_overflowing_ones_fall_back() {
    assert_eq!(
        Route::parse(&format!("/cats/{}", usize::MAX)),
        Route::List { page: usize::MAX }
    );
    assert_eq!(
        Route::parse("/cats/99999999999999999999999999"),
        Route::List { page: 1 }
    );
    assert_eq!(
        Route::parse(&format!("/cat/9/{}", usize::MAX)).page(),
        usize::MAX
    );
}
