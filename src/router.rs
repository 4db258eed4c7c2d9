use yew_router::prelude::*;

// Matched top to bottom, first match wins. Anything unmatched lands on
// NotFound, which renders nothing.
#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use yew_router::Routable;

    use super::Route;

    #[test]
    fn test_root_is_home() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::Home.to_path(), "/");
    }

    #[test]
    fn test_other_paths_are_not_found() {
        for path in ["/brands", "/admin/dashboard", "/404", "/home"] {
            assert_eq!(Route::recognize(path), Some(Route::NotFound), "{path}");
        }
    }

    #[test]
    fn test_route_table_has_a_single_page() {
        let not_found = Route::not_found_route().map(|route| route.to_path());
        let pages: Vec<&str> = Route::routes()
            .into_iter()
            .filter(|path| Some(path.to_string()) != not_found)
            .collect();

        assert_eq!(pages, vec!["/"]);
    }
}
