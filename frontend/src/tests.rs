#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::Route;
    use pretty_assertions::assert_eq;
    use yew_router::Routable;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::SignIn.to_path(), "/sign-in");
        assert_eq!(Route::Analytics.to_path(), "/analytics");
        assert_eq!(Route::Verification.to_path(), "/verification");
    }

    #[test]
    fn test_route_recognition() {
        assert_eq!(Route::recognize("/analytics"), Some(Route::Analytics));
        assert_eq!(Route::recognize("/verification"), Some(Route::Verification));
        assert_eq!(Route::recognize("/missing"), Some(Route::NotFound));
    }

    #[test]
    fn test_sign_in_path_matches_route() {
        assert_eq!(Config::sign_in_path(), Route::SignIn.to_path());
    }

    #[test]
    fn test_page_titles() {
        assert_eq!(Config::ANALYTICS_TITLE, "Analytics | Swasthya");
        assert_eq!(Config::VERIFICATION_TITLE, "Verification | Swasthya");
        for title in [Config::ANALYTICS_TITLE, Config::VERIFICATION_TITLE, Config::SIGN_IN_TITLE] {
            assert!(title.ends_with(Config::APP_NAME));
            assert!(!title.contains("  "));
        }
    }

    #[test]
    fn test_reveal_delay() {
        assert_eq!(Config::reveal_delay_ms(), 5_000);
    }
}
