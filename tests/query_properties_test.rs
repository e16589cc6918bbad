//! Property tests for ISBN validation and search URL construction

use classify_lcc::config::SiteEndpoints;
use classify_lcc::query::{build_isbn_url, build_title_author_url, clean_isbn_input, is_valid_isbn};
use proptest::prelude::*;

proptest! {
    #[test]
    fn ten_digit_isbns_are_valid(digits in "[0-9]{9}", check in "[0-9Xx]") {
        let isbn = format!("{digits}{check}");
        prop_assert!(is_valid_isbn(&isbn));
    }

    #[test]
    fn thirteen_digit_isbns_are_valid(isbn in "[0-9]{13}") {
        prop_assert!(is_valid_isbn(&isbn));
    }

    #[test]
    fn other_lengths_are_invalid(isbn in "[0-9]{0,20}") {
        prop_assume!(isbn.len() != 10 && isbn.len() != 13);
        prop_assert!(!is_valid_isbn(&isbn));
    }

    #[test]
    fn x_is_only_allowed_last(prefix in "[0-9]{0,8}", suffix in "[0-9]{1,9}") {
        let isbn = format!("{prefix}X{suffix}");
        prop_assume!(isbn.len() == 10 || isbn.len() == 13);
        prop_assert!(!is_valid_isbn(&isbn));
    }

    #[test]
    fn cleaning_removes_separators(isbn in "[0-9]{13}", gaps in proptest::collection::vec("[ \t-]{0,2}", 13)) {
        let typed: String = isbn
            .chars()
            .zip(gaps.iter())
            .map(|(digit, gap)| format!("{gap}{digit}"))
            .collect();
        prop_assert_eq!(clean_isbn_input(&typed), isbn);
    }

    #[test]
    fn title_author_url_has_no_spaces(title in "[A-Za-z ]{1,30}", author in "[A-Za-z ]{0,30}") {
        let endpoints = SiteEndpoints::default();
        let url = build_title_author_url(&endpoints, &title, &author);
        prop_assert!(!url.contains(' '));
        prop_assert!(url.starts_with(&endpoints.title_search_prefix()));
        prop_assert!(url.ends_with("&startRec=0"));
        let encoded_title = title.replace(' ', "%20");
        prop_assert!(url.contains(&encoded_title));
    }

    #[test]
    fn isbn_url_is_prefix_plus_isbn(isbn in "[0-9]{13}") {
        let endpoints = SiteEndpoints::default();
        prop_assert_eq!(
            build_isbn_url(&endpoints, &isbn),
            format!("{}{isbn}", endpoints.isbn_search_prefix())
        );
    }
}
