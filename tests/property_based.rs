mod common;

use common::asserts::assert_simple;
use common::builders::{cors, preflight_request, simple_request};
use common::headers::header_value;
use cors_filter::constants::{MAX_AGE_CEILING, header, method};
use cors_filter::{CorsDecision, Origin, canonical_header_name};
use proptest::prelude::*;

fn staggered_case(input: &str) -> String {
    input
        .chars()
        .enumerate()
        .map(|(idx, ch)| {
            if idx % 2 == 0 {
                ch.to_ascii_lowercase()
            } else {
                ch.to_ascii_uppercase()
            }
        })
        .collect()
}

fn subdomain_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9]{1,16}").unwrap()
}

fn header_name_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z]{1,8}(-[A-Za-z]{1,8}){0,2}").unwrap()
}

proptest! {
    #[test]
    fn listed_origin_is_echoed_for_arbitrary_subdomain(subdomain in subdomain_strategy()) {
        let origin = format!("https://{}.example.com", subdomain);
        let cors = cors().origin(Origin::list([origin.clone()])).build();

        let headers = assert_simple(simple_request().origin(origin.as_str()).check(&cors));

        prop_assert_eq!(
            header_value(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(origin.as_str())
        );
    }

    #[test]
    fn allowed_headers_matching_is_case_insensitive(name in header_name_strategy()) {
        let cors = cors().allowed_headers([name.to_uppercase()]).build();

        let decision = preflight_request()
            .origin("https://prop.test")
            .request_method(method::GET)
            .request_headers(staggered_case(&name))
            .check(&cors);

        prop_assert!(
            matches!(decision, CorsDecision::PreflightAccepted { .. }),
            "unexpected decision"
        );
    }

    #[test]
    fn canonical_header_name_is_idempotent(name in header_name_strategy()) {
        let once = canonical_header_name(&name);

        prop_assert_eq!(canonical_header_name(&once), once.clone());
    }

    #[test]
    fn emitted_max_age_never_exceeds_ceiling(max_age in 1u64..100_000) {
        let cors = cors().max_age(max_age).build();

        let decision = preflight_request()
            .origin("https://prop.test")
            .request_method(method::GET)
            .check(&cors);

        let CorsDecision::PreflightAccepted { headers, .. } = decision else {
            return Err(TestCaseError::fail("expected accepted preflight"));
        };
        let emitted: u64 = header_value(&headers, header::ACCESS_CONTROL_MAX_AGE)
            .expect("max-age header")
            .parse()
            .expect("numeric max-age");
        prop_assert_eq!(emitted, max_age.min(MAX_AGE_CEILING));
    }
}
