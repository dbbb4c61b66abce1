//! Fixture runner
//!
//! Runs every scenario through `extract` and compares each field.
use super::fixture_loader::{
    ExpectedMatch, FixtureFailure, FixtureResult, TestCase, load_scenarios,
};
use uriscan::{HostKind, MatchSpan, UriComponents, extract, parse_uri};

fn host_kind_name(kind: HostKind) -> &'static str {
    match kind {
        HostKind::Ipv6 => "ipv6",
        HostKind::Ipv4 => "ipv4",
        HostKind::Domain => "domain",
    }
}

fn compare(
    failures: &mut Vec<FixtureFailure>,
    case_num: usize,
    input: &str,
    field: &str,
    expected: Option<&str>,
    actual: Option<&str>,
) {
    if expected != actual {
        failures.push(FixtureFailure {
            case_num,
            input: input.to_string(),
            field: field.to_string(),
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        });
    }
}

fn check_match(
    failures: &mut Vec<FixtureFailure>,
    case_num: usize,
    input: &str,
    expected: &ExpectedMatch,
    span: &MatchSpan<'_>,
    uri: &UriComponents<'_>,
) {
    let start = expected.start.to_string();
    let end = expected.end.to_string();
    let actual_start = span.start().to_string();
    let actual_end = span.end().to_string();
    let checks = [
        ("text", Some(expected.text.as_str()), Some(span.as_str())),
        ("start", Some(start.as_str()), Some(actual_start.as_str())),
        ("end", Some(end.as_str()), Some(actual_end.as_str())),
        ("scheme", Some(expected.scheme.as_str()), Some(uri.scheme())),
        ("userinfo", expected.userinfo.as_deref(), uri.userinfo()),
        (
            "host_kind",
            Some(expected.host_kind.as_str()),
            Some(host_kind_name(uri.host().kind())),
        ),
        ("host", Some(expected.host.as_str()), Some(uri.host().as_str())),
        ("port", expected.port.as_deref(), uri.port()),
        ("path", expected.path.as_deref(), uri.path()),
        ("query", expected.query.as_deref(), uri.query()),
        ("fragment", expected.fragment.as_deref(), uri.fragment()),
    ];
    for (field, expected, actual) in checks {
        compare(failures, case_num, input, field, expected, actual);
    }
}

/// Run fixture cases and return results
pub fn run_fixtures(cases: Vec<TestCase>) -> FixtureResult {
    let mut result = FixtureResult::default();
    let mut case_num = 0;

    for case in cases {
        let TestCase::Extract { input, matches } = case else {
            continue;
        };
        case_num += 1;

        let before = result.failures.len();
        let found: Vec<_> = extract(&input).collect();
        if found.len() != matches.len() {
            result.failures.push(FixtureFailure {
                case_num,
                input: input.clone(),
                field: "match count".to_string(),
                expected: matches.len().to_string(),
                actual: found.len().to_string(),
            });
        }
        for (expected, (span, uri)) in matches.iter().zip(&found) {
            check_match(&mut result.failures, case_num, &input, expected, span, uri);

            // Every match parses on its own to the same components
            if parse_uri(span.as_str()).as_ref() != Ok(uri) {
                result.failures.push(FixtureFailure {
                    case_num,
                    input: input.clone(),
                    field: "round trip".to_string(),
                    expected: span.as_str().to_string(),
                    actual: format!("{:?}", parse_uri(span.as_str())),
                });
            }
        }

        if result.failures.len() == before {
            result.passed += 1;
        } else {
            result.failed += 1;
        }
    }

    result
}

#[test]
fn test_scenarios() {
    let result = run_fixtures(load_scenarios());
    for failure in &result.failures {
        eprintln!(
            "case {} {:?}: {} expected {} got {}",
            failure.case_num, failure.input, failure.field, failure.expected, failure.actual
        );
    }
    assert_eq!(result.failed, 0, "{}", result.summary());
    assert!(result.passed >= 20, "{}", result.summary());
}
