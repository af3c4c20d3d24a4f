/// Extension routes and path matching for the sidebar/onboarding apps
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TopLevelRoute {
    Onboarding,
    Notifications,
    Unlock,
    Settings,
    Transfer,
    Receive,
}

impl TopLevelRoute {
    pub fn as_str(&self) -> &'static str {
        match self {
            TopLevelRoute::Onboarding => "onboarding",
            TopLevelRoute::Notifications => "notifications",
            TopLevelRoute::Unlock => "unlock",
            TopLevelRoute::Settings => "settings",
            TopLevelRoute::Transfer => "transfer",
            TopLevelRoute::Receive => "receive",
        }
    }
}

/// Match a route pattern against a pathname.
///
/// Rules:
/// 1. Leading/trailing slashes are ignored
/// 2. Literal segments compare case-insensitively
/// 3. `:name` matches exactly one non-empty segment
/// 4. A trailing `*` matches the rest of the path (including nothing)
///
/// Examples:
/// - `/settings/:tab` matches `/settings/privacy`
/// - `/onboarding/*` matches `/onboarding/import/seed`
/// - `/settings` does not match `/settings/privacy`
pub fn matches_path(pattern: &str, pathname: &str) -> bool {
    let pattern_segments = split_segments(pattern);
    let path_segments = split_segments(pathname);

    let (pattern_segments, splat) = match pattern_segments.split_last() {
        Some((&"*", rest)) => (rest, true),
        _ => (pattern_segments.as_slice(), false),
    };

    if path_segments.len() < pattern_segments.len()
        || (!splat && path_segments.len() != pattern_segments.len())
    {
        return false;
    }

    pattern_segments
        .iter()
        .zip(path_segments.iter())
        .all(|(expected, actual)| {
            if expected.starts_with(':') {
                !actual.is_empty()
            } else {
                expected.eq_ignore_ascii_case(actual)
            }
        })
}

fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}
