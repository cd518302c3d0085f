//! US state gazetteer
//!
//! The fixed 50-item state name set, lower-cased for matching. Membership
//! checks are case-insensitive; canonical output is Title-Case.

/// The 50 US state names, lower-cased.
pub const US_STATES: [&str; 50] = [
    "alabama",
    "alaska",
    "arizona",
    "arkansas",
    "california",
    "colorado",
    "connecticut",
    "delaware",
    "florida",
    "georgia",
    "hawaii",
    "idaho",
    "illinois",
    "indiana",
    "iowa",
    "kansas",
    "kentucky",
    "louisiana",
    "maine",
    "maryland",
    "massachusetts",
    "michigan",
    "minnesota",
    "mississippi",
    "missouri",
    "montana",
    "nebraska",
    "nevada",
    "new hampshire",
    "new jersey",
    "new mexico",
    "new york",
    "north carolina",
    "north dakota",
    "ohio",
    "oklahoma",
    "oregon",
    "pennsylvania",
    "rhode island",
    "south carolina",
    "south dakota",
    "tennessee",
    "texas",
    "utah",
    "vermont",
    "virginia",
    "washington",
    "west virginia",
    "wisconsin",
    "wyoming",
];

/// Case-insensitive membership test against the 50-state set.
pub fn is_state(name: &str) -> bool {
    let lower = name.trim().to_lowercase();
    US_STATES.contains(&lower.as_str())
}

/// Canonical Title-Case form of a state name, or `None` if the text is not
/// an exact (case-insensitive) state name.
pub fn canonical_state(name: &str) -> Option<String> {
    let lower = name.trim().to_lowercase();
    if US_STATES.contains(&lower.as_str()) {
        Some(title_case(&lower))
    } else {
        None
    }
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
