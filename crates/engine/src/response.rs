//! Response rendering
//!
//! Turns a structured query result into the chat answer. Single-value
//! answers are plain sentences; the history series and comparisons render
//! as markdown for clients that display it.

use crate::result::QueryResult;

const NOT_FOUND: &str = "Sorry, I couldn't find information for that query.";
const NO_DATA: &str = "No data available";

/// Render a query result as the user-facing answer. `None` and results
/// too thin to phrase (a one-entry comparison) render as the generic
/// not-found reply.
pub fn render_response(result: Option<&QueryResult>) -> String {
    let Some(result) = result else {
        return NOT_FOUND.to_string();
    };

    match result {
        QueryResult::CurrentRate {
            state,
            rate_text,
            note,
        } => {
            let suffix = note
                .as_deref()
                .map(|n| format!(" {n}"))
                .unwrap_or_default();
            format!(
                "The current minimum wage in {state} is {}{suffix}",
                clean_value(rate_text)
            )
        }
        QueryResult::HistoryPoint { state, year, rate } => {
            format!(
                "The minimum wage in {state} in {year} was {}.",
                dollar_text(rate)
            )
        }
        QueryResult::HistorySeries { state, series } => render_series(state, series),
        QueryResult::TippedRate { state, rate } => {
            format!(
                "In {state}, the minimum wage for tipped workers is {}.",
                dollar_text(rate)
            )
        }
        QueryResult::AgeProvision { state, provision } => {
            format!("In {state}, {}.", clean_value(provision))
        }
        QueryResult::Highest { state, rate_text } => {
            format!(
                "The state with the highest minimum wage is {state} at {}.",
                clean_value(rate_text)
            )
        }
        QueryResult::LowestTies { value, states } => {
            format!(
                "The states with the lowest minimum wage ({value:.2}) are: {}.",
                states.join(", ")
            )
        }
        QueryResult::TippedExtreme {
            state,
            rate,
            highest,
        } => {
            let which = if *highest { "highest" } else { "lowest" };
            format!(
                "The state with the {which} tipped minimum wage is {state} at {}.",
                dollar_text(rate)
            )
        }
        QueryResult::Comparison { entries } => {
            if entries.len() < 2 {
                return NOT_FOUND.to_string();
            }
            let mut text = String::from("### Comparison\n\n");
            for entry in entries {
                text.push_str(&format!("- **{}**: ${:.2}\n\n", entry.state, entry.value));
            }
            let diff = entries[0].value - entries[1].value;
            if diff == 0.0 {
                text.push_str("→ Both states have the same minimum wage.");
            } else {
                let winner = if diff > 0.0 {
                    &entries[0].state
                } else {
                    &entries[1].state
                };
                text.push_str(&format!(
                    "→ **{winner}** has a higher minimum wage by **${:.2}**.",
                    diff.abs()
                ));
            }
            text
        }
    }
}

fn render_series(state: &str, series: &[(String, String)]) -> String {
    let mut text = format!("**Full historical data for {state}:**\n\n");
    text.push_str("| Year | Rate |\n|---|---|\n");
    for (year, rate) in series {
        let rate = if rate.is_empty() { "-" } else { rate.as_str() };
        text.push_str(&format!("| {year} | {rate} |\n"));
    }
    text
}

/// Empty or placeholder cells read as missing data.
fn clean_value(cell: &str) -> &str {
    let trimmed = cell.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        NO_DATA
    } else {
        trimmed
    }
}

/// Show a rate cell as a dollar amount without doubling the sign; the
/// datasets are inconsistent about including it.
fn dollar_text(cell: &str) -> String {
    let cleaned = clean_value(cell);
    if cleaned == NO_DATA || cleaned.starts_with('$') {
        cleaned.to_string()
    } else {
        format!("${cleaned}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::CompareEntry;

    #[test]
    fn test_none_renders_not_found() {
        assert_eq!(
            render_response(None),
            "Sorry, I couldn't find information for that query."
        );
    }

    #[test]
    fn test_current_with_and_without_note() {
        let with_note = QueryResult::CurrentRate {
            state: "Texas".to_string(),
            rate_text: "$7.25".to_string(),
            note: Some("(federal default)".to_string()),
        };
        assert_eq!(
            render_response(Some(&with_note)),
            "The current minimum wage in Texas is $7.25 (federal default)"
        );

        let bare = QueryResult::CurrentRate {
            state: "California".to_string(),
            rate_text: "$16.00".to_string(),
            note: None,
        };
        assert_eq!(
            render_response(Some(&bare)),
            "The current minimum wage in California is $16.00"
        );
    }

    #[test]
    fn test_empty_rate_reads_as_no_data() {
        let result = QueryResult::CurrentRate {
            state: "Alabama".to_string(),
            rate_text: String::new(),
            note: None,
        };
        assert_eq!(
            render_response(Some(&result)),
            "The current minimum wage in Alabama is No data available"
        );
    }

    #[test]
    fn test_history_point() {
        let result = QueryResult::HistoryPoint {
            state: "Washington".to_string(),
            year: 2005,
            rate: "7.35".to_string(),
        };
        assert_eq!(
            render_response(Some(&result)),
            "The minimum wage in Washington in 2005 was $7.35."
        );
    }

    #[test]
    fn test_history_series_markdown() {
        let result = QueryResult::HistorySeries {
            state: "Washington".to_string(),
            series: vec![
                ("2000".to_string(), "$6.50".to_string()),
                ("2005".to_string(), String::new()),
            ],
        };
        let text = render_response(Some(&result));
        assert!(text.starts_with("**Full historical data for Washington:**"));
        assert!(text.contains("| 2000 | $6.50 |"));
        assert!(text.contains("| 2005 | - |"));
    }

    #[test]
    fn test_tipped_does_not_double_dollar_sign() {
        let result = QueryResult::TippedRate {
            state: "Nevada".to_string(),
            rate: "$12.00".to_string(),
        };
        assert_eq!(
            render_response(Some(&result)),
            "In Nevada, the minimum wage for tipped workers is $12.00."
        );
    }

    #[test]
    fn test_age_provision() {
        let result = QueryResult::AgeProvision {
            state: "Florida".to_string(),
            provision: "a work certificate is required under age 18".to_string(),
        };
        assert_eq!(
            render_response(Some(&result)),
            "In Florida, a work certificate is required under age 18."
        );
    }

    #[test]
    fn test_age_provision_empty_reads_as_no_data() {
        let result = QueryResult::AgeProvision {
            state: "Texas".to_string(),
            provision: String::new(),
        };
        assert_eq!(render_response(Some(&result)), "In Texas, No data available.");
    }

    #[test]
    fn test_extremes() {
        let highest = QueryResult::Highest {
            state: "Washington".to_string(),
            rate_text: "$16.28".to_string(),
        };
        assert_eq!(
            render_response(Some(&highest)),
            "The state with the highest minimum wage is Washington at $16.28."
        );

        let lowest = QueryResult::LowestTies {
            value: 5.15,
            states: vec!["Georgia".to_string(), "Wyoming".to_string()],
        };
        assert_eq!(
            render_response(Some(&lowest)),
            "The states with the lowest minimum wage (5.15) are: Georgia, Wyoming."
        );

        let tipped = QueryResult::TippedExtreme {
            state: "Washington".to_string(),
            rate: "$16.28".to_string(),
            highest: true,
        };
        assert_eq!(
            render_response(Some(&tipped)),
            "The state with the highest tipped minimum wage is Washington at $16.28."
        );
    }

    #[test]
    fn test_comparison() {
        let result = QueryResult::Comparison {
            entries: vec![
                CompareEntry {
                    state: "Texas".to_string(),
                    value: 7.25,
                },
                CompareEntry {
                    state: "California".to_string(),
                    value: 16.0,
                },
            ],
        };
        let text = render_response(Some(&result));
        assert!(text.starts_with("### Comparison"));
        assert!(text.contains("- **Texas**: $7.25"));
        assert!(text.contains("- **California**: $16.00"));
        assert!(text.ends_with("→ **California** has a higher minimum wage by **$8.75**."));
    }

    #[test]
    fn test_comparison_tie_and_short() {
        let tie = QueryResult::Comparison {
            entries: vec![
                CompareEntry {
                    state: "Georgia".to_string(),
                    value: 5.15,
                },
                CompareEntry {
                    state: "Wyoming".to_string(),
                    value: 5.15,
                },
            ],
        };
        assert!(render_response(Some(&tie)).ends_with("→ Both states have the same minimum wage."));

        let short = QueryResult::Comparison {
            entries: vec![CompareEntry {
                state: "Texas".to_string(),
                value: 7.25,
            }],
        };
        assert_eq!(
            render_response(Some(&short)),
            "Sorry, I couldn't find information for that query."
        );
    }
}
