//! End-to-end parse scenarios through the default rule-based annotator.

use wagebot_core::Intent;
use wagebot_nlu::QuestionParser;

fn parser() -> QuestionParser {
    QuestionParser::with_defaults().unwrap()
}

#[test]
fn test_highest_minimum_wage_is_max() {
    let parsed = parser().parse("Which state has the highest minimum wage?");
    assert_eq!(parsed.intent, Intent::Max);
    assert!(parsed.states.is_empty());
    assert_eq!(parsed.year, None);
}

#[test]
fn test_better_pay_between_two_states_is_compare() {
    let parsed = parser().parse("Which state offers better pay, Colorado or Utah?");
    assert_eq!(parsed.intent, Intent::Compare);
    assert_eq!(parsed.states, vec!["Colorado", "Utah"]);
}

#[test]
fn test_wage_change_over_years_is_history() {
    let parsed = parser().parse("How has the wage changed in Washington over the years?");
    assert_eq!(parsed.intent, Intent::History);
    assert_eq!(parsed.states, vec!["Washington"]);
    assert_eq!(parsed.year, None);
}

#[test]
fn test_minor_work_certificate_is_age() {
    let parsed = parser().parse("Do minors need a work certificate in Florida?");
    assert_eq!(parsed.intent, Intent::Age);
    assert_eq!(parsed.states, vec!["Florida"]);
}

#[test]
fn test_highest_tipped_wage_is_max_tipped() {
    let parsed = parser().parse("What is the highest tipped minimum wage?");
    assert_eq!(parsed.intent, Intent::MaxTipped);
}

#[test]
fn test_gibberish_is_unknown_with_zero_confidence() {
    let parsed = parser().parse("asdf qwerty");
    assert_eq!(parsed.intent, Intent::Unknown);
    assert_eq!(parsed.confidence, 0.0);
    assert!(parsed.states.is_empty());
    assert_eq!(parsed.year, None);
}

#[test]
fn test_explicit_year_is_history() {
    let parsed = parser().parse("What was the minimum wage in Texas in 2005?");
    assert_eq!(parsed.intent, Intent::History);
    assert_eq!(parsed.states, vec!["Texas"]);
    assert_eq!(parsed.year, Some(2005));
}

#[test]
fn test_tipped_worker_vocabulary() {
    let parsed = parser().parse("How much does a bartender make in Nevada?");
    assert_eq!(parsed.intent, Intent::Tipped);
    assert_eq!(parsed.states, vec!["Nevada"]);
}

#[test]
fn test_versus_phrasing_is_compare() {
    let parsed = parser().parse("New York versus New Jersey minimum wage");
    assert_eq!(parsed.intent, Intent::Compare);
    assert_eq!(parsed.states, vec!["New York", "New Jersey"]);
}

#[test]
fn test_parsing_is_idempotent() {
    let p = parser();
    let question = "Which state offers better pay, Colorado or Utah?";
    assert_eq!(p.parse(question), p.parse(question));
}

#[test]
fn test_every_input_yields_a_bounded_record() {
    let p = parser();
    let inputs = [
        "",
        "   ",
        "?!?!",
        "wage wage wage wage wage wage",
        "tip tip compare highest lowest minor year",
        "New Hampshire New Hampshire New Hampshire",
        "1999 2000 2001 2002",
        "\u{1F600} caf\u{e9} na\u{ef}ve",
    ];
    for input in inputs {
        let parsed = p.parse(input);
        assert!(Intent::ALL.contains(&parsed.intent), "input: {input:?}");
        assert!(
            (0.0..=1.0).contains(&parsed.confidence),
            "input: {input:?} -> {}",
            parsed.confidence
        );
        // rounded to 2 decimals
        assert_eq!(
            (parsed.confidence * 100.0).round() / 100.0,
            parsed.confidence,
            "input: {input:?}"
        );
    }
}

#[test]
fn test_tipped_max_outranks_compare_end_to_end() {
    let parsed = parser().parse("Compare the highest tipped wage in Texas and Utah");
    assert_eq!(parsed.intent, Intent::MaxTipped);
}

#[test]
fn test_age_outranks_history_end_to_end() {
    let parsed = parser().parse("Have certificate rules for minors changed since 2010?");
    assert_eq!(parsed.intent, Intent::Age);
    assert_eq!(parsed.year, Some(2010));
}
