//! Property tests for the format pipeline.
//!
//! Generates small classes with arbitrary spacing between tokens and checks
//! that formatting settles after one run: `format(format(code)) == format(code)`,
//! and that the formatted output still parses.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::redundant_closure_for_method_calls,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use remold_fmt::{auto_format, Styles, TabsAndIndentsStyle};
use remold_parse::parse;

// -- Code Generation Strategies --

/// Spacing inside a line.
fn inline_space() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(""), Just(" "), Just("  ")]
}

/// Spacing before a statement or a closing brace.
fn line_space() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just(""),
        Just(" "),
        Just("\n"),
        Just("\n\n\n\n"),
        Just("\n  \t"),
        Just("   \n      "),
    ]
}

fn simple_statement() -> impl Strategy<Value = String> {
    let call = (inline_space(), inline_space()).prop_map(|(a, b)| format!("foo(a,{a}b){b};"));
    let assign = (inline_space(), inline_space(), inline_space())
        .prop_map(|(a, b, c)| format!("x{a}={b}y{c}+1;"));
    let local = (inline_space(), inline_space()).prop_map(|(a, b)| format!("int z{a}={b}2;"));
    prop_oneof![call, assign, local, Just("return;".to_string())]
}

fn statement() -> impl Strategy<Value = String> {
    let if_statement = (
        inline_space(),
        prop::collection::vec((line_space(), simple_statement()), 0..3),
        line_space(),
    )
        .prop_map(|(a, body, end)| {
            let body: String = body.into_iter().map(|(lead, s)| format!("{lead}{s}")).collect();
            format!("if{a}(x){a}{{{body}{end}}}")
        });
    prop_oneof![3 => simple_statement(), 1 => if_statement]
}

fn method() -> impl Strategy<Value = String> {
    (
        line_space(),
        inline_space(),
        prop::collection::vec((line_space(), statement()), 0..4),
        line_space(),
    )
        .prop_map(|(lead, before_brace, body, end)| {
            let body: String = body.into_iter().map(|(lead, s)| format!("{lead}{s}")).collect();
            format!("{lead}void m(){before_brace}{{{body}{end}}}")
        })
}

fn class() -> impl Strategy<Value = String> {
    (
        inline_space(),
        prop::collection::vec(method(), 0..3),
        line_space(),
    )
        .prop_map(|(before_brace, members, end)| {
            format!("class A{before_brace}{{{}{end}}}\n", members.concat())
        })
}

fn format(source: &str, styles: &Styles) -> String {
    let tree = parse(source).unwrap();
    auto_format(tree, styles, None).unwrap().print()
}

// -- Properties --

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn formatting_is_idempotent(source in class()) {
        let styles = Styles::default();
        let once = format(&source, &styles);
        let twice = format(&once, &styles);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn formatting_with_tabs_is_idempotent(source in class()) {
        let styles = Styles::default()
            .with_tabs_and_indents(TabsAndIndentsStyle::default().with_use_tab_character(true));
        let once = format(&source, &styles);
        let twice = format(&once, &styles);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn formatted_output_parses(source in class()) {
        let once = format(&source, &Styles::default());
        prop_assert!(parse(&once).is_ok());
    }
}
