use super::*;

#[test]
fn defaults_follow_intellij() {
    let tabs = TabsAndIndentsStyle::default();
    assert!(!tabs.use_tab_character);
    assert_eq!(
        (tabs.tab_size, tabs.indent_size, tabs.continuation_indent),
        (4, 4, 8)
    );

    let spaces = SpacesStyle::default();
    assert!(spaces.before_parentheses.if_parentheses);
    assert!(!spaces.before_parentheses.method_call);
    assert!(spaces.around_operators.additive);
    assert!(!spaces.around_operators.unary);
    assert!(spaces.before_left_brace.class_left_brace);
    assert!(!spaces.before_left_brace.array_initializer_left_brace);
    assert!(spaces.other.after_comma);
    assert!(!spaces.other.before_comma);
    assert!(!spaces.within.method_call_parentheses);

    let blank_lines = BlankLinesStyle::default();
    assert_eq!(blank_lines.keep_maximum_in_code, 2);
    assert_eq!(blank_lines.minimum_after_imports, 1);
    assert_eq!(blank_lines.minimum_before_method_body, 0);

    assert_eq!(GeneralFormatStyle::default().line_break(), "\n");
    assert_eq!(Styles::default().empty_for_iterator_pad, None);
}

#[test]
fn builders_change_only_their_field() {
    let tabs = TabsAndIndentsStyle::default()
        .with_use_tab_character(true)
        .with_indent_size(2);
    assert!(tabs.use_tab_character);
    assert_eq!(tabs.indent_size, 2);
    assert_eq!(tabs.tab_size, 4);

    let styles = Styles::default()
        .with_tabs_and_indents(tabs)
        .with_general(GeneralFormatStyle {
            use_crlf_new_lines: true,
        })
        .with_empty_for_iterator_pad(Some(EmptyForIteratorPadStyle { space: true }));
    assert_eq!(styles.tabs_and_indents, tabs);
    assert_eq!(styles.general.line_break(), "\r\n");
    assert_eq!(styles.spaces, SpacesStyle::default());
    assert_eq!(
        styles.empty_for_iterator_pad,
        Some(EmptyForIteratorPadStyle { space: true })
    );
}
