#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use super::*;
use crate::style::{GeneralFormatStyle, TabsAndIndentsStyle};
use pretty_assertions::assert_eq;
use remold_parse::parse;

fn format_with(source: &str, styles: &Styles) -> String {
    auto_format(parse(source).unwrap(), styles, None)
        .unwrap()
        .print()
}

fn format(source: &str) -> String {
    format_with(source, &Styles::default())
}

#[test]
fn cramped_code_is_spaced_and_indented() {
    assert_eq!(
        format("class A{\nvoid m(){\nif(x){foo(a,b);}\n}\n}"),
        "class A {\n    void m() {\n        if (x) {foo(a, b);}\n    }\n}"
    );
}

#[test]
fn statements_on_one_line_are_split_and_indented() {
    assert_eq!(
        format("class A {\n    void m() {\n        a(); b();\n    }\n}"),
        "class A {\n    void m() {\n        a();\n        b();\n    }\n}"
    );
}

#[test]
fn methods_get_a_blank_line_between_them() {
    assert_eq!(
        format("class A {\nvoid a() {}\nvoid b() {}\n}"),
        "class A {\n    void a() {}\n\n    void b() {}\n}"
    );
}

#[test]
fn trailing_spaces_and_extra_blank_lines_go() {
    assert_eq!(
        format("class A {   \n\n\n\n\n    int x;  \n}\n"),
        "class A {\n\n\n    int x;\n}\n"
    );
}

#[test]
fn windows_line_breaks_with_tabs() {
    let styles = Styles::default()
        .with_general(GeneralFormatStyle {
            use_crlf_new_lines: true,
        })
        .with_tabs_and_indents(TabsAndIndentsStyle::default().with_use_tab_character(true));
    assert_eq!(
        format_with("class A {\nvoid m() {\nfoo();\n}\n}", &styles),
        "class A {\r\n\tvoid m() {\r\n\t\tfoo();\r\n\t}\r\n}"
    );
}

#[test]
fn stop_after_leaves_later_members_unindented() {
    let tree = parse("class A {\nvoid a() {}\nvoid b() {}\n}").unwrap();
    let J::CompilationUnit(unit) = &tree else {
        panic!("not a compilation unit");
    };
    let J::ClassDeclaration(class) = &unit.classes[0] else {
        panic!("not a class");
    };
    let J::Block(body) = &class.body else {
        panic!("class body is not a block");
    };
    let first = body.statements[0].element.id();

    let formatted = auto_format(tree, &Styles::default(), Some(first)).unwrap();
    assert_eq!(
        formatted.print(),
        "class A {\n    void a() {}\n\nvoid b() {}\n}"
    );
}

#[test]
fn formatted_code_is_stable() {
    let source = "package a;\nimport b.C;\nclass A{int x=1;\n\tvoid m(int a){for(int i=0;i < a;i++){foo(a,b);x+=i;}\n\n\n\n\nif(a>1)return;else{bar();}}\n  }";
    let once = format(source);
    assert_eq!(format(&once), once);
}

#[test]
fn mixed_indentation_settles_in_one_pass_with_tabs() {
    let styles = Styles::default()
        .with_tabs_and_indents(TabsAndIndentsStyle::default().with_use_tab_character(true));
    let once = format_with("class A{\n  \t}\n", &styles);
    assert_eq!(once, "class A {\n}\n");
    assert_eq!(format_with(&once, &styles), once);
}
