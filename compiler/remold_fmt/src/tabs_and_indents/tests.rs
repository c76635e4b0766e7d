#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use super::*;
use pretty_assertions::assert_eq;
use remold_parse::parse;

fn indent_with(source: &str, style: TabsAndIndentsStyle) -> String {
    let tree = parse(source).unwrap();
    TabsAndIndentsVisitor::new(style)
        .visit_root(tree)
        .unwrap()
        .print()
}

fn indent(source: &str) -> String {
    indent_with(source, TabsAndIndentsStyle::default())
}

fn find(tree: &J, predicate: &dyn Fn(&J) -> bool) -> Option<J> {
    if predicate(tree) {
        return Some(tree.clone());
    }
    let mut found = None;
    tree.for_each_child(&mut |child| {
        if found.is_none() {
            found = find(child, predicate);
        }
    });
    found
}

#[test]
fn nested_blocks_indent_one_level_each() {
    let source = "class A {\nvoid m() {\nif (x) {\nfoo();\n}\n}\n}\n";
    assert_eq!(
        indent(source),
        "class A {\n    void m() {\n        if (x) {\n            foo();\n        }\n    }\n}\n"
    );
}

#[test]
fn over_indented_code_moves_left() {
    let source = "class A {\n        void m() {\n                foo();\n        }\n}";
    assert_eq!(
        indent(source),
        "class A {\n    void m() {\n        foo();\n    }\n}"
    );
}

#[test]
fn tabs_replace_spaces_when_configured() {
    let style = TabsAndIndentsStyle::default().with_use_tab_character(true);
    let source = "class A {\nvoid m() {\nfoo();\n}\n}";
    assert_eq!(
        indent_with(source, style),
        "class A {\n\tvoid m() {\n\t\tfoo();\n\t}\n}"
    );
}

#[test]
fn custom_indent_size() {
    let style = TabsAndIndentsStyle::default().with_indent_size(2);
    let source = "class A {\nvoid m() {\nfoo();\n}\n}";
    assert_eq!(
        indent_with(source, style),
        "class A {\n  void m() {\n    foo();\n  }\n}"
    );
}

#[test]
fn braceless_if_body_is_indented() {
    let source = "class A {\n    void m() {\n        if (x)\n        foo();\n    }\n}";
    assert_eq!(
        indent(source),
        "class A {\n    void m() {\n        if (x)\n            foo();\n    }\n}"
    );
}

#[test]
fn wrapped_arguments_get_a_continuation_indent() {
    let source = "class A {\n    void m() {\n        foo(a,\nb);\n    }\n}";
    assert_eq!(
        indent(source),
        "class A {\n    void m() {\n        foo(a,\n                b);\n    }\n}"
    );
}

#[test]
fn chained_calls_continue_from_the_outermost_call() {
    let source = "class A {\n    void m() {\n        foo()\n        .bar();\n    }\n}";
    assert_eq!(
        indent(source),
        "class A {\n    void m() {\n        foo()\n                .bar();\n    }\n}"
    );
}

#[test]
fn wrapped_for_header_aligns_with_the_initializer() {
    let source = "class A {\n    void m() {\n        for (int i = 0;\ni < 10;\ni++) {\n        }\n    }\n}";
    assert_eq!(
        indent(source),
        "class A {\n    void m() {\n        for (int i = 0;\n             i < 10;\n             i++) {\n        }\n    }\n}"
    );
}

#[test]
fn block_comments_move_with_their_first_line() {
    let source =
        "class A {\n        /*\n         * doc\n         */\n        void m() {}\n}";
    assert_eq!(
        indent(source),
        "class A {\n    /*\n     * doc\n     */\n    void m() {}\n}"
    );
}

#[test]
fn comment_before_closing_brace_stays_in_the_body() {
    let source = "class A {\n    void m() {\n        foo();\n            // done\n    }\n}";
    assert_eq!(
        indent(source),
        "class A {\n    void m() {\n        foo();\n        // done\n    }\n}"
    );
}

#[test]
fn declaration_after_annotation_aligns_with_it() {
    let source = "class A {\n    @Deprecated\n            void m() {}\n}";
    assert_eq!(
        indent(source),
        "class A {\n    @Deprecated\n    void m() {}\n}"
    );
}

#[test]
fn leading_blank_lines_are_dropped_from_the_file() {
    assert_eq!(indent("\n\nclass A {\n}"), "class A {\n}");
}

#[test]
fn stop_after_leaves_later_nodes_alone() {
    let tree = parse("class A {\nvoid a() {}\nvoid b() {}\n}").unwrap();
    let first = find(&tree, &|tree| matches!(tree, J::MethodDeclaration(_))).unwrap();
    let formatted = TabsAndIndentsVisitor::new(TabsAndIndentsStyle::default())
        .with_stop_after(Some(first.id()))
        .visit_root(tree)
        .unwrap();
    assert_eq!(
        formatted.print(),
        "class A {\n    void a() {}\nvoid b() {}\n}"
    );
}

#[test]
fn subtree_lines_up_with_its_position() {
    let tree = parse("class A {\n    void m() {\n  foo();\n    }\n}").unwrap();
    let J::CompilationUnit(unit) = &tree else {
        panic!("not a compilation unit");
    };
    let class = unit.classes[0].clone();
    let J::ClassDeclaration(declaration) = &class else {
        panic!("not a class");
    };
    let J::Block(class_body) = &declaration.body else {
        panic!("class body is not a block");
    };
    let method = class_body.statements[0].element.clone();
    let J::MethodDeclaration(method_declaration) = &method else {
        panic!("not a method");
    };
    let body = method_declaration.body.clone().unwrap();
    let J::Block(block) = &body else {
        panic!("method body is not a block");
    };
    let statement = block.statements[0].element.clone();

    let parent = Cursor::root()
        .push_tree(&tree)
        .push_tree(&class)
        .push_tree(&declaration.body)
        .push(CursorValue::RightPadded {
            location: RightPaddedLocation::BlockStatement,
            element: method.clone(),
        })
        .push_tree(&method)
        .push_tree(&body)
        .push(CursorValue::RightPadded {
            location: RightPaddedLocation::BlockStatement,
            element: statement.clone(),
        });

    let formatted = TabsAndIndentsVisitor::new(TabsAndIndentsStyle::default())
        .visit_at(statement, &parent)
        .unwrap();
    assert_eq!(formatted.print(), "\n        foo()");
}

#[test]
fn formatting_twice_changes_nothing() {
    let source = "class A {\nvoid m(int a) {\n/* one\n   two */\nfor (int i = 0;\ni < a;\ni++) {\nfoo(a,\nb).bar()\n.baz();\n}\n}\n}\n";
    let once = indent(source);
    assert_eq!(indent(&once), once);
}

#[test]
fn width_counts_tabs_and_restarts_after_newlines() {
    let visitor = TabsAndIndentsVisitor::new(TabsAndIndentsStyle::default());
    assert_eq!(visitor.width("\t  "), 6);
    assert_eq!(visitor.width("  \n   "), 3);
    assert_eq!(visitor.reindent("\n    ", 2), "\n  ");
    assert_eq!(visitor.reindent("\n", 3), "\n   ");
    assert_eq!(visitor.reindent("\n\n  \t", 0), "\n\n");

    let tabs = TabsAndIndentsVisitor::new(
        TabsAndIndentsStyle::default().with_use_tab_character(true),
    );
    assert_eq!(tabs.reindent("\n", 6), "\n\t  ");
    assert_eq!(tabs.reindent("\n\t\t", 4), "\n\t");
    assert_eq!(tabs.reindent("\n  \t", 4), "\n\t");
    assert_eq!(tabs.reindent("\n\t ", -3), "\n");
}

#[test]
fn mixed_indentation_is_rewritten_with_tabs() {
    let style = TabsAndIndentsStyle::default().with_use_tab_character(true);
    let source = "class A {\n  \t// c\n  \tint x;\n  \t}\n";
    let once = indent_with(source, style);
    assert_eq!(once, "class A {\n\t// c\n\tint x;\n}\n");
    assert_eq!(indent_with(&once, style), once);
}
