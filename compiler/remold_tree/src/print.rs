//! Tree printer.
//!
//! Emits each node's prefix followed by its tokens and children, in source
//! order. The tree holds every byte of whitespace and comments, so printing a
//! parsed tree reproduces its input exactly; printing an edited tree
//! reproduces whatever the edit left in the `Space` slots.

use remold_stack::ensure_sufficient_stack;
use remold_types::ClassKind;

use crate::emitter::{Emitter, StringEmitter};
use crate::{Container, RightPadded, Space, J};

impl J {
    /// Print this subtree, prefix included.
    pub fn print(&self) -> String {
        let mut out = StringEmitter::new();
        self.print_with(&mut out);
        out.output()
    }

    /// Print with blank leading/trailing lines and the common indent removed.
    pub fn print_trimmed(&self) -> String {
        trim_indent(&self.print())
    }

    pub fn print_with<E: Emitter + ?Sized>(&self, out: &mut E) {
        Printer { out }.tree(self);
    }
}

/// `true` when the statement must be followed by `;`.
pub fn needs_semicolon(statement: &J) -> bool {
    match statement {
        J::Assignment(_)
        | J::AssignmentOperation(_)
        | J::Break(_)
        | J::Continue(_)
        | J::DoWhileLoop(_)
        | J::Empty(_)
        | J::MethodInvocation(_)
        | J::NewClass(_)
        | J::Return(_)
        | J::Throw(_)
        | J::Unary(_)
        | J::VariableDeclarations(_) => true,
        J::MethodDeclaration(method) => method.body.is_none(),
        J::Label(label) => needs_semicolon(&label.statement),
        _ => false,
    }
}

/// Remove blank leading and trailing lines, then the indent common to every
/// non-blank line.
pub fn trim_indent(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let first = lines.iter().position(|line| !line.trim().is_empty());
    let last = lines.iter().rposition(|line| !line.trim().is_empty());
    let (Some(first), Some(last)) = (first, last) else {
        return String::new();
    };
    let lines = &lines[first..=last];

    let common = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    let mut trimmed = String::with_capacity(text.len());
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            trimmed.push('\n');
        }
        trimmed.push_str(line.get(common..).unwrap_or_else(|| line.trim_start()));
    }
    trimmed
}

struct Printer<'e, E: ?Sized> {
    out: &'e mut E,
}

impl<E: Emitter + ?Sized> Printer<'_, E> {
    fn text(&mut self, text: &str) {
        self.out.emit(text);
    }

    fn space(&mut self, space: &Space) {
        self.out.emit_space(space);
    }

    fn all(&mut self, trees: &[J]) {
        for tree in trees {
            self.tree(tree);
        }
    }

    /// Elements separated by `separator`, each followed by its padding.
    fn padded(&mut self, elements: &[RightPadded<J>], separator: &str) {
        for (i, padded) in elements.iter().enumerate() {
            if i > 0 {
                self.text(separator);
            }
            self.tree(&padded.element);
            self.space(&padded.after);
        }
    }

    fn container(&mut self, container: &Container<J>, open: &str, separator: &str, close: &str) {
        self.space(&container.before);
        self.text(open);
        self.padded(&container.elements, separator);
        self.text(close);
    }

    fn optional_container(
        &mut self,
        container: Option<&Container<J>>,
        open: &str,
        separator: &str,
        close: &str,
    ) {
        if let Some(container) = container {
            self.container(container, open, separator, close);
        }
    }

    fn statement(&mut self, padded: &RightPadded<J>) {
        self.tree(&padded.element);
        self.space(&padded.after);
        if needs_semicolon(&padded.element) {
            self.text(";");
        }
    }

    fn tree(&mut self, tree: &J) {
        ensure_sufficient_stack(|| self.tree_inner(tree));
    }

    fn tree_inner(&mut self, tree: &J) {
        self.space(tree.prefix());
        match tree {
            J::Annotation(n) => {
                self.text("@");
                self.tree(&n.annotation_type);
                self.optional_container(n.arguments.as_ref(), "(", ",", ")");
            }
            J::ArrayAccess(n) => {
                self.tree(&n.indexed);
                self.tree(&n.dimension);
            }
            J::ArrayDimension(n) => {
                self.text("[");
                self.tree(&n.index.element);
                self.space(&n.index.after);
                self.text("]");
            }
            J::ArrayType(n) => {
                self.tree(&n.element_type);
                self.space(&n.dimension.before);
                self.text("[");
                self.space(&n.dimension.element);
                self.text("]");
            }
            J::Assignment(n) => {
                self.tree(&n.variable);
                self.space(&n.assignment.before);
                self.text("=");
                self.tree(&n.assignment.element);
            }
            J::AssignmentOperation(n) => {
                self.tree(&n.variable);
                self.space(&n.operator.before);
                self.text(n.operator.element.keyword());
                self.tree(&n.assignment);
            }
            J::Binary(n) => {
                self.tree(&n.left);
                self.space(&n.operator.before);
                self.text(n.operator.element.keyword());
                self.tree(&n.right);
            }
            J::Block(n) => {
                if let Some(after_static) = &n.is_static {
                    self.text("static");
                    self.space(after_static);
                }
                self.text("{");
                for statement in &n.statements {
                    self.statement(statement);
                }
                self.space(&n.end);
                self.text("}");
            }
            J::Break(n) => {
                self.text("break");
                if let Some(label) = &n.label {
                    self.tree(label);
                }
            }
            J::Case(n) => {
                match &n.expression {
                    Some(expression) => {
                        self.text("case");
                        self.tree(expression);
                    }
                    None => self.text("default"),
                }
                self.space(&n.statements.before);
                self.text(":");
                for statement in &n.statements.elements {
                    self.statement(statement);
                }
            }
            J::Catch(n) => {
                self.text("catch");
                self.tree(&n.parameter);
                self.tree(&n.body);
            }
            J::ClassDeclaration(n) => {
                self.all(&n.leading_annotations);
                self.all(&n.modifiers);
                self.space(&n.kind.prefix);
                self.text(n.kind.kind.keyword());
                self.tree(&n.name);
                self.optional_container(n.type_parameters.as_ref(), "<", ",", ">");
                if let Some(extends) = &n.extends {
                    self.space(&extends.before);
                    self.text("extends");
                    self.tree(&extends.element);
                }
                if let Some(implements) = &n.implements {
                    let keyword = if n.kind.kind == ClassKind::Interface {
                        "extends"
                    } else {
                        "implements"
                    };
                    self.container(implements, keyword, ",", "");
                }
                self.tree(&n.body);
            }
            J::CompilationUnit(n) => {
                if let Some(package) = &n.package {
                    self.tree(&package.element);
                    self.space(&package.after);
                    self.text(";");
                }
                for import in &n.imports {
                    self.tree(&import.element);
                    self.space(&import.after);
                    self.text(";");
                }
                self.all(&n.classes);
                self.space(&n.eof);
            }
            J::Continue(n) => {
                self.text("continue");
                if let Some(label) = &n.label {
                    self.tree(label);
                }
            }
            J::ControlParentheses(n) => {
                self.text("(");
                self.tree(&n.tree.element);
                self.space(&n.tree.after);
                self.text(")");
            }
            J::DoWhileLoop(n) => {
                self.text("do");
                self.statement(&n.body);
                self.space(&n.while_condition.before);
                self.text("while");
                self.tree(&n.while_condition.element);
            }
            J::Else(n) => {
                self.text("else");
                self.statement(&n.body);
            }
            J::Empty(_) => {}
            J::EnumValue(n) => {
                self.tree(&n.name);
                self.optional_container(n.arguments.as_ref(), "(", ",", ")");
            }
            J::EnumValueSet(n) => {
                self.padded(&n.enums, ",");
                if n.terminated_with_semicolon {
                    self.text(";");
                }
            }
            J::FieldAccess(n) => {
                self.tree(&n.target);
                self.space(&n.name.before);
                self.text(".");
                self.tree(&n.name.element);
            }
            J::ForControl(n) => {
                self.text("(");
                self.padded(&n.init, ",");
                self.text(";");
                self.tree(&n.condition.element);
                self.space(&n.condition.after);
                self.text(";");
                self.padded(&n.update, ",");
                self.text(")");
            }
            J::ForEachControl(n) => {
                self.text("(");
                self.tree(&n.variable.element);
                self.space(&n.variable.after);
                self.text(":");
                self.tree(&n.iterable.element);
                self.space(&n.iterable.after);
                self.text(")");
            }
            J::ForEachLoop(n) => {
                self.text("for");
                self.tree(&n.control);
                self.statement(&n.body);
            }
            J::ForLoop(n) => {
                self.text("for");
                self.tree(&n.control);
                self.statement(&n.body);
            }
            J::Identifier(n) => self.text(&n.simple_name),
            J::If(n) => {
                self.text("if");
                self.tree(&n.condition);
                self.statement(&n.then_part);
                if let Some(else_part) = &n.else_part {
                    self.tree(else_part);
                }
            }
            J::Import(n) => {
                self.text("import");
                if n.is_static.element {
                    self.space(&n.is_static.before);
                    self.text("static");
                }
                self.tree(&n.qualid);
            }
            J::Label(n) => {
                self.tree(&n.label.element);
                self.space(&n.label.after);
                self.text(":");
                self.tree(&n.statement);
            }
            J::Lambda(n) => {
                self.space(&n.parameters.prefix);
                if n.parameters.parenthesized {
                    self.text("(");
                }
                self.padded(&n.parameters.parameters, ",");
                if n.parameters.parenthesized {
                    self.text(")");
                }
                self.space(&n.arrow);
                self.text("->");
                self.tree(&n.body);
            }
            J::Literal(n) => self.text(&n.value_source),
            J::MethodDeclaration(n) => {
                self.all(&n.leading_annotations);
                self.all(&n.modifiers);
                self.optional_container(n.type_parameters.as_ref(), "<", ",", ">");
                if let Some(return_type) = &n.return_type {
                    self.tree(return_type);
                }
                self.tree(&n.name);
                self.container(&n.parameters, "(", ",", ")");
                self.optional_container(n.throws.as_ref(), "throws", ",", "");
                if let Some(body) = &n.body {
                    self.tree(body);
                }
            }
            J::MethodInvocation(n) => {
                if let Some(select) = &n.select {
                    self.tree(&select.element);
                    self.space(&select.after);
                    self.text(".");
                }
                self.optional_container(n.type_parameters.as_ref(), "<", ",", ">");
                self.tree(&n.name);
                self.container(&n.arguments, "(", ",", ")");
            }
            J::Modifier(n) => self.text(n.keyword.keyword()),
            J::MultiCatch(n) => self.padded(&n.alternatives, "|"),
            J::NamedVariable(n) => {
                self.tree(&n.name);
                if let Some(initializer) = &n.initializer {
                    self.space(&initializer.before);
                    self.text("=");
                    self.tree(&initializer.element);
                }
            }
            J::NewArray(n) => {
                if let Some(type_expr) = &n.type_expr {
                    self.text("new");
                    self.tree(type_expr);
                }
                self.all(&n.dimensions);
                self.optional_container(n.initializer.as_ref(), "{", ",", "}");
            }
            J::NewClass(n) => {
                self.text("new");
                self.tree(&n.clazz);
                self.container(&n.arguments, "(", ",", ")");
                if let Some(body) = &n.body {
                    self.tree(body);
                }
            }
            J::Package(n) => {
                self.all(&n.annotations);
                self.text("package");
                self.tree(&n.expression);
            }
            J::ParameterizedType(n) => {
                self.tree(&n.clazz);
                self.optional_container(n.type_parameters.as_ref(), "<", ",", ">");
            }
            J::Parentheses(n) => {
                self.text("(");
                self.tree(&n.tree.element);
                self.space(&n.tree.after);
                self.text(")");
            }
            J::Primitive(n) => self.text(n.primitive.keyword()),
            J::Return(n) => {
                self.text("return");
                if let Some(expression) = &n.expression {
                    self.tree(expression);
                }
            }
            J::Switch(n) => {
                self.text("switch");
                self.tree(&n.selector);
                self.tree(&n.cases);
            }
            J::Ternary(n) => {
                self.tree(&n.condition);
                self.space(&n.true_part.before);
                self.text("?");
                self.tree(&n.true_part.element);
                self.space(&n.false_part.before);
                self.text(":");
                self.tree(&n.false_part.element);
            }
            J::Throw(n) => {
                self.text("throw");
                self.tree(&n.exception);
            }
            J::Try(n) => {
                self.text("try");
                self.tree(&n.body);
                self.all(&n.catches);
                if let Some(finally) = &n.finally {
                    self.space(&finally.before);
                    self.text("finally");
                    self.tree(&finally.element);
                }
            }
            J::TypeCast(n) => {
                self.tree(&n.clazz);
                self.tree(&n.expression);
            }
            J::TypeParameter(n) => {
                self.all(&n.annotations);
                self.tree(&n.name);
                self.optional_container(n.bounds.as_ref(), "extends", "&", "");
            }
            J::Unary(n) => {
                let operator = n.operator.element;
                if operator.is_postfix() {
                    self.tree(&n.expression);
                    self.space(&n.operator.before);
                    self.text(operator.keyword());
                } else {
                    self.space(&n.operator.before);
                    self.text(operator.keyword());
                    self.tree(&n.expression);
                }
            }
            J::VariableDeclarations(n) => {
                self.all(&n.leading_annotations);
                self.all(&n.modifiers);
                if let Some(type_expr) = &n.type_expr {
                    self.tree(type_expr);
                }
                if let Some(varargs) = &n.varargs {
                    self.space(varargs);
                    self.text("...");
                }
                self.padded(&n.variables, ",");
            }
            J::WhileLoop(n) => {
                self.text("while");
                self.tree(&n.condition);
                self.statement(&n.body);
            }
            J::Wildcard(n) => {
                self.text("?");
                if let Some(bound) = &n.bound {
                    self.space(&bound.before);
                    self.text(bound.element.keyword());
                }
                if let Some(bounded_type) = &n.bounded_type {
                    self.tree(bounded_type);
                }
            }
        }
    }
}
