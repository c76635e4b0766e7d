//! Method signature patterns.
//!
//! A pattern has the shape `declaringType methodName(argumentTypes)`:
//!
//! ```text
//! * *(..)                                  every method
//! java.util.Collections unmodifiable*(..)  names starting with `unmodifiable`
//! java.util.List add(int, Object)          exactly these parameter types
//! my.org.MyClass *(boolean, ..)            a boolean first, then anything
//! a.Foo <constructor>(String)              constructors of `a.Foo`
//! ```
//!
//! The declaring type and argument types are type patterns (see
//! [`crate::pattern`]). `..` in the argument list matches zero or more
//! arguments; `Type...` matches a varargs parameter. `#` may separate the
//! declaring type from the method name instead of whitespace.
//!
//! # Design
//!
//! The pattern compiles to three anchored regexes matched against the
//! declaring type's fully-qualified name, the method name, and the resolved
//! parameter types joined with `,`. The declaring type also matches through
//! its supertype chain (ending at `java.lang.Object`), and through interfaces
//! when [`with_overrides`](MethodMatcher::with_overrides) is set.
//!
//! Nodes without an attached method type, and methods without a resolved
//! signature, never match.

use regex::Regex;
use remold_tree::{
    qualified_name, ClassDeclaration, FieldAccess, MethodDeclaration, MethodInvocation, NewClass,
    J,
};
use remold_types::{Primitive, TypeData, TypeId, TypeRegistry, OBJECT_NAME};

use crate::pattern::{type_regex, Scanner};
use crate::MatcherError;

/// Regex for a `..` argument: one or more arbitrary types.
const ANY_ARGUMENTS: &str = "([^,]+,)*([^,]+)";

/// One entry of the argument list.
enum Argument {
    /// `..`
    Any,
    /// A type pattern, already converted to a regex fragment.
    Type(String),
}

/// A compiled method signature pattern.
#[derive(Clone, Debug)]
pub struct MethodMatcher {
    signature: String,
    target_type: Regex,
    method_name: Regex,
    arguments: Regex,
    match_overrides: bool,
}

impl MethodMatcher {
    /// Compile `signature`.
    ///
    /// # Errors
    ///
    /// Returns a [`MatcherError`] naming the first position that does not fit
    /// the pattern grammar.
    pub fn new(signature: &str) -> Result<Self, MatcherError> {
        let mut scanner = Scanner::new(signature);
        scanner.skip_whitespace();
        if scanner.is_at_end() {
            return Err(MatcherError::UnexpectedEnd);
        }
        let target = scanner.type_pattern()?;

        let mut separated = scanner.skip_whitespace();
        if scanner.peek() == Some('#') {
            scanner.bump();
            scanner.skip_whitespace();
            separated = true;
        }
        let name = scanner.take_while(is_name_char);
        if name.is_empty() {
            return match scanner.peek() {
                None | Some('(') => Err(MatcherError::MissingMethodName),
                Some(_) => Err(scanner.unexpected()),
            };
        }
        if !separated {
            return Err(MatcherError::MissingMethodName);
        }

        scanner.skip_whitespace();
        scanner.expect('(')?;
        let arguments = parse_arguments(&mut scanner)?;
        scanner.skip_whitespace();
        if !scanner.is_at_end() {
            return Err(scanner.unexpected());
        }

        let matcher = Self {
            signature: signature.to_string(),
            target_type: anchored(&type_regex(target))?,
            method_name: anchored(&name_regex(name))?,
            arguments: anchored(&arguments_regex(&arguments))?,
            match_overrides: false,
        };
        tracing::trace!(signature, "compiled method pattern");
        Ok(matcher)
    }

    /// Also match methods declared on a subtype of an interface named by the
    /// pattern.
    #[must_use]
    pub fn with_overrides(mut self, match_overrides: bool) -> Self {
        self.match_overrides = match_overrides;
        self
    }

    /// The pattern this matcher was compiled from.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Match a method invocation or constructor call; any other node is a
    /// miss.
    pub fn matches(&self, registry: &TypeRegistry, tree: &J) -> bool {
        match tree {
            J::MethodInvocation(invocation) => self.matches_invocation(registry, invocation),
            J::NewClass(new_class) => self.matches_new_class(registry, new_class),
            _ => false,
        }
    }

    pub fn matches_invocation(&self, registry: &TypeRegistry, invocation: &MethodInvocation) -> bool {
        invocation
            .method_type
            .is_some_and(|method| self.matches_method_type(registry, method))
    }

    /// Constructor calls match under the method name `<constructor>`.
    pub fn matches_new_class(&self, registry: &TypeRegistry, new_class: &NewClass) -> bool {
        new_class
            .constructor_type
            .is_some_and(|method| self.matches_method_type(registry, method))
    }

    /// Match a declaration, taking the declaring type from its enclosing
    /// class and the name from the declaration itself.
    pub fn matches_declaration(
        &self,
        registry: &TypeRegistry,
        declaration: &MethodDeclaration,
        enclosing: &ClassDeclaration,
    ) -> bool {
        let Some(class) = enclosing.ty else {
            return false;
        };
        let J::Identifier(name) = &declaration.name else {
            return false;
        };
        let Some(signature) = declaration
            .method_type
            .and_then(|method| registry.method(method))
            .and_then(|method| method.resolved_signature)
        else {
            return false;
        };
        self.matches_target_type(registry, class)
            && self.method_name.is_match(&name.simple_name)
            && self
                .arguments
                .is_match(&parameter_patterns(registry, &signature.param_types))
    }

    /// Match a method descriptor by declaring type, name and resolved
    /// parameter types.
    pub fn matches_method_type(&self, registry: &TypeRegistry, method: TypeId) -> bool {
        let Some(method) = registry.method(method) else {
            return false;
        };
        let Some(signature) = &method.resolved_signature else {
            return false;
        };
        self.matches_target_type(registry, method.declaring_type)
            && self.method_name.is_match(&method.name)
            && self
                .arguments
                .is_match(&parameter_patterns(registry, &signature.param_types))
    }

    /// `true` when `ty` or one of its supertypes matches the declaring type
    /// pattern; interfaces count only with overrides enabled.
    pub fn matches_target_type(&self, registry: &TypeRegistry, ty: TypeId) -> bool {
        let Some(name) = registry.fully_qualified_name(ty) else {
            return false;
        };
        if self.target_type.is_match(&name) {
            return true;
        }
        if name != OBJECT_NAME {
            let supertype = registry.supertype(ty).unwrap_or(TypeId::OBJECT);
            if self.matches_target_type(registry, supertype) {
                return true;
            }
        }
        self.match_overrides
            && registry
                .interfaces(ty)
                .into_iter()
                .any(|interface| self.matches_target_type(registry, interface))
    }

    /// `true` when `field_access` spells out `declaringType.methodName`, as
    /// a static member referenced through its qualified class name does.
    pub fn is_fully_qualified_class_reference(&self, field_access: &FieldAccess) -> bool {
        let J::Identifier(name) = &field_access.name.element else {
            return false;
        };
        qualified_name(&field_access.target).is_some_and(|target| self.target_type.is_match(&target))
            && self.method_name.is_match(&name.simple_name)
    }

    /// The exact pattern of a declared method, or `None` when it carries no
    /// resolved method type.
    pub fn method_pattern(registry: &TypeRegistry, declaration: &MethodDeclaration) -> Option<String> {
        let method = registry.method(declaration.method_type?)?;
        let signature = method.resolved_signature?;
        let declaring_type = type_pattern(registry, method.declaring_type)?;
        let J::Identifier(name) = &declaration.name else {
            return None;
        };
        Some(format!(
            "{declaring_type} {}({})",
            name.simple_name,
            parameter_patterns(registry, &signature.param_types)
        ))
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '$' | '*' | '<' | '>')
}

fn parse_arguments(scanner: &mut Scanner<'_>) -> Result<Vec<Argument>, MatcherError> {
    let mut arguments = Vec::new();
    scanner.skip_whitespace();
    if scanner.peek() == Some(')') {
        scanner.bump();
        return Ok(arguments);
    }
    loop {
        scanner.skip_whitespace();
        let text = scanner.type_pattern()?;
        let argument = if text == ".." {
            Argument::Any
        } else if let Some(element) = text.strip_suffix("...") {
            if element.is_empty() || element.ends_with('.') {
                return Err(scanner.unexpected_at(scanner.position() - 3));
            }
            Argument::Type(format!(r"{}\[\]", type_regex(element)))
        } else {
            Argument::Type(type_regex(text))
        };
        arguments.push(argument);

        scanner.skip_whitespace();
        match scanner.peek() {
            Some(',') => {
                scanner.bump();
            }
            Some(')') => {
                scanner.bump();
                return Ok(arguments);
            }
            _ => return Err(scanner.unexpected()),
        }
    }
}

fn name_regex(name: &str) -> String {
    let mut regex = String::with_capacity(name.len());
    for c in name.chars() {
        if c == '*' {
            regex.push_str("[^.]*");
        } else {
            regex.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
        }
    }
    regex
}

/// Join argument fragments so `..` absorbs its own separating comma.
fn arguments_regex(arguments: &[Argument]) -> String {
    let mut regex = String::new();
    for (i, argument) in arguments.iter().enumerate() {
        match argument {
            Argument::Any if arguments.len() == 1 => {
                regex.push_str(&format!("({ANY_ARGUMENTS})?"));
            }
            Argument::Any if i == 0 => regex.push_str(&format!("({ANY_ARGUMENTS},)?")),
            Argument::Any => regex.push_str(&format!("(,{ANY_ARGUMENTS})?")),
            Argument::Type(fragment) => {
                let follows_leading_any = i == 1 && matches!(arguments[0], Argument::Any);
                if i > 0 && !follows_leading_any {
                    regex.push(',');
                }
                regex.push_str(fragment);
            }
        }
    }
    regex
}

fn anchored(fragment: &str) -> Result<Regex, MatcherError> {
    Ok(Regex::new(&format!("^(?:{fragment})$"))?)
}

/// Parameter types as written in a pattern, joined with `,`. Types with no
/// pattern spelling are left out.
fn parameter_patterns(registry: &TypeRegistry, params: &[TypeId]) -> String {
    params
        .iter()
        .filter_map(|&param| type_pattern(registry, param))
        .collect::<Vec<_>>()
        .join(",")
}

/// How a type is spelled in a pattern: primitive keyword, fully-qualified
/// name, or element pattern followed by `[]`.
fn type_pattern(registry: &TypeRegistry, ty: TypeId) -> Option<String> {
    if let Some(primitive) = ty.primitive() {
        return match primitive {
            Primitive::String => Some("java.lang.String".to_string()),
            Primitive::None | Primitive::Wildcard | Primitive::Null => None,
            other => Some(other.keyword().to_string()),
        };
    }
    let data = registry.get(ty)?;
    match &*data {
        TypeData::Array(element) => {
            let element = type_pattern(registry, (*element)?)?;
            Some(format!("{element}[]"))
        }
        other if other.is_fully_qualified() => registry.fully_qualified_name(ty),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
