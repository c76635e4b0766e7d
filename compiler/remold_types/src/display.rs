//! Source-like rendering of descriptors.

use crate::{TypeData, TypeId, TypeRegistry};

impl TypeRegistry {
    /// Render a type the way it would be written in source.
    ///
    /// Primitives print their keyword, classes their fully-qualified name,
    /// arrays `elem[]`, parameterized types `raw<a, b>`, and bounded type
    /// variables `T extends bound`. Unresolved handles print as `{undefined}`.
    pub fn type_to_string(&self, id: TypeId) -> String {
        let mut out = String::new();
        self.write_type(id, &mut out);
        out
    }

    fn write_type(&self, id: TypeId, out: &mut String) {
        let Some(data) = self.get(id) else {
            out.push_str("{undefined}");
            return;
        };
        match &*data {
            TypeData::Primitive(primitive) => out.push_str(primitive.keyword()),
            TypeData::Array(element) => {
                match element {
                    Some(element) => self.write_type(*element, out),
                    None => out.push_str("{undefined}"),
                }
                out.push_str("[]");
            }
            TypeData::Class(class) => out.push_str(&class.fully_qualified_name),
            TypeData::ShallowClass(shallow) => out.push_str(&shallow.fully_qualified_name),
            TypeData::Cyclic(cyclic) => out.push_str(&cyclic.fully_qualified_name),
            TypeData::Parameterized(parameterized) => {
                self.write_type(parameterized.raw, out);
                out.push('<');
                self.write_list(&parameterized.type_parameters, ", ", out);
                out.push('>');
            }
            TypeData::GenericTypeVariable(variable) => {
                out.push_str(&variable.name);
                if let Some(bound) = variable.bound {
                    out.push_str(" extends ");
                    self.write_type(bound, out);
                }
            }
            TypeData::Variable(variable) => {
                if let Some(ty) = variable.ty {
                    self.write_type(ty, out);
                    out.push(' ');
                }
                out.push_str(&variable.name);
            }
            TypeData::Method(method) => {
                self.write_type(method.declaring_type, out);
                out.push('.');
                out.push_str(&method.name);
                out.push('(');
                match &method.resolved_signature {
                    Some(signature) => self.write_list(&signature.param_types, ", ", out),
                    None => out.push_str(&method.param_names.join(", ")),
                }
                out.push(')');
            }
            TypeData::MultiCatch(alternatives) => self.write_list(alternatives, " | ", out),
        }
    }

    fn write_list(&self, ids: &[TypeId], separator: &str, out: &mut String) {
        for (i, &id) in ids.iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            self.write_type(id, out);
        }
    }
}
