use crate::ByteSpan;
use crate::executable::Name;

/// `name: value` inside a field's or directive's argument list.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub(crate) name: Name,
    pub(crate) span: ByteSpan,
    pub(crate) value: Value,
}
impl Argument {
    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// `name: value` inside an input object literal.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField {
    pub(crate) name: Name,
    pub(crate) span: ByteSpan,
    pub(crate) value: Value,
}
impl ObjectField {
    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Value {
    pub(crate) kind: ValueKind,
    pub(crate) span: ByteSpan,
}
impl Value {
    pub fn kind(&self) -> &ValueKind {
        &self.kind
    }

    pub fn span(&self) -> ByteSpan {
        self.span
    }

    /// The names of every `$variable` referenced by this value, including
    /// inside list and object literals.
    pub fn variables(&self) -> Vec<&Name> {
        self.variable_references()
            .into_iter()
            .filter_map(|value| match &value.kind {
                ValueKind::Variable(name) => Some(name),
                _ => None,
            })
            .collect()
    }

    /// Every `$variable` value nested in (or equal to) this value.
    pub fn variable_references(&self) -> Vec<&Value> {
        match &self.kind {
            ValueKind::Variable(_) => vec![self],
            ValueKind::List(values) => values.iter()
                .flat_map(|value| value.variable_references())
                .collect(),
            ValueKind::Object(fields) => fields.iter()
                .flat_map(|field| field.value.variable_references())
                .collect(),
            ValueKind::Boolean(_)
                | ValueKind::Enum(_)
                | ValueKind::Float(_)
                | ValueKind::Int(_)
                | ValueKind::Null
                | ValueKind::String(_) => vec![],
        }
    }
}

/// Literal values keep their source text.
#[derive(Clone, Debug, PartialEq)]
pub enum ValueKind {
    Boolean(bool),
    Enum(String),
    Float(String),
    Int(String),
    List(Vec<Value>),
    Null,
    Object(Vec<ObjectField>),
    String(String),
    /// The variable's name, without the `$`.
    Variable(Name),
}
