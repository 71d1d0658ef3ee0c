use std::fmt::{Debug, Display, Formatter};

use crate::debugging::{DebugRepresentation, Renderer};
use crate::values::method::Method;

/// A value held in an instance field or produced by a method. Absence of a
/// value is always expressed as `None` at the lookup layer; `Undefined` is a
/// value a field can legitimately hold.
#[derive(Clone)]
pub enum Value {
    Undefined,
    Null,
    Boolean(bool),
    Float(f64),
    String(String),
    Method(Method),
}

impl Default for Value {
    fn default() -> Self {
        Value::Undefined
    }
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&Method> {
        match self {
            Value::Method(method) => Some(method),
            _ => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(b1), Value::Boolean(b2)) => b1 == b2,
            (Value::Float(f1), Value::Float(f2)) => f1 == f2,
            (Value::String(s1), Value::String(s2)) => s1 == s2,
            (Value::Method(m1), Value::Method(m2)) => m1 == m2,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Method> for Value {
    fn from(value: Method) -> Self {
        Value::Method(value)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Boolean(value) => write!(f, "{}", value),
            Value::Float(value) => write!(f, "{}", value),
            Value::String(value) => f.write_str(value),
            Value::Method(_) => f.write_str("function() {}"),
        }
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(value) => write!(f, "\"{}\"", value),
            other => Display::fmt(other, f),
        }
    }
}

impl DebugRepresentation for Value {
    fn render(&self, renderer: &mut Renderer<'_, '_, '_>) -> std::fmt::Result {
        match self {
            Value::Undefined => renderer.literal("undefined"),
            Value::Null => renderer.literal("null"),
            Value::Boolean(value) => renderer.literal(&value.to_string()),
            Value::Float(value) => renderer.literal(&value.to_string()),
            Value::String(value) => renderer.string_literal(value),
            Value::Method(method) => method.render(renderer),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Value;
    use crate::values::instance::Instance;
    use crate::values::method::Method;

    fn noop(_target: &Instance, _arguments: &[Value], _context: Option<&Value>) -> Value {
        Value::Undefined
    }

    #[test]
    fn conversions() {
        assert_eq!(Value::from("steve"), Value::String("steve".to_owned()));
        assert_eq!(Value::from(5), Value::Float(5.0));
        assert_eq!(Value::from(true), Value::Boolean(true));
    }

    #[test]
    fn equality_is_by_variant() {
        assert_ne!(Value::from("1"), Value::from(1));
        assert_eq!(Value::Undefined, Value::default());
    }

    #[test]
    fn display() {
        assert_eq!(Value::from("steve").to_string(), "steve");
        assert_eq!(Value::from(5).to_string(), "5");
        assert_eq!(Value::Undefined.to_string(), "undefined");
        assert_eq!(Value::Method(Method::new(noop)).to_string(), "function() {}");
    }
}
