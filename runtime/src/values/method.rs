use std::fmt::{Debug, Formatter};

use crate::debugging::{DebugRepresentation, Renderer};
use crate::values::instance::Instance;
use crate::values::value::Value;

pub type MethodFn = fn(&Instance, &[Value], Option<&Value>) -> Value;

/// Shared behavior attached to a blueprint. A single `Method` is reachable
/// from every instance delegating to the blueprint that owns it; the target
/// instance is passed explicitly on each call.
#[derive(Clone)]
pub struct Method {
    pub op: MethodFn,
    pub context: Option<Box<Value>>,
}

impl Method {
    pub fn new(op: MethodFn) -> Method {
        Method { op, context: None }
    }

    pub fn with_context(op: MethodFn, context: impl Into<Value>) -> Method {
        Method {
            op,
            context: Some(Box::new(context.into())),
        }
    }

    pub fn call(&self, target: &Instance, arguments: &[Value]) -> Value {
        (self.op)(target, arguments, self.context.as_deref())
    }
}

impl PartialEq for Method {
    fn eq(&self, other: &Self) -> bool {
        self.op as usize == other.op as usize && self.context == other.context
    }
}

impl From<MethodFn> for Method {
    fn from(op: MethodFn) -> Self {
        Method::new(op)
    }
}

impl Debug for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("function() {}")
    }
}

impl DebugRepresentation for Method {
    fn render(&self, renderer: &mut Renderer<'_, '_, '_>) -> std::fmt::Result {
        renderer.literal("function() {}")
    }
}

#[cfg(test)]
mod test {
    use super::{Method, MethodFn};
    use crate::values::instance::Instance;
    use crate::values::value::Value;
    use crate::Realm;

    fn greet(_target: &Instance, _arguments: &[Value], context: Option<&Value>) -> Value {
        context.cloned().unwrap_or_default()
    }

    fn first_argument(_target: &Instance, arguments: &[Value], _context: Option<&Value>) -> Value {
        arguments.first().cloned().unwrap_or_default()
    }

    fn blank_instance() -> Instance {
        let realm = Realm::new();
        realm
            .create(realm.root(), &[])
            .expect("root blueprint resolves")
    }

    #[test]
    fn bound_context_is_passed_through() {
        let method = Method::with_context(greet, "Hello, I'm a player!");
        let result = method.call(&blank_instance(), &[]);

        assert_eq!(result, Value::from("Hello, I'm a player!"));
    }

    #[test]
    fn arguments_are_forwarded() {
        let method = Method::new(first_argument);
        let result = method.call(&blank_instance(), &[Value::from("X")]);

        assert_eq!(result, Value::from("X"));
    }

    #[test]
    fn equality_is_by_behavior() {
        assert_eq!(Method::new(greet), Method::from(greet as MethodFn));
        assert_ne!(Method::new(greet), Method::new(first_argument));
        assert_ne!(
            Method::with_context(greet, "a"),
            Method::with_context(greet, "b")
        );
    }
}
