use ahash::AHashMap;

use crate::blueprint_pool::BlueprintPointer;
use crate::debugging::{DebugRepresentation, Renderer, Representation};
use crate::values::method::Method;
use crate::values::value::Value;

/// Per-instance field initialization logic, run against the construction
/// arguments each time the owning blueprint produces an instance.
#[derive(Clone, Debug)]
pub enum FieldInit {
    /// Copy the nth construction argument; `Undefined` when absent.
    Argument(usize),
    Constant(Value),
    Computed(fn(&[Value]) -> Value),
}

impl FieldInit {
    pub(crate) fn resolve(&self, arguments: &[Value]) -> Value {
        match self {
            FieldInit::Argument(index) => arguments.get(*index).cloned().unwrap_or_default(),
            FieldInit::Constant(value) => value.clone(),
            FieldInit::Computed(op) => op(arguments),
        }
    }
}

/// A named template: owns field initializers, methods shared by every
/// instance delegating here, and at most one delegate link. The delegate is
/// the only mutable piece of the chain and is reassigned through the realm,
/// which enforces acyclicity.
#[derive(Clone, Debug)]
pub struct Blueprint {
    name: String,
    own_fields: AHashMap<String, FieldInit>,
    own_methods: AHashMap<String, Method>,
    delegate: Option<BlueprintPointer>,
}

pub struct BlueprintBuilder {
    inner: Blueprint,
}

impl BlueprintBuilder {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.inner.name = name.into();
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, init: FieldInit) -> Self {
        self.inner.own_fields.insert(name.into(), init);
        self
    }

    pub fn with_method(mut self, name: impl Into<String>, method: Method) -> Self {
        self.inner.own_methods.insert(name.into(), method);
        self
    }

    pub fn with_delegate(mut self, delegate: BlueprintPointer) -> Self {
        self.inner.delegate = Some(delegate);
        self
    }

    pub fn build(self) -> Blueprint {
        self.inner
    }
}

impl Blueprint {
    pub fn builder() -> BlueprintBuilder {
        BlueprintBuilder {
            inner: Blueprint {
                name: String::new(),
                own_fields: AHashMap::new(),
                own_methods: AHashMap::new(),
                delegate: None,
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn delegate(&self) -> Option<BlueprintPointer> {
        self.delegate
    }

    pub(crate) fn set_delegate(&mut self, delegate: Option<BlueprintPointer>) {
        self.delegate = delegate;
    }

    pub fn method(&self, name: &str) -> Option<&Method> {
        self.own_methods.get(name)
    }

    /// True only when `name` is defined directly on this blueprint's shared
    /// storage, without consulting the delegation chain.
    pub fn has_own(&self, name: &str) -> bool {
        self.own_methods.contains_key(name)
    }

    pub(crate) fn define_method(&mut self, name: impl Into<String>, method: Method) {
        self.own_methods.insert(name.into(), method);
    }

    pub(crate) fn define_field(&mut self, name: impl Into<String>, init: FieldInit) {
        self.own_fields.insert(name.into(), init);
    }

    pub(crate) fn field_inits(&self) -> impl Iterator<Item = (&str, &FieldInit)> {
        self.own_fields
            .iter()
            .map(|(name, init)| (name.as_str(), init))
    }
}

impl DebugRepresentation for Blueprint {
    fn render(&self, renderer: &mut Renderer<'_, '_, '_>) -> std::fmt::Result {
        renderer.formatter.write_str(&self.name)?;

        if renderer.representation != Representation::Compact {
            renderer.formatter.write_str(" {")?;

            let mut names: Vec<&str> = self.own_methods.keys().map(String::as_str).collect();
            names.sort_unstable();

            for (index, name) in names.iter().enumerate() {
                if index > 0 {
                    renderer.formatter.write_str(", ")?;
                }
                renderer.formatter.write_str(name)?;
                renderer.formatter.write_str(": ")?;
                renderer.literal("function() {}")?;
            }

            renderer.formatter.write_str("}")?;

            if let Some(delegate) = &self.delegate {
                renderer.formatter.write_str(" ")?;
                renderer.start_internal("Delegate")?;
                delegate.render(renderer)?;
                renderer.end_internal()?;
            }
        }

        Ok(())
    }
}
