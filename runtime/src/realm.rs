use std::fmt::Write;

use ahash::AHashMap;
use log::{debug, trace};

use crate::blueprint_pool::{BlueprintPool, BlueprintPointer};
use crate::debugging::{DebugRepresentation, Renderer};
use crate::result::{DelegationError, ModelResult};
use crate::values::blueprint::Blueprint;
use crate::values::instance::Instance;
use crate::values::method::Method;
use crate::values::value::Value;

/// The result of resolving a name on an instance: either the instance's own
/// field value or a method found on the delegation chain. Not-found is
/// `None` at the `lookup` call site, never a `Binding` variant.
#[derive(Clone, Debug, PartialEq)]
pub enum Binding {
    Field(Value),
    Method(Method),
}

impl Binding {
    pub fn into_value(self) -> Value {
        match self {
            Binding::Field(value) => value,
            Binding::Method(method) => Value::Method(method),
        }
    }

    /// Invoke the binding against an instance. Own fields holding a method
    /// value are callable too (the constructor-assigned function pattern);
    /// plain data fields are not.
    pub fn call(&self, target: &Instance, arguments: &[Value]) -> Option<Value> {
        match self {
            Binding::Method(method) => Some(method.call(target, arguments)),
            Binding::Field(Value::Method(method)) => Some(method.call(target, arguments)),
            Binding::Field(_) => None,
        }
    }
}

/// Owns every blueprint and the designated root of all delegation chains.
/// The root is built once, carries the universal behaviors, and has no
/// delegate of its own.
pub struct Realm {
    pub(crate) blueprints: BlueprintPool,
    root: BlueprintPointer,
}

impl Default for Realm {
    fn default() -> Self {
        Realm::new()
    }
}

impl Realm {
    pub fn new() -> Realm {
        // Stash::new is only defined for the usize index type; a custom
        // Index goes through Default.
        let mut blueprints = BlueprintPool::default();

        let root = blueprints.put(
            Blueprint::builder()
                .with_name("Object")
                .with_method("valueOf", Method::new(value_of))
                .build(),
        );

        debug!("realm initialised, root {}", root);

        Realm { blueprints, root }
    }

    pub fn root(&self) -> BlueprintPointer {
        self.root
    }

    /// Register a blueprint with the realm. A blueprint declared without an
    /// explicit delegate is chained to the realm root; an explicit delegate
    /// must already resolve in this realm, which also rules out
    /// self-delegation since the new blueprint has no slot yet.
    pub fn declare(&mut self, mut blueprint: Blueprint) -> ModelResult<BlueprintPointer> {
        match blueprint.delegate() {
            Some(delegate) => {
                self.blueprint(delegate)?;
            }
            None => blueprint.set_delegate(Some(self.root)),
        }

        let name = blueprint.name().to_owned();
        let pointer = self.blueprints.put(blueprint);

        debug!("declared {} as {}", name, pointer);

        Ok(pointer)
    }

    pub(crate) fn blueprint(&self, pointer: BlueprintPointer) -> ModelResult<&Blueprint> {
        self.blueprints
            .get(pointer)
            .ok_or(DelegationError::UndefinedBlueprint { pointer })
    }

    pub(crate) fn blueprint_mut(
        &mut self,
        pointer: BlueprintPointer,
    ) -> ModelResult<&mut Blueprint> {
        self.blueprints
            .get_mut(pointer)
            .ok_or(DelegationError::UndefinedBlueprint { pointer })
    }

    /// Produce a new instance of `pointer` by running each field
    /// initializer against `arguments`. The blueprint is not mutated.
    pub fn create(&self, pointer: BlueprintPointer, arguments: &[Value]) -> ModelResult<Instance> {
        let blueprint = self.blueprint(pointer)?;

        let mut fields = AHashMap::new();
        for (name, init) in blueprint.field_inits() {
            fields.insert(name.to_owned(), init.resolve(arguments));
        }

        trace!("created instance of {}", blueprint.name());

        Ok(Instance::new(pointer, fields))
    }

    /// `None` when the pointer terminates a chain (the root) or does not
    /// resolve at all; a pure read either way.
    pub fn get_delegate(&self, pointer: BlueprintPointer) -> Option<BlueprintPointer> {
        self.blueprints
            .get(pointer)
            .and_then(Blueprint::delegate)
    }

    /// Reparent `pointer` onto `delegate`. Rejected when the new delegate's
    /// own chain already reaches `pointer` (self-delegation included); on
    /// rejection the prior delegate is left untouched. Takes effect for all
    /// existing and future instances at once.
    pub fn set_delegate(
        &mut self,
        pointer: BlueprintPointer,
        delegate: BlueprintPointer,
    ) -> ModelResult {
        self.blueprint(pointer)?;
        self.blueprint(delegate)?;

        let mut current = Some(delegate);
        while let Some(link) = current {
            if link == pointer {
                return Err(DelegationError::InvalidDelegation {
                    blueprint: pointer,
                    delegate,
                });
            }
            current = self.get_delegate(link);
        }

        debug!("reparenting {} onto {}", pointer, delegate);

        self.blueprint_mut(pointer)?.set_delegate(Some(delegate));

        Ok(())
    }

    /// Resolve `name` on an instance: own fields shadow everything, then
    /// the origin's methods, then each successive delegate, nearest first.
    /// Results reflect the chain as it stands now, not as it stood when the
    /// instance was created.
    pub fn lookup(&self, instance: &Instance, name: &str) -> Option<Binding> {
        if let Some(value) = instance.field(name) {
            return Some(Binding::Field(value.clone()));
        }

        let mut current = Some(instance.origin());
        while let Some(pointer) = current {
            let blueprint = self.blueprints.get(pointer)?;

            if let Some(method) = blueprint.method(name) {
                trace!("resolved {} on {}", name, blueprint.name());
                return Some(Binding::Method(method.clone()));
            }

            current = blueprint.delegate();
        }

        None
    }

    /// True only when `name` is defined directly on the blueprint's own
    /// method table; the chain is never consulted.
    pub fn has_own(&self, pointer: BlueprintPointer, name: &str) -> bool {
        self.blueprints
            .get(pointer)
            .map_or(false, |blueprint| blueprint.has_own(name))
    }

    #[cfg(feature = "debugging")]
    pub fn describe_chain(&self, pointer: BlueprintPointer) -> String {
        let mut description = String::new();
        let mut current = Some(pointer);

        while let Some(link) = current {
            if !description.is_empty() {
                description.push_str(" -> ");
            }

            match link.name(self) {
                Some(name) => description.push_str(name),
                None => {
                    description.push_str("<undefined>");
                    break;
                }
            }

            current = self.get_delegate(link);
        }

        description
    }
}

impl DebugRepresentation for Realm {
    fn render(&self, renderer: &mut Renderer<'_, '_, '_>) -> std::fmt::Result {
        renderer.start_internal("Realm")?;
        renderer
            .formatter
            .write_fmt(format_args!("{} blueprints, root ", self.blueprints.len()))?;
        self.root.render(renderer)?;
        renderer.end_internal()
    }
}

// Object.prototype.valueOf analog: renders the instance's own fields. Keys
// are sorted so the rendering is stable across hash seeds.
fn value_of(target: &Instance, _arguments: &[Value], _context: Option<&Value>) -> Value {
    let mut fields: Vec<(&str, &Value)> = target.fields().collect();
    fields.sort_unstable_by_key(|(name, _)| *name);

    let mut rendered = String::from("{");
    for (index, (name, value)) in fields.iter().enumerate() {
        if index > 0 {
            rendered.push_str(", ");
        }
        let _ = write!(rendered, "{}: {}", name, value);
    }
    rendered.push('}');

    Value::String(rendered)
}
