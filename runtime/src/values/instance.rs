use ahash::AHashMap;

use crate::blueprint_pool::BlueprintPointer;
use crate::debugging::{DebugRepresentation, Renderer, Representation};
use crate::values::value::Value;

/// An object produced by a blueprint. Fields stay mutable for the life of
/// the instance; the origin pointer is fixed at creation and has no setter.
#[derive(Clone, Debug)]
pub struct Instance {
    fields: AHashMap<String, Value>,
    origin: BlueprintPointer,
}

impl Instance {
    pub(crate) fn new(origin: BlueprintPointer, fields: AHashMap<String, Value>) -> Instance {
        Instance { fields, origin }
    }

    /// The blueprint that produced this instance. A relation, not
    /// ownership: the blueprint lives in the realm's pool.
    pub fn origin(&self) -> BlueprintPointer {
        self.origin
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// True only when `name` exists in this instance's own fields, without
    /// consulting the origin or its delegation chain.
    pub fn has_own(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

impl DebugRepresentation for Instance {
    fn render(&self, renderer: &mut Renderer<'_, '_, '_>) -> std::fmt::Result {
        if let Some(name) = self.origin.name(renderer.realm) {
            renderer.formatter.write_str(name)?;
            renderer.formatter.write_str(" ")?;
        }

        if renderer.representation != Representation::Compact {
            renderer.formatter.write_str("{")?;

            let mut fields: Vec<(&str, &Value)> = self.fields().collect();
            fields.sort_unstable_by_key(|(name, _)| *name);

            for (index, (name, value)) in fields.iter().enumerate() {
                if index > 0 {
                    renderer.formatter.write_str(", ")?;
                }
                renderer.formatter.write_str(name)?;
                renderer.formatter.write_str(": ")?;
                renderer.render(*value)?;
            }

            renderer.formatter.write_str("}")?;
        }

        Ok(())
    }
}
