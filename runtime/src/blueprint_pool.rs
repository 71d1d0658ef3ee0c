use std::fmt::{Display, Formatter};
use std::marker::PhantomData;

use stash::{Index, Stash};

use crate::debugging::{DebugRepresentation, Renderer, Representation};
use crate::realm::Realm;
use crate::result::ModelResult;
use crate::values::blueprint::{Blueprint, FieldInit};
use crate::values::instance::Instance;
use crate::values::method::Method;
use crate::values::value::Value;

pub(crate) type BlueprintPool = Stash<Blueprint, BlueprintPointer>;

type BlueprintId = u32;

/// Copyable handle into a realm's blueprint pool. Pointers are cheap to
/// pass around and compare; every dereference goes back through a realm.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Copy)]
pub struct BlueprintPointer {
    index: BlueprintId,
    phantom_data: PhantomData<BlueprintPool>,
}

impl Index for BlueprintPointer {
    fn from_usize(idx: usize) -> Self {
        if idx > BlueprintId::MAX as usize {
            panic!("{} index out of bounds", idx)
        }

        BlueprintPointer {
            index: idx as BlueprintId,
            phantom_data: PhantomData,
        }
    }

    fn into_usize(self) -> usize {
        self.index as usize
    }
}

impl Display for BlueprintPointer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("Blueprint@{}", self.index))
    }
}

impl From<BlueprintPointer> for u32 {
    fn from(value: BlueprintPointer) -> Self {
        value.index
    }
}

impl BlueprintPointer {
    pub fn name<'b>(&self, realm: &'b Realm) -> Option<&'b str> {
        realm.blueprints.get(*self).map(Blueprint::name)
    }

    pub fn get_delegate(&self, realm: &Realm) -> Option<BlueprintPointer> {
        realm.get_delegate(*self)
    }

    pub fn set_delegate(&self, realm: &mut Realm, delegate: BlueprintPointer) -> ModelResult {
        realm.set_delegate(*self, delegate)
    }

    pub fn has_own(&self, realm: &Realm, name: &str) -> bool {
        realm.has_own(*self, name)
    }

    pub fn define_method(
        &self,
        realm: &mut Realm,
        name: impl Into<String>,
        method: Method,
    ) -> ModelResult {
        realm.blueprint_mut(*self)?.define_method(name, method);
        Ok(())
    }

    pub fn define_field(
        &self,
        realm: &mut Realm,
        name: impl Into<String>,
        init: FieldInit,
    ) -> ModelResult {
        realm.blueprint_mut(*self)?.define_field(name, init);
        Ok(())
    }

    pub fn create(&self, realm: &Realm, arguments: &[Value]) -> ModelResult<Instance> {
        realm.create(*self, arguments)
    }
}

impl DebugRepresentation for BlueprintPointer {
    fn render(&self, renderer: &mut Renderer<'_, '_, '_>) -> std::fmt::Result {
        if renderer.representation == Representation::Compact {
            return renderer
                .formatter
                .write_fmt(format_args!("Blueprint@{}", self.index));
        }

        match renderer.realm.blueprints.get(*self) {
            Some(blueprint) => renderer.render(blueprint),
            None => renderer
                .formatter
                .write_fmt(format_args!("Blueprint@{}", self.index)),
        }
    }
}
