use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter, Result};

use colored::Colorize;

use crate::realm::Realm;

pub struct Renderer<'b, 'c, 'd> {
    max_depth: usize,
    current_depth: usize,
    pub(crate) representation: Representation,
    pub(crate) formatter: &'b mut Formatter<'c>,
    pub(crate) realm: &'d Realm,
}

#[allow(dead_code)]
impl<'b, 'c, 'd> Renderer<'b, 'c, 'd> {
    pub fn render(&mut self, object: &dyn DebugRepresentation) -> Result {
        match self.current_depth.cmp(&self.max_depth) {
            Ordering::Equal | Ordering::Greater => {
                let representation = self.representation;
                self.representation = Representation::Compact;
                let result = object.render(self);
                self.representation = representation;

                result
            }
            Ordering::Less => {
                self.current_depth += 1;

                let result = object.render(self);

                self.current_depth -= 1;

                result
            }
        }
    }

    pub(crate) fn compact(formatter: &'b mut Formatter<'c>, realm: &'d Realm) -> Self {
        Renderer {
            max_depth: 0,
            current_depth: 1,
            formatter,
            representation: Representation::Compact,
            realm,
        }
    }

    pub(crate) fn debug(formatter: &'b mut Formatter<'c>, realm: &'d Realm, depth: usize) -> Self {
        Renderer {
            max_depth: depth,
            current_depth: 0,
            formatter,
            representation: Representation::Debug,
            realm,
        }
    }

    #[inline]
    pub(crate) fn start_internal(&mut self, internal_type: &str) -> Result {
        self.formatter.write_fmt(format_args!(
            "{}{}{}",
            "[[".blue(),
            internal_type.blue(),
            "| ".blue()
        ))
    }

    #[inline]
    pub(crate) fn end_internal(&mut self) -> Result {
        self.formatter.write_fmt(format_args!("{}", "]]".blue()))
    }

    #[inline]
    pub(crate) fn internal_key(&mut self, key: &str) -> Result {
        self.formatter.write_fmt(format_args!("{}: ", key.blue()))
    }

    #[inline]
    pub(crate) fn literal(&mut self, value: &str) -> Result {
        self.formatter
            .write_fmt(format_args!("{}", value.bright_yellow()))
    }

    #[inline]
    pub(crate) fn string_literal(&mut self, value: &str) -> Result {
        self.formatter
            .write_fmt(format_args!("\"{}\"", value.bright_yellow()))
    }
}

#[derive(Copy, Clone, PartialEq)]
pub enum Representation {
    Compact,
    Debug,
}

pub trait DebugRepresentation {
    fn render(&self, renderer: &mut Renderer<'_, '_, '_>) -> Result;
}

pub struct Rendered<'b, 'c> {
    value: &'c dyn DebugRepresentation,
    realm: &'b Realm,
}

pub trait DebugWithRealm<'b, 'c> {
    fn debug_value(&'b self, value: &'c dyn DebugRepresentation) -> Rendered<'b, 'c>;
}

impl<'b, 'c> DebugWithRealm<'b, 'c> for Realm {
    fn debug_value(&'b self, value: &'c dyn DebugRepresentation) -> Rendered<'b, 'c> {
        Rendered { value, realm: self }
    }
}

impl<'b, 'c> Debug for Rendered<'b, 'c> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut renderer = Renderer::debug(f, self.realm, 5);

        renderer.render(self.value)
    }
}

impl<'b, 'c> Display for Rendered<'b, 'c> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut renderer = Renderer::compact(f, self.realm);

        renderer.render(self.value)
    }
}

impl<T> DebugRepresentation for Vec<T>
where
    T: DebugRepresentation,
{
    fn render(&self, renderer: &mut Renderer<'_, '_, '_>) -> Result {
        renderer.formatter.write_str("[")?;

        let mut after_first = false;
        for item in self {
            if after_first {
                renderer.formatter.write_str(", ")?;
            } else {
                after_first = true;
            }

            item.render(renderer)?;
        }

        renderer.formatter.write_str("]")?;
        Ok(())
    }
}

impl<T> DebugRepresentation for Option<T>
where
    T: DebugRepresentation,
{
    fn render(&self, renderer: &mut Renderer<'_, '_, '_>) -> Result {
        match self {
            Some(value) => renderer.render(value)?,
            None => {}
        }

        Ok(())
    }
}
