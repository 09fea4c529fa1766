use indexmap::IndexMap;

use crate::{uniform::Uniform, uniforms::UniformValue, Result, UniformContext, UniformError};

/// Uniforms of one linked program, by name, in the order they were discovered.
#[derive(Debug, Clone)]
pub struct UniformRegistry<L> {
    uniforms: IndexMap<String, Uniform<L>>,
}

impl<L> Default for UniformRegistry<L> {
    fn default() -> Self {
        Self {
            uniforms: IndexMap::new(),
        }
    }
}

impl<L> UniformRegistry<L> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a uniform, returning the one it replaced if the name was taken.
    pub fn insert(&mut self, uniform: Uniform<L>) -> Option<Uniform<L>> {
        self.uniforms.insert(uniform.name().to_owned(), uniform)
    }

    pub fn get(&self, name: &str) -> Option<&Uniform<L>> {
        self.uniforms.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Uniform<L>> {
        self.uniforms.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.uniforms.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.uniforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uniforms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Uniform<L>> {
        self.uniforms.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.uniforms.keys().map(String::as_str)
    }

    pub fn get_value(&self, name: &str) -> Option<&UniformValue> {
        self.get(name).and_then(Uniform::get_value)
    }

    pub fn set_value<C>(
        &mut self,
        ctx: &C,
        name: &str,
        value: impl Into<UniformValue>,
    ) -> Result<&mut Uniform<L>>
    where
        C: UniformContext<UniformLocation = L>,
    {
        self.uniforms
            .get_mut(name)
            .ok_or_else(|| UniformError::UnknownUniform(name.to_owned()))?
            .set_value(ctx, value)
    }
}

impl<L> FromIterator<Uniform<L>> for UniformRegistry<L> {
    fn from_iter<I: IntoIterator<Item = Uniform<L>>>(iter: I) -> Self {
        let mut registry = Self::new();
        for uniform in iter {
            registry.insert(uniform);
        }
        registry
    }
}
