use derive_more::Constructor;

use crate::{
    uniforms::{UniformKind, UniformValue},
    uploader::Uploader,
    Result, UniformContext,
};

/// A uniform as reported by the program linker.
#[derive(Debug, Clone, Constructor)]
pub struct UniformOptions<L> {
    pub name: String,
    /// Raw GL type tag, such as `FLOAT_VEC3`.
    pub kind: u32,
    /// Size in bytes, informational only.
    pub size: usize,
    pub location: L,
}

/// A single uniform of a linked program, along with the last value set on it.
///
/// The cached value is never read back from the GPU. It may differ from what
/// the GPU holds if the program was not bound while setting, or was relinked.
#[derive(Debug, Clone)]
pub struct Uniform<L> {
    name: String,
    kind: UniformKind,
    size: usize,
    location: L,
    uploader: Uploader,
    value: Option<UniformValue>,
}

impl<L> Uniform<L> {
    pub fn new(options: UniformOptions<L>) -> Result<Self> {
        let kind = UniformKind::from_gl(options.kind)?;

        Ok(Self {
            name: options.name,
            kind,
            size: options.size,
            location: options.location,
            uploader: kind.uploader(),
            value: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> UniformKind {
        self.kind
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn uploader(&self) -> Uploader {
        self.uploader
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Last value accepted by [`Uniform::set_value`], `None` until then.
    pub fn get_value(&self) -> Option<&UniformValue> {
        self.value.as_ref()
    }

    /// Caches `value` and uploads it to the program bound on `ctx`.
    ///
    /// Fails without touching the cache or the context if `value` does not
    /// have the shape of this uniform's type.
    pub fn set_value<C>(&mut self, ctx: &C, value: impl Into<UniformValue>) -> Result<&mut Self>
    where
        C: UniformContext<UniformLocation = L>,
    {
        let value = value.into();
        log::trace!("uniform {} ({:?}) = {:?}", self.name, self.kind, value);

        self.uploader.upload(ctx, &self.location, &value)?;
        self.value = Some(value);

        Ok(self)
    }

    /// Combined getter and setter.
    ///
    /// `None` reads the cached value. `Some` value sets it, *unless* the value
    /// is falsy (`false`, `0`, `0.0`, NaN): those are treated as if no value
    /// was passed, so nothing is cached or uploaded and the previous value is
    /// returned. Use [`Uniform::set_value`] to set such values.
    pub fn value<C>(
        &mut self,
        ctx: &C,
        value: Option<UniformValue>,
    ) -> Result<Option<&UniformValue>>
    where
        C: UniformContext<UniformLocation = L>,
    {
        match value {
            Some(value) if value.is_truthy() => Ok(self.set_value(ctx, value)?.get_value()),
            _ => Ok(self.get_value()),
        }
    }
}
