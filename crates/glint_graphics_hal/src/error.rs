use thiserror::Error;

use crate::uniforms::UniformKind;

pub type Result<T, E = UniformError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UniformError {
    /// The linker reported a type tag outside the supported scalar, vector
    /// and matrix set. A uniform with this tag can never be constructed.
    #[error("unknown uniform type: {0:#06x}")]
    UnknownUniformType(u32),

    #[error("uniform of type {expected:?} cannot be set from a {actual} value")]
    ValueShapeMismatch {
        expected: UniformKind,
        actual: &'static str,
    },

    #[error("uniform `{0}` is an array of {1} elements")]
    UnsupportedArray(String, i32),

    #[error("no uniform named `{0}`")]
    UnknownUniform(String),
}
