use derive_more::From;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::{EnumIter, IntoStaticStr};

use crate::{uploader::Uploader, Result, UniformError};

/// Type of a uniform as reported by the program linker.
///
/// Discriminants are the GL / WebGL enumerants, so a tag read from
/// `glGetActiveUniform` converts directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive, EnumIter)]
#[repr(u32)]
pub enum UniformKind {
    Bool = 0x8B56,
    BoolVec2 = 0x8B57,
    BoolVec3 = 0x8B58,
    BoolVec4 = 0x8B59,
    Int = 0x1404,
    IntVec2 = 0x8B53,
    IntVec3 = 0x8B54,
    IntVec4 = 0x8B55,
    Float = 0x1406,
    FloatVec2 = 0x8B50,
    FloatVec3 = 0x8B51,
    FloatVec4 = 0x8B52,
    FloatMat2 = 0x8B5A,
    FloatMat3 = 0x8B5B,
    FloatMat4 = 0x8B5C,
}

impl UniformKind {
    pub fn from_gl(tag: u32) -> Result<Self> {
        Self::try_from(tag).map_err(|e| UniformError::UnknownUniformType(e.number))
    }

    pub fn components(self) -> usize {
        match self {
            UniformKind::Bool | UniformKind::Int | UniformKind::Float => 1,
            UniformKind::BoolVec2 | UniformKind::IntVec2 | UniformKind::FloatVec2 => 2,
            UniformKind::BoolVec3 | UniformKind::IntVec3 | UniformKind::FloatVec3 => 3,
            UniformKind::BoolVec4
            | UniformKind::IntVec4
            | UniformKind::FloatVec4
            | UniformKind::FloatMat2 => 4,
            UniformKind::FloatMat3 => 9,
            UniformKind::FloatMat4 => 16,
        }
    }

    /// Size in bytes of a single element of this type.
    pub fn size(self) -> usize {
        4 * self.components()
    }

    pub fn uploader(self) -> Uploader {
        match self {
            UniformKind::Bool => Uploader::Bool,
            UniformKind::BoolVec2 => Uploader::BoolVector(VectorSize::N2),
            UniformKind::BoolVec3 => Uploader::BoolVector(VectorSize::N3),
            UniformKind::BoolVec4 => Uploader::BoolVector(VectorSize::N4),
            UniformKind::Int => Uploader::Int,
            UniformKind::IntVec2 => Uploader::IntVector(VectorSize::N2),
            UniformKind::IntVec3 => Uploader::IntVector(VectorSize::N3),
            UniformKind::IntVec4 => Uploader::IntVector(VectorSize::N4),
            UniformKind::Float => Uploader::Float,
            UniformKind::FloatVec2 => Uploader::FloatVector(VectorSize::N2),
            UniformKind::FloatVec3 => Uploader::FloatVector(VectorSize::N3),
            UniformKind::FloatVec4 => Uploader::FloatVector(VectorSize::N4),
            UniformKind::FloatMat2 => Uploader::Matrix(VectorSize::N2),
            UniformKind::FloatMat3 => Uploader::Matrix(VectorSize::N3),
            UniformKind::FloatMat4 => Uploader::Matrix(VectorSize::N4),
        }
    }
}

/// Arity of a vector, or the side of a square matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorSize {
    N2,
    N3,
    N4,
}

impl VectorSize {
    pub fn size(self) -> usize {
        match self {
            VectorSize::N2 => 2,
            VectorSize::N3 => 3,
            VectorSize::N4 => 4,
        }
    }
}

/// Host side value of a uniform. Matrices are column-major.
///
/// Boolean vectors have no variant of their own, they are set from
/// integer vectors, same as in GLSL where any non-zero component is `true`.
#[derive(Debug, Clone, Copy, PartialEq, From, IntoStaticStr)]
pub enum UniformValue {
    Bool(bool),
    Int(i32),
    IntVec2([i32; 2]),
    IntVec3([i32; 3]),
    IntVec4([i32; 4]),
    Float(f32),
    FloatVec2([f32; 2]),
    FloatVec3([f32; 3]),
    FloatVec4([f32; 4]),
    #[from(ignore)]
    Mat2([f32; 4]),
    Mat3([f32; 9]),
    Mat4([f32; 16]),
}

impl UniformValue {
    /// Whether the value counts as "present" for [`crate::Uniform::value`].
    ///
    /// `false`, zero and NaN scalars are falsy. Vectors and matrices always
    /// have at least two components and are always truthy.
    pub fn is_truthy(&self) -> bool {
        match *self {
            UniformValue::Bool(b) => b,
            UniformValue::Int(x) => x != 0,
            UniformValue::Float(x) => x != 0. && !x.is_nan(),
            _ => true,
        }
    }

    pub fn shape(&self) -> &'static str {
        self.into()
    }
}
