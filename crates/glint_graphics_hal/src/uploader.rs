use crate::{
    uniforms::{UniformKind, UniformValue, VectorSize},
    Result, UniformContext, UniformError,
};

/// Upload call for one uniform type, picked once when the uniform is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Uploader {
    Bool,
    BoolVector(VectorSize),
    Int,
    IntVector(VectorSize),
    Float,
    FloatVector(VectorSize),
    Matrix(VectorSize),
}

// Booleans go through the integer calls, as 0 or 1.
fn pack_bool(x: i32) -> i32 {
    (x != 0) as i32
}

impl Uploader {
    pub fn kind(self) -> UniformKind {
        match self {
            Uploader::Bool => UniformKind::Bool,
            Uploader::BoolVector(VectorSize::N2) => UniformKind::BoolVec2,
            Uploader::BoolVector(VectorSize::N3) => UniformKind::BoolVec3,
            Uploader::BoolVector(VectorSize::N4) => UniformKind::BoolVec4,
            Uploader::Int => UniformKind::Int,
            Uploader::IntVector(VectorSize::N2) => UniformKind::IntVec2,
            Uploader::IntVector(VectorSize::N3) => UniformKind::IntVec3,
            Uploader::IntVector(VectorSize::N4) => UniformKind::IntVec4,
            Uploader::Float => UniformKind::Float,
            Uploader::FloatVector(VectorSize::N2) => UniformKind::FloatVec2,
            Uploader::FloatVector(VectorSize::N3) => UniformKind::FloatVec3,
            Uploader::FloatVector(VectorSize::N4) => UniformKind::FloatVec4,
            Uploader::Matrix(VectorSize::N2) => UniformKind::FloatMat2,
            Uploader::Matrix(VectorSize::N3) => UniformKind::FloatMat3,
            Uploader::Matrix(VectorSize::N4) => UniformKind::FloatMat4,
        }
    }

    pub fn accepts(self, value: &UniformValue) -> bool {
        use crate::uniforms::UniformValue as V;
        use crate::uniforms::VectorSize::*;

        matches!(
            (self, value),
            (Uploader::Bool, V::Bool(_) | V::Int(_))
                | (Uploader::BoolVector(N2) | Uploader::IntVector(N2), V::IntVec2(_))
                | (Uploader::BoolVector(N3) | Uploader::IntVector(N3), V::IntVec3(_))
                | (Uploader::BoolVector(N4) | Uploader::IntVector(N4), V::IntVec4(_))
                | (Uploader::Int, V::Int(_))
                | (Uploader::Float, V::Float(_))
                | (Uploader::FloatVector(N2), V::FloatVec2(_))
                | (Uploader::FloatVector(N3), V::FloatVec3(_))
                | (Uploader::FloatVector(N4), V::FloatVec4(_))
                | (Uploader::Matrix(N2), V::Mat2(_))
                | (Uploader::Matrix(N3), V::Mat3(_))
                | (Uploader::Matrix(N4), V::Mat4(_))
        )
    }

    /// Issues exactly one upload call on `ctx`, or none if `value` has the
    /// wrong shape for this uploader.
    pub fn upload<C: UniformContext>(
        self,
        ctx: &C,
        location: &C::UniformLocation,
        value: &UniformValue,
    ) -> Result<()> {
        use crate::uniforms::UniformValue as V;
        use crate::uniforms::VectorSize::*;

        match (self, *value) {
            (Uploader::Bool, V::Bool(b)) => ctx.uniform_1_i32(location, b as i32),
            (Uploader::Bool | Uploader::Int, V::Int(x)) => ctx.uniform_1_i32(location, x),

            (Uploader::BoolVector(N2), V::IntVec2(v)) => {
                ctx.uniform_2_i32(location, &v.map(pack_bool))
            }
            (Uploader::BoolVector(N3), V::IntVec3(v)) => {
                ctx.uniform_3_i32(location, &v.map(pack_bool))
            }
            (Uploader::BoolVector(N4), V::IntVec4(v)) => {
                ctx.uniform_4_i32(location, &v.map(pack_bool))
            }

            (Uploader::IntVector(N2), V::IntVec2(v)) => ctx.uniform_2_i32(location, &v),
            (Uploader::IntVector(N3), V::IntVec3(v)) => ctx.uniform_3_i32(location, &v),
            (Uploader::IntVector(N4), V::IntVec4(v)) => ctx.uniform_4_i32(location, &v),

            (Uploader::Float, V::Float(x)) => ctx.uniform_1_f32(location, x),
            (Uploader::FloatVector(N2), V::FloatVec2(v)) => ctx.uniform_2_f32(location, &v),
            (Uploader::FloatVector(N3), V::FloatVec3(v)) => ctx.uniform_3_f32(location, &v),
            (Uploader::FloatVector(N4), V::FloatVec4(v)) => ctx.uniform_4_f32(location, &v),

            (Uploader::Matrix(N2), V::Mat2(m)) => ctx.uniform_matrix_2_f32(location, false, &m),
            (Uploader::Matrix(N3), V::Mat3(m)) => ctx.uniform_matrix_3_f32(location, false, &m),
            (Uploader::Matrix(N4), V::Mat4(m)) => ctx.uniform_matrix_4_f32(location, false, &m),

            _ => {
                return Err(UniformError::ValueShapeMismatch {
                    expected: self.kind(),
                    actual: value.shape(),
                })
            }
        }

        Ok(())
    }
}
