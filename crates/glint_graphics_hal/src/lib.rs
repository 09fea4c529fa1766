pub use error::{Result, UniformError};
pub use registry::UniformRegistry;
pub use uniform::{Uniform, UniformOptions};
pub use uniforms::{UniformKind, UniformValue, VectorSize};
pub use uploader::Uploader;

pub mod error;
pub mod registry;
pub mod uniform;
pub mod uniforms;
pub mod uploader;

#[cfg(test)]
mod testing;

/// Upload primitives a graphics context must provide for uniforms.
///
/// Calls apply to whichever program is currently bound on the context.
/// Binding the right program before uploading is up to the caller.
pub trait UniformContext {
    /// Handle to a uniform slot inside a linked program.
    type UniformLocation;

    fn uniform_1_i32(&self, location: &Self::UniformLocation, x: i32);
    fn uniform_2_i32(&self, location: &Self::UniformLocation, v: &[i32; 2]);
    fn uniform_3_i32(&self, location: &Self::UniformLocation, v: &[i32; 3]);
    fn uniform_4_i32(&self, location: &Self::UniformLocation, v: &[i32; 4]);

    fn uniform_1_f32(&self, location: &Self::UniformLocation, x: f32);
    fn uniform_2_f32(&self, location: &Self::UniformLocation, v: &[f32; 2]);
    fn uniform_3_f32(&self, location: &Self::UniformLocation, v: &[f32; 3]);
    fn uniform_4_f32(&self, location: &Self::UniformLocation, v: &[f32; 4]);

    // Matrices are column-major unless `transpose` is set
    fn uniform_matrix_2_f32(&self, location: &Self::UniformLocation, transpose: bool, v: &[f32; 4]);
    fn uniform_matrix_3_f32(&self, location: &Self::UniformLocation, transpose: bool, v: &[f32; 9]);
    fn uniform_matrix_4_f32(
        &self,
        location: &Self::UniformLocation,
        transpose: bool,
        v: &[f32; 16],
    );
}
