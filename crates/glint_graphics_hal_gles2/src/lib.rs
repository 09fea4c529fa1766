use std::rc::Rc;

use derive_more::Deref;
use glint_graphics_hal::{Result, UniformContext, UniformRegistry};
use glow::HasContext;

pub use shader::{build_registry, DiscoverySettings};

mod shader;

/// Shared handle to a `glow` context, which uniforms upload through.
#[derive(Deref)]
pub struct Gles<G: HasContext>(pub Rc<G>);

impl<G: HasContext> Gles<G> {
    pub fn new(gl: G) -> Self {
        Self(Rc::new(gl))
    }

    /// Lists the uniforms of a linked `program`.
    ///
    /// Locations are only valid for this link of the program; uniforms must be
    /// discovered again after relinking.
    pub fn discover_uniforms(
        &self,
        program: G::Program,
        settings: &DiscoverySettings,
    ) -> Result<UniformRegistry<G::UniformLocation>> {
        let gl: &G = &self.0;

        let active = unsafe {
            let count = gl.get_active_uniforms(program);
            (0..count)
                .filter_map(|i| gl.get_active_uniform(program, i))
                .map(|uniform| {
                    let location = gl.get_uniform_location(program, &uniform.name);
                    (uniform, location)
                })
                .collect::<Vec<_>>()
        };

        build_registry(active, settings)
    }
}

impl<G: HasContext> Clone for Gles<G> {
    fn clone(&self) -> Self {
        Gles(self.0.clone())
    }
}

impl<G: HasContext> UniformContext for Gles<G> {
    type UniformLocation = G::UniformLocation;

    fn uniform_1_i32(&self, location: &Self::UniformLocation, x: i32) {
        let gl: &G = &self.0;
        unsafe { gl.uniform_1_i32(Some(location), x) };
    }

    fn uniform_2_i32(&self, location: &Self::UniformLocation, v: &[i32; 2]) {
        let gl: &G = &self.0;
        unsafe { gl.uniform_2_i32_slice(Some(location), v) };
    }

    fn uniform_3_i32(&self, location: &Self::UniformLocation, v: &[i32; 3]) {
        let gl: &G = &self.0;
        unsafe { gl.uniform_3_i32_slice(Some(location), v) };
    }

    fn uniform_4_i32(&self, location: &Self::UniformLocation, v: &[i32; 4]) {
        let gl: &G = &self.0;
        unsafe { gl.uniform_4_i32_slice(Some(location), v) };
    }

    fn uniform_1_f32(&self, location: &Self::UniformLocation, x: f32) {
        let gl: &G = &self.0;
        unsafe { gl.uniform_1_f32(Some(location), x) };
    }

    fn uniform_2_f32(&self, location: &Self::UniformLocation, v: &[f32; 2]) {
        let gl: &G = &self.0;
        unsafe { gl.uniform_2_f32_slice(Some(location), v) };
    }

    fn uniform_3_f32(&self, location: &Self::UniformLocation, v: &[f32; 3]) {
        let gl: &G = &self.0;
        unsafe { gl.uniform_3_f32_slice(Some(location), v) };
    }

    fn uniform_4_f32(&self, location: &Self::UniformLocation, v: &[f32; 4]) {
        let gl: &G = &self.0;
        unsafe { gl.uniform_4_f32_slice(Some(location), v) };
    }

    fn uniform_matrix_2_f32(&self, location: &Self::UniformLocation, transpose: bool, v: &[f32; 4]) {
        let gl: &G = &self.0;
        unsafe { gl.uniform_matrix_2_f32_slice(Some(location), transpose, v) };
    }

    fn uniform_matrix_3_f32(&self, location: &Self::UniformLocation, transpose: bool, v: &[f32; 9]) {
        let gl: &G = &self.0;
        unsafe { gl.uniform_matrix_3_f32_slice(Some(location), transpose, v) };
    }

    fn uniform_matrix_4_f32(
        &self,
        location: &Self::UniformLocation,
        transpose: bool,
        v: &[f32; 16],
    ) {
        let gl: &G = &self.0;
        unsafe { gl.uniform_matrix_4_f32_slice(Some(location), transpose, v) };
    }
}
