use std::cell::RefCell;

use crate::UniformContext;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Int1(u32, i32),
    Int2(u32, [i32; 2]),
    Int3(u32, [i32; 3]),
    Int4(u32, [i32; 4]),
    Float1(u32, f32),
    Float2(u32, [f32; 2]),
    Float3(u32, [f32; 3]),
    Float4(u32, [f32; 4]),
    Matrix2(u32, bool, [f32; 4]),
    Matrix3(u32, bool, [f32; 9]),
    Matrix4(u32, bool, [f32; 16]),
}

/// Context that remembers every upload made through it, keyed by plain integer locations.
#[derive(Default)]
pub struct RecordingContext {
    calls: RefCell<Vec<Call>>,
}

impl RecordingContext {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn push(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl UniformContext for RecordingContext {
    type UniformLocation = u32;

    fn uniform_1_i32(&self, location: &u32, x: i32) {
        self.push(Call::Int1(*location, x));
    }

    fn uniform_2_i32(&self, location: &u32, v: &[i32; 2]) {
        self.push(Call::Int2(*location, *v));
    }

    fn uniform_3_i32(&self, location: &u32, v: &[i32; 3]) {
        self.push(Call::Int3(*location, *v));
    }

    fn uniform_4_i32(&self, location: &u32, v: &[i32; 4]) {
        self.push(Call::Int4(*location, *v));
    }

    fn uniform_1_f32(&self, location: &u32, x: f32) {
        self.push(Call::Float1(*location, x));
    }

    fn uniform_2_f32(&self, location: &u32, v: &[f32; 2]) {
        self.push(Call::Float2(*location, *v));
    }

    fn uniform_3_f32(&self, location: &u32, v: &[f32; 3]) {
        self.push(Call::Float3(*location, *v));
    }

    fn uniform_4_f32(&self, location: &u32, v: &[f32; 4]) {
        self.push(Call::Float4(*location, *v));
    }

    fn uniform_matrix_2_f32(&self, location: &u32, transpose: bool, v: &[f32; 4]) {
        self.push(Call::Matrix2(*location, transpose, *v));
    }

    fn uniform_matrix_3_f32(&self, location: &u32, transpose: bool, v: &[f32; 9]) {
        self.push(Call::Matrix3(*location, transpose, *v));
    }

    fn uniform_matrix_4_f32(&self, location: &u32, transpose: bool, v: &[f32; 16]) {
        self.push(Call::Matrix4(*location, transpose, *v));
    }
}
