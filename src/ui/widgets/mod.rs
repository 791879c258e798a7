// SPDX-License-Identifier: MPL-2.0
pub mod cube_shader;

pub use cube_shader::CubeShader;
