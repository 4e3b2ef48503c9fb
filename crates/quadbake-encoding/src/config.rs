//! TOML configuration for building an [`EncodingFormat`].
//!
//! ```toml
//! vertex_format = "position_color_texture_light_normal"
//! geometry_flag_bits = 3
//!
//! [rasterizer]
//! vertex_stride = 8
//! quad_stride = 32
//! ```
//!
//! `vertex_format` may instead be an explicit element list:
//! `vertex_format = [{ usage = "position", type = "float", count = 3 }, ...]`.

use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::format::EncodingFormat;
use crate::geometry::FLAG_BIT_COUNT;
use crate::layout::RasterizerStrides;
use crate::vertex_format::{
    VANILLA_QUAD_STRIDE, VANILLA_VERTEX_STRIDE, VertexElement, VertexFormatDesc,
};

const DEFAULT_PRESET: &str = "position_color_texture_light_normal";

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum VertexFormatConfig {
    Preset(String),
    Elements(Vec<VertexElement>),
}

impl Default for VertexFormatConfig {
    fn default() -> Self {
        VertexFormatConfig::Preset(DEFAULT_PRESET.to_string())
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct RasterizerConfig {
    #[serde(default = "default_vertex_stride")]
    pub vertex_stride: usize,
    #[serde(default = "default_quad_stride")]
    pub quad_stride: usize,
}

impl Default for RasterizerConfig {
    fn default() -> Self {
        Self {
            vertex_stride: VANILLA_VERTEX_STRIDE,
            quad_stride: VANILLA_QUAD_STRIDE,
        }
    }
}

fn default_vertex_stride() -> usize {
    VANILLA_VERTEX_STRIDE
}
fn default_quad_stride() -> usize {
    VANILLA_QUAD_STRIDE
}
fn default_geometry_bits() -> u32 {
    FLAG_BIT_COUNT
}

#[derive(Clone, Debug, Deserialize)]
pub struct EncodingConfig {
    #[serde(default)]
    pub vertex_format: VertexFormatConfig,
    #[serde(default)]
    pub rasterizer: RasterizerConfig,
    #[serde(default = "default_geometry_bits")]
    pub geometry_flag_bits: u32,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            vertex_format: VertexFormatConfig::default(),
            rasterizer: RasterizerConfig::default(),
            geometry_flag_bits: FLAG_BIT_COUNT,
        }
    }
}

impl EncodingConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn vertex_format(&self) -> Result<VertexFormatDesc, Box<dyn Error>> {
        match &self.vertex_format {
            VertexFormatConfig::Preset(name) => VertexFormatDesc::preset(name)
                .ok_or_else(|| format!("unknown vertex format preset '{}'", name).into()),
            VertexFormatConfig::Elements(elements) => Ok(VertexFormatDesc::new(elements.clone())),
        }
    }

    pub fn rasterizer(&self) -> RasterizerStrides {
        RasterizerStrides {
            vertex_stride: self.rasterizer.vertex_stride,
            quad_stride: self.rasterizer.quad_stride,
        }
    }

    pub fn build(&self) -> Result<EncodingFormat, Box<dyn Error>> {
        let vf = self.vertex_format()?;
        log::debug!("building quad encoding from {} vertex elements", vf.elements.len());
        Ok(EncodingFormat::new(&vf, self.rasterizer(), self.geometry_flag_bits)?)
    }
}
