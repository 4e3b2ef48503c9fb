//! Per-vertex attribute schemas. The encoding only ever asks a format for its
//! size in 32-bit words; the element list exists so formats can be declared
//! in config and sized consistently.

use serde::Deserialize;

pub trait VertexFormat {
    /// Size of one vertex in 32-bit words.
    fn vertex_size_ints(&self) -> usize;
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    Float,
    UByte,
    Byte,
    UShort,
    Short,
    UInt,
    Int,
}

impl ElementType {
    #[inline]
    pub fn size_bytes(self) -> usize {
        match self {
            ElementType::Float | ElementType::UInt | ElementType::Int => 4,
            ElementType::UShort | ElementType::Short => 2,
            ElementType::UByte | ElementType::Byte => 1,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementUsage {
    Position,
    Color,
    Uv0,
    Lightmap,
    Normal,
    Padding,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
pub struct VertexElement {
    pub usage: ElementUsage,
    #[serde(rename = "type")]
    pub ty: ElementType,
    pub count: u8,
}

impl VertexElement {
    pub const fn new(usage: ElementUsage, ty: ElementType, count: u8) -> Self {
        Self { usage, ty, count }
    }

    #[inline]
    pub fn size_bytes(&self) -> usize {
        self.ty.size_bytes() * self.count as usize
    }
}

pub const POSITION: VertexElement =
    VertexElement::new(ElementUsage::Position, ElementType::Float, 3);
pub const COLOR: VertexElement = VertexElement::new(ElementUsage::Color, ElementType::UByte, 4);
pub const TEXTURE: VertexElement = VertexElement::new(ElementUsage::Uv0, ElementType::Float, 2);
pub const LIGHT: VertexElement =
    VertexElement::new(ElementUsage::Lightmap, ElementType::Short, 2);
pub const NORMAL: VertexElement = VertexElement::new(ElementUsage::Normal, ElementType::Byte, 3);
pub const PADDING: VertexElement =
    VertexElement::new(ElementUsage::Padding, ElementType::Byte, 1);

/// Vertex stride (in words) the stock rasterizer consumes.
pub const VANILLA_VERTEX_STRIDE: usize = 8;
/// Quad stride (in words) the stock rasterizer consumes.
pub const VANILLA_QUAD_STRIDE: usize = VANILLA_VERTEX_STRIDE * 4;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct VertexFormatDesc {
    pub elements: Vec<VertexElement>,
}

impl VertexFormatDesc {
    pub fn new(elements: Vec<VertexElement>) -> Self {
        Self { elements }
    }

    /// Position, color, uv, lightmap, and a padded byte normal: 32 bytes.
    pub fn position_color_texture_light_normal() -> Self {
        Self::new(vec![POSITION, COLOR, TEXTURE, LIGHT, NORMAL, PADDING])
    }

    /// Same attributes without the trailing pad byte (29 bytes, still 8 words).
    pub fn position_color_texture_light_normal_nopad() -> Self {
        Self::new(vec![POSITION, COLOR, TEXTURE, LIGHT, NORMAL])
    }

    /// Looks up a preset by its config name.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "position_color_texture_light_normal" => {
                Some(Self::position_color_texture_light_normal())
            }
            "position_color_texture_light_normal_nopad" => {
                Some(Self::position_color_texture_light_normal_nopad())
            }
            _ => None,
        }
    }

    pub fn size_bytes(&self) -> usize {
        self.elements.iter().map(VertexElement::size_bytes).sum()
    }
}

impl VertexFormat for VertexFormatDesc {
    #[inline]
    fn vertex_size_ints(&self) -> usize {
        self.size_bytes().div_ceil(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_format_is_eight_words() {
        let f = VertexFormatDesc::position_color_texture_light_normal();
        assert_eq!(f.size_bytes(), 32);
        assert_eq!(f.vertex_size_ints(), VANILLA_VERTEX_STRIDE);
        assert_eq!(
            VertexFormatDesc::position_color_texture_light_normal_nopad().vertex_size_ints(),
            VANILLA_VERTEX_STRIDE
        );
    }
}
