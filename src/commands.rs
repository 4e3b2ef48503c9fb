use std::error::Error;

use clap::Args;
use quadbake_encoding::geometry::{AXIS_ALIGNED, CUBIC, LIGHT_FACE};
use quadbake_encoding::header::HeaderField;
use quadbake_encoding::layout::{
    HEADER_BITS, HEADER_COLOR_INDEX, HEADER_FACE_NORMAL, HEADER_STRIDE, HEADER_TAG, VERTEX_COLOR,
    VERTEX_LIGHTMAP, VERTEX_NORMAL, VERTEX_U, VERTEX_V, VERTEX_X, VERTEX_Y, VERTEX_Z,
};
use quadbake_encoding::{EncodingConfig, EncodingFormat, GeometryFlags};

use crate::CommonArgs;
use crate::parse::{FaceArg, face_name, parse_face, parse_u32};

#[derive(Args)]
pub struct EncodeArgs {
    /// Header word to start from
    #[arg(long, default_value = "0", value_parser = parse_u32)]
    pub base: u32,

    /// Cull face (east, west, north, south, up, down, none)
    #[arg(long, value_parser = parse_face)]
    pub cull: Option<FaceArg>,

    /// Light face (east, west, north, south, up, down, none)
    #[arg(long, value_parser = parse_face)]
    pub light: Option<FaceArg>,

    /// Per-vertex custom normal flags (low 4 bits)
    #[arg(long, value_parser = parse_u32)]
    pub normals: Option<u32>,

    /// Geometry flags (masked to the configured width)
    #[arg(long, value_parser = parse_u32)]
    pub geometry: Option<u32>,
}

pub fn load_format(common: &CommonArgs) -> Result<EncodingFormat, Box<dyn Error>> {
    let cfg = match &common.config {
        Some(path) => {
            log::debug!("loading encoding config from {}", path.display());
            EncodingConfig::from_path(path)?
        }
        None => EncodingConfig::default(),
    };
    cfg.build()
}

pub fn layout(format: &EncodingFormat) {
    let l = format.layout();
    println!("strides (words)");
    println!("  header        {}", HEADER_STRIDE);
    println!("  vertex        {}", l.vertex_stride());
    println!("  quad          {} ({} bytes)", l.quad_stride(), l.quad_stride_bytes());
    println!("  total         {}", l.total_stride());
    println!("header words");
    for (name, off) in [
        ("bits", HEADER_BITS),
        ("face_normal", HEADER_FACE_NORMAL),
        ("color_index", HEADER_COLOR_INDEX),
        ("tag", HEADER_TAG),
    ] {
        println!("  {:<13} {}", name, off);
    }
    println!("vertex 0 offsets (add vertex * {})", l.vertex_stride());
    for (name, off) in [
        ("x", VERTEX_X),
        ("y", VERTEX_Y),
        ("z", VERTEX_Z),
        ("color", VERTEX_COLOR),
        ("u", VERTEX_U),
        ("v", VERTEX_V),
        ("lightmap", VERTEX_LIGHTMAP),
        ("normal", VERTEX_NORMAL),
    ] {
        println!("  {:<13} {}", name, off);
    }
    let h = format.header().layout();
    println!("header bits ({}/32 used)", h.bits_used());
    for field in HeaderField::ALL {
        let shift = h.shift(field);
        let width = h.width(field);
        println!(
            "  {:<15} bits {:>2}..{:<2} mask {:#034b}",
            field.name(),
            shift,
            shift + width,
            h.field_mask(field)
        );
    }
    println!("  {:<15} bits {:>2}..32", "reserved", h.reserved_shift());
}

pub fn decode(format: &EncodingFormat, header: u32) {
    let c = format.header();
    let h = c.layout();
    println!("header       {} ({:#010x}, {:#b})", header, header, header);
    println!("cull_face    {}", face_name(c.cull_face(header)));
    println!("light_face   {}", face_name(c.light_face(header)));
    println!("normal_flags {:04b}", c.normal_flags(header));
    let geometry = c.geometry_flags(header);
    println!("geometry     {:#b}{}", geometry, geometry_names(geometry));
    let reserved = if h.reserved_shift() >= 32 {
        0
    } else {
        header >> h.reserved_shift()
    };
    if reserved != 0 {
        log::warn!(
            "reserved header bits {}..32 are set ({:#b})",
            h.reserved_shift(),
            reserved
        );
    }
}

pub fn encode(format: &EncodingFormat, args: &EncodeArgs) {
    let c = format.header();
    let mut bits = args.base;
    if let Some(FaceArg(face)) = args.cull {
        bits = c.with_cull_face(bits, face);
    }
    if let Some(FaceArg(face)) = args.light {
        bits = c.with_light_face(bits, face);
    }
    if let Some(flags) = args.normals {
        if flags > 0xF {
            log::warn!("normal flags {:#b} truncated to 4 bits", flags);
        }
        bits = c.with_normal_flags(bits, flags);
    }
    if let Some(flags) = args.geometry {
        if c.geometry_flags(c.with_geometry_flags(0, flags)) != flags {
            log::warn!(
                "geometry flags {:#b} truncated to {} bits",
                flags,
                c.layout().geometry_bits()
            );
        }
        bits = c.with_geometry_flags(bits, flags);
    }
    println!("{} ({:#010x}, {:#b})", bits, bits, bits);
}

fn geometry_names(bits: u32) -> String {
    let flags = GeometryFlags::from(bits);
    let names: Vec<&str> = [
        (CUBIC, "cubic"),
        (AXIS_ALIGNED, "axis_aligned"),
        (LIGHT_FACE, "light_face"),
    ]
    .iter()
    .filter(|(bit, _)| flags.contains(*bit))
    .map(|&(_, name)| name)
    .collect();
    if names.is_empty() {
        String::new()
    } else {
        format!(" ({})", names.join(" | "))
    }
}
