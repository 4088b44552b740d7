//! Core data types for the telemetry inspector
//!
//! This module contains the value and metadata types shared by discovery,
//! sampling and rendering.
//!
//! # Main Types
//!
//! - [`ObjectId`] / [`ComponentId`] - Opaque handles to host entities
//! - [`ValueType`] - Declared type of a host attribute, as reported by the host
//! - [`HostValue`] - A value read from the host, before decomposition
//! - [`MemberKind`] - Plottable shape of an attribute (scalar or 2..4 vector)
//! - [`MemberValue`] - A sampled value, decomposed once at the accessor boundary
//! - [`Color`] / [`ChannelMeta`] - Per-channel display metadata
//!
//! # Numeric Classification
//!
//! Integers and floats of any width are scalars (converted to `f32`),
//! fixed tuples of 2, 3 or 4 such values are vectors. Everything else
//! (text, booleans, references, opaque structs) is not plottable.

use serde::{Deserialize, Serialize};

/// Maximum number of channels a member can decompose into
pub const MAX_CHANNELS: usize = 4;

/// Positional channel names for vector members
pub const VECTOR_CHANNEL_NAMES: [&str; MAX_CHANNELS] = ["X", "Y", "Z", "W"];

/// Opaque handle to a host object being inspected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

/// Opaque handle to one constituent part of a host object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(pub u64);

/// Any host handle whose liveness can be queried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    Object(ObjectId),
    Component(ComponentId),
}

impl From<ObjectId> for Handle {
    fn from(id: ObjectId) -> Self {
        Handle::Object(id)
    }
}

impl From<ComponentId> for Handle {
    fn from(id: ComponentId) -> Self {
        Handle::Component(id)
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Object({})", self.0)
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Component({})", self.0)
    }
}

/// Declared type of a host attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    /// Fixed-size tuple of numeric elements
    Vector(u8),
    Bool,
    Text,
    /// Reference or struct the host cannot flatten into numbers
    Opaque,
}

impl ValueType {
    /// Classify this type for plotting
    ///
    /// Returns `None` for anything that is neither a numeric scalar nor a
    /// numeric vector of 2..=4 elements.
    pub fn classify(&self) -> Option<MemberKind> {
        match self {
            ValueType::I8
            | ValueType::I16
            | ValueType::I32
            | ValueType::I64
            | ValueType::U8
            | ValueType::U16
            | ValueType::U32
            | ValueType::U64
            | ValueType::F32
            | ValueType::F64 => Some(MemberKind::Scalar),
            ValueType::Vector(n @ 2..=4) => Some(MemberKind::Vector(*n)),
            ValueType::Vector(_) | ValueType::Bool | ValueType::Text | ValueType::Opaque => None,
        }
    }

    /// Returns true if this type is plottable
    pub fn is_numeric(&self) -> bool {
        self.classify().is_some()
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueType::I8 => write!(f, "i8"),
            ValueType::I16 => write!(f, "i16"),
            ValueType::I32 => write!(f, "i32"),
            ValueType::I64 => write!(f, "i64"),
            ValueType::U8 => write!(f, "u8"),
            ValueType::U16 => write!(f, "u16"),
            ValueType::U32 => write!(f, "u32"),
            ValueType::U64 => write!(f, "u64"),
            ValueType::F32 => write!(f, "f32"),
            ValueType::F64 => write!(f, "f64"),
            ValueType::Vector(n) => write!(f, "vec{}", n),
            ValueType::Bool => write!(f, "bool"),
            ValueType::Text => write!(f, "string"),
            ValueType::Opaque => write!(f, "opaque"),
        }
    }
}

/// Plottable shape of a member
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Scalar,
    /// Vector of 2, 3 or 4 channels
    Vector(u8),
}

impl MemberKind {
    /// Number of channels a value of this kind decomposes into
    pub fn channel_count(&self) -> usize {
        match self {
            MemberKind::Scalar => 1,
            MemberKind::Vector(n) => (*n as usize).clamp(1, MAX_CHANNELS),
        }
    }
}

/// A raw value read from the host
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    Int(i64),
    UInt(u64),
    Float(f64),
    Vector(Vec<f64>),
    Bool(bool),
    Text(String),
    Opaque,
}

/// A sampled member value, decomposed into channels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MemberValue {
    Scalar(f32),
    Vec2([f32; 2]),
    Vec3([f32; 3]),
    Vec4([f32; 4]),
}

impl MemberValue {
    /// Decompose a host value according to the member's declared kind
    ///
    /// Returns `None` when the value does not fit the kind, e.g. a text
    /// field that was surfaced as a scalar.
    pub fn from_host(value: &HostValue, kind: MemberKind) -> Option<Self> {
        match (kind, value) {
            (MemberKind::Scalar, HostValue::Int(v)) => Some(MemberValue::Scalar(*v as f32)),
            (MemberKind::Scalar, HostValue::UInt(v)) => Some(MemberValue::Scalar(*v as f32)),
            (MemberKind::Scalar, HostValue::Float(v)) => Some(MemberValue::Scalar(*v as f32)),
            (MemberKind::Vector(n), HostValue::Vector(items)) if items.len() == n as usize => {
                let c = |i: usize| items[i] as f32;
                match n {
                    2 => Some(MemberValue::Vec2([c(0), c(1)])),
                    3 => Some(MemberValue::Vec3([c(0), c(1), c(2)])),
                    4 => Some(MemberValue::Vec4([c(0), c(1), c(2), c(3)])),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    /// Channel values in positional order
    pub fn channels(&self) -> &[f32] {
        match self {
            MemberValue::Scalar(v) => std::slice::from_ref(v),
            MemberValue::Vec2(v) => v,
            MemberValue::Vec3(v) => v,
            MemberValue::Vec4(v) => v,
        }
    }

    /// Number of channels in this value
    pub fn channel_count(&self) -> usize {
        self.channels().len()
    }
}

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub [u8; 4]);

impl Color {
    pub const RED: Color = Color([255, 0, 0, 255]);
    pub const GREEN: Color = Color([0, 255, 0, 255]);
    pub const BLUE: Color = Color([0, 0, 255, 255]);
    pub const YELLOW: Color = Color([255, 235, 4, 255]);
    pub const BLACK: Color = Color([0, 0, 0, 255]);
    pub const WHITE: Color = Color([255, 255, 255, 255]);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color([r, g, b, 255])
    }

    pub const fn gray(l: u8) -> Self {
        Color([l, l, l, 255])
    }
}

/// Display metadata for one channel
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelMeta {
    /// Legend label
    pub name: String,
    /// Trace and swatch color
    pub color: Color,
}

/// Build channel metadata for a member
///
/// Scalars use the member's own name, vectors use positional names.
/// Channel `i` always gets `palette[i]`.
pub fn channel_metadata(
    member_name: &str,
    kind: MemberKind,
    palette: &[Color; MAX_CHANNELS],
) -> Vec<ChannelMeta> {
    match kind {
        MemberKind::Scalar => vec![ChannelMeta {
            name: member_name.to_string(),
            color: palette[0],
        }],
        MemberKind::Vector(_) => VECTOR_CHANNEL_NAMES
            .iter()
            .zip(palette.iter())
            .take(kind.channel_count())
            .map(|(name, color)| ChannelMeta {
                name: (*name).to_string(),
                color: *color,
            })
            .collect(),
    }
}
