use serde::{Deserialize, Serialize};

/// 8-bit RGBA color as stored in the skin format.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, bytemuck::Pod, bytemuck::Zeroable,
)]
#[repr(C)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_array(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }
}

/// A single texel of a layer.
///
/// `Clear` means "unset" and is distinct from every painted color,
/// including a painted color whose alpha happens to be zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Pixel {
    #[default]
    Clear,
    Color(Rgba),
}

impl Pixel {
    #[inline]
    pub fn is_clear(&self) -> bool {
        matches!(self, Pixel::Clear)
    }

    /// The painted color, if any
    #[inline]
    pub fn color(&self) -> Option<Rgba> {
        match self {
            Pixel::Clear => None,
            Pixel::Color(c) => Some(*c),
        }
    }

    /// Raw RGBA for encoders; `Clear` becomes transparent black.
    #[inline]
    pub fn to_rgba(self) -> Rgba {
        self.color().unwrap_or_default()
    }

    /// Inverse of [`Pixel::to_rgba`]: fully transparent texels import as `Clear`.
    #[inline]
    pub fn from_rgba(rgba: Rgba) -> Self {
        if rgba.a == 0 {
            Pixel::Clear
        } else {
            Pixel::Color(rgba)
        }
    }
}

impl From<Rgba> for Pixel {
    fn from(c: Rgba) -> Self {
        Pixel::Color(c)
    }
}

/// Editing layer. Overlay composites on top of Base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Layer {
    #[default]
    Base = 0,
    Overlay = 1,
}

impl Layer {
    pub const ALL: [Layer; 2] = [Layer::Base, Layer::Overlay];

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Model variant, fixed when a document is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ModelVariant {
    /// 4px wide arms
    #[default]
    Standard,
    /// 3px wide arms
    Slim,
}

impl ModelVariant {
    /// Arm width in pixels and model units.
    pub fn arm_width(self) -> u32 {
        match self {
            ModelVariant::Standard => 4,
            ModelVariant::Slim => 3,
        }
    }
}

/// Body parts of the humanoid box model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BodyPart {
    Head,
    Torso,
    RightArm,
    LeftArm,
    RightLeg,
    LeftLeg,
    HatOverlay,
    JacketOverlay,
}

impl BodyPart {
    pub const ALL: [BodyPart; 8] = [
        BodyPart::Head,
        BodyPart::Torso,
        BodyPart::RightArm,
        BodyPart::LeftArm,
        BodyPart::RightLeg,
        BodyPart::LeftLeg,
        BodyPart::HatOverlay,
        BodyPart::JacketOverlay,
    ];

    /// The six parts that make up the base body.
    pub const BASE: [BodyPart; 6] = [
        BodyPart::Head,
        BodyPart::Torso,
        BodyPart::RightArm,
        BodyPart::LeftArm,
        BodyPart::RightLeg,
        BodyPart::LeftLeg,
    ];

    /// Whether this part is an outer shell box (hat or jacket).
    pub fn is_overlay(self) -> bool {
        matches!(self, BodyPart::HatOverlay | BodyPart::JacketOverlay)
    }
}

/// One face of a part box.
///
/// Faces are named from the viewpoint of someone standing in front of the
/// model: `Right` is the face on the viewer's right (+X), which is the
/// character's left side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Front,
    Back,
    Right,
    Left,
    Top,
    Bottom,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Right,
        Face::Left,
        Face::Top,
        Face::Bottom,
    ];
}

/// Pixel rectangle on the sheet. Origin is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn origin(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Geometric center pixel (rounded down).
    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Smallest rect covering both.
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Rect::new(
            x,
            y,
            self.right().max(other.right()) - x,
            self.bottom().max(other.bottom()) - y,
        )
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right() && other.x < self.right() && self.y < other.bottom() && other.y < self.bottom()
    }
}
