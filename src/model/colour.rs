/// A utility struct to help with working with the basic representation of a colour.
///
/// This is used for embed colours, and is stored as the packed `0xRRGGBB` integer Discord uses on
/// the wire.
///
/// # Examples
///
/// ```rust
/// use component_response::model::Colour;
///
/// let colour = Colour::from_rgb(100, 76, 67);
/// assert_eq!(colour, Colour::new(6573123));
/// assert_eq!(colour.tuple(), (100, 76, 67));
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Colour(pub u32);

impl Colour {
    /// Generates a new Colour with the given integer value set.
    #[inline]
    #[must_use]
    pub const fn new(value: u32) -> Colour {
        Colour(value)
    }

    /// Generates a new Colour from an RGB value, creating an inner u32 representation.
    #[must_use]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Colour {
        Colour((red as u32) << 16 | (green as u32) << 8 | blue as u32)
    }

    /// Returns the red RGB component of this Colour.
    #[must_use]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 255) as u8
    }

    /// Returns the green RGB component of this Colour.
    #[must_use]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 255) as u8
    }

    /// Returns the blue RGB component of this Colour.
    #[must_use]
    pub const fn b(self) -> u8 {
        (self.0 & 255) as u8
    }

    /// Returns a tuple of the red, green, and blue components of this Colour.
    #[must_use]
    pub const fn tuple(self) -> (u8, u8, u8) {
        (self.r(), self.g(), self.b())
    }

    pub const BLURPLE: Colour = Colour(0x5865F2);
    pub const RED: Colour = Colour(0xE74C3C);
    pub const DARK_GREEN: Colour = Colour(0x1F8B4C);
}

impl From<u32> for Colour {
    fn from(value: u32) -> Colour {
        Colour(value)
    }
}

impl From<(u8, u8, u8)> for Colour {
    fn from((red, green, blue): (u8, u8, u8)) -> Colour {
        Colour::from_rgb(red, green, blue)
    }
}
