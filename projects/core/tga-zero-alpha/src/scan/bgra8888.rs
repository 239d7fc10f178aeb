/// Represents a single pixel as stored in a 32-bit TGA file: blue, green, red, alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bgra8888 {
    /// Blue component (0-255)
    pub b: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Red component (0-255)
    pub r: u8,
    /// Alpha component (0-255)
    pub a: u8,
}

impl Bgra8888 {
    /// Constructs a new [`Bgra8888`] from its blue, green, red and alpha components.
    ///
    /// # Examples
    ///
    /// ```
    /// use tga_zero_alpha::Bgra8888;
    ///
    /// let pixel = Bgra8888::new(10, 20, 30, 0);
    /// assert!(pixel.has_color_without_alpha());
    /// ```
    pub fn new(b: u8, g: u8, r: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    /// Reads a pixel from its 4 on-disk bytes.
    #[inline(always)]
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        let [b, g, r, a] = bytes;
        Self { b, g, r, a }
    }

    /// True if every color channel is non-zero while alpha is exactly zero.
    ///
    /// Pure black with zero alpha is the usual 'empty' pixel and does not count; neither
    /// does a pixel with only some color channels set.
    #[inline(always)]
    pub fn has_color_without_alpha(&self) -> bool {
        self.b != 0 && self.g != 0 && self.r != 0 && self.a == 0
    }
}
