use rand::Rng;

use crate::config::Config;

/// One tile of the decorative staggered grid: a random height paired with a
/// random, always-opaque color. Drawn once when the grid screen mounts and
/// immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridItem {
    height: u16,
    argb: u32,
}

impl GridItem {
    /// Draws a single tile. The color takes a full 32-bit random value and
    /// forces the alpha byte to maximum, so a translucent draw can never
    /// slip through.
    pub fn random(rng: &mut impl Rng) -> Self {
        let height = rng.gen_range(Config::GRID_MIN_HEIGHT..Config::GRID_MAX_HEIGHT);
        let argb = rng.next_u32() | 0xFF00_0000;
        Self { height, argb }
    }

    /// Draws `count` tiles, each height and color independent of the others.
    pub fn generate(count: usize) -> Vec<Self> {
        let mut rng = rand::thread_rng();
        (0..count).map(|_| Self::random(&mut rng)).collect()
    }

    /// Tile height in CSS pixels.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Alpha channel of the tile color. Always `0xFF`.
    pub fn alpha(&self) -> u8 {
        (self.argb >> 24) as u8
    }

    /// Tile color as a CSS hex literal, e.g. `#1a2b3c`. Alpha is omitted
    /// since it is always opaque.
    pub fn css_color(&self) -> String {
        format!("#{:06x}", self.argb & 0x00FF_FFFF)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_within_bounds() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let item = GridItem::random(&mut rng);
            assert!(item.height() >= Config::GRID_MIN_HEIGHT);
            assert!(item.height() < Config::GRID_MAX_HEIGHT);
        }
    }

    #[test]
    fn test_color_always_opaque() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            assert_eq!(GridItem::random(&mut rng).alpha(), 0xFF);
        }
    }

    #[test]
    fn test_css_color_format() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let color = GridItem::random(&mut rng).css_color();
            assert_eq!(color.len(), 7);
            assert!(color.starts_with('#'));
            assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_generate_count() {
        assert_eq!(GridItem::generate(Config::GRID_ITEM_COUNT).len(), 100);
        assert!(GridItem::generate(0).is_empty());
    }
}
