//! Tests for the symmetric fill strategies and background selection

#[cfg(test)]
mod tests {
    use identicon::pattern::fill::{
        ascend_mirror, background_color, descend_mirror, draws_per_fill,
    };
    use identicon::pattern::registry::FillFn;
    use image::{Rgba, RgbaImage};
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    const FILL: Rgba<u8> = Rgba([10, 20, 30, 255]);
    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    // Draws below 0.5 fill the cell, draws near 1.0 leave it as background
    const FILL_WORD: u64 = 0;
    const BACKGROUND_WORD: u64 = u64::MAX;

    /// Replays a fixed word sequence and counts how many words were drawn
    struct ScriptedRng {
        words: Vec<u64>,
        draws: usize,
    }

    impl ScriptedRng {
        fn new(words: Vec<u64>) -> Self {
            Self { words, draws: 0 }
        }
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            (self.next_u64() >> 32) as u32
        }

        fn next_u64(&mut self) -> u64 {
            let word = self.words[self.draws % self.words.len()];
            self.draws += 1;
            word
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for chunk in dst.chunks_mut(8) {
                let bytes = self.next_u64().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }
    }

    fn filled(size: u32, fill: FillFn, seed: u64, dark: bool) -> RgbaImage {
        let mut image = RgbaImage::new(size, size);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        fill(&mut image, FILL, dark, &mut rng);
        image
    }

    // Tests background color is opaque black or white
    // Verified by swapping the dark mode branches
    #[test]
    fn test_background_color() {
        assert_eq!(background_color(true), BLACK);
        assert_eq!(background_color(false), WHITE);
    }

    // Tests descend-mirror rows below the center reflect rows above it
    // Verified by mirroring from row size - y instead of size - y - 1
    #[test]
    fn test_descend_mirror_vertical_symmetry() {
        for size in [1, 3, 5, 7, 9, 15] {
            for seed in 0..20 {
                let image = filled(size, descend_mirror, seed, false);
                for y in (size / 2 + 1)..size {
                    for x in 0..size {
                        assert_eq!(
                            image.get_pixel(x, y),
                            image.get_pixel(x, size - 1 - y),
                            "size {size} seed {seed} at ({x}, {y})"
                        );
                    }
                }
            }
        }
    }

    // Tests ascend-mirror columns right of center reflect columns left of it
    // Verified by mirroring rows instead of columns
    #[test]
    fn test_ascend_mirror_horizontal_symmetry() {
        for size in [1, 3, 5, 7, 9, 15] {
            for seed in 0..20 {
                let image = filled(size, ascend_mirror, seed, true);
                for y in 0..size {
                    for x in (size / 2 + 1)..size {
                        assert_eq!(
                            image.get_pixel(x, y),
                            image.get_pixel(size - 1 - x, y),
                            "size {size} seed {seed} at ({x}, {y})"
                        );
                    }
                }
            }
        }
    }

    // Tests every non-fill pixel is exactly the mode's background
    // Verified by using a translucent background
    #[test]
    fn test_only_fill_and_background_colors() {
        for (dark, background) in [(true, BLACK), (false, WHITE)] {
            for fill in [descend_mirror as FillFn, ascend_mirror] {
                let image = filled(9, fill, 7, dark);
                assert!(
                    image.pixels().all(|p| *p == FILL || *p == background),
                    "dark mode {dark} produced a foreign color"
                );
            }
        }
    }

    // Tests each independent cell consumes exactly one draw and mirrored cells none
    // Verified by drawing for mirrored cells too
    #[test]
    fn test_draw_count() {
        for size in [1, 5, 7, 9] {
            let mut image = RgbaImage::new(size, size);
            let mut rng = ScriptedRng::new(vec![FILL_WORD]);
            descend_mirror(&mut image, FILL, false, &mut rng);
            assert_eq!(rng.draws as u64, draws_per_fill(size));

            let mut image = RgbaImage::new(size, size);
            let mut rng = ScriptedRng::new(vec![FILL_WORD]);
            ascend_mirror(&mut image, FILL, false, &mut rng);
            assert_eq!(rng.draws as u64, draws_per_fill(size));
        }
        assert_eq!(draws_per_fill(5), 15);
        assert_eq!(draws_per_fill(9), 45);
    }

    // Tests draws are mapped to cells row by row from the top
    // Verified by iterating columns in the outer loop
    #[test]
    fn test_descend_mirror_draw_order() {
        let mut image = RgbaImage::new(5, 5);
        let mut words = vec![BACKGROUND_WORD; 15];
        words[1] = FILL_WORD;
        words[7] = FILL_WORD;
        let mut rng = ScriptedRng::new(words);
        descend_mirror(&mut image, FILL, false, &mut rng);

        // Draw 1 is row 0 column 1, draw 7 is row 1 column 2
        assert_eq!(*image.get_pixel(1, 0), FILL);
        assert_eq!(*image.get_pixel(2, 1), FILL);
        assert_eq!(*image.get_pixel(1, 4), FILL);
        assert_eq!(*image.get_pixel(2, 3), FILL);
        assert_eq!(image.pixels().filter(|p| **p == FILL).count(), 4);
    }

    // Tests draws start at the bottom row and only cover the left half
    // Verified by starting one row past the bottom edge
    #[test]
    fn test_ascend_mirror_draw_order() {
        let mut image = RgbaImage::new(5, 5);
        let mut words = vec![BACKGROUND_WORD; 15];
        words[0] = FILL_WORD;
        words[4] = FILL_WORD;
        let mut rng = ScriptedRng::new(words);
        ascend_mirror(&mut image, FILL, true, &mut rng);

        // Three draws per row: draw 0 is (0, 4), draw 4 is (1, 3)
        assert_eq!(*image.get_pixel(0, 4), FILL);
        assert_eq!(*image.get_pixel(4, 4), FILL);
        assert_eq!(*image.get_pixel(1, 3), FILL);
        assert_eq!(*image.get_pixel(3, 3), FILL);
        assert_eq!(image.pixels().filter(|p| **p == FILL).count(), 4);
        assert_eq!(*image.get_pixel(0, 0), BLACK);
    }

    // Tests an all-fill stream paints every cell
    // Verified by inverting the threshold comparison
    #[test]
    fn test_all_fill_stream() {
        let mut image = RgbaImage::new(7, 7);
        let mut rng = ScriptedRng::new(vec![FILL_WORD]);
        descend_mirror(&mut image, FILL, true, &mut rng);
        assert!(image.pixels().all(|p| *p == FILL));

        let mut image = RgbaImage::new(7, 7);
        let mut rng = ScriptedRng::new(vec![BACKGROUND_WORD]);
        ascend_mirror(&mut image, FILL, false, &mut rng);
        assert!(image.pixels().all(|p| *p == WHITE));
    }

    // Tests the same generator state reproduces the same pattern
    // Verified by seeding from the system clock
    #[test]
    fn test_fill_is_reproducible() {
        assert_eq!(
            filled(9, descend_mirror, 42, false),
            filled(9, descend_mirror, 42, false)
        );
        assert_eq!(
            filled(9, ascend_mirror, 42, true),
            filled(9, ascend_mirror, 42, true)
        );
    }

    // Tests rectangular images are refused in debug builds
    // Verified by filling the top-left square of a wide image
    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "pattern image must be square")]
    fn test_descend_mirror_rejects_rectangle() {
        let mut image = RgbaImage::new(7, 5);
        descend_mirror(&mut image, FILL, false, &mut ScriptedRng::new(vec![FILL_WORD]));
    }

    // Tests rectangular images are refused in debug builds
    // Verified by filling the top-left square of a tall image
    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "pattern image must be square")]
    fn test_ascend_mirror_rejects_rectangle() {
        let mut image = RgbaImage::new(5, 7);
        ascend_mirror(&mut image, FILL, false, &mut ScriptedRng::new(vec![FILL_WORD]));
    }
}
