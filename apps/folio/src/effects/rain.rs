//! "Matrix rain": falling glyph columns drawn into a text canvas.

use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};

use crate::effects::{offer_frame, Patch, PatchSender, Viewport};

pub const FONT_SIZE: u32 = 16;
pub const RAIN_FRAME: Duration = Duration::from_millis(33);
/// Chance per frame that a drop past the bottom restarts at the top.
const RESET_CHANCE: f64 = 0.025;
/// Frames a glyph stays on screen before fading out.
const TRAIL: u8 = 8;

const GLYPHS: &str = "アァカサタナハマヤャラワガザダバパイィキシチニヒミリヂビピウゥクスツヌフムユュルグズブヅプエェケセテネヘメレゲゼデベペオォコソトノホモヨョロヲゴゾドボポヴッン0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// xorshift64*. Looks random; not unpredictable.
#[derive(Debug, Clone)]
pub struct GlyphRng(u64);

impl GlyphRng {
    pub fn new(seed: u64) -> Self {
        Self(seed | 1)
    }

    /// Seeded from a fresh v4 UUID.
    pub fn from_entropy() -> Self {
        let (hi, lo) = uuid::Uuid::new_v4().as_u64_pair();
        Self::new(hi ^ lo)
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Uniform in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

#[derive(Debug, Clone)]
pub struct RainField {
    glyphs: Vec<char>,
    drops: Vec<u32>,
    rows: u32,
    /// (glyph, remaining frames) per cell, row-major.
    cells: Vec<Option<(char, u8)>>,
    rng: GlyphRng,
}

impl RainField {
    pub fn new(viewport: Viewport, rng: GlyphRng) -> Self {
        let columns = (viewport.width / FONT_SIZE) as usize;
        let rows = viewport.height / FONT_SIZE;
        Self {
            glyphs: GLYPHS.chars().collect(),
            drops: vec![1; columns],
            rows,
            cells: vec![None; columns * rows as usize],
            rng,
        }
    }

    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn drops(&self) -> &[u32] {
        &self.drops
    }

    /// Advances one frame: trails fade, each drop writes a glyph and falls;
    /// drops past the bottom occasionally restart at the top.
    pub fn step(&mut self) {
        for cell in self.cells.iter_mut() {
            if let Some((_, life)) = cell {
                *life -= 1;
                if *life == 0 {
                    *cell = None;
                }
            }
        }

        let columns = self.drops.len();
        for col in 0..columns {
            let row = self.drops[col];
            if row < self.rows {
                let glyph = self.glyphs[(self.rng.next_u64() % self.glyphs.len() as u64) as usize];
                self.cells[row as usize * columns + col] = Some((glyph, TRAIL));
            }
            if row >= self.rows && self.rng.next_f64() < RESET_CHANCE {
                self.drops[col] = 0;
            } else {
                self.drops[col] = row.saturating_add(1);
            }
        }
    }

    pub fn render(&self) -> String {
        let columns = self.drops.len();
        if columns == 0 {
            return String::new();
        }
        self.cells
            .chunks(columns)
            .map(|row| row.iter().map(|c| c.map(|(g, _)| g).unwrap_or(' ')).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Draws frames of `field` into `target` until cancelled.
pub async fn run_rain(target: String, mut field: RainField, tx: PatchSender) {
    let mut ticker = interval(RAIN_FRAME);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        ticker.tick().await;
        field.step();
        let frame = Patch::Text {
            target: target.clone(),
            text: field.render(),
        };
        if !offer_frame(&tx, frame) {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_follows_viewport() {
        let field = RainField::new(Viewport::new(160, 80), GlyphRng::new(7));
        assert_eq!(field.columns(), 10);
        assert_eq!(field.rows(), 5);
    }

    #[test]
    fn test_zero_width_viewport_has_no_columns() {
        let mut field = RainField::new(Viewport::new(0, 80), GlyphRng::new(7));
        field.step();
        assert_eq!(field.render(), "");
    }

    #[test]
    fn test_drops_fall_one_row_per_frame() {
        let mut field = RainField::new(Viewport::new(64, 320), GlyphRng::new(42));
        field.step();
        field.step();
        assert!(field.drops().iter().all(|&d| d == 3));
        let rendered = field.render();
        assert_eq!(rendered.lines().count(), 20);
        // rows 1 and 2 carry glyphs in every column, row 0 stays blank
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[0].chars().all(|c| c == ' '));
        assert!(lines[1].chars().all(|c| c != ' '));
        assert!(lines[2].chars().all(|c| c != ' '));
    }

    #[test]
    fn test_drops_past_bottom_eventually_reset() {
        let mut field = RainField::new(Viewport::new(16, 32), GlyphRng::new(3));
        let mut reset_seen = false;
        for _ in 0..2_000 {
            field.step();
            if field.drops()[0] <= 1 {
                reset_seen = true;
                break;
            }
        }
        assert!(reset_seen);
    }

    #[test]
    fn test_trails_fade() {
        let mut field = RainField::new(Viewport::new(16, 16 * 40), GlyphRng::new(9));
        for _ in 0..(TRAIL as usize + 5) {
            field.step();
        }
        let lit = field.render().chars().filter(|c| *c != ' ' && *c != '\n').count();
        assert_eq!(lit, TRAIL as usize);
    }

    #[test]
    fn test_rng_unit_interval() {
        let mut rng = GlyphRng::new(1);
        for _ in 0..1_000 {
            let x = rng.next_f64();
            assert!((0.0..1.0).contains(&x));
        }
    }
}
