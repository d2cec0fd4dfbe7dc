//! Procedurally generated palettes of distinguishable colours.
//!
//! When the guessable symbols are not a fixed list, [`PaletteGenerator`]
//! samples random RGB triples and keeps those that are far enough (per
//! channel) from every colour already accepted. The required distance starts
//! at the configured tolerance and only ever decreases, so generation always
//! finishes with exactly the requested number of colours.

use std::collections::HashMap;

use derive_new::new;
use derive_setters::Setters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Largest channel range: one value per `u8`.
const MAX_CHANNEL_RANGE: u16 = 256;

/// An RGB colour used as a guessable symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Colour {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Colour {
    /// Samples a colour with every channel uniform in `[0, channel_range)`.
    fn random<R: Rng>(channel_range: u16, rng: &mut R) -> Self {
        let mut channel = || u8::try_from(rng.random_range(0..channel_range)).unwrap_or(u8::MAX);
        Self::new(channel(), channel(), channel())
    }

    /// Largest absolute difference over the three channels.
    pub fn distance(&self, other: &Colour) -> u8 {
        self.r
            .abs_diff(other.r)
            .max(self.g.abs_diff(other.g))
            .max(self.b.abs_diff(other.b))
    }

    /// True if some channel differs from `other` by more than `tolerance`.
    pub fn distinct_from(&self, other: &Colour, tolerance: u16) -> bool {
        u16::from(self.distance(other)) > tolerance
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Ordered, immutable mapping between symbol indices and colours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    colours: Vec<Colour>,
    tolerance: u16,
    #[serde(skip)]
    index: HashMap<Colour, usize>,
}

impl Palette {
    /// Builds a palette from a fixed list of colours.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::DuplicateColour`] if a colour appears twice,
    /// since the mapping back to an index would be ambiguous.
    #[instrument]
    pub fn from_colours(colours: Vec<Colour>) -> Result<Self, PaletteError> {
        let mut index = HashMap::with_capacity(colours.len());
        for (position, colour) in colours.iter().enumerate() {
            if index.insert(*colour, position).is_some() {
                return Err(PaletteError::DuplicateColour(*colour));
            }
        }
        let tolerance = min_pairwise_distance(&colours).map_or(0, |d| u16::from(d).saturating_sub(1));
        Ok(Self {
            colours,
            tolerance,
            index,
        })
    }

    /// Assembles a generated palette. Duplicates only occur once the colour
    /// space is exhausted; the first occurrence keeps the reverse mapping.
    fn assemble(colours: Vec<Colour>, tolerance: u16) -> Self {
        let mut index = HashMap::with_capacity(colours.len());
        for (position, colour) in colours.iter().enumerate() {
            index.entry(*colour).or_insert(position);
        }
        Self {
            colours,
            tolerance,
            index,
        }
    }

    /// Colour for a symbol index.
    pub fn colour(&self, index: usize) -> Option<Colour> {
        self.colours.get(index).copied()
    }

    /// Symbol index for a colour.
    pub fn index_of(&self, colour: &Colour) -> Option<usize> {
        self.index.get(colour).copied()
    }

    /// Number of colours.
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// True if the palette has no colours.
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Colours in symbol order.
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    /// Iterates colours in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = &Colour> {
        self.colours.iter()
    }

    /// Tolerance every pair of colours is guaranteed to exceed.
    ///
    /// For generated palettes this is the working tolerance the generator
    /// finished with.
    pub fn tolerance(&self) -> u16 {
        self.tolerance
    }
}

fn min_pairwise_distance(colours: &[Colour]) -> Option<u8> {
    colours
        .iter()
        .enumerate()
        .flat_map(|(i, a)| colours[i + 1..].iter().map(move |b| a.distance(b)))
        .min()
}

/// Errors building a fixed palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PaletteError {
    /// The same colour was listed twice.
    #[display("Colour {} appears more than once", _0)]
    DuplicateColour(Colour),
}

impl std::error::Error for PaletteError {}

/// Samples palettes of mutually distinguishable colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct PaletteGenerator {
    /// Channel values are drawn from `[0, channel_range)`; clamped to `1..=256`.
    channel_range: u16,
    /// Starting distance every new colour must exceed.
    initial_tolerance: u16,
    /// Consecutive rejected samples before the tolerance is lowered by one.
    attempts_per_tolerance: u32,
}

impl Default for PaletteGenerator {
    fn default() -> Self {
        Self {
            channel_range: 255,
            initial_tolerance: 100,
            attempts_per_tolerance: 32,
        }
    }
}

impl PaletteGenerator {
    /// Creates a generator with the given channel range and tolerance.
    pub fn new(channel_range: u16, initial_tolerance: u16) -> Self {
        Self {
            channel_range,
            initial_tolerance,
            ..Self::default()
        }
    }

    /// Channel range as configured.
    pub fn channel_range(&self) -> u16 {
        self.channel_range
    }

    /// Starting tolerance.
    pub fn initial_tolerance(&self) -> u16 {
        self.initial_tolerance
    }

    /// Rejected samples allowed per tolerance level.
    pub fn attempts_per_tolerance(&self) -> u32 {
        self.attempts_per_tolerance
    }

    /// Generates exactly `count` colours.
    ///
    /// Each colour must differ from every accepted colour by more than the
    /// working tolerance in at least one channel. After a full round of
    /// rejected samples the tolerance drops by one and never recovers during
    /// this call. Once it has reached zero and another round is rejected, the
    /// colour space is exhausted and the next sample is taken as is.
    #[instrument(skip(self, rng), fields(channel_range = self.channel_range, tolerance = self.initial_tolerance))]
    pub fn generate<R: Rng>(&self, count: usize, rng: &mut R) -> Palette {
        let channel_range = self.channel_range.clamp(1, MAX_CHANNEL_RANGE);
        if channel_range != self.channel_range {
            warn!(
                requested = self.channel_range,
                channel_range, "Channel range clamped"
            );
        }
        let attempts = self.attempts_per_tolerance.max(1);
        let mut tolerance = self.initial_tolerance;
        let mut colours: Vec<Colour> = Vec::with_capacity(count);

        for _ in 0..count {
            let colour = loop {
                if let Some(colour) = sample_distinct(&colours, tolerance, channel_range, attempts, rng)
                {
                    break colour;
                }
                if tolerance == 0 {
                    warn!(accepted = colours.len(), "Colour space exhausted, accepting duplicate");
                    break Colour::random(channel_range, rng);
                }
                tolerance -= 1;
                debug!(tolerance, "Lowered palette tolerance");
            };
            colours.push(colour);
        }

        info!(count, final_tolerance = tolerance, "Palette generated");
        Palette::assemble(colours, tolerance)
    }
}

/// One sampling round: up to `attempts` random colours, returning the first
/// that is distinct from every accepted colour.
fn sample_distinct<R: Rng>(
    accepted: &[Colour],
    tolerance: u16,
    channel_range: u16,
    attempts: u32,
    rng: &mut R,
) -> Option<Colour> {
    (0..attempts)
        .map(|_| Colour::random(channel_range, rng))
        .find(|candidate| accepted.iter().all(|c| candidate.distinct_from(c, tolerance)))
}

/// Generates `count` colours with channels in `[0, channel_range)`.
///
/// Shorthand for [`PaletteGenerator::new`] followed by
/// [`PaletteGenerator::generate`].
#[instrument(skip(rng))]
pub fn generate_palette<R: Rng>(
    count: usize,
    channel_range: u16,
    tolerance: u16,
    rng: &mut R,
) -> Palette {
    PaletteGenerator::new(channel_range, tolerance).generate(count, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generates_exact_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let palette = generate_palette(6, 255, 100, &mut rng);
        assert_eq!(palette.len(), 6);
    }

    #[test]
    fn test_pairs_exceed_final_tolerance() {
        let mut rng = StdRng::seed_from_u64(42);
        let palette = generate_palette(8, 255, 100, &mut rng);
        let colours = palette.colours();
        for (i, a) in colours.iter().enumerate() {
            for b in &colours[i + 1..] {
                assert!(a.distinct_from(b, palette.tolerance()), "{a} too close to {b}");
            }
        }
    }

    #[test]
    fn test_tolerance_never_increases() {
        let mut rng = StdRng::seed_from_u64(3);
        let palette = generate_palette(20, 255, 120, &mut rng);
        assert!(palette.tolerance() <= 120);
    }

    #[test]
    fn test_exhausted_space_still_terminates() {
        // Two values per channel gives 8 colours; ask for more.
        let mut rng = StdRng::seed_from_u64(11);
        let palette = PaletteGenerator::new(2, 5)
            .with_attempts_per_tolerance(4)
            .generate(12, &mut rng);
        assert_eq!(palette.len(), 12);
        assert_eq!(palette.tolerance(), 0);
    }

    #[test]
    fn test_channel_range_zero_is_clamped() {
        let mut rng = StdRng::seed_from_u64(1);
        let palette = generate_palette(2, 0, 0, &mut rng);
        assert_eq!(palette.len(), 2);
        assert!(palette.iter().all(|c| *c == Colour::new(0, 0, 0)));
    }

    #[test]
    fn test_index_round_trips_through_colour() {
        let mut rng = StdRng::seed_from_u64(5);
        let palette = generate_palette(6, 255, 100, &mut rng);
        for index in 0..palette.len() {
            let colour = palette.colour(index).expect("in range");
            assert_eq!(palette.index_of(&colour), Some(index));
        }
        assert_eq!(palette.colour(6), None);
    }

    #[test]
    fn test_fixed_palette_rejects_duplicates() {
        let red = Colour::new(255, 0, 0);
        let result = Palette::from_colours(vec![red, Colour::new(0, 255, 0), red]);
        assert_eq!(result, Err(PaletteError::DuplicateColour(red)));
    }

    #[test]
    fn test_fixed_palette_tolerance() {
        let palette = Palette::from_colours(vec![Colour::new(0, 0, 0), Colour::new(10, 3, 0)])
            .expect("distinct colours");
        assert_eq!(palette.tolerance(), 9);
    }

    #[test]
    fn test_colour_display_is_hex() {
        assert_eq!(Colour::new(255, 8, 0).to_string(), "#ff0800");
    }
}
