//! Text reveal effects, played once when the text first comes into view.

use std::time::Duration;

use rand::Rng;
use xental_core::{Rgba, palette};

use crate::easing::{power2_out, power3_out, progress};

/// Glyphs shown in place of not-yet-revealed characters.
pub const GLITCH_GLYPHS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '-', '=', '[', ']', '{', '}', '|',
    ';', ':', ',', '.', '<', '>', '?',
];

/// Time per character for the typewriter.
const TYPEWRITER_CHAR: Duration = Duration::from_millis(50);
/// Duration of each word's rise in the split reveal.
const SPLIT_WORD: Duration = Duration::from_millis(600);
/// Delay between consecutive words in the split reveal.
const SPLIT_STAGGER: Duration = Duration::from_millis(50);
/// Interval between glitch iterations.
const GLITCH_TICK: Duration = Duration::from_millis(30);
/// Fade-in of the gradient text.
const GRADIENT_FADE: Duration = Duration::from_millis(800);
/// Period of the gradient sweep.
const GRADIENT_PERIOD: Duration = Duration::from_secs(3);

/// How the text appears.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealKind {
    /// Characters typed one at a time.
    Typewriter,
    /// Words fade and rise into place one after another.
    #[default]
    Split,
    /// Characters resolve left to right out of random glyphs.
    Glitch,
    /// Text that fades up into place with a moving teal/purple tint.
    Gradient,
}

/// A run of text with its current presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub text: String,
    /// 0.0 (hidden) to 1.0 (fully shown).
    pub opacity: f32,
    /// Remaining share of the entry offset, 1.0 at start, 0.0 in place.
    pub rise: f32,
    /// Color override, if any.
    pub tint: Option<Rgba>,
}

impl Segment {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            opacity: 1.0,
            rise: 0.0,
            tint: None,
        }
    }
}

/// A one-shot text reveal.
#[derive(Debug, Clone)]
pub struct TextReveal {
    text: String,
    kind: RevealKind,
    delay: Duration,
    /// Time the text first came into view.
    started_at: Option<Duration>,
}

impl TextReveal {
    pub fn new(text: impl Into<String>, kind: RevealKind) -> Self {
        Self {
            text: text.into(),
            kind,
            delay: Duration::ZERO,
            started_at: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> RevealKind {
        self.kind
    }

    /// Mark the text as visible at `now`. Only the first call counts.
    pub fn in_view(&mut self, now: Duration) {
        self.started_at.get_or_insert(now);
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Total running time once started, delay included.
    pub fn duration(&self) -> Duration {
        let chars = self.text.chars().count() as u32;
        let words = self.text.split_whitespace().count() as u32;
        self.delay
            + match self.kind {
                RevealKind::Typewriter => TYPEWRITER_CHAR * chars,
                RevealKind::Split => SPLIT_WORD + SPLIT_STAGGER * words.saturating_sub(1),
                RevealKind::Glitch => GLITCH_TICK * (chars + 1),
                RevealKind::Gradient => GRADIENT_FADE,
            }
    }

    pub fn is_complete(&self, now: Duration) -> bool {
        self.started_at
            .is_some_and(|start| now.saturating_sub(start) >= self.duration())
    }

    /// Presentation at `now`.
    pub fn frame<R: Rng + ?Sized>(&self, now: Duration, rng: &mut R) -> Vec<Segment> {
        let elapsed = self.started_at.map(|start| now.saturating_sub(start));
        match self.kind {
            RevealKind::Typewriter => self.typewriter(elapsed),
            RevealKind::Split => self.split(elapsed),
            RevealKind::Glitch => self.glitch(elapsed, rng),
            RevealKind::Gradient => self.gradient(now, elapsed),
        }
    }

    fn typewriter(&self, elapsed: Option<Duration>) -> Vec<Segment> {
        let Some(elapsed) = elapsed else {
            return Vec::new();
        };
        let total = self.text.chars().count();
        let shown = (progress(elapsed, self.delay, TYPEWRITER_CHAR * total as u32)
            * total as f32)
            .floor() as usize;
        vec![Segment::plain(self.text.chars().take(shown).collect::<String>())]
    }

    fn split(&self, elapsed: Option<Duration>) -> Vec<Segment> {
        let words: Vec<&str> = self.text.split_whitespace().collect();
        let last = words.len().saturating_sub(1);
        words
            .iter()
            .enumerate()
            .map(|(i, word)| {
                let eased = elapsed
                    .map(|e| {
                        let start = self.delay + SPLIT_STAGGER * i as u32;
                        power3_out(progress(e, start, SPLIT_WORD))
                    })
                    .unwrap_or(0.0);
                let text = if i == last {
                    (*word).to_string()
                } else {
                    format!("{word} ")
                };
                Segment {
                    text,
                    opacity: eased,
                    rise: 1.0 - eased,
                    tint: None,
                }
            })
            .collect()
    }

    fn glitch<R: Rng + ?Sized>(&self, elapsed: Option<Duration>, rng: &mut R) -> Vec<Segment> {
        // Untouched until the first tick after the delay.
        let ticks = elapsed
            .filter(|e| *e > self.delay)
            .map(|e| ((e - self.delay).as_millis() / GLITCH_TICK.as_millis()) as usize)
            .unwrap_or(0);
        if ticks == 0 {
            return vec![Segment::plain(self.text.clone())];
        }
        let resolved = ticks - 1;
        let text = self
            .text
            .chars()
            .enumerate()
            .map(|(i, ch)| {
                if i < resolved {
                    ch
                } else {
                    GLITCH_GLYPHS[rng.gen_range(0..GLITCH_GLYPHS.len())]
                }
            })
            .collect::<String>();
        vec![Segment::plain(text)]
    }

    fn gradient(&self, now: Duration, elapsed: Option<Duration>) -> Vec<Segment> {
        let shown = elapsed
            .map(|e| power2_out(progress(e, self.delay, GRADIENT_FADE)))
            .unwrap_or(0.0);
        let total = self.text.chars().count().max(1) as f32;
        let phase = now.as_secs_f32() / GRADIENT_PERIOD.as_secs_f32();
        self.text
            .chars()
            .enumerate()
            .map(|(i, ch)| {
                let t = (i as f32 / total + phase).fract();
                // Triangle wave: teal -> purple -> teal
                let mix = 1.0 - (t * 2.0 - 1.0).abs();
                Segment {
                    text: ch.to_string(),
                    opacity: shown,
                    rise: 1.0 - shown,
                    tint: Some(palette::TEAL.lerp(palette::PURPLE, mix)),
                }
            })
            .collect()
    }
}

/// Concatenated text of a frame.
pub fn frame_text(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}
