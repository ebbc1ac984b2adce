//! Landing page layout: hero, feature sections and the loading splash.

use std::time::Duration;

use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use xental_core::{Rgba, Vec2, palette};
use xental_effects::{
    BANNER_HEIGHT, Bounds, MagneticButton, RevealKind, ScrollReveal, Segment, SplashFrame,
    TextReveal, build_banner,
    easing::progress,
    reveal::frame_text,
    scroll::{REVEAL_OFFSET, hero_shrink, parallax_offset, scroll_progress},
};
use xental_waitlist::{FormStatus, WaitlistForm};

/// Widest the page content gets.
const MAX_WIDTH: u16 = 72;
/// Rows a scroll reveal starts below its resting place.
const REVEAL_ROWS: f32 = 3.0;
/// Rows the hero needs; it grows to fill the screen.
const HERO_ROWS: u16 = 22;
const INPUT_WIDTH: u16 = 44;
const SUBHEADLINE_WIDTH: u16 = 64;
const UNDERLINE_WIDTH: u16 = 24;
/// Share of its height the wordmark drifts while the hero scrolls out.
const PARALLAX_SPEED: f32 = 0.3;

const SUBHEADLINE: &str = "Xental is redefining how dental practices understand, manage, and use \
    patient data with cutting-edge AI and universal interoperability.";

fn shade(color: Rgba, opacity: f32) -> Color {
    palette::BLACK.lerp(color, opacity).color()
}

/// Greedy word wrap.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Visible part of a band of rows starting `top` rows below the top of
/// `area`, centered horizontally. Returns the rect and the rows cut off above.
fn clip(area: Rect, top: i32, height: u16, width: u16) -> Option<(Rect, u16)> {
    let width = width.min(area.width);
    let visible_top = top.max(0);
    let visible_bottom = (top + height as i32).min(area.height as i32);
    if visible_bottom <= visible_top {
        return None;
    }
    let rect = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + visible_top as u16,
        width,
        (visible_bottom - visible_top) as u16,
    );
    Some((rect, (visible_top - top) as u16))
}

/// Like [`clip`], but only when the whole band is on screen.
fn place(area: Rect, top: i32, height: u16, width: u16) -> Option<Rect> {
    clip(area, top, height, width)
        .filter(|(rect, skip)| *skip == 0 && rect.height == height)
        .map(|(rect, _)| rect)
}

/// One styled span per segment; `color` picks the base color by index.
fn segment_spans(
    segments: Vec<Segment>,
    color: impl Fn(usize) -> Rgba,
    opacity: f32,
) -> Line<'static> {
    Line::from(
        segments
            .into_iter()
            .enumerate()
            .map(|(i, segment)| {
                let base = segment.tint.unwrap_or_else(|| color(i));
                Span::styled(
                    segment.text,
                    Style::new()
                        .fg(shade(base, segment.opacity * opacity))
                        .add_modifier(Modifier::BOLD),
                )
            })
            .collect::<Vec<_>>(),
    )
}

#[derive(Debug)]
enum Content {
    Spacer(u16),
    Badge { text: &'static str, color: Rgba },
    Title { reveal: TextReveal, color: Rgba },
    Text { body: &'static str, color: Rgba },
    Item { title: &'static str, body: &'static str },
}

/// A band of the page below the hero, revealed once scrolled into view.
#[derive(Debug)]
struct Section {
    content: Content,
    reveal: ScrollReveal,
}

impl Section {
    fn new(content: Content) -> Self {
        Self {
            content,
            reveal: ScrollReveal::new(),
        }
    }

    fn delayed(content: Content, delay: Duration) -> Self {
        Self {
            content,
            reveal: ScrollReveal::with_delay(delay),
        }
    }

    fn height(&self, width: u16) -> u16 {
        match &self.content {
            Content::Spacer(rows) => *rows,
            Content::Badge { .. } | Content::Title { .. } => 1,
            Content::Text { body, .. } => wrap(body, width as usize).len() as u16,
            Content::Item { body, .. } => 2 + wrap(body, width as usize).len() as u16,
        }
    }

    fn lines<R: Rng + ?Sized>(
        &self,
        width: u16,
        now: Duration,
        opacity: f32,
        rng: &mut R,
    ) -> Vec<Line<'static>> {
        let styled = |text: String, color: Rgba| {
            Line::from(Span::styled(text, Style::new().fg(shade(color, opacity))))
        };
        match &self.content {
            Content::Spacer(rows) => vec![Line::default(); *rows as usize],
            Content::Badge { text, color } => vec![Line::from(Span::styled(
                format!(" {text} "),
                Style::new()
                    .fg(shade(*color, opacity))
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            ))],
            Content::Title { reveal, color } => {
                vec![segment_spans(reveal.frame(now, rng), |_| *color, opacity)]
            }
            Content::Text { body, color } => wrap(body, width as usize)
                .into_iter()
                .map(|line| styled(line, *color))
                .collect(),
            Content::Item { title, body } => {
                let mut lines = vec![Line::from(Span::styled(
                    format!("◆ {title}"),
                    Style::new()
                        .fg(shade(palette::WHITE, opacity))
                        .add_modifier(Modifier::BOLD),
                ))];
                lines.extend(
                    wrap(body, width as usize)
                        .into_iter()
                        .map(|line| styled(line, palette::GRAY)),
                );
                lines.push(Line::default());
                lines
            }
        }
    }
}

fn sections() -> Vec<Section> {
    let stagger = |i: u64| Duration::from_millis(100 * i);
    let item = |i: u64, title, body| Section::delayed(Content::Item { title, body }, stagger(i));

    vec![
        Section::new(Content::Spacer(2)),
        Section::new(Content::Badge {
            text: "PHASE I - AVAILABLE NOW",
            color: palette::TEAL,
        }),
        Section::new(Content::Spacer(1)),
        Section::new(Content::Title {
            reveal: TextReveal::new("Introducing Xental Chat", RevealKind::Glitch),
            color: palette::TEAL,
        }),
        Section::new(Content::Spacer(1)),
        Section::new(Content::Text {
            body: "Your AI-powered dental assistant. HIPAA-compliant, evidence-based, and ready \
                   to answer any dental question instantly.",
            color: palette::GRAY,
        }),
        Section::new(Content::Spacer(1)),
        item(
            0,
            "HIPAA Compliant",
            "Secure, encrypted, and fully compliant with healthcare regulations",
        ),
        item(
            1,
            "Evidence-Based",
            "Responses backed by peer-reviewed research and clinical guidelines",
        ),
        item(
            2,
            "Instant Answers",
            "Get accurate dental information in seconds, 24/7",
        ),
        Section::new(Content::Spacer(2)),
        Section::new(Content::Badge {
            text: "PHASE II - COMING SOON",
            color: palette::PURPLE,
        }),
        Section::new(Content::Spacer(1)),
        Section::new(Content::Title {
            reveal: TextReveal::new(
                "The Neural Backbone of Dental Intelligence",
                RevealKind::Split,
            ),
            color: palette::WHITE,
        }),
        Section::new(Content::Spacer(1)),
        Section::new(Content::Text {
            body: "Imagine if every dental record could be seamlessly connected and \
                   intelligently analyzed. Xental makes that a reality with AI-powered \
                   infrastructure for dental data. We're building the Plaid for dentistry.",
            color: palette::GRAY,
        }),
        Section::new(Content::Spacer(1)),
        item(
            0,
            "AI-Driven Diagnostics",
            "Intelligent analysis that transforms raw dental data into actionable insights",
        ),
        item(
            1,
            "Universal Data Connectivity",
            "Seamless integration across all practice management systems",
        ),
        item(
            2,
            "Real-Time Practice Insights",
            "Live analytics and reporting for data-driven decision making",
        ),
        item(
            3,
            "Built on HL7® FHIR Standards",
            "Industry-standard interoperability for secure data exchange",
        ),
        Section::new(Content::Spacer(2)),
        Section::new(Content::Text {
            body: "We're building something that will",
            color: palette::WHITE,
        }),
        Section::new(Content::Title {
            reveal: TextReveal::new("change dentistry", RevealKind::Gradient),
            color: palette::TEAL,
        }),
        Section::new(Content::Spacer(1)),
        Section::new(Content::Text {
            body: "Be the first to know when we launch. Type your email and press Enter.",
            color: palette::GRAY,
        }),
        Section::new(Content::Spacer(3)),
        Section::new(Content::Text {
            body: "© 2024 Xental AI. All rights reserved.",
            color: palette::GRAY,
        }),
        Section::new(Content::Spacer(1)),
    ]
}

/// The interactive parts of the hero, owned by the app.
pub struct Controls<'a> {
    pub form: &'a WaitlistForm,
    pub button: &'a mut MagneticButton,
    /// Surface units per pixel, for placing the button in pointer space.
    pub units_per_pixel: f32,
}

/// Hero presentation for one frame.
struct Hero {
    /// Row of the hero's first line, relative to the viewport.
    top: i32,
    /// Opacity as the page scrolls away.
    fade: f32,
    /// Extra rows the wordmark lifts by as the hero scrolls out.
    drift: i32,
    headline: Vec<Segment>,
    /// Characters of the subheadline typed so far.
    typed: usize,
}

/// Scrollable landing page.
#[derive(Debug)]
pub struct Landing {
    headline: TextReveal,
    subheadline: TextReveal,
    sections: Vec<Section>,
    /// When the hero started its entrance.
    entered_at: Option<Duration>,
    /// Rows scrolled past.
    scroll: u16,
    /// Size of the last layout, for clamping scroll.
    content_height: u16,
    viewport_height: u16,
}

impl Default for Landing {
    fn default() -> Self {
        Self::new()
    }
}

impl Landing {
    pub fn new() -> Self {
        Self {
            headline: TextReveal::new("Unlocking the Future of Dental Data", RevealKind::Split)
                .with_delay(Duration::from_millis(200)),
            subheadline: TextReveal::new(SUBHEADLINE, RevealKind::Typewriter)
                .with_delay(Duration::from_millis(800)),
            sections: sections(),
            entered_at: None,
            scroll: 0,
            content_height: 0,
            viewport_height: 0,
        }
    }

    /// Start the hero entrance. Only the first call counts.
    pub fn enter(&mut self, now: Duration) {
        if self.entered_at.is_none() {
            self.entered_at = Some(now);
            self.headline.in_view(now);
            self.subheadline.in_view(now);
        }
    }

    pub fn scroll_by(&mut self, rows: i32) {
        let max = self.content_height.saturating_sub(self.viewport_height) as i32;
        self.scroll = (self.scroll as i32 + rows).clamp(0, max.max(0)) as u16;
    }

    /// Draw the page over whatever is already in `area`.
    pub fn render<R: Rng + ?Sized>(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        now: Duration,
        controls: &mut Controls<'_>,
        rng: &mut R,
    ) {
        self.viewport_height = area.height;
        let width = area.width.min(MAX_WIDTH);
        let hero_height = area.height.max(HERO_ROWS);

        // Lay out first so reveals and the hero fade see the full height.
        let heights: Vec<u16> = self.sections.iter().map(|s| s.height(width)).collect();
        self.content_height = hero_height + heights.iter().sum::<u16>();
        self.scroll = self
            .scroll
            .min(self.content_height.saturating_sub(area.height));

        let scrolled = scroll_progress(
            self.scroll as f32,
            self.content_height as f32,
            area.height as f32,
        );
        let (_, fade) = hero_shrink(scrolled);
        let parallax = |scroll: f32| {
            parallax_offset(-scroll, hero_height as f32, area.height as f32, PARALLAX_SPEED)
        };
        let drift = (parallax(self.scroll as f32) - parallax(0.0)) * hero_height as f32;
        let hero = Hero {
            top: ((hero_height - HERO_ROWS) / 2) as i32 - self.scroll as i32,
            fade,
            drift: drift.round() as i32,
            headline: self.headline.frame(now, rng),
            typed: frame_text(&self.subheadline.frame(now, rng)).chars().count(),
        };
        self.render_hero(frame, area, now, &hero, controls);

        let mut top = hero_height as i32 - self.scroll as i32;
        for (section, height) in self.sections.iter_mut().zip(heights) {
            if self.entered_at.is_some()
                && section.reveal.observe(top as f32, area.height as f32, now)
            {
                if let Content::Title { reveal, .. } = &mut section.content {
                    reveal.in_view(now);
                }
            }
            let style = section.reveal.style(now);
            let shifted = top + (style.offset_y / REVEAL_OFFSET * REVEAL_ROWS).round() as i32;
            if let Some((rect, skip)) = clip(area, shifted, height, width) {
                let lines = section.lines(width, now, style.opacity, rng);
                frame.render_widget(
                    Paragraph::new(lines)
                        .alignment(Alignment::Center)
                        .scroll((skip, 0)),
                    rect,
                );
            }
            top += height as i32;
        }

        if self.scroll > 0 {
            render_progress(frame, area, scrolled);
        }
    }

    fn render_hero(
        &self,
        frame: &mut Frame,
        area: Rect,
        now: Duration,
        hero: &Hero,
        controls: &mut Controls<'_>,
    ) {
        let Hero {
            top, fade, drift, ..
        } = *hero;
        let form = controls.form;
        let since_entry = self
            .entered_at
            .map(|at| now.saturating_sub(at))
            .unwrap_or_default();

        // Wordmark
        if let Some(rect) = place(area, top + drift, BANNER_HEIGHT as u16, area.width) {
            let lines: Vec<Line> = build_banner("XENTAL")
                .into_iter()
                .map(|row| Line::from(row).style(Style::new().fg(shade(palette::TEAL, fade))))
                .collect();
            frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);
        }

        // Underline grows in after the wordmark.
        let grown = progress(since_entry, Duration::from_millis(600), Duration::from_millis(500));
        let bar_width = (UNDERLINE_WIDTH as f32 * grown).round() as u16;
        if let Some(rect) = place(area, top + 5, 1, bar_width) {
            let spans: Vec<Span> = (0..bar_width)
                .map(|i| {
                    let t = i as f32 / UNDERLINE_WIDTH as f32;
                    let color = palette::TEAL.lerp(palette::PURPLE, t);
                    Span::styled("━", Style::new().fg(shade(color, fade * grown)))
                })
                .collect();
            frame.render_widget(Paragraph::new(Line::from(spans)), rect);
        }

        if let Some(rect) = place(area, top + 7, 1, area.width) {
            // The last two words carry the accent color.
            let accent = |i: usize| if i >= 4 { palette::TEAL } else { palette::WHITE };
            let line = segment_spans(hero.headline.clone(), accent, fade);
            frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), rect);
        }

        let sub_width = area.width.min(SUBHEADLINE_WIDTH);
        if let Some(rect) = place(area, top + 9, 3, sub_width) {
            let mut remaining = hero.typed;
            let lines: Vec<Line> = wrap(SUBHEADLINE, sub_width as usize)
                .into_iter()
                .take(3)
                .map(|line| {
                    let shown: String = line.chars().take(remaining).collect();
                    remaining = remaining.saturating_sub(line.chars().count() + 1);
                    Line::from(shown).style(Style::new().fg(shade(palette::GRAY, fade)))
                })
                .collect();
            frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);
        }

        if let Some(rect) = place(area, top + 13, 3, INPUT_WIDTH) {
            let editable = form.is_editable();
            let border = if editable { palette::TEAL } else { palette::GRAY };
            let cursor = if editable && (now.as_millis() / 500) % 2 == 0 { "▌" } else { " " };
            let line = if form.input().is_empty() {
                Line::from(vec![
                    Span::raw(cursor),
                    Span::styled("Enter your email", Style::new().fg(shade(palette::GRAY, 0.6))),
                ])
            } else {
                Line::from(vec![
                    Span::styled(form.input().to_string(), Style::new().fg(palette::WHITE.color())),
                    Span::raw(cursor),
                ])
            };
            let block = Block::bordered()
                .title(" Email ")
                .border_style(Style::new().fg(shade(border, fade)))
                .style(Style::new().bg(Color::Black));
            frame.render_widget(Paragraph::new(line).block(block), rect);
        }

        render_button(frame, area, top + 16, controls);

        if let Some(message) = form.message() {
            if let Some(rect) = place(area, top + 19, 1, area.width) {
                let color = if form.error().is_some() { palette::RED } else { palette::TEAL };
                let line = Line::from(message).style(Style::new().fg(color.color()));
                frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), rect);
            }
        }

        // Scroll hint, pulsing once the hero has settled.
        let hint = progress(since_entry, Duration::from_millis(1500), Duration::from_millis(500));
        if hint > 0.0 && self.scroll == 0 {
            if let Some(rect) = place(area, top + 21, 1, area.width) {
                let pulse = 0.6 + 0.4 * (now.as_secs_f32() * std::f32::consts::PI).sin();
                let line = Line::from("↓ scroll ↓")
                    .style(Style::new().fg(shade(palette::GRAY, hint * pulse * fade)));
                frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), rect);
            }
        }
    }
}

/// Thin bar across the top showing how far down the page is.
fn render_progress(frame: &mut Frame, area: Rect, share: f32) {
    let width = (area.width as f32 * share).round() as u16;
    if let Some(rect) = place(area, 0, 1, area.width) {
        let spans: Vec<Span> = (0..width)
            .map(|i| {
                let t = i as f32 / area.width.max(1) as f32;
                Span::styled("▀", Style::new().fg(palette::TEAL.lerp(palette::PURPLE, t).color()))
            })
            .collect();
        frame.render_widget(Paragraph::new(Line::from(spans)), rect);
    }
}

/// Draw the submit button at its sprung position and record its rest
/// bounds in surface units for pointer hit-testing.
fn render_button(frame: &mut Frame, area: Rect, top: i32, controls: &mut Controls<'_>) {
    let Controls {
        form,
        button,
        units_per_pixel: upp,
    } = controls;
    let upp = *upp;
    let label = form.button_label();
    let rest_width = label.chars().count() as u16 + 8;
    let Some(rest) = place(area, top, 3, rest_width) else {
        button.set_bounds(Bounds::default());
        return;
    };
    button.set_bounds(Bounds::new(
        rest.x as f32 * upp,
        rest.y as f32 * 2.0 * upp,
        rest.width as f32 * upp,
        rest.height as f32 * 2.0 * upp,
    ));

    let width = ((rest.width as f32 * button.scale()).round() as u16).min(area.width);
    let shift = |offset: Vec2| {
        let dx = (offset.x / upp).round() as i32 - (width as i32 - rest.width as i32) / 2;
        let dy = (offset.y / (2.0 * upp)).round() as i32;
        let x = (rest.x as i32 + dx).clamp(area.x as i32, (area.right() - width) as i32);
        let y = (rest.y as i32 + dy).clamp(area.y as i32, (area.bottom() - rest.height) as i32);
        Rect::new(x as u16, y as u16, width, rest.height)
    };

    let fill = match form.status() {
        FormStatus::Submitting => palette::GRAY,
        _ => palette::TEAL,
    };
    if button.is_hovered() {
        frame.render_widget(
            Block::new().style(Style::new().bg(palette::PURPLE.color())),
            shift(button.backdrop_offset()),
        );
    }
    let body = Paragraph::new(vec![
        Line::default(),
        Line::from(label).style(Style::new().add_modifier(Modifier::BOLD)),
    ])
    .alignment(Alignment::Center)
    .style(Style::new().bg(fill.color()).fg(palette::BLACK.color()));
    frame.render_widget(body, shift(button.offset()));
}

/// Full-screen loading splash.
pub fn render_splash(frame: &mut Frame, area: Rect, splash: &SplashFrame) {
    const INNER: [&str; 4] = ["◐", "◓", "◑", "◒"];
    const OUTER: [&str; 4] = ["◜", "◝", "◞", "◟"];

    frame.render_widget(Block::new().style(Style::new().bg(Color::Black)), area);

    let quarter = |angle: f32| (angle.rem_euclid(360.0) / 90.0) as usize % 4;
    let logo = splash.opacity * splash.logo_scale;
    let mut lines: Vec<Line> = build_banner("XENTAL")
        .into_iter()
        .map(|row| Line::from(row).style(Style::new().fg(shade(palette::TEAL, logo))))
        .collect();
    lines.push(Line::default());
    let ring = |glyph: &'static str, color: Rgba| {
        Span::styled(glyph, Style::new().fg(shade(color, splash.opacity)))
    };
    lines.push(Line::from(vec![
        ring(OUTER[quarter(splash.outer_ring)], palette::PURPLE),
        Span::raw(" "),
        ring(INNER[quarter(splash.inner_ring)], palette::TEAL),
        Span::raw(" "),
        ring(OUTER[quarter(splash.outer_ring + 180.0)], palette::PURPLE),
    ]));
    lines.push(Line::default());
    lines.push(Line::from("LOADING").style(
        Style::new().fg(shade(palette::GRAY, splash.label_opacity * splash.opacity)),
    ));
    lines.push(Line::from(
        splash
            .dots
            .iter()
            .map(|pulse| {
                Span::styled(
                    "● ",
                    Style::new().fg(shade(palette::TEAL, (0.3 + 0.7 * pulse) * splash.opacity)),
                )
            })
            .collect::<Vec<_>>(),
    ));

    let height = lines.len() as u16;
    let top = area.height.saturating_sub(height) as i32 / 2;
    if let Some((rect, skip)) = clip(area, top, height, area.width) {
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .scroll((skip, 0)),
            rect,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use ratatui::{Terminal, backend::TestBackend};
    use xental_effects::LoadingSplash;

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap("  ", 10), Vec::<String>::new());
        assert_eq!(wrap("unbreakable", 4), vec!["unbreakable"]);
    }

    #[test]
    fn test_clip() {
        let area = Rect::new(0, 0, 80, 10);
        assert_eq!(clip(area, 2, 3, 20), Some((Rect::new(30, 2, 20, 3), 0)));
        assert_eq!(clip(area, -1, 3, 20), Some((Rect::new(30, 0, 20, 2), 1)));
        assert_eq!(clip(area, 9, 3, 20), Some((Rect::new(30, 9, 20, 1), 0)));
        assert_eq!(clip(area, 10, 3, 20), None);
        assert_eq!(clip(area, -3, 3, 20), None);
        assert!(place(area, -1, 3, 20).is_none());
    }

    fn draw(
        terminal: &mut Terminal<TestBackend>,
        landing: &mut Landing,
        controls: &mut Controls<'_>,
        now: Duration,
    ) {
        terminal
            .draw(|frame| {
                let area = frame.area();
                landing.render(frame, area, now, controls, &mut StdRng::seed_from_u64(7));
            })
            .unwrap();
    }

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let mut landing = Landing::new();
        let form = WaitlistForm::new("landing_page");
        let mut button = MagneticButton::new(Bounds::default());
        let mut controls = Controls {
            form: &form,
            button: &mut button,
            units_per_pixel: 4.0,
        };
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        draw(&mut terminal, &mut landing, &mut controls, Duration::from_secs(3));
        landing.scroll_by(-5);
        assert_eq!(landing.scroll, 0);
        landing.scroll_by(10_000);
        assert_eq!(landing.scroll, landing.content_height - 24);
        draw(&mut terminal, &mut landing, &mut controls, Duration::from_secs(4));
        assert_eq!(landing.scroll, landing.content_height - 24);
    }

    #[test]
    fn test_hero_places_button() {
        let mut landing = Landing::new();
        landing.enter(Duration::ZERO);
        let form = WaitlistForm::new("landing_page");
        let mut button = MagneticButton::new(Bounds::default());
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        {
            let mut controls = Controls {
                form: &form,
                button: &mut button,
                units_per_pixel: 4.0,
            };
            draw(&mut terminal, &mut landing, &mut controls, Duration::from_secs(5));
        }

        // Hero is 22 rows in 24, so it starts one row down.
        let bounds = button.bounds();
        assert_eq!(bounds.origin.y, 17.0 * 2.0 * 4.0);
        assert_eq!(bounds.height, 3.0 * 2.0 * 4.0);

        let buffer = terminal.backend().buffer();
        let row: String = (0..80u16)
            .map(|x| buffer[(x, 18u16)].symbol().to_string())
            .collect();
        assert!(row.contains("Join the Waitlist"));
    }

    #[test]
    fn test_splash_renders_wordmark() {
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        let frame = LoadingSplash::default().frame(Duration::from_millis(1200));
        terminal
            .draw(|f| {
                let area = f.area();
                render_splash(f, area, &frame);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let text: String = buffer.content.iter().map(|c| c.symbol()).collect();
        assert!(text.contains("LOADING"));
        assert!(text.contains("██"));
    }
}
