use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use rand::rngs::ThreadRng;
use ratatui::{
    DefaultTerminal, Frame,
    style::Stylize,
    text::Line,
};
use tracing::debug;
use xental_config::Config;
use xental_core::AnimationSpeed;
use xental_effects::{Bounds, LoadingSplash, MagneticButton};
use xental_particles::{Animator, FieldOptions, Raster, Stage, Surface};
use xental_waitlist::{FormStatus, StoreError, Submitter, WaitlistForm, WaitlistStore};

use crate::landing::{Controls, Landing, render_splash};

/// Rows moved per scroll wheel notch.
const WHEEL_ROWS: i32 = 3;

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Start of the session; all animation times are measured from here.
    clock: Instant,
    last_tick: Duration,
    /// When the particle field is due for its next step.
    next_frame: Duration,
    speed: AnimationSpeed,
    units_per_pixel: f32,
    field_options: FieldOptions,
    stage: Stage,
    raster: Raster,
    /// Particle background, once there is a surface to draw on.
    animator: Option<Animator>,
    splash: LoadingSplash,
    landing: Landing,
    button: MagneticButton,
    /// Whether the button is held down by the mouse.
    pressing: bool,
    form: WaitlistForm,
    submitter: Submitter,
    rng: ThreadRng,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: &Config, store: Arc<dyn WaitlistStore>) -> Self {
        let units_per_pixel = config.animation.units_per_pixel;
        Self {
            running: false,
            clock: Instant::now(),
            last_tick: Duration::ZERO,
            next_frame: Duration::ZERO,
            speed: config.animation.speed,
            units_per_pixel,
            field_options: FieldOptions {
                particle_count: config.animation.particle_count,
                grid_threshold: config.animation.grid_threshold,
            },
            stage: Stage::new(),
            raster: Raster::new(0, 0, units_per_pixel),
            animator: None,
            splash: LoadingSplash::new(Duration::from_millis(config.splash.duration_ms)),
            landing: Landing::new(),
            button: MagneticButton::new(Bounds::default()),
            pressing: false,
            form: WaitlistForm::new(config.waitlist.source.clone()),
            submitter: Submitter::new(store),
            rng: rand::thread_rng(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let size = terminal.size()?;
        self.resize(size.width, size.height);
        while self.running {
            self.tick();
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        if let Some(animator) = self.animator.take() {
            animator.unmount();
        }
        Ok(())
    }

    /// Advance everything that moves on its own.
    fn tick(&mut self) {
        let now = self.clock.elapsed();
        let dt = now.saturating_sub(self.last_tick);
        self.last_tick = now;

        if let Some(result) = self.submitter.poll() {
            self.form.finish_submit(result);
        }
        self.button
            .set_disabled(self.form.status() == FormStatus::Submitting);
        self.button.tick(dt);

        if !self.splash.is_visible(now) {
            self.landing.enter(now);
        }
        self.step_frame(now);
    }

    /// Step the stage at most once per frame interval, however often the
    /// loop wakes up for input.
    fn step_frame(&mut self, now: Duration) {
        if now < self.next_frame {
            return;
        }
        self.stage.frame(&mut self.raster);
        self.next_frame += self.speed.frame_interval();
        if self.next_frame <= now {
            // Fell behind; don't try to catch up in a burst.
            self.next_frame = now + self.speed.frame_interval();
        }
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let now = self.clock.elapsed();
        let area = frame.area();

        if self.splash.is_visible(now) {
            render_splash(frame, area, &self.splash.frame(now));
            return;
        }

        frame.render_widget(&self.raster, area);
        let mut controls = Controls {
            form: &self.form,
            button: &mut self.button,
            units_per_pixel: self.units_per_pixel,
        };
        self.landing
            .render(frame, area, now, &mut controls, &mut self.rng);

        if let Some(help_area) = area.rows().last() {
            let help = Line::from(vec![
                "enter".bold().cyan(),
                " join  ".dark_gray(),
                "↑/↓".bold().cyan(),
                " scroll  ".dark_gray(),
                "esc".bold().cyan(),
                " quit".dark_gray(),
            ])
            .centered();
            frame.render_widget(help, help_area);
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits no longer than the next frame deadline so animation keeps running.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let timeout = self.next_frame.saturating_sub(self.clock.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(cols, rows) => self.resize(cols, rows),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        let now = self.clock.elapsed();
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc)
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            _ if self.splash.is_visible(now) => self.splash.skip(now),
            (_, KeyCode::Enter) => self.submit(),
            (_, KeyCode::Backspace) => self.form.pop_char(),
            (_, KeyCode::Up) => self.landing.scroll_by(-1),
            (_, KeyCode::Down) => self.landing.scroll_by(1),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(ch)) => {
                self.form.push_char(ch)
            }
            _ => {}
        }
    }

    /// Pointer moves drive the particles and the button; the wheel scrolls.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        let position = self.raster.cell_to_surface(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.stage.pointer_moved(position);
                self.button.pointer_moved(position);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.pressing = self.button.bounds().contains(position);
                self.button.set_pressed(self.pressing);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.pressing && self.button.bounds().contains(position) {
                    self.submit();
                }
                self.pressing = false;
                self.button.set_pressed(false);
            }
            MouseEventKind::ScrollUp => self.landing.scroll_by(-WHEEL_ROWS),
            MouseEventKind::ScrollDown => self.landing.scroll_by(WHEEL_ROWS),
            _ => {}
        }
    }

    /// Match the raster to the terminal and tell the stage. Mounts the
    /// particle field the first time the surface has area.
    fn resize(&mut self, cols: u16, rows: u16) {
        self.raster.resize(cols, rows);
        let size = self.raster.size();
        debug!(cols, rows, "terminal resized");
        self.stage.resized(size);
        if self.animator.is_none() {
            self.animator = Animator::mount(&self.stage, size, self.field_options, &mut self.rng);
        }
    }

    /// Hand the form's entry to the background submitter.
    fn submit(&mut self) {
        let Some(entry) = self.form.begin_submit() else {
            return;
        };
        if !self.submitter.submit(entry) {
            self.form.finish_submit(Err(StoreError::Unavailable));
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
