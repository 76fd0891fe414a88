use crate::config::{ConfigError, CursorConfig};
use crate::geometry::{Point, ShapeStyle};
use crate::interaction::{Interaction, Trigger};

pub const INNER_PRESS_FACTOR: f64 = 1.2;
pub const OUTER_PRESS_FACTOR: f64 = 1.4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeSizes {
    pub inner: f64,
    pub outer: f64,
}

impl ShapeSizes {
    /// Press scale overwrites the active scale, it does not multiply it.
    pub fn resolve(config: &CursorConfig, interaction: Interaction) -> Self {
        let mut sizes = Self {
            inner: config.inner_size,
            outer: config.outer_size,
        };

        if interaction.is_active() {
            sizes = Self {
                inner: config.inner_size * config.inner_scale,
                outer: config.outer_size * config.outer_scale,
            };
        }

        if interaction.is_pressing() {
            sizes = Self {
                inner: config.inner_size * config.inner_scale * INNER_PRESS_FACTOR,
                outer: config.outer_size * config.outer_scale * OUTER_PRESS_FACTOR,
            };
        }

        sizes
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Update {
    pub should_redraw: bool,
}

impl Update {
    pub fn new(should_redraw: bool) -> Self {
        Self { should_redraw }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn merge(self, other: Update) -> Self {
        Self::new(self.should_redraw || other.should_redraw)
    }
}

/// `target` is written only by `pointer_move`, `outer` only by `tick`.
#[derive(Debug)]
pub struct CursorEngine {
    config: CursorConfig,
    target: Point,
    outer: Point,
    interaction: Interaction,
    visible: bool,
    last_frame: Option<i64>,
}

impl CursorEngine {
    pub fn new(config: CursorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            target: Point::default(),
            outer: Point::default(),
            interaction: Interaction::Idle,
            visible: true,
            last_frame: None,
        })
    }

    pub fn config(&self) -> &CursorConfig {
        &self.config
    }

    pub fn pointer_move(&mut self, point: Point) -> Update {
        if !point.is_finite() {
            log::warn!("Ignoring non-finite pointer position {:?}", point);
            return Update::none();
        }
        let changed = self.target != point;
        self.target = point;
        Update::new(changed)
    }

    pub fn pointer_down(&mut self) -> Update {
        self.apply(Trigger::PointerDown)
    }

    pub fn pointer_up(&mut self) -> Update {
        self.apply(Trigger::PointerUp)
    }

    pub fn hover_in(&mut self) -> Update {
        self.apply(Trigger::HoverIn)
    }

    pub fn hover_out(&mut self) -> Update {
        self.apply(Trigger::HoverOut)
    }

    pub fn element_press(&mut self) -> Update {
        self.apply(Trigger::ElementPress)
    }

    pub fn element_release(&mut self) -> Update {
        self.apply(Trigger::ElementRelease)
    }

    pub fn element_click(&mut self) -> Update {
        self.apply(Trigger::ElementClick)
    }

    pub fn viewport_enter(&mut self) -> Update {
        self.set_visible(true)
    }

    pub fn viewport_leave(&mut self) -> Update {
        self.set_visible(false)
    }

    /// The first frame only records its timestamp.
    pub fn tick(&mut self, frame_time: i64) -> Update {
        let previous = self.last_frame.replace(frame_time);
        if previous.is_none() {
            return Update::none();
        }

        let next = self.outer.ease_toward(self.target, self.config.trailing_speed);
        if !next.is_finite() {
            log::warn!("Skipping frame with non-finite trail position {:?}", next);
            return Update::none();
        }

        let changed = next != self.outer;
        self.outer = next;
        Update::new(changed)
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn target(&self) -> Point {
        self.target
    }

    pub fn sizes(&self) -> ShapeSizes {
        ShapeSizes::resolve(&self.config, self.interaction)
    }

    pub fn opacity(&self) -> f64 {
        if self.visible { 1.0 } else { 0.0 }
    }

    pub fn inner(&self) -> ShapeStyle {
        ShapeStyle {
            center: self.target,
            diameter: self.sizes().inner,
            opacity: self.opacity(),
        }
    }

    pub fn outer(&self) -> ShapeStyle {
        ShapeStyle {
            center: self.outer,
            diameter: self.sizes().outer,
            opacity: self.opacity(),
        }
    }

    fn apply(&mut self, trigger: Trigger) -> Update {
        let next = self.interaction.on(trigger);
        if next == self.interaction {
            return Update::none();
        }
        log::trace!("Interaction {} --{}--> {}", self.interaction, trigger, next);
        let resized = self.sizes() != ShapeSizes::resolve(&self.config, next);
        self.interaction = next;
        Update::new(resized)
    }

    fn set_visible(&mut self, visible: bool) -> Update {
        let changed = self.visible != visible;
        self.visible = visible;
        Update::new(changed)
    }
}
