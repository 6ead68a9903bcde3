//! Engine configuration: the record the presentation layer builds and hands
//! to [`crate::ParticleSystem`].

/// Named hue range used to color newly created or reset particles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorTheme {
    Cosmic,
    Sunset,
    Aurora,
    Nebula,
    Galaxy,
}

impl ColorTheme {
    /// Parse a theme identifier. Unrecognized names fall back to the default
    /// theme rather than failing; a stalled animation is worse than a wrong
    /// palette.
    pub fn from_name(name: &str) -> Self {
        match name {
            "sunset" => Self::Sunset,
            "aurora" => Self::Aurora,
            "nebula" => Self::Nebula,
            "galaxy" => Self::Galaxy,
            _ => Self::Cosmic,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Cosmic => "cosmic",
            Self::Sunset => "sunset",
            Self::Aurora => "aurora",
            Self::Nebula => "nebula",
            Self::Galaxy => "galaxy",
        }
    }

    /// Hue range in degrees; particle hues are drawn uniformly within it.
    pub fn hue_range(self) -> (f32, f32) {
        match self {
            Self::Cosmic => (220.0, 280.0),  // blue to purple
            Self::Sunset => (10.0, 60.0),    // red to yellow
            Self::Aurora => (120.0, 200.0),  // green to cyan
            Self::Nebula => (280.0, 340.0),  // purple to magenta
            Self::Galaxy => (200.0, 260.0),  // blue to purple-blue
        }
    }
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self::Cosmic
    }
}

/// Immutable-within-a-frame engine configuration.
///
/// Range validation belongs to the collaborator UI; the engine accepts any
/// values and clamps negatives to zero (see [`ParticleConfig::sanitized`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleConfig {
    /// Target particle population.
    pub max_particles: usize,
    /// Distance threshold below which two particles draw a connector line, px.
    pub connection_distance: f32,
    /// Radius of the continuous pointer force field, px.
    pub pointer_influence_radius: f32,
    /// Strength of the pointer force (scaled by 1/d^2).
    pub pointer_influence_strength: f32,
    pub color_theme: ColorTheme,
    /// Base particle size, px; per-particle sizes are randomized around it.
    pub particle_size: f32,
    /// Base speed; initial velocity components are drawn in [-0.5, 0.5] * speed.
    pub speed: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            max_particles: 200,
            connection_distance: 100.0,
            pointer_influence_radius: 150.0,
            pointer_influence_strength: 1.0,
            color_theme: ColorTheme::Cosmic,
            particle_size: 2.0,
            speed: 0.5,
        }
    }
}

impl ParticleConfig {
    /// Clamp numeric fields to safe minimums. Config arrives pre-validated
    /// from the UI layer, but a negative threshold must degrade to "off"
    /// instead of propagating NaNs into the frame loop.
    pub fn sanitized(mut self) -> Self {
        self.connection_distance = self.connection_distance.max(0.0);
        self.pointer_influence_radius = self.pointer_influence_radius.max(0.0);
        self.pointer_influence_strength = self.pointer_influence_strength.max(0.0);
        self.particle_size = self.particle_size.max(0.0);
        self.speed = self.speed.max(0.0);
        self
    }

    /// Merge the provided fields of `update` into `self`.
    pub fn apply(&mut self, update: ConfigUpdate) {
        if let Some(v) = update.max_particles {
            self.max_particles = v;
        }
        if let Some(v) = update.connection_distance {
            self.connection_distance = v;
        }
        if let Some(v) = update.pointer_influence_radius {
            self.pointer_influence_radius = v;
        }
        if let Some(v) = update.pointer_influence_strength {
            self.pointer_influence_strength = v;
        }
        if let Some(v) = update.color_theme {
            self.color_theme = v;
        }
        if let Some(v) = update.particle_size {
            self.particle_size = v;
        }
        if let Some(v) = update.speed {
            self.speed = v;
        }
        *self = self.sanitized();
    }
}

/// Partial configuration: only the provided fields change on
/// [`crate::ParticleSystem::update_config`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ConfigUpdate {
    pub max_particles: Option<usize>,
    pub connection_distance: Option<f32>,
    pub pointer_influence_radius: Option<f32>,
    pub pointer_influence_strength: Option<f32>,
    pub color_theme: Option<ColorTheme>,
    pub particle_size: Option<f32>,
    pub speed: Option<f32>,
}
