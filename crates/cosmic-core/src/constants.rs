// Simulation tuning constants shared by particle, ripple, and system code.

// Per-tick physics
pub const ORBIT_ACCEL: f32 = 0.001; // magnitude of the ambient orbital drift
pub const VELOCITY_DAMPING: f32 = 0.999; // isotropic damping applied every tick
pub const ANGLE_VELOCITY_MAX: f32 = 0.01; // phase angle step drawn in [-max, max]

// Size pulse envelope: size = max_size * (BASE + SPAN * sin(age * RATE))
pub const SIZE_PULSE_RATE: f32 = 0.01; // period ~= 2*pi/0.01 ticks
pub const SIZE_PULSE_BASE: f32 = 0.8;
pub const SIZE_PULSE_SPAN: f32 = 0.2;

// Particle construction draws
pub const SATURATION_MIN: f32 = 70.0;
pub const SATURATION_SPAN: f32 = 30.0;
pub const LIGHTNESS_MIN: f32 = 50.0;
pub const LIGHTNESS_SPAN: f32 = 30.0;
pub const ALPHA_MIN: f32 = 0.6;
pub const ALPHA_SPAN: f32 = 0.4;
pub const SIZE_FACTOR_MIN: f32 = 0.5;
pub const SIZE_FACTOR_SPAN: f32 = 0.5;
pub const MAX_SIZE_FACTOR_MIN: f32 = 1.2;
pub const MAX_SIZE_FACTOR_SPAN: f32 = 0.8;
pub const MAX_AGE_MIN: f32 = 1000.0; // lifetimes in frame ticks
pub const MAX_AGE_SPAN: f32 = 2000.0;

// Pointer influence
pub const ATTRACT_RADIUS_FRACTION: f32 = 0.3; // inside this fraction of the radius the force flips attractive

// Ripples
pub const RIPPLE_MAX_RADIUS_MIN: f32 = 200.0;
pub const RIPPLE_MAX_RADIUS_SPAN: f32 = 100.0;
pub const RIPPLE_STRENGTH_MIN: f32 = 5.0;
pub const RIPPLE_STRENGTH_SPAN: f32 = 5.0;
pub const RIPPLE_MAX_AGE_MIN: f32 = 60.0;
pub const RIPPLE_MAX_AGE_SPAN: f32 = 30.0;
pub const RIPPLE_STRENGTH_DECAY: f32 = 0.98; // multiplicative per tick
pub const RIPPLE_SHELL_WIDTH: f32 = 20.0; // annulus thickness that receives force
pub const RIPPLE_LINE_WIDTH: f32 = 2.0;
pub const RIPPLE_ALPHA_SCALE: f32 = 0.5;

// Background
pub const BACKGROUND_HUE_STEP: f32 = 0.1; // degrees advanced per tick, wraps at 360

// Connections
pub const CONNECTION_ALPHA_SCALE: f32 = 0.3;
pub const CONNECTION_WIDTH_SCALE: f32 = 2.0;
pub const CONNECTION_SATURATION: f32 = 60.0;
pub const CONNECTION_LIGHTNESS: f32 = 60.0;

// Rendering
pub const GLOW_RADIUS_SCALE: f32 = 2.0; // glow radius relative to particle size

// Diagnostics overlay
pub const FPS_SAMPLE_FRAMES: u64 = 60; // recompute the smoothed fps every N frames
pub const FALLBACK_FRAME_MS: f64 = 16.0; // assumed delta when the clock reports none
