//! Declarative configuration for the particle-field backdrop.
//!
//! The structs mirror the legacy particles.js option schema and serialize to
//! the exact key names the external renderer expects (`value_area`,
//! `line_linked`, `move`, `rotateX`, ...), so the configuration crosses the
//! JS boundary unchanged.

use serde::Serialize;

/// Number of particles in the backdrop.
pub const PARTICLE_COUNT: u32 = 80;

#[derive(Debug, Clone, Serialize)]
pub struct ParticleOptions {
    pub particles: ParticleSettings,
    pub interactivity: Interactivity,
    pub retina_detect: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticleSettings {
    pub number: ParticleNumber,
    pub color: ParticleColor,
    pub shape: ParticleShape,
    pub opacity: ParticleOpacity,
    pub size: ParticleSize,
    pub line_linked: LineLinked,
    #[serde(rename = "move")]
    pub movement: ParticleMovement,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticleNumber {
    pub value: u32,
    pub density: ParticleDensity,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticleDensity {
    pub enable: bool,
    pub value_area: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticleColor {
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticleShape {
    #[serde(rename = "type")]
    pub kind: String,
    pub stroke: ShapeStroke,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShapeStroke {
    pub width: u32,
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticleOpacity {
    pub value: f64,
    pub random: bool,
    pub anim: OpacityAnimation,
}

#[derive(Debug, Clone, Serialize)]
pub struct OpacityAnimation {
    pub enable: bool,
    pub speed: f64,
    pub opacity_min: f64,
    pub sync: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticleSize {
    pub value: f64,
    pub random: bool,
    pub anim: SizeAnimation,
}

#[derive(Debug, Clone, Serialize)]
pub struct SizeAnimation {
    pub enable: bool,
    pub speed: f64,
    pub size_min: f64,
    pub sync: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LineLinked {
    pub enable: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticleMovement {
    pub enable: bool,
    pub speed: f64,
    pub direction: String,
    pub random: bool,
    pub straight: bool,
    pub out_mode: String,
    pub bounce: bool,
    pub attract: MovementAttract,
}

#[derive(Debug, Clone, Serialize)]
pub struct MovementAttract {
    pub enable: bool,
    #[serde(rename = "rotateX")]
    pub rotate_x: u32,
    #[serde(rename = "rotateY")]
    pub rotate_y: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Interactivity {
    pub detect_on: String,
    pub events: InteractivityEvents,
    pub modes: InteractivityModes,
}

#[derive(Debug, Clone, Serialize)]
pub struct InteractivityEvents {
    pub onhover: EventToggle,
    pub onclick: EventToggle,
    pub resize: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventToggle {
    pub enable: bool,
    pub mode: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InteractivityModes {
    pub repulse: RepulseMode,
    pub push: PushMode,
}

#[derive(Debug, Clone, Serialize)]
pub struct RepulseMode {
    pub distance: u32,
    pub duration: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PushMode {
    pub particles_nb: u32,
}

impl ParticleOptions {
    /// Backdrop configuration in the given display color: slowly drifting
    /// circles with animated size/opacity that repulse on hover and multiply
    /// on click.
    pub fn for_color(color: &str) -> Self {
        ParticleOptions {
            particles: ParticleSettings {
                number: ParticleNumber {
                    value: PARTICLE_COUNT,
                    density: ParticleDensity {
                        enable: true,
                        value_area: 800,
                    },
                },
                color: ParticleColor {
                    value: color.to_string(),
                },
                shape: ParticleShape {
                    kind: "circle".to_string(),
                    stroke: ShapeStroke {
                        width: 0,
                        color: "#000000".to_string(),
                    },
                },
                opacity: ParticleOpacity {
                    value: 0.5,
                    random: true,
                    anim: OpacityAnimation {
                        enable: true,
                        speed: 1.0,
                        opacity_min: 0.1,
                        sync: false,
                    },
                },
                size: ParticleSize {
                    value: 5.0,
                    random: true,
                    anim: SizeAnimation {
                        enable: true,
                        speed: 2.0,
                        size_min: 0.1,
                        sync: false,
                    },
                },
                line_linked: LineLinked { enable: false },
                movement: ParticleMovement {
                    enable: true,
                    speed: 3.0,
                    direction: "none".to_string(),
                    random: true,
                    straight: false,
                    out_mode: "out".to_string(),
                    bounce: false,
                    attract: MovementAttract {
                        enable: true,
                        rotate_x: 600,
                        rotate_y: 1200,
                    },
                },
            },
            interactivity: Interactivity {
                detect_on: "canvas".to_string(),
                events: InteractivityEvents {
                    onhover: EventToggle {
                        enable: true,
                        mode: "repulse".to_string(),
                    },
                    onclick: EventToggle {
                        enable: true,
                        mode: "push".to_string(),
                    },
                    resize: true,
                },
                modes: InteractivityModes {
                    repulse: RepulseMode {
                        distance: 100,
                        duration: 0.4,
                    },
                    push: PushMode { particles_nb: 4 },
                },
            },
            retina_detect: true,
        }
    }
}
