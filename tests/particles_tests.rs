//! Tests for the particle-backdrop configuration: the serialized form must
//! use the legacy particles.js key names so the external renderer receives
//! it unchanged.

use ultimate_counter::particles::{ParticleOptions, PARTICLE_COUNT};

fn options_json(color: &str) -> serde_json::Value {
    serde_json::to_value(ParticleOptions::for_color(color)).expect("options serialize")
}

#[test]
fn backdrop_uses_the_requested_color() {
    let json = options_json("#4CAF50");
    assert_eq!(json["particles"]["color"]["value"], "#4CAF50");
}

#[test]
fn particle_count_and_density_match_the_renderer_defaults() {
    let json = options_json("#2196F3");
    assert_eq!(json["particles"]["number"]["value"], PARTICLE_COUNT);
    assert_eq!(json["particles"]["number"]["density"]["value_area"], 800);
}

#[test]
fn keyword_fields_serialize_under_their_legacy_names() {
    let json = options_json("#2196F3");
    // "move" and "type" are Rust keywords; the renderer still expects them
    assert_eq!(json["particles"]["move"]["out_mode"], "out");
    assert_eq!(json["particles"]["move"]["attract"]["rotateX"], 600);
    assert_eq!(json["particles"]["move"]["attract"]["rotateY"], 1200);
    assert_eq!(json["particles"]["shape"]["type"], "circle");
    assert_eq!(json["particles"]["line_linked"]["enable"], false);
}

#[test]
fn pointer_interaction_modes_are_repulse_and_push() {
    let json = options_json("#2196F3");
    assert_eq!(json["interactivity"]["detect_on"], "canvas");
    assert_eq!(json["interactivity"]["events"]["onhover"]["mode"], "repulse");
    assert_eq!(json["interactivity"]["events"]["onclick"]["mode"], "push");
    assert_eq!(json["interactivity"]["modes"]["repulse"]["distance"], 100);
    assert_eq!(json["interactivity"]["modes"]["push"]["particles_nb"], 4);
    assert_eq!(json["retina_detect"], true);
}

#[test]
fn opacity_and_size_animations_fade_toward_their_minimums() {
    let json = options_json("#2196F3");
    assert_eq!(json["particles"]["opacity"]["value"], 0.5);
    assert_eq!(json["particles"]["opacity"]["anim"]["opacity_min"], 0.1);
    assert_eq!(json["particles"]["size"]["value"], 5.0);
    assert_eq!(json["particles"]["size"]["anim"]["size_min"], 0.1);
}
