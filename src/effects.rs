//! JavaScript interop for the confetti and particle effect renderers.
//! Provides Rust bindings to the helpers defined in effects_helpers.js.

use log::debug;
use ultimate_counter::particles::ParticleOptions;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/effects_helpers.js")]
extern "C" {
    #[wasm_bindgen(js_name = confettiStart)]
    pub fn confetti_start(width: f64, height: f64, pieces: u32, gravity: f64);

    #[wasm_bindgen(js_name = confettiStop)]
    pub fn confetti_stop();

    #[wasm_bindgen(js_name = particlesStart)]
    fn particles_start_raw(options: JsValue);

    #[wasm_bindgen(js_name = particlesStop)]
    pub fn particles_stop();
}

/// Mount the particle backdrop in the given display color.
pub fn particles_start(color: &str) {
    match serde_wasm_bindgen::to_value(&ParticleOptions::for_color(color)) {
        Ok(options) => particles_start_raw(options),
        Err(err) => debug!("particle options failed to serialize: {err}"),
    }
}
