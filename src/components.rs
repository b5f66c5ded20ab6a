//! Stateless view pieces for the counter UI.
//!
//! The effect overlays are optional child components: mounting one starts
//! the external renderer and unmounting tears it down, so their visibility
//! is purely a function of the celebration flags in the widget state.

use crate::config::{CONFETTI_GRAVITY, CONFETTI_PIECES};
use crate::effects;
use yew::prelude::*;

/// Renders the history panel, most recent entry first.
pub fn render_history(entries: &[String]) -> Html {
    html! {
        <div class="history-container">
            <h3 class="history-title">{ "History" }</h3>
            if entries.is_empty() {
                <p class="history-empty">{ "No changes yet." }</p>
            } else {
                <ul class="history-list">
                    { entries.iter().rev().map(|entry| {
                        html! { <li class="history-item">{ entry.clone() }</li> }
                    }).collect::<Html>() }
                </ul>
            }
        </div>
    }
}

/// One-shot confetti burst covering the viewport.
#[derive(Properties, PartialEq)]
pub struct ConfettiOverlayProps {
    pub width: f64,
    pub height: f64,
}

#[function_component(ConfettiOverlay)]
pub fn confetti_overlay(props: &ConfettiOverlayProps) -> Html {
    use_effect_with((props.width, props.height), |&(width, height)| {
        effects::confetti_start(width, height, CONFETTI_PIECES, CONFETTI_GRAVITY);
        || effects::confetti_stop()
    });

    html! { <div id="confetti-overlay" class="effect-overlay"></div> }
}

/// Continuous animated particle backdrop in the current display color.
#[derive(Properties, PartialEq)]
pub struct ParticlesBackdropProps {
    pub color: AttrValue,
}

#[function_component(ParticlesBackdrop)]
pub fn particles_backdrop(props: &ParticlesBackdropProps) -> Html {
    use_effect_with(props.color.clone(), |color| {
        effects::particles_start(color);
        || effects::particles_stop()
    });

    html! { <div id="particles-backdrop" class="effect-overlay"></div> }
}
