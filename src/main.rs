//! Main module for the Ultimate Counter application using Yew.
//! Wires UI components, state hooks, and side-effect logic.

use gloo_timers::callback::Timeout;
use log::info;
use ultimate_counter::{
    counter_color, format_count, is_large_change, is_milestone, parse_step, Count, Mutation,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

mod audio;
mod components;
mod config;
mod effects;
mod hooks;

use audio::Sound;
use components::{render_history, ConfettiOverlay, ParticlesBackdrop};
use config::*;
use hooks::use_window_size;

// ──────────────────────────────────────────────────────────────────────────────
// Helper functions

/// Apply one completed mutation: record it in the history, update the count,
/// and play its clip.
fn apply_mutation(
    count: &UseStateHandle<Count>,
    history: &UseStateHandle<Vec<String>>,
    mutation: Mutation,
    sound: Sound,
) {
    let mut entries = (*history).to_vec();
    entries.push(mutation.to_string());
    count.set(mutation.new_count());
    history.set(entries);
    audio::play(sound);
}

// ──────────────────────────────────────────────────────────────────────────────

/// Primary application component: owns every piece of widget state and reacts
/// to count changes through the milestone watcher.
#[function_component(CounterWidget)]
fn counter_widget() -> Html {
    let count = use_state(Count::default);
    let step = use_state(|| DEFAULT_STEP);
    let history = use_state(Vec::<String>::new);
    let dark_mode = use_state(|| false);
    let is_bouncing = use_state(|| false);
    let show_confetti = use_state(|| false);
    let show_particles = use_state(|| false);
    // Pending auto-reset timers; replacing a handle cancels the previous one
    let bounce_timer = use_state(|| None::<Timeout>);
    let celebration_timer = use_state(|| None::<Timeout>);
    let window_size = use_window_size();
    // Count value the milestone watcher processed last
    let prev_count = use_mut_ref(Count::default);

    // --- User action callbacks ---
    let increment = {
        let count = count.clone();
        let step = step.clone();
        let history = history.clone();
        Callback::from(move |_: MouseEvent| {
            let mutation = Mutation::increment(*count, *step);
            apply_mutation(&count, &history, mutation, Sound::Click);
        })
    };

    let decrement = {
        let count = count.clone();
        let step = step.clone();
        let history = history.clone();
        Callback::from(move |_: MouseEvent| {
            let mutation = Mutation::decrement(*count, *step);
            apply_mutation(&count, &history, mutation, Sound::Click);
        })
    };

    let reset = {
        let count = count.clone();
        let history = history.clone();
        Callback::from(move |_: MouseEvent| {
            let mutation = Mutation::reset(*count);
            apply_mutation(&count, &history, mutation, Sound::Reset);
        })
    };

    let on_step_input = {
        let step = step.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            step.set(parse_step(&input.value()));
        })
    };

    let toggle_theme = {
        let dark_mode = dark_mode.clone();
        Callback::from(move |_: MouseEvent| dark_mode.set(!*dark_mode))
    };

    // Milestone watcher: runs after every count/history change, compares the
    // new count against the one it saw last, and drives the bounce pulse and
    // the celebration overlays.
    {
        let is_bouncing = is_bouncing.clone();
        let show_confetti = show_confetti.clone();
        let show_particles = show_particles.clone();
        let bounce_timer = bounce_timer.clone();
        let celebration_timer = celebration_timer.clone();
        let prev_count = prev_count.clone();
        use_effect_with((*count, history.len()), move |&(current, entry_count)| {
            if entry_count > 0 {
                let change = current - *prev_count.borrow();

                if is_large_change(change) {
                    is_bouncing.set(true);
                    let is_bouncing = is_bouncing.clone();
                    bounce_timer.set(Some(Timeout::new(BOUNCE_RESET_MS, move || {
                        is_bouncing.set(false);
                    })));
                }

                if is_milestone(current) {
                    info!("milestone reached: {}", format_count(current));
                    show_confetti.set(true);
                    show_particles.set(true);
                    audio::play(Sound::Celebration);
                    let show_confetti = show_confetti.clone();
                    let show_particles = show_particles.clone();
                    celebration_timer.set(Some(Timeout::new(CELEBRATION_RESET_MS, move || {
                        show_confetti.set(false);
                        show_particles.set(false);
                    })));
                }
            }
            *prev_count.borrow_mut() = current;
            || ()
        });
    }

    let color = counter_color(*count, *dark_mode);
    let stacked = window_size.width < STACKED_LAYOUT_MAX_WIDTH;

    html! {
        <div class={classes!("app-container", (*dark_mode).then_some("dark"))}>
            if *show_confetti {
                <ConfettiOverlay width={window_size.width} height={window_size.height} />
            }
            if *show_particles {
                <ParticlesBackdrop color={color} />
            }

            <div class="card">
                <div class="header">
                    <h1 class="title">{ "Ultimate Counter" }</h1>
                    <button class="theme-toggle" onclick={toggle_theme}>
                        { if *dark_mode { "☀️ Light" } else { "🌙 Dark" } }
                    </button>
                </div>

                // Counter display with bounce pulse
                <div class={classes!("counter", (*is_bouncing).then_some("bouncing"))}
                    style={format!("color: {};", color)}>
                    { format_count(*count) }
                </div>

                // Step control
                <div class="step-container">
                    <label class="step-label" for="step-input">{ "Step Value:" }</label>
                    <input type="number"
                        id="step-input"
                        class="step-input"
                        min="1"
                        value={step.to_string()}
                        oninput={on_step_input}
                    />
                </div>

                // Action buttons; the row stacks on narrow viewports
                <div class={classes!("button-group", stacked.then_some("stacked"))}>
                    <button class="action-button" onclick={decrement}>{ format!("-{}", *step) }</button>
                    <button class="action-button reset" onclick={reset}>{ "Reset" }</button>
                    <button class="action-button" onclick={increment}>{ format!("+{}", *step) }</button>
                </div>

                { render_history(&history) }
            </div>
        </div>
    }
}

/// Entry point: installs the panic hook and mounts the Yew renderer.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<CounterWidget>::new().render();
}
