//! Fire-and-forget playback of the widget's short sound clips.
//!
//! Elements are created lazily and kept in a thread-local cache so each clip
//! is fetched once per session. Playback failure (missing asset, blocked
//! autoplay) degrades silently with no user-visible error.

use crate::config::{CELEBRATION_VOLUME, CLICK_VOLUME, RESET_VOLUME};
use log::debug;
use std::cell::RefCell;
use std::collections::HashMap;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    Click,
    Reset,
    Celebration,
}

impl Sound {
    fn src(self) -> &'static str {
        match self {
            Sound::Click => "sounds/click.mp3",
            Sound::Reset => "sounds/reset.mp3",
            Sound::Celebration => "sounds/celebration.mp3",
        }
    }

    fn volume(self) -> f64 {
        match self {
            Sound::Click => CLICK_VOLUME,
            Sound::Reset => RESET_VOLUME,
            Sound::Celebration => CELEBRATION_VOLUME,
        }
    }
}

thread_local! {
    /// Audio elements created so far, keyed by clip.
    /// Thread-local to avoid synchronization overhead in WASM.
    static AUDIO_CACHE: RefCell<HashMap<Sound, HtmlAudioElement>> =
        RefCell::new(HashMap::new());
}

/// Play a clip from the start.
pub fn play(sound: Sound) {
    let element = AUDIO_CACHE.with(|cache| {
        let mut cache = cache.borrow_mut();
        if let Some(element) = cache.get(&sound) {
            return Some(element.clone());
        }
        match HtmlAudioElement::new_with_src(sound.src()) {
            Ok(element) => {
                element.set_volume(sound.volume());
                cache.insert(sound, element.clone());
                Some(element)
            }
            Err(_) => {
                debug!("could not create audio element for {:?}", sound);
                None
            }
        }
    });

    if let Some(element) = element {
        element.set_current_time(0.0);
        match element.play() {
            // play() resolves asynchronously; detach and ignore the outcome
            Ok(promise) => spawn_local(async move {
                let _ = JsFuture::from(promise).await;
            }),
            Err(_) => debug!("playback rejected for {:?}", sound),
        }
    }
}
