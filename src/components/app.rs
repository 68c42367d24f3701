use crate::components::{AudioController, PageSection, Particles, Slideshow};
use crate::decor::detect_mobile;
use crate::settings::load_settings;
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::components::page_effects::install_page_effects;
#[cfg(target_arch = "wasm32")]
use std::cell::Cell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

/// Viewport class sampled once at load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportClass {
    pub mobile: bool,
}

#[component]
pub fn PageShell() -> Element {
    let settings = use_hook(load_settings);
    let viewport = use_hook(|| ViewportClass {
        mobile: detect_mobile(settings.mobile_breakpoint),
    });
    use_context_provider(|| settings.clone());
    use_context_provider(|| viewport);

    #[cfg(target_arch = "wasm32")]
    {
        let installed = use_hook(|| Rc::new(Cell::new(false)));
        let settings = settings.clone();
        use_effect(move || {
            if installed.replace(true) {
                return;
            }
            install_page_effects(&settings);
        });
    }

    rsx! {
        document::Title { "{settings.title}" }
        Particles {}
        AudioController {}
        header { class: "hero",
            h1 { class: "title", "{settings.title}" }
        }
        Slideshow {}
        main { class: "content",
            for (index, section) in settings.sections.iter().enumerate() {
                PageSection { key: "{index}", section: section.clone() }
            }
        }
    }
}
