use crate::components::ViewportClass;
use crate::decor::scatter_particles;
use crate::settings::PageSettings;
use dioxus::prelude::*;

pub const PARTICLES_ID: &str = "particles";

/// Floating decoration, scattered once per page load.
#[component]
pub fn Particles() -> Element {
    let settings = use_context::<PageSettings>();
    let viewport = use_context::<ViewportClass>();
    let particles = use_hook(|| {
        let count = settings.particle_count(viewport.mobile);
        scatter_particles(&mut rand::thread_rng(), count)
    });

    rsx! {
        div { id: PARTICLES_ID, class: "particles",
            for (index, particle) in particles.iter().enumerate() {
                div { key: "{index}", class: "particle", style: particle.style() }
            }
        }
    }
}
