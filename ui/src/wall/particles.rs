use dioxus::prelude::*;
use rand::Rng;

/// Placement of one floating particle, drawn once per mount.
#[derive(Debug, Clone, PartialEq)]
struct ParticleSpec {
    left_pct: f64,
    top_pct: f64,
    size_px: f64,
    duration_s: f64,
    delay_s: f64,
}

impl ParticleSpec {
    fn random(rng: &mut impl Rng) -> Self {
        let size_px = rng.gen_range(2.0..6.0);
        Self {
            left_pct: rng.gen_range(0.0..100.0),
            top_pct: rng.gen_range(60.0..100.0),
            size_px,
            duration_s: rng.gen_range(6.0..14.0),
            delay_s: rng.gen_range(0.0..10.0),
        }
    }

    fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {size:.2}px; height: {size:.2}px; \
             animation-duration: {:.2}s; animation-delay: {:.2}s",
            self.left_pct,
            self.top_pct,
            self.duration_s,
            self.delay_s,
            size = self.size_px,
        )
    }
}

/// Decorative particles behind the wall.
#[component]
pub fn Particles(count: usize) -> Element {
    let specs = use_hook(move || {
        let mut rng = rand::thread_rng();
        (0..count)
            .map(|_| ParticleSpec::random(&mut rng))
            .collect::<Vec<_>>()
    });

    rsx! {
        div { id: "particles", class: "particles", aria_hidden: "true",
            for (index, spec) in specs.iter().enumerate() {
                div { key: "{index}", class: "particle", style: "{spec.style()}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn particles_stay_in_the_lower_band() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let spec = ParticleSpec::random(&mut rng);
            assert!((0.0..100.0).contains(&spec.left_pct));
            assert!((60.0..100.0).contains(&spec.top_pct));
            assert!((2.0..6.0).contains(&spec.size_px));
        }
    }

    #[test]
    fn style_sets_equal_width_and_height() {
        let spec = ParticleSpec {
            left_pct: 10.0,
            top_pct: 70.0,
            size_px: 3.0,
            duration_s: 8.0,
            delay_s: 1.5,
        };
        let style = spec.style();
        assert!(style.contains("width: 3.00px; height: 3.00px"));
        assert!(style.contains("animation-delay: 1.50s"));
    }
}
