use rand::rngs::StdRng;
use rand::SeedableRng;

use huespot_core::{place, ColorScheme, GradientDescriptor, SafeZone};

#[test]
fn generated_descriptors_are_well_formed() {
    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let (descriptor, colors) = GradientDescriptor::describe(None, &mut rng);

        assert!(descriptor.angle_degrees < 360);
        assert!((2..=4).contains(&colors.len()), "seed {seed}");
        assert_eq!(descriptor.stops, colors);

        // Stops share one saturation/lightness pair, so the hue
        // relationship is the only thing varying along the gradient.
        for stop in &colors[1..] {
            assert_eq!(stop.saturation, colors[0].saturation);
            assert_eq!(stop.lightness, colors[0].lightness);
        }

        let css = descriptor.css();
        assert!(css.starts_with(&format!("linear-gradient({}deg", descriptor.angle_degrees)));
        for stop in &colors {
            assert!(css.contains(&stop.css()), "seed {seed}: {css}");
        }
    }
}

#[test]
fn same_seed_reproduces_the_same_gradient() {
    let (a, _) = GradientDescriptor::describe(None, &mut StdRng::seed_from_u64(99));
    let (b, _) = GradientDescriptor::describe(None, &mut StdRng::seed_from_u64(99));
    assert_eq!(a, b);
}

#[test]
fn every_scheme_size_has_a_layout_placement() {
    let zone = SafeZone::from_viewport(1920, 1080);
    for scheme in ColorScheme::ALL {
        let total = scheme.stop_count();
        for index in 0..total {
            let position = place(index, total, &zone);
            assert!(
                zone.contains(position),
                "{} stop {index} landed outside the safe zone",
                scheme.label()
            );
        }
    }
}

#[test]
fn layout_placements_within_one_palette_are_distinct() {
    let zone = SafeZone::from_viewport(1280, 720);
    for total in [2usize, 3, 4] {
        for i in 0..total {
            for j in (i + 1)..total {
                assert_ne!(
                    place(i, total, &zone),
                    place(j, total, &zone),
                    "markers {i} and {j} of {total} collided"
                );
            }
        }
    }
}
