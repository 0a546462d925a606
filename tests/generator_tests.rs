use modelgen::generators::{
    crenellations_per_tower, debris_count, generator_for, tower_count, DetailLevel, Jitter,
    MAX_DETAIL, MIN_DETAIL,
};
use modelgen::router::Category;

#[cfg(test)]
mod generator_tests {
    use super::*;

    const LEVELS: [f32; 6] = [0.25, 0.5, 1.0, 1.5, 2.5, 4.0];

    fn primitives(category: Category, detail: f32) -> usize {
        generator_for(category)
            .generate(DetailLevel::new(detail), "seed", &mut Jitter::none())
            .primitive_count()
    }

    #[test]
    fn test_fallback_meets_minimum_piece_count() {
        for detail in LEVELS {
            let model = generator_for(Category::Fallback).generate(
                DetailLevel::new(detail),
                "banana",
                &mut Jitter::none(),
            );
            let minimum = (28.0 + 18.0 * detail).ceil() as usize;
            assert!(model.primitive_count() >= minimum, "detail {}", detail);
            assert_eq!(model.root.children.len(), debris_count(DetailLevel::new(detail)));
        }
    }

    #[test]
    fn test_castle_towers_never_decrease() {
        let mut previous = 0;
        for detail in LEVELS {
            let level = DetailLevel::new(detail);
            let towers = tower_count(level);
            assert!(towers >= previous);
            assert!(towers >= 4);
            assert!(crenellations_per_tower(level) >= 6);
            previous = towers;
        }
    }

    #[test]
    fn test_primitive_count_monotonic_in_detail() {
        for category in Category::ALL {
            let mut previous = 0;
            for detail in LEVELS {
                let count = primitives(category, detail);
                assert!(count >= previous, "{} at detail {}", category, detail);
                previous = count;
            }
        }
    }

    #[test]
    fn test_out_of_range_detail_still_produces_geometry() {
        for category in Category::ALL {
            for detail in [-3.0, 0.0, f32::NAN, 100.0] {
                assert!(primitives(category, detail) > 0, "{} at {}", category, detail);
            }
        }
        assert_eq!(primitives(Category::Castle, -1.0), primitives(Category::Castle, MIN_DETAIL));
        assert_eq!(primitives(Category::Robot, 50.0), primitives(Category::Robot, MAX_DETAIL));
    }

    #[test]
    fn test_jitter_free_generation_is_deterministic() {
        for category in Category::ALL {
            let a = generator_for(category).generate(DetailLevel::default(), "x", &mut Jitter::none());
            let b = generator_for(category).generate(DetailLevel::default(), "x", &mut Jitter::none());
            assert_eq!(a.root, b.root, "{}", category);
        }
    }

    #[test]
    fn test_models_sit_near_origin() {
        for category in Category::ALL {
            let model = generator_for(category).generate(DetailLevel::default(), "x", &mut Jitter::none());
            let bounds = model.root.bounds();
            assert!(!bounds.is_empty());
            assert!(bounds.center().length() < 10.0, "{} centered at {:?}", category, bounds.center());
        }
    }

    #[test]
    fn test_generated_model_records_category() {
        for category in Category::ALL {
            let model = generator_for(category).generate(DetailLevel::new(2.0), "x", &mut Jitter::seeded(3));
            assert_eq!(model.category, category);
            assert_eq!(model.detail, DetailLevel::new(2.0));
            assert!(!model.root.is_fixture());
        }
    }
}
