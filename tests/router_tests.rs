use modelgen::router::{classify, Category, RULES};

#[cfg(test)]
mod router_tests {
    use super::*;

    #[test]
    fn test_robot_keywords_ignore_case() {
        assert_eq!(classify("A giant ROBOT"), Category::Robot);
        assert_eq!(classify("battle Mech with lasers"), Category::Robot);
    }

    #[test]
    fn test_earlier_rule_wins() {
        // "tiger" is checked before "castle"
        assert_eq!(classify("a tiger guarding a castle"), Category::Tiger);
        assert_eq!(classify("robot riding a rocket"), Category::Robot);
    }

    #[test]
    fn test_substring_matches_inside_words() {
        // "cat" inside "scatter", "ship" inside "friendship"
        assert_eq!(classify("scatter plot"), Category::Tiger);
        assert_eq!(classify("friendship"), Category::Spaceship);
        assert_eq!(classify("watchtower"), Category::Castle);
    }

    #[test]
    fn test_unknown_prompt_falls_back() {
        assert_eq!(classify("banana"), Category::Fallback);
        assert_eq!(classify(""), Category::Fallback);
        assert_eq!(classify("   "), Category::Fallback);
    }

    #[test]
    fn test_rules_cover_every_specific_category() {
        let covered: Vec<Category> = RULES.iter().map(|(category, _)| *category).collect();
        for category in Category::ALL {
            assert_eq!(covered.contains(&category), category != Category::Fallback);
        }
        assert!(Category::Fallback.keywords().is_empty());
    }
}
