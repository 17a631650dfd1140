//! Property-based tests for formkit-validator.

use formkit_validator::prelude::*;
use proptest::prelude::*;

fn any_rules() -> impl Strategy<Value = RuleSet> {
    (0usize..8, 0usize..8, 0usize..8, any::<bool>(), any::<bool>()).prop_map(
        |(min, max, exact, alpha, email)| {
            let mut rules = RuleSet::new().has_length(min, max, exact);
            if alpha {
                rules = rules.is_alpha();
            }
            if email {
                rules = rules.is_email();
            }
            rules
        },
    )
}

// ============================================================================
// IDEMPOTENCY: validate(); validate() == validate()
// ============================================================================

proptest! {
    #[test]
    fn validate_idempotent(s in ".{0,12}", rules in any_rules()) {
        let mut v = FieldValidator::for_input("f", s, rules, Settings::default());
        let first = v.validate().unwrap().to_vec();
        let second = v.validate().unwrap().to_vec();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn at_most_one_entry_per_check(s in ".{0,12}", rules in any_rules()) {
        let mut v = FieldValidator::for_input("f", s, rules, Settings::new(Locale::Ru));
        v.validate().unwrap();
        v.validate().unwrap();
        let mut names: Vec<_> = v.errors().iter().map(|e| e.check_name.clone()).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        prop_assert_eq!(names.len(), total);
        prop_assert_eq!(v.is_valid(), total == 0);
    }
}

// ============================================================================
// LENGTH PRECEDENCE: below min only ever reports "too short"
// ============================================================================

proptest! {
    #[test]
    fn below_min_reports_too_short(min in 1usize..10, max in 0usize..10, exact in 0usize..10) {
        let value = "x".repeat(min - 1);
        let err = LengthBounds::new(min, max, exact).validate(&value).unwrap_err();
        prop_assert_eq!(err.reason, Reason::TooShort { min, actual: min - 1 });
    }

    #[test]
    fn alphabetic_matches_ascii_letters(s in ".{0,16}") {
        let expected = s.chars().all(|c| c.is_ascii_alphabetic());
        prop_assert_eq!(alphabetic().is_valid(&s), expected);
    }
}
