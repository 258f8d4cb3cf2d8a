//! Tests for the threshold range parser

use vigil::{InvalidThreshold, Threshold};

fn threshold(spec: &str) -> Threshold {
    Threshold::parse(spec).unwrap()
}

mod parsing {
    use super::*;

    #[test]
    fn bare_number_spans_zero_to_n() {
        let t = threshold("10");
        assert_eq!(t.low(), 0.0);
        assert_eq!(t.high(), 10.0);
    }

    #[test]
    fn open_upper_bound() {
        let t = threshold("10:");
        assert_eq!(t.low(), 10.0);
        assert_eq!(t.high(), f64::INFINITY);
    }

    #[test]
    fn open_lower_bound() {
        let t = threshold("~:10");
        assert_eq!(t.low(), f64::NEG_INFINITY);
        assert_eq!(t.high(), 10.0);
    }

    #[test]
    fn closed_pair() {
        let t = threshold("10:20");
        assert_eq!(t.low(), 10.0);
        assert_eq!(t.high(), 20.0);
    }

    #[test]
    fn float_bounds() {
        let t = threshold("2.5:7.5");
        assert_eq!(t.low(), 2.5);
        assert_eq!(t.high(), 7.5);
    }

    #[test]
    fn negative_bounds() {
        let t = threshold("-10:-5");
        assert_eq!(t.low(), -10.0);
        assert_eq!(t.high(), -5.0);
    }

    #[test]
    fn bare_tilde_spans_zero_to_infinity() {
        let t = threshold("~");
        assert_eq!(t.low(), 0.0);
        assert_eq!(t.high(), f64::INFINITY);
    }

    #[test]
    fn tilde_both_sides_accepts_everything() {
        let t = threshold("~:~");
        assert!(t.contains(f64::MIN));
        assert!(t.contains(f64::MAX));
    }

    #[test]
    fn tilde_low_with_empty_high_accepts_everything() {
        let t = threshold("~:");
        assert!(t.contains(-1e300));
        assert!(t.contains(1e300));
    }

    #[test]
    fn empty_spec_spans_zero_to_infinity() {
        let t = threshold("");
        assert_eq!(t.low(), 0.0);
        assert_eq!(t.high(), f64::INFINITY);
    }

    #[test]
    fn parses_through_from_str() {
        let t: Threshold = "10:20".parse().unwrap();
        assert_eq!(t.low(), 10.0);
    }
}

mod containment {
    use super::*;

    #[test]
    fn inclusive_at_both_edges() {
        let t = threshold("10:20");
        assert!(t.contains(10.0));
        assert!(t.contains(20.0));
        assert!(!t.contains(9.999));
        assert!(!t.contains(20.001));
    }

    #[test]
    fn bare_number_alerts_below_zero() {
        let t = threshold("10");
        assert!(t.contains(0.0));
        assert!(t.contains(10.0));
        assert!(!t.contains(-0.1));
        assert!(!t.contains(10.5));
    }

    #[test]
    fn open_upper_bound_accepts_huge_values() {
        let t = threshold("10:");
        assert!(t.contains(1e300));
        assert!(!t.contains(9.0));
    }

    #[test]
    fn open_lower_bound_accepts_very_negative_values() {
        let t = threshold("~:10");
        assert!(t.contains(-1e300));
        assert!(!t.contains(10.5));
    }
}

mod rejection {
    use super::*;

    #[test]
    fn words_are_rejected() {
        let err = Threshold::parse("ten:twenty").unwrap_err();
        assert_eq!(
            err,
            InvalidThreshold::NotNumeric {
                spec: "ten:twenty".to_owned(),
                value: "ten".to_owned(),
            }
        );
    }

    #[test]
    fn error_names_the_offending_side() {
        let err = Threshold::parse("10:twenty").unwrap_err();
        assert!(err.to_string().contains("'twenty'"));
        assert!(err.to_string().contains("'10:twenty'"));
    }

    #[test]
    fn padded_integers_are_rejected() {
        assert!(Threshold::parse("007").is_err());
    }

    #[test]
    fn exponent_notation_is_rejected() {
        assert!(Threshold::parse("1e3").is_err());
    }

    #[test]
    fn explicit_plus_sign_is_rejected() {
        assert!(Threshold::parse("+5").is_err());
    }

    #[test]
    fn infinity_literals_are_rejected() {
        assert!(Threshold::parse("inf").is_err());
        assert!(Threshold::parse("NaN:10").is_err());
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let err = Threshold::parse("20:10").unwrap_err();
        assert_eq!(
            err,
            InvalidThreshold::Inverted {
                spec: "20:10".to_owned(),
            }
        );
    }

    #[test]
    fn second_colon_lands_in_the_upper_bound() {
        assert!(Threshold::parse("10:20:30").is_err());
    }
}

mod display {
    use super::*;

    #[test]
    fn closed_pair_round_trips() {
        assert_eq!(threshold("10:20").to_string(), "10:20");
    }

    #[test]
    fn open_upper_bound_keeps_trailing_colon() {
        assert_eq!(threshold("10:").to_string(), "10:");
    }

    #[test]
    fn open_lower_bound_keeps_tilde() {
        assert_eq!(threshold("~:10").to_string(), "~:10");
    }

    #[test]
    fn bare_number_renders_canonically() {
        assert_eq!(threshold("10").to_string(), "0:10");
    }

    #[test]
    fn float_bounds_render_as_written() {
        assert_eq!(threshold("2.5:7.5").to_string(), "2.5:7.5");
    }
}
