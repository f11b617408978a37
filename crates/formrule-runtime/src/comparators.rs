//! Comparator execution
//!
//! Every comparator holds if the field satisfies it against *any* of the
//! acceptable values. For grouped fields the checked elements are scanned
//! one by one.

use crate::extractor::{checked_values, FieldValue};
use crate::numeric::{numbers_equal, parse_decimal};
use crate::options::EvaluationOptions;
use formrule_core::form::{Field, InputKind};
use formrule_core::Comparator;

/// Execute a comparator against an extracted field value
pub fn compare(
    comparator: Comparator,
    field: &Field,
    extracted: &FieldValue,
    acceptable: &[String],
    options: &EvaluationOptions,
) -> bool {
    match comparator {
        Comparator::Eq => equals(field, extracted, acceptable, options),
        Comparator::Ne => not_equals(field, extracted, acceptable, options),
        Comparator::Lt => ordered(field, extracted, acceptable, options, |l, r| l < r),
        Comparator::Gt => ordered(field, extracted, acceptable, options, |l, r| l > r),
        Comparator::Le => ordered(field, extracted, acceptable, options, |l, r| l <= r),
        Comparator::Ge => ordered(field, extracted, acceptable, options, |l, r| l >= r),
        Comparator::Null => is_null(field, extracted, options),
        Comparator::NotNull => !is_null(field, extracted, options),
    }
}

/// `==`: case-insensitive, with numeric fallback for ungrouped fields
fn equals(
    field: &Field,
    extracted: &FieldValue,
    acceptable: &[String],
    options: &EvaluationOptions,
) -> bool {
    let field_value = extracted.value.to_lowercase();
    let digit_group = options.digit_group_symbol.as_deref();

    acceptable.iter().any(|acceptable_value| {
        let acceptable_value = acceptable_value.to_lowercase();
        if extracted.is_grouped() {
            checked_values(field, options).any(|v| v.to_lowercase() == acceptable_value)
        } else {
            field_value == acceptable_value
                || numbers_equal(&field_value, &acceptable_value, digit_group)
        }
    })
}

/// `!=`: holds as soon as one checked value differs from one acceptable
/// value. For groups this is not the complement of `==`.
fn not_equals(
    field: &Field,
    extracted: &FieldValue,
    acceptable: &[String],
    options: &EvaluationOptions,
) -> bool {
    let field_value = extracted.value.to_lowercase();

    acceptable.iter().any(|acceptable_value| {
        let acceptable_value = acceptable_value.to_lowercase();
        if extracted.is_grouped() {
            checked_values(field, options).any(|v| v.to_lowercase() != acceptable_value)
        } else {
            field_value != acceptable_value
        }
    })
}

/// `<`, `>`, `<=`, `>=`: both sides must be plain decimals
fn ordered(
    field: &Field,
    extracted: &FieldValue,
    acceptable: &[String],
    options: &EvaluationOptions,
    holds: fn(f64, f64) -> bool,
) -> bool {
    let check = |value: &str, acceptable_value: f64| {
        parse_decimal(value).map_or(false, |v| holds(v, acceptable_value))
    };

    acceptable.iter().any(|acceptable_value| {
        let Some(acceptable_value) = parse_decimal(acceptable_value) else {
            return false;
        };
        if extracted.is_grouped() {
            checked_values(field, options).any(|v| check(v, acceptable_value))
        } else {
            check(&extracted.value, acceptable_value)
        }
    })
}

/// `null`: empty value, placeholder selection, or no checked element
fn is_null(field: &Field, extracted: &FieldValue, options: &EvaluationOptions) -> bool {
    let is_select = field
        .as_single()
        .map_or(false, |element| element.kind == InputKind::SelectOne);
    let value = extracted.value.trim().to_lowercase();

    if !extracted.is_grouped() && value.is_empty() {
        return true;
    }
    if is_select && value == options.select_placeholder.trim().to_lowercase() {
        return true;
    }
    if extracted.is_grouped() && !is_select {
        return checked_values(field, options).next().is_none();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::extract;
    use crate::options::DisplayMode;
    use formrule_core::form::{Element, FieldGroup};

    fn values(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn run(comparator: Comparator, field: &Field, acceptable: &[&str]) -> bool {
        let options = EvaluationOptions::default();
        let extracted = extract(field, &options);
        compare(comparator, field, &extracted, &values(acceptable), &options)
    }

    fn text(value: &str) -> Field {
        Field::Single(Element::text("fld", value))
    }

    fn checkboxes(checked: &[(&str, bool)]) -> Field {
        Field::Group(FieldGroup::new(
            "fld",
            checked
                .iter()
                .map(|(value, on)| Element::checkbox("fld", value.to_lowercase(), *value, *on))
                .collect(),
        ))
    }

    #[test]
    fn test_equals_is_case_insensitive() {
        assert!(run(Comparator::Eq, &text("Hello"), &["hello"]));
        assert!(run(Comparator::Eq, &text("x"), &["a", "X"]));
        assert!(!run(Comparator::Eq, &text("x"), &["y"]));
    }

    #[test]
    fn test_equals_empty_matches_empty() {
        assert!(run(Comparator::Eq, &text(""), &[""]));
        assert!(!run(Comparator::Eq, &text(""), &["0"]));
    }

    #[test]
    fn test_equals_numeric_fallback() {
        assert!(run(Comparator::Eq, &text("5.0"), &["5"]));
        assert!(run(Comparator::Eq, &text("1,250"), &["1250"]));
        assert!(!run(Comparator::Eq, &text("5.1"), &["5"]));
    }

    #[test]
    fn test_equals_with_no_acceptable_values() {
        assert!(!run(Comparator::Eq, &text(""), &[]));
        assert!(!run(Comparator::Ne, &text("x"), &[]));
    }

    #[test]
    fn test_equals_on_group_scans_checked_elements() {
        let field = checkboxes(&[("A", false), ("X", true)]);
        assert!(run(Comparator::Eq, &field, &["x"]));
        assert!(!run(Comparator::Eq, &field, &["a"]));
    }

    #[test]
    fn test_equals_on_group_uses_id_in_text_mode() {
        let field = Field::Group(FieldGroup::new(
            "fld",
            vec![Element::radio("fld", "Yes_Option", "1", true)],
        ));
        let options = EvaluationOptions::default().with_display_mode(DisplayMode::Text);
        let extracted = extract(&field, &options);
        assert!(compare(Comparator::Eq, &field, &extracted, &values(&["yes_option"]), &options));
        assert!(!compare(Comparator::Eq, &field, &extracted, &values(&["1"]), &options));
    }

    #[test]
    fn test_not_equals_ungrouped() {
        assert!(run(Comparator::Ne, &text("a"), &["b"]));
        assert!(!run(Comparator::Ne, &text("A"), &["a"]));
        // holds if the value differs from any acceptable value
        assert!(run(Comparator::Ne, &text("a"), &["a", "b"]));
    }

    #[test]
    fn test_not_equals_is_not_complement_on_groups() {
        let field = checkboxes(&[("X", true), ("Y", true)]);
        assert!(run(Comparator::Eq, &field, &["x"]));
        assert!(run(Comparator::Ne, &field, &["x"]));

        let nothing_checked = checkboxes(&[("X", false)]);
        assert!(!run(Comparator::Eq, &nothing_checked, &["x"]));
        assert!(!run(Comparator::Ne, &nothing_checked, &["x"]));
    }

    #[test]
    fn test_ordering_comparators() {
        assert!(run(Comparator::Gt, &text("10"), &["5"]));
        assert!(!run(Comparator::Gt, &text("5"), &["5"]));
        assert!(run(Comparator::Ge, &text("5"), &["5"]));
        assert!(run(Comparator::Lt, &text("-1.5"), &["0"]));
        assert!(run(Comparator::Le, &text("0"), &["0"]));
        assert!(run(Comparator::Gt, &text("3"), &["10", "2"]));
    }

    #[test]
    fn test_ordering_never_matches_non_numeric() {
        assert!(!run(Comparator::Gt, &text("abc"), &["1"]));
        assert!(!run(Comparator::Lt, &text("1"), &["abc"]));
        assert!(!run(Comparator::Ge, &text(""), &["0"]));
        assert!(!run(Comparator::Le, &text("1,000"), &["2000"]));
    }

    #[test]
    fn test_ordering_on_group() {
        let field = checkboxes(&[("3", true), ("20", false)]);
        assert!(run(Comparator::Lt, &field, &["5"]));
        assert!(!run(Comparator::Gt, &field, &["5"]));
    }

    #[test]
    fn test_null_on_text() {
        assert!(run(Comparator::Null, &text(""), &[]));
        assert!(run(Comparator::Null, &text("   "), &[]));
        assert!(!run(Comparator::Null, &text("x"), &[]));
    }

    #[test]
    fn test_null_on_select_placeholder() {
        let mut select = Element::select(
            "fld",
            [("Select an Option", "placeholder"), ("Yes", "Y")],
            Some(0),
        );
        let options = EvaluationOptions::default().with_display_mode(DisplayMode::Text);

        let field = Field::Single(select.clone());
        let extracted = extract(&field, &options);
        assert!(compare(Comparator::Null, &field, &extracted, &[], &options));

        select.selected = Some(1);
        let field = Field::Single(select);
        let extracted = extract(&field, &options);
        assert!(!compare(Comparator::Null, &field, &extracted, &[], &options));
    }

    #[test]
    fn test_null_on_group() {
        assert!(run(Comparator::Null, &checkboxes(&[("A", false), ("B", false)]), &[]));
        assert!(!run(Comparator::Null, &checkboxes(&[("A", false), ("B", true)]), &[]));
    }

    #[test]
    fn test_not_null_is_negation_of_null() {
        let fields = vec![
            text(""),
            text("x"),
            checkboxes(&[("A", false)]),
            checkboxes(&[("A", true)]),
            Field::Single(Element::select("fld", [("Select an option", "")], Some(0))),
            Field::Single(Element::checkbox("fld", "c", "C", false)),
            Field::Group(FieldGroup::new("fld", vec![])),
        ];
        for field in &fields {
            assert_eq!(
                run(Comparator::NotNull, field, &[]),
                !run(Comparator::Null, field, &[]),
                "field: {:?}",
                field
            );
        }
    }
}
