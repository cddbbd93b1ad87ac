use std::fmt::Display;

use prettylog_core::substitute;
use proptest::prelude::*;

proptest! {
    #[test]
    fn text_without_percent_is_unchanged(text in "[^%]*") {
        prop_assert_eq!(substitute(&text, &[]), text);
    }

    #[test]
    fn matching_verbs_render_every_argument(values in prop::collection::vec(any::<i64>(), 0..8)) {
        let format = vec!["%v"; values.len()].join(" ");
        let args: Vec<&dyn Display> = values.iter().map(|v| v as &dyn Display).collect();

        let expected = values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        prop_assert_eq!(substitute(&format, &args), expected);
    }

    #[test]
    fn surplus_verbs_are_marked_missing(missing in 1usize..6) {
        let format = "%v".repeat(missing);
        let rendered = substitute(&format, &[]);

        prop_assert_eq!(rendered.matches("%!v(MISSING)").count(), missing);
    }

    #[test]
    fn escaped_percent_never_consumes_arguments(text in "[a-z ]{0,20}") {
        let format = format!("{}%%", text);
        let rendered = substitute(&format, &[&1]);

        prop_assert_eq!(rendered, format!("{}%%!(EXTRA 1)", text));
    }
}
