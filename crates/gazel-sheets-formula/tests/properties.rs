use gazel_sheets_core::{CellAddress, Sheet};
use gazel_sheets_formula::{evaluate, format_number, trim_blank};
use proptest::prelude::*;

fn column_sheet(values: &[i64]) -> Sheet {
    let mut sheet = Sheet::new("Sheet 1");
    for (row, value) in values.iter().enumerate() {
        sheet
            .set_cell_at(row as u32, 0, value.to_string())
            .expect("row within limits");
    }
    sheet
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        failure_persistence: None,
        .. ProptestConfig::default()
    })]

    #[test]
    fn non_formula_text_is_shown_unchanged(text in any::<String>()) {
        prop_assume!(!trim_blank(&text).starts_with('='));
        let sheet = Sheet::new("Sheet 1");
        prop_assert_eq!(evaluate(&text, &sheet), text);
    }

    #[test]
    fn evaluation_never_panics_and_is_repeatable(body in "[A-Za-z0-9:+*/(), .-]{0,24}") {
        let sheet = column_sheet(&[1, 2, 3]);
        let before = sheet.clone();
        let formula = format!("={body}");

        let first = evaluate(&formula, &sheet);
        let second = evaluate(&formula, &sheet);
        prop_assert_eq!(first, second);
        prop_assert_eq!(sheet, before);
    }

    #[test]
    fn integer_arithmetic_matches(a in -10_000i64..10_000, b in -10_000i64..10_000) {
        let sheet = Sheet::new("Sheet 1");
        prop_assert_eq!(evaluate(&format!("={a}+{b}"), &sheet), (a + b).to_string());
        prop_assert_eq!(evaluate(&format!("={a}-{b}"), &sheet), (a - b).to_string());
        prop_assert_eq!(evaluate(&format!("={a} * {b}"), &sheet), (a * b).to_string());
        prop_assert_eq!(evaluate(&format!("={a}/0"), &sheet), "#DIV/0");
    }

    #[test]
    fn references_read_like_literals(a in -1_000i64..1_000, b in 1i64..1_000) {
        let sheet = column_sheet(&[a, b]);
        let by_reference = evaluate("=A1/A2", &sheet);
        let by_literal = evaluate(&format!("={a}/{b}"), &sheet);
        prop_assert_eq!(&by_reference, &by_literal);
        prop_assert_eq!(by_reference, format_number(a as f64 / b as f64));
    }

    #[test]
    fn sum_matches_column_total(values in proptest::collection::vec(-1_000i64..1_000, 1..20)) {
        let sheet = column_sheet(&values);
        let formula = format!("=SUM(A1:A{})", values.len());
        prop_assert_eq!(evaluate(&formula, &sheet), values.iter().sum::<i64>().to_string());
    }

    #[test]
    fn range_corner_order_is_irrelevant(
        cells in proptest::collection::vec((0u32..6, 0u32..6, -100i64..100), 0..20),
        r1 in 1u32..7, c1 in 0u32..6, r2 in 1u32..7, c2 in 0u32..6,
    ) {
        let mut sheet = Sheet::new("Sheet 1");
        for (row, col, value) in &cells {
            sheet.set_cell_at(*row, *col, value.to_string()).expect("cell within limits");
        }

        let first = CellAddress::new(r1 - 1, c1).to_a1_string();
        let second = CellAddress::new(r2 - 1, c2).to_a1_string();
        let corner_a = CellAddress::new(r1 - 1, c2).to_a1_string();
        let corner_b = CellAddress::new(r2 - 1, c1).to_a1_string();

        for function in ["SUM", "AVG", "MIN", "MAX"] {
            let expected = evaluate(&format!("={function}({first}:{second})"), &sheet);
            prop_assert_eq!(&evaluate(&format!("={function}({second}:{first})"), &sheet), &expected);
            prop_assert_eq!(&evaluate(&format!("={function}({corner_a}:{corner_b})"), &sheet), &expected);
        }
    }
}
