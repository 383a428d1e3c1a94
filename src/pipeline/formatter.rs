use crate::error::AlignmentError;
use crate::labels::LabelItem;

/// Pair each translated fragment with its label's confidence, one line each:
/// `"95.50% de ser Gato"`.
///
/// Fails when the two sequences differ in length.
pub fn format_results(fragments: &[String], retained: &[LabelItem]) -> Result<String, AlignmentError> {
    if fragments.len() != retained.len() {
        return Err(AlignmentError {
            expected: retained.len(),
            actual: fragments.len(),
        });
    }

    let lines: Vec<String> = fragments
        .iter()
        .zip(retained)
        .map(|(fragment, item)| format!("{:.2}% de ser {}", item.confidence, fragment))
        .collect();

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragments(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_line() {
        let out = format_results(&fragments(&["Gato"]), &[LabelItem::new("Cat", 95.5)]).unwrap();
        assert_eq!(out, "95.50% de ser Gato");
    }

    #[test]
    fn test_always_two_decimals() {
        let retained = vec![
            LabelItem::new("Cat", 99.0),
            LabelItem::new("Pet", 91.236),
            LabelItem::new("Animal", 90.005),
        ];
        let out = format_results(&fragments(&["Gato", "Animal de estimação", "Animal"]), &retained)
            .unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "99.00% de ser Gato");
        assert_eq!(lines[1], "91.24% de ser Animal de estimação");
        for line in lines {
            let number = line.split('%').next().unwrap();
            let decimals = number.split('.').nth(1).unwrap();
            assert_eq!(decimals.len(), 2, "line {:?}", line);
        }
    }

    #[test]
    fn test_empty_inputs_give_empty_text() {
        assert_eq!(format_results(&[], &[]).unwrap(), "");
    }

    #[test]
    fn test_length_mismatch_fails() {
        let retained = vec![LabelItem::new("Cat", 95.0), LabelItem::new("Pet", 93.0)];
        let err = format_results(&fragments(&["Gato e Animal"]), &retained).unwrap_err();
        assert_eq!(err, AlignmentError { expected: 2, actual: 1 });

        let err = format_results(&fragments(&["a", "b", "c"]), &retained).unwrap_err();
        assert_eq!(err, AlignmentError { expected: 2, actual: 3 });
    }
}
