/// Case-insensitive occurrence count of `letter` in each present title.
/// Absent titles stay absent so the report can tell the two cases apart.
pub fn count_occurrences(titles: &[Option<String>], letter: char) -> Vec<Option<usize>> {
    let needle = letter.to_uppercase().to_string();

    titles
        .iter()
        .map(|title| {
            title
                .as_ref()
                .map(|text| text.to_uppercase().matches(needle.as_str()).count())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_case_insensitive() {
        let titles = vec![Some("Coca Cola".to_string())];
        assert_eq!(count_occurrences(&titles, 'c'), vec![Some(2)]);
    }

    #[test]
    fn uppercase_letter_counts_the_same() {
        let titles = vec![Some("Coca Cola".to_string())];
        assert_eq!(count_occurrences(&titles, 'C'), vec![Some(2)]);
    }

    #[test]
    fn absent_title_stays_absent() {
        let titles = vec![None];
        assert_eq!(count_occurrences(&titles, 'c'), vec![None]);
    }

    #[test]
    fn zero_matches_is_present_zero() {
        let titles = vec![Some("Example".to_string())];
        assert_eq!(count_occurrences(&titles, 'z'), vec![Some(0)]);
    }

    #[test]
    fn order_and_length_are_preserved() {
        let titles = vec![
            Some("acacia".to_string()),
            None,
            Some("ABBA".to_string()),
        ];
        assert_eq!(
            count_occurrences(&titles, 'a'),
            vec![Some(3), None, Some(2)]
        );
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(count_occurrences(&[], 'c'), Vec::<Option<usize>>::new());
    }
}
