//! Tests for interactive capture of word sizes and grid rows

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use wordfall::SolverError;
    use wordfall::io::prompt::{Prompter, SIZES_PROMPT};

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        let (_input, output) = prompter.into_inner();
        String::from_utf8_lossy(&output).into_owned()
    }

    #[test]
    fn test_word_sizes_reads_comma_list() {
        let mut p = prompter("4,5\n");
        let sizes = p.word_sizes();
        assert!(sizes.is_ok_and(|sizes| sizes.iter().collect::<Vec<_>>() == vec![4, 5]));
        assert_eq!(transcript(p), SIZES_PROMPT);
    }

    // Tests invalid sizes are reported and asked for again
    // Verified by returning the parse error directly
    #[test]
    fn test_word_sizes_reprompts_after_invalid_answer() {
        let mut p = prompter("four\n3,0\n2,2\n");
        let sizes = p.word_sizes();
        assert!(sizes.is_ok_and(|sizes| sizes.total_letters() == 4));

        let text = transcript(p);
        assert_eq!(text.matches(SIZES_PROMPT).count(), 3);
        assert!(text.contains("word sizes must be integers"));
        assert!(text.contains("word sizes must be positive"));
    }

    #[test]
    fn test_grid_rows_reprompts_on_length_mismatch() {
        let mut p = prompter("ab\nabc\ndefg\ndef\nghi\n");
        let rows = p.grid_rows(3);
        assert!(rows.is_ok_and(|rows| rows == vec!["abc", "def", "ghi"]));

        let text = transcript(p);
        assert_eq!(text.matches("Not enough letters - need 3 per row").count(), 2);
        assert_eq!(text.matches("Grid Row 1 > ").count(), 2);
        assert_eq!(text.matches("Grid Row 2 > ").count(), 2);
        assert_eq!(text.matches("Grid Row 3 > ").count(), 1);
    }

    #[test]
    fn test_grid_rows_keep_spaces_and_strip_crlf() {
        let mut p = prompter("a b\r\n   \r\n");
        let rows = p.grid_rows(3);
        assert!(rows.is_err(), "only two rows were supplied");

        let mut p = prompter("a b\r\n   \r\nxyz\r\n");
        let rows = p.grid_rows(3);
        assert!(rows.is_ok_and(|rows| rows == vec!["a b", "   ", "xyz"]));
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let mut p = prompter("");
        let result = p.word_sizes();
        assert!(matches!(
            result,
            Err(SolverError::InputClosed { ref prompt }) if prompt == SIZES_PROMPT
        ));

        let mut p = prompter("abc\n");
        let result = p.grid_rows(3);
        assert!(matches!(result, Err(SolverError::InputClosed { .. })));
    }
}
