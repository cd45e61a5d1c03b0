//! Tests for argument parsing and full solve sessions

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use clap::Parser;
    use tempfile::NamedTempFile;
    use wordfall::SolverError;
    use wordfall::analysis::sizes::WordSizes;
    use wordfall::io::cli::{Cli, SolveSession};
    use wordfall::io::configuration::DEFAULT_DICTIONARY_PATH;

    fn word_file(contents: &str) -> NamedTempFile {
        let Ok(mut file) = NamedTempFile::new() else {
            unreachable!("temporary file should be creatable");
        };
        assert!(file.write_all(contents.as_bytes()).is_ok());
        assert!(file.flush().is_ok());
        file
    }

    fn cli(args: &[&str]) -> Cli {
        match Cli::try_parse_from(args) {
            Ok(cli) => cli,
            Err(err) => unreachable!("arguments should parse: {err}"),
        }
    }

    fn run(cli: Cli, input: &str) -> (wordfall::Result<()>, String) {
        let mut output = Vec::new();
        let result = SolveSession::new(cli, Cursor::new(input.as_bytes()), &mut output).run();
        (result, String::from_utf8_lossy(&output).into_owned())
    }

    #[test]
    fn test_defaults() {
        let parsed = cli(&["wordfall"]);
        assert!(parsed.rows.is_empty());
        assert!(parsed.sizes.is_none());
        assert_eq!(parsed.dictionary.to_str(), Some(DEFAULT_DICTIONARY_PATH));
        assert_eq!(parsed.limit, None);
        assert!(parsed.should_show_progress());
    }

    #[test]
    fn test_parses_sizes_rows_and_flags() {
        let parsed = cli(&[
            "wordfall", "-s", "4,5", "-d", "/tmp/words", "-l", "10", "-q", "cat", "oxo", "gyo",
        ]);
        assert_eq!(parsed.sizes, WordSizes::new(&[4, 5]).ok());
        assert_eq!(parsed.rows, vec!["cat", "oxo", "gyo"]);
        assert_eq!(parsed.dictionary.to_str(), Some("/tmp/words"));
        assert_eq!(parsed.limit, Some(10));
        assert!(!parsed.should_show_progress());
    }

    // Tests sizes given as an argument accept the same text as the prompt
    // Verified by parsing with a plain usize delimiter
    #[test]
    fn test_sizes_argument_matches_prompt_parsing() {
        for text in ["3, 3", " 3,3 ", "3,,3"] {
            let parsed = cli(&["wordfall", "-s", text]);
            assert_eq!(parsed.sizes, WordSizes::parse(text).ok(), "{text:?}");
            assert_eq!(parsed.sizes, WordSizes::new(&[3, 3]).ok(), "{text:?}");
        }

        for text in ["0,3", "three", "-2", ""] {
            assert!(Cli::try_parse_from(["wordfall", "-s", text]).is_err(), "{text:?}");
        }
    }

    #[test]
    fn test_session_from_arguments_prints_sorted_solutions() {
        let words = word_file("ab\nac\nbd\nAB's\nabcd\n");
        let path = words.path().to_string_lossy().into_owned();
        let args = cli(&["wordfall", "-q", "-s", "2,2", "-d", &path, "ab", "cd"]);

        let (result, text) = run(args, "");
        assert!(result.is_ok());
        assert!(text.contains("*  The Grid     *"));
        assert!(text.contains("AB\nCD\n"));
        assert!(text.ends_with("Found Solutions (in order) : \nac,bd\nbd,ac\n"));
    }

    // Tests prompts are used when rows and sizes are omitted
    // Verified by ignoring the prompted rows
    #[test]
    fn test_session_prompts_for_missing_input() {
        let words = word_file("ab\nbc\n");
        let path = words.path().to_string_lossy().into_owned();
        let args = cli(&["wordfall", "-q", "-d", &path]);

        let (result, text) = run(args, "2,2\nab\nbc\n");
        assert!(result.is_ok());
        assert!(text.starts_with("Word sizes > Grid Row 1 > Grid Row 2 > "));
        assert!(text.ends_with("Found Solutions (in order) : \nab,bc\nbc,ab\n"));
    }

    #[test]
    fn test_session_limit_caps_raw_solutions() {
        let words = word_file("ab\nbc\n");
        let path = words.path().to_string_lossy().into_owned();
        let args = cli(&["wordfall", "-q", "-l", "1", "-s", "2,2", "-d", &path, "ab", "bc"]);

        let (result, text) = run(args, "");
        assert!(result.is_ok());
        assert!(text.ends_with("Found Solutions (in order) : \nab,bc\n"));
    }

    #[test]
    fn test_session_reports_no_solutions() {
        let words = word_file("zz\n");
        let path = words.path().to_string_lossy().into_owned();
        let args = cli(&["wordfall", "-q", "-s", "2,2", "-d", &path, "ab", "cd"]);

        let (result, text) = run(args, "");
        assert!(result.is_ok());
        assert!(text.ends_with("No Solutions Found\n"));
    }

    #[test]
    fn test_session_rejects_non_square_letter_total() {
        let args = cli(&["wordfall", "-q", "-s", "3,3", "abc", "def", "ghi"]);
        let (result, _text) = run(args, "");
        assert!(result.is_err_and(|err| err.is_invalid_argument()));
    }

    #[test]
    fn test_session_rejects_mismatched_argument_rows() {
        let args = cli(&["wordfall", "-q", "-s", "2,2", "abc", "d"]);
        let (result, _text) = run(args, "");
        assert!(matches!(
            result,
            Err(SolverError::InvalidParameter {
                parameter: "rows",
                ..
            })
        ));

        let args = cli(&["wordfall", "-q", "-s", "2,2", "ab"]);
        let (result, _text) = run(args, "");
        assert!(matches!(
            result,
            Err(SolverError::InvalidParameter {
                parameter: "rows",
                ..
            })
        ));
    }

    #[test]
    fn test_session_reports_missing_dictionary() {
        let args = cli(&[
            "wordfall",
            "-q",
            "-s",
            "2,2",
            "-d",
            "/definitely/not/a/word/list",
            "ab",
            "cd",
        ]);
        let (result, _text) = run(args, "");
        assert!(matches!(result, Err(SolverError::FileSystem { .. })));
    }
}
