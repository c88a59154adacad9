use peeking_take_while::PeekableExt;
use thiserror::Error;

/// Recoverable defects in a trial result file.
///
/// Any of these fails the whole file: the aggregator logs it, skips the
/// file and keeps going.
#[derive(Debug, Error)]
pub enum TrialParseError {
    #[error("line {line}: cannot parse {token:?} as a float")]
    BadValue { line: usize, token: String },

    #[error("line {line}: vector has {actual} objectives, set has {expected}")]
    DimensionMismatch {
        line: usize,
        expected: usize,
        actual: usize,
    },
}

/// Split a trial result file into its solution sets.
///
/// Each line is one space-separated solution vector; a blank line closes
/// the current set. Vectors within a set must agree on dimensionality. A
/// final set without a trailing blank line still counts.
pub fn parse_trials(text: &str) -> Result<Vec<Vec<Vec<f64>>>, TrialParseError> {
    let mut lines = text.lines().enumerate().peekable();
    let mut sets = Vec::new();

    loop
    {
        lines
            .peeking_take_while(|(_, line)| line.trim().is_empty())
            .for_each(drop);

        let block: Vec<(usize, &str)> = lines
            .peeking_take_while(|(_, line)| !line.trim().is_empty())
            .collect();

        if block.is_empty()
        {
            break;
        }

        let mut set: Vec<Vec<f64>> = Vec::with_capacity(block.len());

        for (index, line) in block
        {
            let x = parse_vector(line, index + 1)?;

            if let Some(first) = set.first()
            {
                if x.len() != first.len()
                {
                    return Err(TrialParseError::DimensionMismatch {
                        line: index + 1,
                        expected: first.len(),
                        actual: x.len(),
                    });
                }
            }

            set.push(x);
        }

        sets.push(set);
    }

    Ok(sets)
}

fn parse_vector(line: &str, line_number: usize) -> Result<Vec<f64>, TrialParseError> {
    line.split_whitespace()
        .map(|token| {
            token.parse().map_err(|_| TrialParseError::BadValue {
                line: line_number,
                token: token.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_blank_lines()
    {
        let text = "0.1 0.2 0.3\n0.4 0.5 0.6\n\n0.7 0.8 0.9\n\n1.0 1.1 1.2\n";

        let sets = parse_trials(text).unwrap();

        assert_eq!(sets.len(), 3);
        assert_eq!(sets[0].len(), 2);
        assert_eq!(sets[1], vec![vec![0.7, 0.8, 0.9]]);
        assert_eq!(sets[2], vec![vec![1.0, 1.1, 1.2]]);
    }

    #[test]
    fn tolerates_repeated_separators_and_missing_final_newline()
    {
        let text = "\n\n1.0 2.0\n\n\n3.0 4.0";

        let sets = parse_trials(text).unwrap();

        assert_eq!(sets, vec![vec![vec![1.0, 2.0]], vec![vec![3.0, 4.0]]]);
    }

    #[test]
    fn empty_input_yields_no_sets()
    {
        assert!(parse_trials("").unwrap().is_empty());
        assert!(parse_trials("\n\n\n").unwrap().is_empty());
    }

    #[test]
    fn bad_token_is_reported_with_its_line()
    {
        let err = parse_trials("0.1 0.2\n0.3 oops\n").unwrap_err();

        match err
        {
            TrialParseError::BadValue { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "oops");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn ragged_set_is_rejected()
    {
        let err = parse_trials("0.1 0.2 0.3\n0.4 0.5\n").unwrap_err();

        match err
        {
            TrialParseError::DimensionMismatch { line, expected, actual } => {
                assert_eq!(line, 2);
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
