/// Decision-line parsing for the interactive loop.
///
/// A line is either 1-based swatch positions ("1 3 5", "2,4") or a
/// single-word command. Bad input comes back as a readable rejection so the
/// loop can re-prompt instead of guessing.

/// One accepted line of input.
#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    /// Picked swatch positions, 1-based, deduplicated, in input order.
    Pick(Vec<usize>),
    Pass,
    Save,
    Quit,
    Help,
}

/// Parse a decision line against the number of swatches on screen.
pub fn parse_decision(line: &str, batch_len: usize) -> Result<Decision, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err("Type swatch numbers to pick, or h for help.".to_string());
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "p" | "pass" => return Ok(Decision::Pass),
        "s" | "save" => return Ok(Decision::Save),
        "q" | "quit" => return Ok(Decision::Quit),
        "h" | "help" | "?" => return Ok(Decision::Help),
        _ => {}
    }

    let mut positions = Vec::new();
    for token in trimmed.split(|c: char| c.is_whitespace() || c == ',') {
        if token.is_empty() {
            continue;
        }
        let position: usize = token
            .parse()
            .map_err(|_| format!("\"{token}\" is not a swatch number or a command."))?;
        if position == 0 || position > batch_len {
            return Err(format!(
                "Swatch {position} is not on screen (valid: 1-{batch_len})."
            ));
        }
        if !positions.contains(&position) {
            positions.push(position);
        }
    }

    if positions.is_empty() {
        return Err("Type swatch numbers to pick, or h for help.".to_string());
    }
    Ok(Decision::Pick(positions))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_in_any_case() {
        assert_eq!(parse_decision("p", 5), Ok(Decision::Pass));
        assert_eq!(parse_decision("PASS", 5), Ok(Decision::Pass));
        assert_eq!(parse_decision(" s ", 5), Ok(Decision::Save));
        assert_eq!(parse_decision("Quit", 5), Ok(Decision::Quit));
        assert_eq!(parse_decision("q", 5), Ok(Decision::Quit));
        assert_eq!(parse_decision("?", 5), Ok(Decision::Help));
        assert_eq!(parse_decision("help", 5), Ok(Decision::Help));
    }

    #[test]
    fn test_single_and_multi_picks() {
        assert_eq!(parse_decision("3", 5), Ok(Decision::Pick(vec![3])));
        assert_eq!(parse_decision("1 3 5", 5), Ok(Decision::Pick(vec![1, 3, 5])));
        assert_eq!(parse_decision("2,4", 5), Ok(Decision::Pick(vec![2, 4])));
        assert_eq!(
            parse_decision(" 1, 2 ,3 ", 5),
            Ok(Decision::Pick(vec![1, 2, 3]))
        );
    }

    #[test]
    fn test_duplicates_collapse_in_input_order() {
        assert_eq!(
            parse_decision("3 1 3 3 1", 5),
            Ok(Decision::Pick(vec![3, 1]))
        );
    }

    #[test]
    fn test_positions_are_range_checked() {
        assert!(parse_decision("0", 5).is_err());
        assert!(parse_decision("6", 5).is_err());
        assert!(parse_decision("1 99", 5).is_err());
        assert_eq!(parse_decision("5", 5), Ok(Decision::Pick(vec![5])));
    }

    #[test]
    fn test_garbage_is_rejected_with_a_message() {
        let err = parse_decision("banana", 5).unwrap_err();
        assert!(err.contains("banana"));
        assert!(parse_decision("1 two 3", 5).is_err());
        assert!(parse_decision("-2", 5).is_err());
        assert!(parse_decision("1.5", 5).is_err());
    }

    #[test]
    fn test_blank_and_separator_only_lines_reprompt() {
        assert!(parse_decision("", 5).is_err());
        assert!(parse_decision("   ", 5).is_err());
        assert!(parse_decision(",", 5).is_err());
        assert!(parse_decision(" , , ", 5).is_err());
    }
}
