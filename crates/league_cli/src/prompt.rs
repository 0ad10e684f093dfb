//! Line-oriented prompts over any reader/writer pair.
//!
//! Every prompt returns `Ok(None)` once input runs out; callers treat that
//! as the user leaving and exit cleanly.

use league_core::models::{MAX_TEAMS, MIN_TEAMS};
use std::io::{self, BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// One trimmed line of input.
    pub fn line(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{} ", message)?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Ok(None);
        }
        Ok(Some(answer.trim().to_string()))
    }

    /// Numbered menu; returns the 0-based index of the chosen option.
    pub fn select<S: AsRef<str>>(&mut self, message: &str, options: &[S]) -> io::Result<Option<usize>> {
        loop {
            writeln!(self.output, "\n{}", message)?;
            for (i, option) in options.iter().enumerate() {
                writeln!(self.output, "  {}) {}", i + 1, option.as_ref())?;
            }
            let Some(answer) = self.line(">")? else {
                return Ok(None);
            };
            match answer.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(Some(n - 1)),
                _ => writeln!(self.output, "Please enter a number between 1 and {}", options.len())?,
            }
        }
    }

    /// Yes/no question; an empty answer takes `default`.
    pub fn confirm(&mut self, message: &str, default: bool) -> io::Result<Option<bool>> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        loop {
            let Some(answer) = self.line(&format!("{} {}", message, hint))? else {
                return Ok(None);
            };
            match answer.to_lowercase().as_str() {
                "" => return Ok(Some(default)),
                "y" | "yes" => return Ok(Some(true)),
                "n" | "no" => return Ok(Some(false)),
                _ => writeln!(self.output, "Please answer y or n")?,
            }
        }
    }

    /// Ask until the answer is a valid team list.
    pub fn team_names(&mut self) -> io::Result<Option<Vec<String>>> {
        let message = format!("Enter team names (comma-separated, {}-{} teams):", MIN_TEAMS, MAX_TEAMS);
        loop {
            let Some(answer) = self.line(&message)? else {
                return Ok(None);
            };
            match parse_team_names(&answer) {
                Ok(names) => return Ok(Some(names)),
                Err(problem) => writeln!(self.output, "{}", problem)?,
            }
        }
    }
}

/// Split a comma-separated team list. Names are trimmed and blank entries
/// dropped; the result must hold `MIN_TEAMS..=MAX_TEAMS` distinct names.
pub fn parse_team_names(input: &str) -> Result<Vec<String>, String> {
    let names: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(String::from)
        .collect();

    if !(MIN_TEAMS..=MAX_TEAMS).contains(&names.len()) {
        return Err(format!(
            "Please enter between {} and {} teams (got {})",
            MIN_TEAMS,
            MAX_TEAMS,
            names.len()
        ));
    }
    for (i, name) in names.iter().enumerate() {
        if names[..i].contains(name) {
            return Err(format!("Team '{}' was entered twice", name));
        }
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn written(p: &mut Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.output().clone()).unwrap()
    }

    #[test]
    fn test_parse_team_names_trims() {
        assert_eq!(parse_team_names(" Lions ,Tigers,  Bears").unwrap(), ["Lions", "Tigers", "Bears"]);
    }

    #[test]
    fn test_parse_team_names_bounds() {
        assert!(parse_team_names("Solo").is_err());
        assert!(parse_team_names("A, ,").is_err());
        assert!(parse_team_names("").is_err());
        let twenty: Vec<String> = (1..=20).map(|i| format!("T{}", i)).collect();
        assert_eq!(parse_team_names(&twenty.join(",")).unwrap().len(), 20);
        let too_many: Vec<String> = (1..=21).map(|i| format!("T{}", i)).collect();
        assert!(parse_team_names(&too_many.join(",")).is_err());
    }

    #[test]
    fn test_parse_team_names_rejects_duplicates() {
        let err = parse_team_names("A, B, A").unwrap_err();
        assert!(err.contains("'A'"));
    }

    #[test]
    fn test_team_names_reprompts() {
        let mut p = prompter("Solo\nA, B\n");
        assert_eq!(p.team_names().unwrap().unwrap(), ["A", "B"]);
        assert!(written(&mut p).contains("Please enter between 2 and 20 teams"));
    }

    #[test]
    fn test_select_reprompts_until_valid() {
        let mut p = prompter("0\nabc\n2\n");
        assert_eq!(p.select("Pick", &["one", "two"]).unwrap(), Some(1));
        assert_eq!(written(&mut p).matches("Please enter a number").count(), 2);
    }

    #[test]
    fn test_confirm_default_and_answers() {
        let mut p = prompter("\nno\nmaybe\nY\n");
        assert_eq!(p.confirm("Save?", true).unwrap(), Some(true));
        assert_eq!(p.confirm("Save?", true).unwrap(), Some(false));
        assert_eq!(p.confirm("Save?", false).unwrap(), Some(true));
    }

    #[test]
    fn test_end_of_input_is_none() {
        let mut p = prompter("");
        assert_eq!(p.line("?").unwrap(), None);
        assert_eq!(p.select("Pick", &["a"]).unwrap(), None);
        assert_eq!(p.confirm("Ok?", true).unwrap(), None);
        assert_eq!(p.team_names().unwrap(), None);
    }
}
