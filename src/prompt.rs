use crate::errors::{ CitadelError, InputError };
use crate::password::{ PasswordRequest, PasswordStyle };

use std::io::{ BufRead, Write };
use std::thread;
use std::time::Duration;

use tracing::{ debug, info };

pub const HEADER_BANNER: &str = "
┌──────────────────────────────────────────────────────────────┐
│                        Citadel-33                            │
│             Pattern-Based Password Generator                 │
│                                                              │
│      Description: Generates secure passwords using           │
│                   patterns, scopes, and randomized entropy.  │
└──────────────────────────────────────────────────────────────┘
";

const STYLE_MENU: &str = "
    Choose a password style:

    [1] Random
        ➤ Example: w3#9Tf8z@L

    [2] Pattern + Random
        ➤ Example: myPattern.-r@nd0m!

    [3] Pattern + Scope + Random
        ➤ Example: myPattern.-github.r@nd0m!
    ";

const PATTERN_PROMPT: &str = "Input your desired pattern: ";
const SCOPE_PROMPT: &str = "What is the scope? (e.g. git, insta, gmail): ";
const MIN_LENGTH_PROMPT: &str = "Choose a password length (>= 10 characters): ";
const LENGTH_PROMPT: &str = "Desired length for the random portion: ";

/// Line-oriented conversation with the user.
///
/// Generic over its streams so the whole dialogue can run against in-memory
/// buffers.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn show_banner(&mut self, delay: Duration) -> Result<(), CitadelError> {
        writeln!(self.output, "{}", HEADER_BANNER)?;
        self.output.flush()?;

        if !delay.is_zero() {
            thread::sleep(delay);
        }

        Ok(())
    }

    /// Asks for the style and, depending on it, the pattern and the scope.
    pub fn collect_style_info(&mut self) -> Result<(PasswordStyle, String, String), CitadelError> {
        let style = loop {
            writeln!(self.output, "{}", STYLE_MENU)?;
            let answer = self.ask("> ")?;

            match parse_style(&answer) {
                Ok(style) => break style,
                Err(e) => self.reject(&answer, e)?,
            }
        };
        info!(%style, "password style selected");

        let mut pattern = String::new();
        let mut scope = String::new();

        if style.uses_pattern() {
            pattern = self.ask(PATTERN_PROMPT)?;
            if style.uses_scope() {
                scope = self.ask(SCOPE_PROMPT)?;
            }
        }

        Ok((style, pattern, scope))
    }

    /// Asks for the random segment length until the answer suits `style`.
    pub fn collect_length(&mut self, style: PasswordStyle) -> Result<i64, CitadelError> {
        let question = match style.min_length() {
            Some(_) => MIN_LENGTH_PROMPT,
            None => LENGTH_PROMPT,
        };

        loop {
            let answer = self.ask(question)?;

            match parse_number(&answer).and_then(|n| style.check_length(n)) {
                Ok(length) => {
                    info!(length, "random length accepted");
                    return Ok(length);
                }
                Err(e) => self.reject(&answer, e)?,
            }
        }
    }

    pub fn collect_request(&mut self) -> Result<PasswordRequest, CitadelError> {
        let (style, pattern, scope) = self.collect_style_info()?;
        let length = self.collect_length(style)?;

        Ok(PasswordRequest { style, pattern, scope, length })
    }

    pub fn print_password(&mut self, password: &str) -> Result<(), CitadelError> {
        writeln!(self.output, "\nGenerated Password:\n{}", password)?;
        self.output.flush()?;

        Ok(())
    }

    fn ask(&mut self, question: &str) -> Result<String, CitadelError> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CitadelError::InputClosed);
        }

        Ok(line.trim().to_string())
    }

    fn reject(&mut self, answer: &str, error: InputError) -> Result<(), CitadelError> {
        debug!(answer, ?error, "answer rejected");
        writeln!(self.output, "{}", error)?;

        Ok(())
    }
}

fn parse_number(answer: &str) -> Result<i64, InputError> {
    answer
        .parse::<i64>()
        .map_err(|_| InputError::NotANumber(answer.to_string()))
}

fn parse_style(answer: &str) -> Result<PasswordStyle, InputError> {
    let selector = answer
        .parse::<i64>()
        .map_err(|_| InputError::StyleNotANumber(answer.to_string()))?;

    PasswordStyle::try_from(selector)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::generators::is_alphabet_char;

    use super::*;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_output()).unwrap()
    }

    #[test]
    fn non_numeric_style_is_retried() {
        let mut p = prompter("abc\n2\nmyPattern\n");
        let (style, pattern, scope) = p.collect_style_info().unwrap();

        assert_eq!(style, PasswordStyle::Pattern);
        assert_eq!(pattern, "myPattern");
        assert_eq!(scope, "");
        assert!(transcript(p).contains("Please enter a valid number (1, 2, or 3)."));
    }

    #[test]
    fn out_of_range_style_is_retried() {
        let mut p = prompter("4\n0\n1\n");
        let (style, pattern, scope) = p.collect_style_info().unwrap();

        assert_eq!(style, PasswordStyle::Random);
        assert!(pattern.is_empty() && scope.is_empty());
        assert_eq!(transcript(p).matches("Invalid option. Please choose 1, 2, or 3.").count(), 2);
    }

    #[test]
    fn scope_is_asked_only_for_style_three() {
        let mut p = prompter("3\n  myPattern  \ngithub\n");
        let (style, pattern, scope) = p.collect_style_info().unwrap();

        assert_eq!(style, PasswordStyle::PatternScope);
        assert_eq!(pattern, "myPattern");
        assert_eq!(scope, "github");

        let out = transcript(p);
        assert!(out.contains(PATTERN_PROMPT));
        assert!(out.contains(SCOPE_PROMPT));
    }

    #[test]
    fn empty_pattern_is_accepted() {
        let mut p = prompter("2\n\n");
        let (_, pattern, _) = p.collect_style_info().unwrap();

        assert_eq!(pattern, "");
    }

    #[test]
    fn random_style_enforces_minimum_length() {
        let mut p = prompter("1\n5\n12\n");
        let request = p.collect_request().unwrap();

        assert_eq!(request.length, 12);
        assert!(transcript(p).contains("Password must be at least 10 characters long."));

        let mut rng = StdRng::seed_from_u64(3);
        let password = request.generate(&mut rng);
        assert_eq!(password.len(), 12);
        assert!(password.chars().all(is_alphabet_char));
    }

    #[test]
    fn non_numeric_length_is_retried() {
        let mut p = prompter("ten\n10\n");
        let length = p.collect_length(PasswordStyle::Random).unwrap();

        assert_eq!(length, 10);
        assert!(transcript(p).contains("Please enter a valid number.\n"));
    }

    #[test]
    fn pattern_styles_accept_any_integer() {
        let mut p = prompter("0\n");
        assert_eq!(p.collect_length(PasswordStyle::Pattern).unwrap(), 0);

        let mut p = prompter("-5\n");
        assert_eq!(p.collect_length(PasswordStyle::PatternScope).unwrap(), -5);
    }

    #[test]
    fn full_pattern_scope_dialogue() {
        let mut p = prompter("3\nmyPattern\ngithub\n8\n");
        let request = p.collect_request().unwrap();

        let mut rng = rand::rng();
        let password = request.generate(&mut rng);
        assert!(password.starts_with("myPattern.-github."));
        assert!(password.ends_with('!'));
        assert_eq!(password.len(), "myPattern.-github.".len() + 8 + 1);
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut p = prompter("abc\n");
        let err = p.collect_style_info().unwrap_err();

        assert!(matches!(err, CitadelError::InputClosed));
    }

    #[test]
    fn closed_input_while_waiting_for_length() {
        let mut p = prompter("1\n3\n");
        let err = p.collect_request().unwrap_err();

        assert!(matches!(err, CitadelError::InputClosed));
    }

    #[test]
    fn banner_without_delay() {
        let mut p = prompter("");
        p.show_banner(Duration::ZERO).unwrap();

        assert!(transcript(p).contains("Pattern-Based Password Generator"));
    }

    #[test]
    fn password_is_printed_after_heading() {
        let mut p = prompter("");
        p.print_password("myPattern.-r@nd0m!").unwrap();

        assert_eq!(transcript(p), "\nGenerated Password:\nmyPattern.-r@nd0m!\n");
    }
}
