use crate::exceptions::ContribError;
use crate::flow::ConsentUi;
use crossterm::style::Stylize;
use std::io::{BufRead, IsTerminal, Write};

pub fn get_terminal_width() -> usize {
    static TERMINAL_WIDTH: std::sync::LazyLock<usize> = std::sync::LazyLock::new(|| {
        if let Ok(w) = std::env::var("OI_COLUMNS").map(|s| s.parse().unwrap_or(0))
            && w > 0
        {
            return w;
        }

        if let Ok(w) = std::env::var("COLUMNS").map(|s| s.parse().unwrap_or(0))
            && w > 0
        {
            return w;
        }

        if is_stdout_terminal()
            && let Ok((w, _)) = crossterm::terminal::size()
        {
            return w as usize;
        }

        80
    });

    *TERMINAL_WIDTH
}

pub fn is_stdout_terminal() -> bool {
    if std::env::var("OI_FORCE_TTY").is_ok() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn render_inline(line: &str, styled: bool) -> String {
    static LINK: std::sync::LazyLock<regex::Regex> =
        std::sync::LazyLock::new(|| regex::Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());
    static CODE: std::sync::LazyLock<regex::Regex> =
        std::sync::LazyLock::new(|| regex::Regex::new(r"`([^`]+)`").unwrap());

    let linked = LINK.replace_all(line, |caps: &regex::Captures| {
        if caps[1] == caps[2] {
            caps[1].to_string()
        } else {
            format!("{} ({})", &caps[1], &caps[2])
        }
    });

    CODE.replace_all(&linked, |caps: &regex::Captures| {
        if styled {
            caps[1].cyan().to_string()
        } else {
            caps[1].to_string()
        }
    })
    .to_string()
}

/// Renders the small markdown subset used by the contribution messages:
/// horizontal rules, block quotes, inline code and links.
pub fn render_markdown(text: &str, width: usize, styled: bool) -> String {
    let mut out = String::new();

    for line in text.trim_matches('\n').lines() {
        let trimmed = line.trim_end();
        if trimmed == "---" {
            let rule = "─".repeat(width);
            if styled {
                out.push_str(&rule.dim().to_string());
            } else {
                out.push_str(&rule);
            }
        } else if let Some(quote) = trimmed.strip_prefix("> ") {
            let body = render_inline(quote, styled);
            if styled {
                out.push_str(&format!("{} {}", "▌".dim(), body.bold()));
            } else {
                out.push_str(&format!("  {}", body));
            }
        } else {
            out.push_str(&render_inline(trimmed, styled));
        }
        out.push('\n');
    }

    out
}

/// [`ConsentUi`] over a line reader and a writer, normally stdin/stdout.
pub struct TerminalUi<R, W> {
    input: R,
    output: W,
    styled: bool,
    width: usize,
}

impl TerminalUi<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self {
            input: std::io::stdin().lock(),
            output: std::io::stdout(),
            styled: is_stdout_terminal(),
            width: get_terminal_width(),
        }
    }
}

impl<R: BufRead, W: Write> TerminalUi<R, W> {
    /// Unstyled terminal UI, used when output is not a TTY.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            styled: false,
            width: 80,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> ConsentUi for TerminalUi<R, W> {
    fn ask_yes_no(&mut self, question: &str) -> Result<bool, ContribError> {
        writeln!(self.output, "{}", question)?;
        write!(self.output, "{}", crate::consts::YES_NO_HINT)?;
        self.output.flush()?;

        // Raw bytes: an answer that is not valid UTF-8 is just a no.
        let mut answer = Vec::new();
        self.input.read_until(b'\n', &mut answer)?;
        Ok(is_affirmative(&answer))
    }

    fn show_message(&mut self, markdown: &str) -> Result<(), ContribError> {
        let rendered = render_markdown(markdown, self.width, self.styled);
        writeln!(self.output)?;
        write!(self.output, "{}", rendered)?;
        writeln!(self.output)?;
        self.output.flush()?;
        Ok(())
    }
}

/// Only a bare `y` (any case) counts as yes.
pub fn is_affirmative(answer: &[u8]) -> bool {
    let mut answer = answer;
    while let [rest @ .., b'\r' | b'\n'] = answer {
        answer = rest;
    }
    answer.eq_ignore_ascii_case(b"y")
}
