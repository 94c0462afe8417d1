//! Terminal front end.
//!
//! Materialises a [`ViewTree`] as plain lines, numbering every clickable
//! control so the user can "click" it by typing its number.

use std::io::Write;

use globus_net::CountrySource;
use globus_store::KeyValueStore;
use owo_colors::OwoColorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

use crate::app::App;
use crate::events::{Action, ViewSink};
use crate::view::{Element, Node, ViewTree};

// ---------------------------------------------------------------------------
// Materialisation
// ---------------------------------------------------------------------------

/// Text rendering of a view plus the actions its numbered controls trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub lines: Vec<String>,
    pub actions: Vec<Action>,
}

const INLINE_TAGS: [&str; 4] = ["strong", "span", "button", "img"];

struct Painter {
    color: bool,
    lines: Vec<String>,
    actions: Vec<Action>,
    line: String,
    bullet_pending: bool,
    indent: usize,
    severity: Option<String>,
}

impl Painter {
    fn flush(&mut self) {
        let line = std::mem::take(&mut self.line);
        if line.trim().is_empty() {
            return;
        }
        let prefix = if self.bullet_pending {
            self.bullet_pending = false;
            "• ".to_string()
        } else {
            "  ".repeat(self.indent)
        };
        let line = match (self.color, self.severity.as_deref()) {
            (true, Some("error")) => line.red().to_string(),
            (true, Some(_)) => line.green().to_string(),
            _ => line,
        };
        self.lines.push(format!("{prefix}{line}"));
    }

    fn node(&mut self, node: &Node) {
        match node {
            Node::Text(text) => self.line.push_str(text),
            Node::Element(el) => self.element(el),
        }
    }

    fn element(&mut self, el: &Element) {
        if INLINE_TAGS.contains(&el.tag) {
            self.inline(el);
            if el.id.is_some() {
                self.flush();
                self.lines.push(String::new());
            }
            return;
        }

        self.flush();
        let is_item = el.tag == "li";
        if is_item {
            self.bullet_pending = true;
            self.indent += 1;
        }
        let outer = self.severity.clone();
        if let Some(severity) = el.get_attr("data-severity") {
            self.severity = Some(severity.to_string());
        }

        for child in &el.children {
            self.node(child);
        }
        self.flush();

        self.severity = outer;
        if is_item {
            self.bullet_pending = false;
            self.indent -= 1;
        }
        if el.id.is_some() {
            self.lines.push(String::new());
        }
    }

    fn inline(&mut self, el: &Element) {
        match el.tag {
            "button" => {
                let label = el.text_content();
                if let Some(action) = &el.on_click {
                    self.actions.push(action.clone());
                    let n = self.actions.len();
                    if !self.line.is_empty() {
                        self.line.push(' ');
                    }
                    let control = format!("[{n}] {label}");
                    if self.color {
                        self.line.push_str(&control.cyan().to_string());
                    } else {
                        self.line.push_str(&control);
                    }
                } else {
                    self.line.push_str(&label);
                }
            }
            "img" => {
                let alt = el.get_attr("alt").unwrap_or_default();
                let src = el.get_attr("src").unwrap_or_default();
                self.line.push_str(&format!("({alt}: {src})"));
            }
            "strong" if self.color => {
                self.line.push_str(&el.text_content().bold().to_string());
            }
            _ => {
                for child in &el.children {
                    self.node(child);
                }
            }
        }
    }
}

/// Turn a view into numbered lines.
pub fn materialize(view: &ViewTree, color: bool) -> Screen {
    let mut painter = Painter {
        color,
        lines: Vec::new(),
        actions: Vec::new(),
        line: String::new(),
        bullet_pending: false,
        indent: 0,
        severity: None,
    };
    painter.element(&view.root);
    painter.flush();

    while painter.lines.last().is_some_and(String::is_empty) {
        painter.lines.pop();
    }

    Screen {
        lines: painter.lines,
        actions: painter.actions,
    }
}

// ---------------------------------------------------------------------------
// Terminal sink
// ---------------------------------------------------------------------------

/// Writes every rendered view to `out` and remembers its controls.
pub struct TerminalView<W> {
    out: W,
    color: bool,
    actions: Vec<Action>,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            actions: Vec::new(),
        }
    }

    /// Controls of the last view shown, in number order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn prompt(&mut self) -> std::io::Result<()> {
        write!(self.out, "> ")?;
        self.out.flush()
    }

    pub fn hint(&mut self, input: &str) {
        if let Err(e) = writeln!(
            self.out,
            "? {input:?}: 1..{} / q",
            self.actions.len()
        ) {
            warn!(error = %e, "Failed to write to terminal");
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ViewSink for TerminalView<W> {
    fn show(&mut self, view: &ViewTree) {
        let screen = materialize(view, self.color);
        self.actions = screen.actions;

        let mut body = String::from("\n");
        for line in &screen.lines {
            body.push_str(line);
            body.push('\n');
        }
        if let Err(e) = self.out.write_all(body.as_bytes()).and_then(|_| self.out.flush()) {
            warn!(error = %e, "Failed to write to terminal");
        }
    }
}

// ---------------------------------------------------------------------------
// Input loop
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Click(Action),
    Redraw,
    Quit,
    Unknown(String),
}

/// Interpret one line of input against the controls currently on screen.
pub fn parse_command(input: &str, actions: &[Action]) -> Command {
    let input = input.trim();
    match input {
        "" => Command::Redraw,
        "q" | "quit" | "exit" => Command::Quit,
        _ => match input.parse::<usize>() {
            Ok(n) if (1..=actions.len()).contains(&n) => Command::Click(actions[n - 1].clone()),
            _ => Command::Unknown(input.to_string()),
        },
    }
}

/// Drive `app` from stdin until EOF or `q`.
pub async fn run_interactive<S, K, W>(
    app: &mut App<S, K>,
    view: &mut TerminalView<W>,
) -> anyhow::Result<()>
where
    S: CountrySource,
    K: KeyValueStore,
    W: Write,
{
    app.start(view).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        view.prompt()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        match parse_command(&line, view.actions()) {
            Command::Click(action) => app.dispatch(action, view).await,
            Command::Redraw => view.show(&app.view()),
            Command::Quit => break,
            Command::Unknown(input) => view.hint(&input),
        }
    }
    Ok(())
}
