use ftree::{FaultTree, Highlighter, Selection, run_layout, sample};
use serde::Serialize;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Ftree(ftree::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Ftree(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<ftree::Error> for CliError {
    fn from(value: ftree::Error) -> Self {
        Self::Ftree(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Default)]
struct Args {
    select: Option<String>,
    compact: bool,
}

const USAGE: &str = "Usage: ftree [--select <event-id>] [--compact]

Lays out the demo fault tree and prints a JSON report of event positions
and links. With --select, also reports the selected event's upstream
highlight set (its predecessor-closure links).";

fn parse_args() -> Result<Args, CliError> {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--select" => {
                args.select = Some(it.next().ok_or(CliError::Usage(USAGE))?);
            }
            "--compact" => args.compact = true,
            "--help" | "-h" => return Err(CliError::Usage(USAGE)),
            _ => return Err(CliError::Usage(USAGE)),
        }
    }
    Ok(args)
}

#[derive(Debug, Serialize)]
struct EventReport<'a> {
    id: &'a str,
    kind: ftree::EventKind,
    label: &'a str,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

#[derive(Debug, Serialize)]
struct LinkReport<'a> {
    source: &'a str,
    target: &'a str,
    source_tap: ftree::SourceTap,
    target_anchor: ftree::TargetAnchor,
}

#[derive(Debug, Serialize)]
struct SelectionReport {
    selected: String,
    highlighted_events: Vec<String>,
    highlighted_links: Vec<[String; 2]>,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    events: Vec<EventReport<'a>>,
    links: Vec<LinkReport<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    selection: Option<SelectionReport>,
}

/// Records highlight transitions instead of painting them.
#[derive(Debug, Default)]
struct RecordingHighlighter {
    events: Vec<String>,
    links: Vec<[String; 2]>,
}

impl Highlighter for RecordingHighlighter {
    fn highlight_event(&mut self, id: &str) {
        if !self.events.iter().any(|e| e == id) {
            self.events.push(id.to_string());
        }
    }

    fn unhighlight_event(&mut self, id: &str) {
        self.events.retain(|e| e != id);
    }

    fn highlight_link(&mut self, source: &str, target: &str) {
        let key = [source.to_string(), target.to_string()];
        if !self.links.contains(&key) {
            self.links.push(key);
        }
    }

    fn unhighlight_link(&mut self, source: &str, target: &str) {
        self.links
            .retain(|l| !(l[0] == source && l[1] == target));
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let mut tree = sample::scaffolding_fall();
    run_layout(&mut tree);

    let selection = match args.select {
        Some(id) => {
            let mut session = Selection::new();
            let mut highlighter = RecordingHighlighter::default();
            session.select(&tree, Some(&id), &mut highlighter)?;
            Some(SelectionReport {
                selected: id,
                highlighted_events: highlighter.events,
                highlighted_links: highlighter.links,
            })
        }
        None => None,
    };

    let report = report_for(&tree, selection);
    let json = if args.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{json}");
    Ok(())
}

fn report_for(tree: &FaultTree, selection: Option<SelectionReport>) -> Report<'_> {
    let events = tree
        .events()
        .map(|ev| EventReport {
            id: &ev.id,
            kind: ev.kind,
            label: &ev.label,
            x: ev.position.x,
            y: ev.position.y,
            width: ev.size.width,
            height: ev.size.height,
        })
        .collect();
    let links = tree
        .links()
        .map(|l| LinkReport {
            source: &l.source,
            target: &l.target,
            source_tap: l.source_tap,
            target_anchor: l.target_anchor,
        })
        .collect();
    Report {
        events,
        links,
        selection,
    }
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };
    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
