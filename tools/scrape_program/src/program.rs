//! Extraction of papers and session headers from a technical program page.
//!
//! Each page covers one day. Paper rows look like:
//!
//! ```text
//! <tr><td><a>10:00-10:10, Paper MoA-1.1</a></td></tr>
//! <tr><td><span class="pTtl"><a onclick="viewAbstract('1234')">Title</a></span></td></tr>
//! ...
//! <div id="Ab1234">Keywords: ...<br>Abstract: ...</div>
//! ```
//!
//! Session headers are `.sHdr` rows whose first cell is the session code.

use anyhow::{anyhow, Context, Result};
use scraper::{ElementRef, Html, Node, Selector};
use tracing::warn;

use timetable::{Paper, RoomMap};

const DATE_PREFIX: &str = "Technical Program for ";

#[derive(Debug, Default)]
pub struct ProgramPage {
    pub date: String,
    pub papers: Vec<Paper>,
    pub rooms: RoomMap,
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("invalid selector '{}': {}", css, e))
}

/// Rendered text of an element, close to a browser's `innerText`: source
/// whitespace collapses to one space, each `<br>` is a line break, block
/// boundaries start a new line and table cells are tab separated.
fn inner_text(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    for node in element.descendants() {
        match node.value() {
            Node::Text(text) => {
                for c in text.chars() {
                    if !c.is_whitespace() {
                        out.push(c);
                    } else if !out.is_empty() && !out.ends_with(char::is_whitespace) {
                        out.push(' ');
                    }
                }
            }
            Node::Element(el) if el.name() == "br" => out.push('\n'),
            Node::Element(el) if matches!(el.name(), "p" | "div" | "tr") => {
                if !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
            }
            Node::Element(el) if matches!(el.name(), "td" | "th") => {
                if !out.is_empty() && !out.ends_with(['\n', '\t']) {
                    out.push('\t');
                }
            }
            _ => {}
        }
    }
    out
}

/// Each line trimmed, blank lines kept, then the whole trimmed.
fn trimmed_lines(text: &str) -> String {
    text.split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn ancestor(element: ElementRef<'_>, levels: usize) -> Option<ElementRef<'_>> {
    let mut current = element;
    for _ in 0..levels {
        current = current.parent().and_then(ElementRef::wrap)?;
    }
    Some(current)
}

fn previous_element(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element.prev_siblings().find_map(ElementRef::wrap)
}

fn has_class(element: ElementRef<'_>, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}

/// First run of digits in an `onclick` handler, e.g. `viewAbstract('1234')`.
fn abstract_number(onclick: &str) -> Option<&str> {
    let start = onclick.find(|c: char| c.is_ascii_digit())?;
    let rest = &onclick[start..];
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    Some(&rest[..end])
}

pub fn parse_program(html: &str) -> Result<ProgramPage> {
    let document = Html::parse_document(html);

    let heading = document
        .select(&selector("h3")?)
        .next()
        .context("program page has no <h3> day heading")?;
    let heading = inner_text(heading).split_whitespace().collect::<Vec<_>>().join(" ");
    let date = heading
        .strip_prefix(DATE_PREFIX)
        .unwrap_or(&heading)
        .to_string();

    let mut papers = Vec::new();
    for link in document.select(&selector("span.pTtl > a")?) {
        match parse_paper(&document, link, &date) {
            Ok(paper) => papers.push(paper),
            Err(e) => warn!("Skipping paper entry: {:#}", e),
        }
    }

    let mut rooms = RoomMap::new();
    for header in document.select(&selector(".sHdr")?) {
        if previous_element(header).is_some_and(|prev| has_class(prev, "sHdr")) {
            continue;
        }
        if let Some((code, label)) = parse_session_header(header) {
            rooms.insert(code, label);
        }
    }

    Ok(ProgramPage { date, papers, rooms })
}

fn parse_paper(document: &Html, link: ElementRef<'_>, date: &str) -> Result<Paper> {
    let title = inner_text(link)
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .to_string();

    // a -> span -> td -> tr; the row before carries "time, id"
    let row = ancestor(link, 3).with_context(|| format!("no enclosing row for '{}'", title))?;
    let slot_row =
        previous_element(row).with_context(|| format!("no time row before '{}'", title))?;
    let slot = slot_row
        .select(&selector("a")?)
        .next()
        .map(inner_text)
        .with_context(|| format!("no time link before '{}'", title))?;

    let mut parts = slot.trim().split(", ");
    let time = parts.next().unwrap_or_default().trim().to_string();
    let id = parts
        .next()
        .with_context(|| format!("time row '{}' has no paper id", slot.trim()))?
        .trim()
        .to_string();

    let onclick = link
        .value()
        .attr("onclick")
        .with_context(|| format!("'{}' has no abstract handler", title))?;
    let number = abstract_number(onclick)
        .with_context(|| format!("no abstract number in '{}'", onclick))?;
    let abstract_text = document
        .select(&selector(&format!("#Ab{}", number))?)
        .next()
        .map(|el| trimmed_lines(&inner_text(el)))
        .with_context(|| format!("abstract #Ab{} not found", number))?;

    Ok(Paper {
        id,
        title,
        abstract_text,
        date: date.to_string(),
        time,
    })
}

fn parse_session_header(header: ElementRef<'_>) -> Option<(String, String)> {
    let cells: Vec<String> = header
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| matches!(el.value().name(), "td" | "th"))
        .map(|el| inner_text(el).trim().to_string())
        .collect();

    let (code, label) = if cells.len() >= 2 {
        (cells[0].clone(), cells[1].clone())
    } else {
        let text = inner_text(header);
        let mut parts = text.split('\t');
        (
            parts.next()?.trim().to_string(),
            parts.next()?.trim().to_string(),
        )
    };

    (!code.is_empty()).then_some((code, label))
}
