//! Interactive `browse` loop.
//!
//! Reads one command per line from stdin. Search lines (`/text`) are only scheduled on
//! the API's debouncer; consecutive searches coalesce and just the last one is applied,
//! once the quiet period has passed and before the next non-search line runs.

use super::render::{
    print_json, print_messages, render_comparison, render_entry, render_page, render_stats,
};
use mingpuapp::api::MingpuApi;
use mingpuapp::commands::{CmdMessage, CmdResult, Command};
use mingpuapp::error::Result;
use mingpuapp::filter::FilterCategory;
use mingpuapp::handoff::HandoffStore;
use mingpuapp::query::SortKey;
use std::io::BufRead;
use std::time::Instant;

const HELP: &str = "\
Commands:
  /<text>                 search (empty clears the search)
  f <score|strokes|luck> <token>   toggle a filter token
  h [hexagram]            filter by hexagram (no name clears)
  s <none|score|strokes|name>      sort
  m                       show more
  c                       clear filters and search
  + <id>                  add to compare list
  - <id>                  remove from compare list
  cmp                     compare selected names
  d <id>                  show one name
  stats                   catalog statistics
  l                       show the current page
  ?                       this help
  q                       quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Action {
    Run(Command),
    Page,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub(super) fn parse_line(line: &str) -> std::result::Result<Option<Action>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    if let Some(text) = line.strip_prefix('/') {
        return Ok(Some(Action::Run(Command::SetQuery(text.trim().to_string()))));
    }

    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    let action = match head {
        "f" | "filter" => {
            let (category, token) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| "Usage: f <score|strokes|luck> <token>".to_string())?;
            Action::Run(Command::ToggleFilter {
                category: category.parse::<FilterCategory>()?,
                token: token.trim().to_string(),
            })
        }
        "h" | "hexagram" => Action::Run(Command::SetHexagram(
            Some(rest.to_string()).filter(|r| !r.is_empty()),
        )),
        "s" | "sort" => Action::Run(Command::SetSort(rest.parse::<SortKey>()?)),
        "m" | "more" => Action::Run(Command::AdvancePage),
        "c" | "clear" => Action::Run(Command::ClearFilters),
        "+" | "add" => Action::Run(Command::Select(parse_id(rest)?)),
        "-" | "rm" => Action::Run(Command::Deselect(parse_id(rest)?)),
        "cmp" | "compare" => Action::Run(Command::StartComparison),
        "d" | "detail" => Action::Run(Command::ShowDetail(parse_id(rest)?)),
        "stats" => Action::Run(Command::Statistics),
        "l" | "list" => Action::Page,
        "?" | "help" => Action::Help,
        "q" | "quit" | "exit" => Action::Quit,
        other => return Err(format!("Unknown command: {} (? for help)", other)),
    };
    Ok(Some(action))
}

fn parse_id(s: &str) -> std::result::Result<u32, String> {
    s.parse().map_err(|_| format!("Not a name id: {:?}", s))
}

pub(super) fn run<H: HandoffStore, R: BufRead>(
    api: &mut MingpuApi<H>,
    input: R,
    json: bool,
) -> Result<()> {
    if !json {
        print!("{}", render_page(&api.view()));
    }

    for line in input.lines() {
        let line = line?;
        let action = match parse_line(&line) {
            Ok(Some(action)) => action,
            Ok(None) => continue,
            Err(message) => {
                print_messages(&[CmdMessage::warning(message)]);
                continue;
            }
        };

        if let Action::Run(Command::SetQuery(ref text)) = action {
            api.search(text, Instant::now())?;
            continue;
        }

        if let Some(result) = settle(api)? {
            show(&result, json, true)?;
        }

        match action {
            Action::Quit => return Ok(()),
            Action::Help => println!("{}", HELP),
            Action::Page => show(&CmdResult::default().with_view(api.view()), json, true)?,
            Action::Run(command) => {
                let paging = command.recomputes() || command == Command::AdvancePage;
                match api.dispatch(command, Instant::now()) {
                    Ok(result) => show(&result, json, paging)?,
                    Err(e) => print_messages(&[CmdMessage::error(e.to_string())]),
                }
            }
        }
    }

    if let Some(result) = settle(api)? {
        show(&result, json, true)?;
    }
    Ok(())
}

/// Wait out the quiet period of a pending search, then apply it.
fn settle<H: HandoffStore>(api: &mut MingpuApi<H>) -> Result<Option<CmdResult>> {
    let Some(deadline) = api.next_deadline() else {
        return Ok(None);
    };
    let now = Instant::now();
    if deadline > now {
        std::thread::sleep(deadline - now);
    }
    api.tick(Instant::now())
}

fn show(result: &CmdResult, json: bool, with_page: bool) -> Result<()> {
    if json {
        return print_json(result);
    }

    if let Some(stats) = &result.stats {
        print!("{}", render_stats(stats));
    }
    match result.entries.len() {
        0 => {}
        1 => print!("{}", render_entry(&result.entries[0])),
        _ => print!("{}", render_comparison(&result.entries)),
    }
    print_messages(&result.messages);
    if with_page {
        if let Some(view) = &result.view {
            print!("{}", render_page(view));
        }
    }
    Ok(())
}
