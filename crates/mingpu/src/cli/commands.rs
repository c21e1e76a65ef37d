//! # CLI Handlers
//!
//! `run()` parses arguments, sets up logging, initializes the session context and
//! dispatches to one `handle_*` function per subcommand. Handlers call the API facade
//! and hand the structured result to `render`.

use super::render::{
    print_json, print_messages, render_comparison, render_entry, render_page, render_stats,
};
use super::session;
use super::setup::{Cli, Commands, ListArgs};
use clap::Parser;
use mingpuapp::api::MingpuApi;
use mingpuapp::commands::{CmdMessage, CmdResult, MessageLevel};
use mingpuapp::error::Result;
use mingpuapp::filter::FilterCategory;
use mingpuapp::handoff::FileHandoff;
use mingpuapp::init::{initialize, MingpuContext};
use std::collections::BTreeSet;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = initialize(cli.catalog.clone())?;
    if ctx.fallback_used && !cli.json {
        print_messages(&[CmdMessage::warning(format!(
            "Could not load catalog from {}; showing the built-in sample",
            ctx.catalog_path.display()
        ))]);
    }

    match cli.command {
        Some(Commands::List(args)) => handle_list(&mut ctx, args, cli.json),
        Some(Commands::Show { id }) => handle_show(&mut ctx, id, cli.json),
        Some(Commands::Compare { ids }) => handle_compare(&mut ctx, &ids, cli.json),
        Some(Commands::Stats) => handle_stats(&mut ctx, cli.json),
        Some(Commands::Hexagrams) => handle_hexagrams(&ctx, cli.json),
        Some(Commands::Browse) => handle_browse(&mut ctx, cli.json),
        None => handle_list(&mut ctx, ListArgs::default(), cli.json),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_env("MINGPU_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn handle_list(ctx: &mut MingpuContext, args: ListArgs, json: bool) -> Result<()> {
    let api = &mut ctx.api;
    let filters = [
        (FilterCategory::Score, &args.score),
        (FilterCategory::Strokes, &args.strokes),
        (FilterCategory::Luck, &args.luck),
    ];
    for (category, tokens) in filters {
        // toggling twice would drop a repeated token
        let tokens: BTreeSet<&String> = tokens.iter().collect();
        for token in tokens {
            api.toggle_filter(category, token)?;
        }
    }
    if args.hexagram.is_some() {
        api.set_hexagram(args.hexagram)?;
    }
    if let Some(query) = &args.query {
        api.search(query, Instant::now())?;
        api.flush_query()?;
    }
    api.set_sort(args.sort)?;
    for _ in 1..args.pages.max(1) {
        if !api.state().has_more() {
            break;
        }
        api.show_more()?;
    }

    let view = api.view();
    if json {
        return print_json(&view);
    }
    print!("{}", render_page(&view));
    Ok(())
}

fn handle_show(ctx: &mut MingpuContext, id: u32, json: bool) -> Result<()> {
    let result = ctx.api.show_detail(id)?;
    if json {
        return print_json(&result.entries);
    }

    if let Some(entry) = result.entries.first() {
        print!("{}", render_entry(entry));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_compare(ctx: &mut MingpuContext, ids: &[u32], json: bool) -> Result<()> {
    let api: &mut MingpuApi<FileHandoff> = &mut ctx.api;
    let mut rejected = Vec::new();
    for id in ids {
        let result = api.select(*id)?;
        rejected.extend(warnings(result));
    }

    let mut result = api.start_comparison()?;
    rejected.append(&mut result.messages);
    result.messages = rejected;

    if json {
        return print_json(&result);
    }
    if !result.entries.is_empty() {
        print!("{}", render_comparison(&result.entries));
    }
    print_messages(&result.messages);
    Ok(())
}

fn warnings(result: CmdResult) -> impl Iterator<Item = CmdMessage> {
    result
        .messages
        .into_iter()
        .filter(|m| !matches!(m.level, MessageLevel::Info | MessageLevel::Success))
}

fn handle_stats(ctx: &mut MingpuContext, json: bool) -> Result<()> {
    let result = ctx.api.statistics()?;
    let Some(stats) = result.stats else {
        return Ok(());
    };
    if json {
        return print_json(&stats);
    }
    print!("{}", render_stats(&stats));
    Ok(())
}

fn handle_hexagrams(ctx: &MingpuContext, json: bool) -> Result<()> {
    let names = ctx.api.state().catalog().hexagram_names();
    if json {
        return print_json(&names);
    }
    for name in names {
        println!("{}", name);
    }
    Ok(())
}

fn handle_browse(ctx: &mut MingpuContext, json: bool) -> Result<()> {
    let stdin = std::io::stdin();
    session::run(&mut ctx.api, stdin.lock(), json)
}
