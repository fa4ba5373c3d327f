use std::path::Path;
use std::time::Duration;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::cli::prompt::LineConfirm;
use crate::gesture::swipe::{Direction, SwipeDetector};
use crate::io::config_io;
use crate::io::store::{FileStore, KeyValueStore};
use crate::model::config::StacksConfig;
use crate::model::label::Label;
use crate::ops::picker::{self, Confirm, Confirmation, FixedAnswer, Picker, SelectOutcome};
use crate::ops::row_actions::{self, RowAction};
use crate::ops::stack_ops::{StackError, StackList};
use crate::ops::suggestion_ops::SuggestionSet;
use crate::ops::index_ops;

type CmdResult = Result<(), Box<dyn std::error::Error>>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub async fn dispatch(cli: Cli, config: StacksConfig) -> CmdResult {
    let dir = config_io::resolve_store_dir(cli.store_dir.as_deref().map(Path::new), &config);
    let store = FileStore::new(dir);
    tracing::debug!(dir = %store.dir().display(), "using store");

    if let Some(stack) = index_ops::import_legacy_list(&store).await? {
        eprintln!("imported legacy list as stack \"{}\" ({})", stack.label, stack.id);
    }

    let ctx = Context {
        config: &config,
        store: &store,
        json: cli.json,
    };

    match cli.command {
        Commands::Stacks(args) => match args.action {
            None => cmd_stacks_list(&ctx).await,
            Some(StacksAction::Add { name }) => cmd_stacks_add(&ctx, &name).await,
            Some(StacksAction::Rm { stack }) => cmd_stacks_rm(&ctx, &stack).await,
        },
        Commands::Show(args) => cmd_show(&ctx, args).await,
        Commands::Add(args) => cmd_add(&ctx, args).await,
        Commands::Rm(args) => cmd_rm(&ctx, args).await,
        Commands::Clear(args) => cmd_clear(&ctx, args).await,
        Commands::Search(args) => cmd_search(&ctx, args).await,
        Commands::Suggestions => cmd_suggestions(&ctx).await,
        Commands::Swipe(args) => cmd_swipe(&ctx, args).await,
    }
}

struct Context<'a> {
    config: &'a StacksConfig,
    store: &'a dyn KeyValueStore,
    json: bool,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Look a stack up in the index by id or name.
async fn resolve_stack(store: &dyn KeyValueStore, reference: &str) -> Result<Label, StackError> {
    let stacks = index_ops::fetch_stacks(store).await?;
    index_ops::resolve(&stacks, reference).cloned()
}

fn confirmer(yes: bool) -> Box<dyn Confirm> {
    if yes {
        Box::new(FixedAnswer(Confirmation::Confirmed))
    } else {
        Box::new(LineConfirm::stdin())
    }
}

fn print_stack(ctx: &Context<'_>, stack: &Label, entries: &[Label]) -> CmdResult {
    if ctx.json {
        let out = StackJson {
            id: stack.id.clone(),
            name: stack.label.clone(),
            entries: entries_json(entries),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", format_entries(entries));
    }
    Ok(())
}

fn print_outcome(ctx: &Context<'_>, outcome: &'static str, text: &str) -> CmdResult {
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&OutcomeJson { outcome })?);
    } else {
        println!("{}", text);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Stack index commands
// ---------------------------------------------------------------------------

async fn cmd_stacks_list(ctx: &Context<'_>) -> CmdResult {
    let stacks = index_ops::fetch_stacks(ctx.store).await?;
    let mut infos = Vec::with_capacity(stacks.len());
    for stack in stacks {
        let count = index_ops::stack_count(ctx.store, &stack.id).await?;
        infos.push(StackInfoJson {
            id: stack.id,
            name: stack.label,
            count,
        });
    }
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
    } else {
        print!("{}", format_stacks(&infos));
    }
    Ok(())
}

async fn cmd_stacks_add(ctx: &Context<'_>, name: &str) -> CmdResult {
    let name = name.trim();
    if name.is_empty() {
        return Err("stack name cannot be empty".into());
    }
    let stack = index_ops::add_stack(ctx.store, name).await?;
    if ctx.json {
        let out = StackInfoJson {
            id: stack.id,
            name: stack.label,
            count: 0,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("created stack \"{}\" ({})", stack.label, stack.id);
    }
    Ok(())
}

async fn cmd_stacks_rm(ctx: &Context<'_>, reference: &str) -> CmdResult {
    let stack = resolve_stack(ctx.store, reference).await?;
    index_ops::remove_stack(ctx.store, &stack.id).await?;
    if ctx.json {
        let out = RemovedStackJson {
            id: stack.id,
            name: stack.label,
            removed: true,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("removed stack \"{}\"", stack.label);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Stack commands
// ---------------------------------------------------------------------------

async fn cmd_show(ctx: &Context<'_>, args: ShowArgs) -> CmdResult {
    let stack = resolve_stack(ctx.store, &args.stack).await?;
    let list = StackList::load(ctx.store, &stack.id).await?;
    print_stack(ctx, &stack, list.entries())
}

async fn cmd_add(ctx: &Context<'_>, args: AddArgs) -> CmdResult {
    let stack = resolve_stack(ctx.store, &args.stack).await?;
    let mut list = StackList::load(ctx.store, &stack.id).await?;
    let suggestions = SuggestionSet::load(ctx.store).await?;
    let mut picker = Picker::new(&ctx.config.catalog, suggestions, ctx.config.search.max_suggestions);
    let mut confirm = confirmer(args.yes);

    match picker.select(&mut list, &args.item, confirm.as_mut()).await? {
        SelectOutcome::Added { new_suggestion } => {
            if ctx.json {
                return print_stack(ctx, &stack, list.entries());
            }
            if new_suggestion {
                println!("added \"{}\" to {} (new suggestion)", args.item.trim(), stack.label);
            } else {
                println!("added \"{}\" to {}", args.item.trim(), stack.label);
            }
        }
        SelectOutcome::Cancelled => print_outcome(ctx, "not-added", "not added")?,
        SelectOutcome::Ignored => print_outcome(ctx, "ignored", "nothing to add")?,
    }
    Ok(())
}

async fn cmd_rm(ctx: &Context<'_>, args: RmArgs) -> CmdResult {
    let stack = resolve_stack(ctx.store, &args.stack).await?;
    let mut list = StackList::load(ctx.store, &stack.id).await?;
    let removed = list.entries().get(args.index).map(|l| l.label.clone());
    list.remove(args.index).await?;
    if ctx.json {
        return print_stack(ctx, &stack, list.entries());
    }
    if let Some(label) = removed {
        println!("removed \"{}\" from {}", label, stack.label);
    }
    Ok(())
}

async fn cmd_clear(ctx: &Context<'_>, args: ClearArgs) -> CmdResult {
    let stack = resolve_stack(ctx.store, &args.stack).await?;
    let mut list = StackList::load(ctx.store, &stack.id).await?;
    let mut confirm = confirmer(args.yes);
    if confirm.confirm(picker::CLEAR_PROMPT).await == Confirmation::Cancelled {
        return print_outcome(ctx, "not-cleared", "not cleared");
    }
    list.clear().await?;
    if ctx.json {
        return print_stack(ctx, &stack, list.entries());
    }
    println!("cleared {}", stack.label);
    Ok(())
}

async fn cmd_search(ctx: &Context<'_>, args: SearchArgs) -> CmdResult {
    let suggestions = SuggestionSet::load(ctx.store).await?;
    let picker = Picker::new(&ctx.config.catalog, suggestions, ctx.config.search.max_suggestions);
    let hits = picker.filter(&args.query);
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
    } else {
        for hit in hits {
            println!("{}", hit);
        }
    }
    Ok(())
}

async fn cmd_suggestions(ctx: &Context<'_>) -> CmdResult {
    let suggestions = SuggestionSet::load(ctx.store).await?;
    if ctx.json {
        let items: Vec<&str> = suggestions.iter().collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        if suggestions.is_empty() {
            println!("(no suggestions)");
        }
        for item in suggestions.iter() {
            println!("{}", item);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Swipe
// ---------------------------------------------------------------------------

async fn cmd_swipe(ctx: &Context<'_>, args: SwipeArgs) -> CmdResult {
    let stack = resolve_stack(ctx.store, &args.stack).await?;
    let mut list = StackList::load(ctx.store, &stack.id).await?;
    if args.index >= list.len() {
        return Err(StackError::IndexOutOfRange {
            index: args.index,
            len: list.len(),
        }
        .into());
    }

    let swipe = &ctx.config.swipe;
    let mut detector = SwipeDetector::new(row_actions::row_handlers(args.index, list.len()))
        .with_threshold_divisor(swipe.threshold_divisor)
        .with_duration(Duration::from_millis(swipe.animation_ms));
    detector.set_width(args.width.unwrap_or(swipe.row_width));

    detector.start(0.0);
    let direction = detector.drag(args.dx);
    detector.release(args.dx);
    let action = detector.finish().copied();
    tracing::debug!(?direction, ?action, dx = args.dx, "swipe resolved");

    let outcome = match action {
        Some(action) => {
            row_actions::apply(&mut list, action).await?;
            match action {
                RowAction::Repush { .. } => "repush",
                RowAction::Remove { .. } => "remove",
            }
        }
        None => "snap-back",
    };

    if ctx.json {
        let out = SwipeJson {
            direction: match direction {
                Direction::Right => "right",
                Direction::Left => "left",
                Direction::None => "none",
            },
            outcome,
            entries: entries_json(list.entries()),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", outcome);
        print!("{}", format_entries(list.entries()));
    }
    Ok(())
}
