//! Interactive line-oriented front end over a [`SelectionSession`].

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use yansi::Paint;

use crate::models::ProductId;
use crate::session::{SelectionSession, Tab};
use crate::ui::render;

const HELP: &str = "\
Commands:
  search <text>          search products by name
  list                   show the current search results
  select <id>            mark a search result for sending
  unselect <id>          clear the mark on a search result
  toggle <id>            flip the mark on a search result
  submit                 send the marked products
  sync <id>              ask the backend to resynchronize a product
  tab search|promotions  switch tab (promotions loads the first page)
  page <n>               go to promotions page n (1-based)
  offset <n>             move the paginator to row offset n
  next | prev            move one promotions page
  filter [text]          filter the loaded promotions page by name
  restore                show the whole page again after clearing the filter
  config                 show the scan configuration
  set <key> <value>      edit a configuration field locally
  save                   save the scan configuration
  sectors                list sectors
  help                   show this help
  quit                   leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    List,
    Select(ProductId),
    Unselect(ProductId),
    Toggle(ProductId),
    Submit,
    Sync(ProductId),
    Tab(Tab),
    Page(u64),
    Offset(u64),
    Next,
    Prev,
    Filter(String),
    Restore,
    Config,
    Set { key: String, value: String },
    Save,
    Sectors,
    Help,
    Quit,
}

fn required<'a>(arg: &'a str, usage: &str) -> Result<&'a str, String> {
    if arg.is_empty() {
        Err(format!("usage: {}", usage))
    } else {
        Ok(arg)
    }
}

fn parse_number(arg: &str, usage: &str) -> Result<u64, String> {
    required(arg, usage)?
        .parse::<u64>()
        .map_err(|_| format!("'{}' is not a valid number (usage: {})", arg, usage))
}

/// Parse one line of shell input. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };

    let cmd = match word.to_lowercase().as_str() {
        "search" | "s" => ShellCommand::Search(rest.to_string()),
        "list" | "ls" => ShellCommand::List,
        "select" => ShellCommand::Select(ProductId::parse(required(rest, "select <id>")?)),
        "unselect" => ShellCommand::Unselect(ProductId::parse(required(rest, "unselect <id>")?)),
        "toggle" | "t" => ShellCommand::Toggle(ProductId::parse(required(rest, "toggle <id>")?)),
        "submit" => ShellCommand::Submit,
        "sync" => ShellCommand::Sync(ProductId::parse(required(rest, "sync <id>")?)),
        "tab" => match rest.to_lowercase().as_str() {
            "search" | "products" => ShellCommand::Tab(Tab::Search),
            "promotions" | "promo" => ShellCommand::Tab(Tab::Promotions),
            _ => return Err("usage: tab search|promotions".into()),
        },
        "page" => {
            let n = parse_number(rest, "page <n>")?;
            if n == 0 {
                return Err("pages start at 1".into());
            }
            ShellCommand::Page(n)
        }
        "offset" => ShellCommand::Offset(parse_number(rest, "offset <n>")?),
        "next" | "n" => ShellCommand::Next,
        "prev" | "p" => ShellCommand::Prev,
        "filter" | "f" => ShellCommand::Filter(rest.to_string()),
        "restore" => ShellCommand::Restore,
        "config" => ShellCommand::Config,
        "set" => {
            let (key, value) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| "usage: set <key> <value>".to_string())?;
            ShellCommand::Set {
                key: key.to_string(),
                value: value.trim().to_string(),
            }
        }
        "save" => ShellCommand::Save,
        "sectors" => ShellCommand::Sectors,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(format!("unknown command '{}', type 'help'", other)),
    };
    Ok(Some(cmd))
}

/// Run one command against the session. Returns false when the shell should stop.
pub async fn dispatch(session: &mut SelectionSession, cmd: ShellCommand) -> bool {
    let rows = u64::from(session.rows_per_page());
    match cmd {
        ShellCommand::Search(query) => {
            session.search_products(&query).await;
            render::print_products(session.products());
        }
        ShellCommand::List => render::print_products(session.products()),
        ShellCommand::Select(id) | ShellCommand::Unselect(id) if session.products().iter().all(|p| p.id != id) => {
            eprintln!("{} {}", Paint::new("No search result with id").red(), id);
        }
        ShellCommand::Select(id) => {
            session.set_selected(&id, true);
        }
        ShellCommand::Unselect(id) => {
            session.set_selected(&id, false);
        }
        ShellCommand::Toggle(id) => match session.toggle_selected(&id) {
            Some(true) => println!("{} selected", id),
            Some(false) => println!("{} unselected", id),
            None => eprintln!("{} {}", Paint::new("No search result with id").red(), id),
        },
        ShellCommand::Submit => session.submit_selected().await,
        ShellCommand::Sync(id) => session.sync_product(&id).await,
        ShellCommand::Tab(tab) => {
            session.select_tab(tab).await;
            if tab == Tab::Promotions {
                render::print_promotions(session);
            }
        }
        ShellCommand::Page(n) => match (n - 1).checked_mul(rows) {
            Some(first) => paginate(session, first).await,
            None => tracing::debug!(page = n, "page number out of range, ignored"),
        },
        ShellCommand::Offset(first) => paginate(session, first).await,
        ShellCommand::Next => match session.view().promotions_first.checked_add(rows) {
            Some(first) => paginate(session, first).await,
            None => tracing::debug!("already past the last representable offset, ignored"),
        },
        ShellCommand::Prev => {
            let first = session.view().promotions_first.saturating_sub(rows);
            paginate(session, first).await;
        }
        ShellCommand::Filter(query) => {
            session.filter_promotions(&query);
            render::print_promotions(session);
        }
        ShellCommand::Restore => {
            session.restore_promotions();
            render::print_promotions(session);
        }
        ShellCommand::Config => render::print_config(session.config()),
        ShellCommand::Set { key, value } => {
            session.set_config_value(&key, &value);
            render::print_config(session.config());
        }
        ShellCommand::Save => session.save_config().await,
        ShellCommand::Sectors => render::print_sectors(session.sectors()),
        ShellCommand::Help => println!("{}", HELP),
        ShellCommand::Quit => return false,
    }
    true
}

async fn paginate(session: &mut SelectionSession, first: u64) {
    match session.paginate(first).await {
        Some(_) => render::print_promotions(session),
        None => tracing::debug!(first, "paginator offset ignored"),
    }
}

fn print_header(session: &SelectionSession) {
    let tab = match session.view().active_tab {
        Tab::Search => "search",
        Tab::Promotions => "promotions",
    };
    let selected = session.products().iter().filter(|p| p.selected).count();
    println!(
        "{} {} | tab: {} | selected: {}",
        Paint::new("vitrine").bold(),
        Paint::new(session.view().search_input.as_str()).dim(),
        Paint::new(tab).cyan(),
        Paint::new(selected).yellow()
    );
}

/// Read commands from stdin until `quit` or end of input.
pub async fn run(mut session: SelectionSession) -> std::io::Result<()> {
    session.init().await;
    render::print_notifications(&session.take_notifications());
    println!("Type 'help' for the list of commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let keep_going = match parse_command(&line) {
            Ok(Some(cmd)) => dispatch(&mut session, cmd).await,
            Ok(None) => true,
            Err(msg) => {
                eprintln!("{}", Paint::new(msg).red());
                true
            }
        };
        render::print_notifications(&session.take_notifications());
        if session.take_scroll_to_top() {
            print_header(&session);
        }
        if !keep_going {
            break;
        }
    }
    tracing::debug!("shell finished");
    Ok(())
}
