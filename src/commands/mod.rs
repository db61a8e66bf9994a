//! One-shot subcommands. Each runs a single session operation, prints the
//! result and reports whether the operation raised a warning or error.

use yansi::Paint;

use crate::api::{self, ApiClient};
use crate::models::ProductId;
use crate::session::SelectionSession;
use crate::ui::render;

/// Print and drain the session's notifications. Returns true when none of
/// them reports a failure.
fn flush(session: &mut SelectionSession) -> bool {
    let notifications = session.take_notifications();
    render::print_notifications(&notifications);
    !notifications.iter().any(|n| n.is_failure())
}

pub async fn config_show(session: &mut SelectionSession) -> bool {
    session.load_config().await;
    render::print_config(session.config());
    flush(session)
}

/// Fetch the configuration, apply `key=value` edits, save it.
pub async fn config_set(session: &mut SelectionSession, pairs: &[(String, String)]) -> bool {
    session.load_config().await;
    if !flush(session) {
        return false;
    }
    for (key, value) in pairs {
        session.set_config_value(key, value);
    }
    session.save_config().await;
    render::print_config(session.config());
    flush(session)
}

pub async fn sectors(session: &mut SelectionSession) -> bool {
    session.load_sectors().await;
    render::print_sectors(session.sectors());
    flush(session)
}

pub async fn search(session: &mut SelectionSession, query: &str) -> bool {
    session.search_products(query).await;
    render::print_products(session.products());
    flush(session)
}

/// Load a promotions page, either by 1-based page number or by paginator offset.
pub async fn promotions(
    session: &mut SelectionSession,
    page: Option<u32>,
    offset: Option<u64>,
    filter: Option<&str>,
) -> bool {
    session.load_promotions(0).await;
    if !flush(session) {
        return false;
    }
    let first = match (page, offset) {
        (_, Some(first)) => (first > 0).then_some(first),
        (Some(p), None) if p > 1 => Some(u64::from(p - 1) * u64::from(session.rows_per_page())),
        _ => None,
    };
    if let Some(first) = first {
        if session.paginate(first).await.is_none() {
            eprintln!(
                "{} {}",
                Paint::new("No promotions page starts at offset").yellow(),
                first
            );
        }
    }
    if let Some(query) = filter {
        session.filter_promotions(query);
    }
    render::print_promotions(session);
    flush(session)
}

/// Search `query`, mark `ids` among the results and submit them.
pub async fn submit(session: &mut SelectionSession, query: &str, ids: &[String]) -> bool {
    session.search_products(query).await;
    if !flush(session) {
        return false;
    }
    for raw in ids {
        let id = ProductId::parse(raw);
        if !session.set_selected(&id, true) {
            eprintln!(
                "{} {} {} '{}'",
                Paint::new("Product").yellow(),
                id,
                Paint::new("is not among the results for").yellow(),
                query
            );
        }
    }
    session.submit_selected().await;
    flush(session)
}

pub async fn sync(session: &mut SelectionSession, id: &str) -> bool {
    session.sync_product(&ProductId::parse(id)).await;
    flush(session)
}

/// Verify the backend is reachable with the configured settings.
pub async fn check_config(client: &ApiClient) -> bool {
    match api::load_scan_config(client).await {
        Ok(_) => {
            println!(
                "{} {}",
                Paint::new("Configuration looks valid, backend reachable at").green(),
                client.base_url()
            );
            true
        }
        Err(e) => {
            tracing::error!(%e, "backend check failed");
            eprintln!("{}: {}", Paint::new("Configuration appears invalid").red(), e);
            false
        }
    }
}

/// Split `key=value` arguments.
pub fn parse_pairs(raw: &[String]) -> Result<Vec<(String, String)>, String> {
    raw.iter()
        .map(|item| {
            item.split_once('=')
                .filter(|(k, _)| !k.trim().is_empty())
                .map(|(k, v)| (k.trim().to_string(), v.to_string()))
                .ok_or_else(|| format!("expected key=value, got '{}'", item))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pairs_splits_on_first_equals() {
        let pairs = parse_pairs(&["tempoScan=30".into(), "url=a=b".into()]).unwrap();
        assert_eq!(pairs[0], ("tempoScan".into(), "30".into()));
        assert_eq!(pairs[1], ("url".into(), "a=b".into()));
    }

    #[test]
    fn parse_pairs_rejects_missing_key() {
        assert!(parse_pairs(&["=1".into()]).is_err());
        assert!(parse_pairs(&["novalue".into()]).is_err());
    }
}
