use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use yansi::Paint;

use crate::models::{Product, ScanConfig, Sector};
use crate::notify::{Notification, Severity};
use crate::session::SelectionSession;
use crate::utils::value_to_short_string;

/// Longest attribute summary shown in a product row.
const MAX_DETAILS_LEN: usize = 60;

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table
}

fn details(product: &Product) -> String {
    let mut out = product
        .attributes
        .iter()
        .map(|(k, v)| format!("{}: {}", k, value_to_short_string(v)))
        .collect::<Vec<_>>()
        .join(", ");
    if out.chars().count() > MAX_DETAILS_LEN {
        out = out.chars().take(MAX_DETAILS_LEN - 1).collect::<String>() + "…";
    }
    out
}

pub fn products_table(products: &[Product]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Sel", "ID", "Name", "Details"]);
    for p in products {
        let mark = if p.selected { "[x]" } else { "[ ]" };
        table.add_row(vec![mark.to_string(), p.id.to_string(), p.name.clone(), details(p)]);
    }
    table
}

pub fn config_table(config: &ScanConfig) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Field", "Value"]);
    for (k, v) in config.iter() {
        table.add_row(vec![k.clone(), value_to_short_string(v)]);
    }
    table
}

pub fn sectors_table(sectors: &[Sector]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Sector"]);
    for s in sectors {
        table.add_row(vec![s.label.clone()]);
    }
    table
}

pub fn print_products(products: &[Product]) {
    if products.is_empty() {
        println!("{}", Paint::new("(no products)").dim());
        return;
    }
    println!("\n{}", products_table(products));
}

pub fn print_config(config: &ScanConfig) {
    if config.is_empty() {
        println!("{}", Paint::new("(empty configuration)").dim());
        return;
    }
    println!("\n{}", config_table(config));
}

pub fn print_sectors(sectors: &[Sector]) {
    if sectors.is_empty() {
        println!("{}", Paint::new("(no sectors)").dim());
        return;
    }
    println!("\n{}", sectors_table(sectors));
}

/// Footer line describing where the promotions paginator stands.
pub fn pagination_summary(session: &SelectionSession) -> String {
    format!(
        "Page {} of {} | Showing {} of {} promotional products",
        session.current_page_number(),
        session.total_pages(),
        session.promotions_view().len(),
        session.total_records()
    )
}

pub fn print_promotions(session: &SelectionSession) {
    print_products(session.promotions_view());
    println!("{}", Paint::new(pagination_summary(session)).cyan());
}

pub fn format_notification(n: &Notification) -> String {
    let label = match n.severity {
        Severity::Success => Paint::new("✔ success").green().bold(),
        Severity::Warn => Paint::new("! warning").yellow().bold(),
        Severity::Error => Paint::new("✖ error").red().bold(),
    };
    format!("{} {}: {}", label, n.summary, n.detail)
}

pub fn print_notifications(notifications: &[Notification]) {
    for n in notifications {
        if n.is_failure() {
            eprintln!("{}", format_notification(n));
        } else {
            println!("{}", format_notification(n));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductId;
    use serde_json::json;

    #[test]
    fn products_table_marks_selection() {
        let mut p = Product::new(ProductId::Number(3), "Café");
        p.selected = true;
        p.attributes.insert("setor".into(), json!("MERCEARIA"));
        let rendered = products_table(&[p]).to_string();
        assert!(rendered.contains("[x]"));
        assert!(rendered.contains("Café"));
        assert!(rendered.contains("setor: MERCEARIA"));
    }

    #[test]
    fn long_details_are_truncated() {
        let mut p = Product::new(ProductId::Number(1), "X");
        p.attributes.insert("descricao".into(), json!("a".repeat(200)));
        assert_eq!(details(&p).chars().count(), MAX_DETAILS_LEN);
    }

    #[test]
    fn notification_line_contains_detail() {
        yansi::disable();
        let line = format_notification(&Notification::warn("Select at least one product to be sent."));
        assert!(line.contains("warning"));
        assert!(line.contains("Select at least one product"));
    }
}
