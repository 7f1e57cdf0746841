use dashboard_application::dtos::{DashboardView, KpiTone};

use crate::views::stylesheet::{DASHBOARD_CSS, STYLESHEET_PATH};

/// How the page pulls in its stylesheet. Served pages link the asset route;
/// exported files embed it so they open without the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StylesheetMode {
    Linked,
    Inline,
}

pub fn render_dashboard(view: &DashboardView, stylesheet: StylesheetMode) -> String {
    let style = match stylesheet {
        StylesheetMode::Linked => {
            format!("<link rel=\"stylesheet\" href=\"{}\" />", STYLESHEET_PATH)
        }
        StylesheetMode::Inline => format!("<style>\n{}</style>", DASHBOARD_CSS),
    };

    let meta: String = view
        .header
        .meta
        .iter()
        .map(|pill| format!("<span class=\"meta-pill\">{}</span>", escape_html(pill)))
        .collect();

    let mut kpis = String::new();
    for card in &view.kpis {
        let value_class = match card.tone {
            KpiTone::Danger => "kpi-value kpi-value-danger",
            KpiTone::Neutral => "kpi-value",
        };
        kpis.push_str(&format!(
            "<div class=\"kpi-card\">\
            <p class=\"kpi-label\">{label}</p>\
            <p class=\"{value_class}\">{value}</p>\
            <p class=\"kpi-footer\">{footer}</p>\
            </div>",
            label = escape_html(&card.label),
            value_class = value_class,
            value = escape_html(&card.value),
            footer = escape_html(&card.footer),
        ));
    }

    let architecture = render_architecture(view);

    let columns: String = view
        .table
        .columns
        .iter()
        .map(|column| format!("<th>{}</th>", escape_html(column)))
        .collect();

    let mut rows = String::new();
    for row in &view.table.rows {
        rows.push_str(&format!(
            "<tr data-transaction-id=\"{id}\">\
            <td class=\"mono\">{id}</td>\
            <td>{amount}</td>\
            <td>{country}</td>\
            <td>{merchant}</td>\
            <td>{score}</td>\
            <td><span class=\"risk-pill {badge}\">{risk}</span></td>\
            <td>{timestamp}</td>\
            </tr>",
            id = escape_html(&row.transaction_id),
            amount = escape_html(&row.amount),
            country = escape_html(&row.country),
            merchant = escape_html(&row.merchant),
            score = escape_html(&row.score),
            badge = row.badge.css_class(),
            risk = escape_html(&row.risk_label),
            timestamp = escape_html(&row.timestamp),
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<title>{title}</title>
{style}
</head>
<body>
<div class="app-root">
  <header class="app-header">
    <div class="app-title-block">
      <span class="app-badge">{badge}</span>
      <h1 class="app-title">{title}</h1>
      <p class="app-subtitle">{subtitle}</p>
    </div>
    <div class="app-meta">{meta}</div>
  </header>

  <main class="app-main">
    <section class="kpi-section">{kpis}</section>
{architecture}
    <section class="table-section">
      <div class="table-header">
        <div>
          <h2>{table_title}</h2>
          <p class="table-subtitle">{table_subtitle}</p>
        </div>
        <div class="table-controls">
          <button class="btn-secondary" type="button">{refresh}</button>
        </div>
      </div>

      <div class="table-wrapper">
        <table class="anomaly-table">
          <thead><tr>{columns}</tr></thead>
          <tbody>{rows}</tbody>
        </table>
      </div>
    </section>
  </main>

  <footer class="app-footer">
    <span>{footer}</span>
  </footer>
</div>
</body>
</html>
"#,
        title = escape_html(&view.header.title),
        style = style,
        badge = escape_html(&view.header.badge),
        subtitle = escape_html(&view.header.subtitle),
        meta = meta,
        kpis = kpis,
        architecture = architecture,
        table_title = escape_html(&view.table.title),
        table_subtitle = escape_html(&view.table.subtitle),
        refresh = escape_html(&view.table.refresh_label),
        columns = columns,
        rows = rows,
        footer = escape_html(&view.footer),
    )
}

fn render_architecture(view: &DashboardView) -> String {
    if view.architecture.is_empty() {
        return String::new();
    }
    let cards: String = view
        .architecture
        .iter()
        .map(|card| {
            format!(
                "<div class=\"arch-card\">\
                <p class=\"arch-name\">{}</p>\
                <p class=\"arch-id mono\">{}</p>\
                <p class=\"arch-caption\">{}</p>\
                </div>",
                escape_html(&card.name),
                escape_html(&card.identifier),
                escape_html(&card.caption),
            )
        })
        .collect();
    format!(
        "    <section class=\"arch-section\">\n      <h2>Pipeline architecture</h2>\n      <div class=\"arch-grid\">{}</div>\n    </section>\n",
        cards
    )
}

pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
