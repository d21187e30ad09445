//! Pure projection of fetched payloads into HTML fragments. Every function
//! here is a plain value-to-string mapping: the same payload always yields
//! the same bytes, and nothing is validated. A missing field renders as an
//! empty cell instead of failing.

use serde_json::Value;

use crate::models::comparison::{ComparisonResult, MetricPair};
use crate::models::player::{PlayerDetail, ProgressChart, UpdateAck};
use crate::models::scoreboard::{PlayerRow, RoleRow};
use crate::request::{PlayerQuery, RoleQuery};

const SCOREBOARD_HEADERS: [&str; 9] = [
    "Player", "Wins", "Games", "Win Rate", "Avg KDA", "Avg CS/m", "DPM", "Score", "Roles",
];

const ROLE_HEADERS: [&str; 8] = [
    "Player", "Wins", "Games", "Win Rate", "Avg KDA", "Avg CS/m", "DPM", "Score",
];

/// Metrics shown head-to-head, in display order: (response key, label).
const COMPARED_METRICS: [(&str, &str); 5] = [
    ("Wins", "Wins"),
    ("Games", "Games"),
    ("Win Rate", "Win Rate"),
    ("Avg KDA", "Average KDA"),
    ("Score", "Score"),
];

/// A raw JSON value as cell text: strings unquoted, numbers as sent, an
/// absent (null) field as an empty cell.
fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn scoreboard(rows: &[PlayerRow]) -> String {
    if rows.is_empty() {
        return "<p>No data available.</p>".to_string();
    }
    let mut out = String::from("<table><thead><tr>");
    for header in SCOREBOARD_HEADERS {
        out.push_str(&format!("<th>{header}</th>"));
    }
    out.push_str("</tr></thead><tbody>");
    for row in rows {
        out.push_str("<tr>");
        for value in [
            &row.player,
            &row.wins,
            &row.games,
            &row.win_rate,
            &row.avg_kda,
            &row.avg_cs_per_minute,
            &row.damage_per_minute,
            &row.score,
            &row.roles,
        ] {
            out.push_str(&format!("<td>{}</td>", cell(value)));
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
    out
}

pub fn role_leaderboard(rows: &[RoleRow], role: &RoleQuery) -> String {
    if rows.is_empty() {
        return format!("<p>No data available for role {role}.</p>");
    }
    let mut out = format!("<h2>Role Leaderboard: {role}</h2><table><thead><tr>");
    for header in ROLE_HEADERS {
        out.push_str(&format!("<th>{header}</th>"));
    }
    out.push_str("</tr></thead><tbody>");
    for row in rows {
        out.push_str("<tr>");
        for value in [
            &row.player,
            &row.wins,
            &row.games,
            &row.win_rate,
            &row.avg_kda,
            &row.avg_cs_per_minute,
            &row.damage_per_minute,
            &row.score,
        ] {
            out.push_str(&format!("<td>{}</td>", cell(value)));
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
    out
}

pub fn player_stats(detail: &PlayerDetail) -> String {
    let mut out = format!("<h2>Stats for {}</h2>", cell(&detail.player));
    for (label, value) in [
        ("Wins", &detail.wins),
        ("Games", &detail.games),
        ("Win Rate", &detail.win_rate),
        ("Average KDA", &detail.avg_kda),
        ("Average CS/m", &detail.avg_cs_per_minute),
        ("DPM", &detail.damage_per_minute),
        ("Roles", &detail.roles),
    ] {
        out.push_str(&format!(
            "<p><strong>{label}:</strong> {}</p>",
            cell(value)
        ));
    }
    out
}

pub fn comparison(result: &ComparisonResult) -> String {
    let blank = MetricPair::default();
    let mut out = format!(
        "<h2>Comparison: {} vs {}</h2>",
        cell(&result.player1),
        cell(&result.player2)
    );
    for (key, label) in COMPARED_METRICS {
        let pair = result.stats.get(key).unwrap_or(&blank);
        out.push_str(&format!(
            "<p><strong>{label}:</strong> {} vs {}</p>",
            cell(&pair.player1),
            cell(&pair.player2)
        ));
    }
    out
}

pub fn progress(chart: &ProgressChart, player: &PlayerQuery) -> String {
    format!(
        "<h2>Progress for {player}</h2><img src=\"{}\" alt=\"Score progress for {player}\">",
        chart.image
    )
}

pub fn update_ack(ack: &UpdateAck) -> String {
    format!("<p>{}</p>", ack.message)
}

/// The single user-visible failure rendering: one red paragraph replacing
/// whatever the region held.
pub fn error_message(message: &str) -> String {
    format!("<p style=\"color: red;\">{message}</p>")
}
