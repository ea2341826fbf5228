use super::{Comparison, MetricRecord, Winner};
use crate::config::ReportSettings;
use crate::error::{CmpResult, CompareError};
use crate::groups::SizeGroup;
use crate::method::{Method, MetricKind, TiePolicy};
use std::str::FromStr;

const HEADER_PREFIX: &str = "# Compare ";

/// Reads a rendered comparison report back into a `Comparison`.
///
/// Method labels come from the record keys, metric kind and group from the
/// header line when present. The summary is recounted from the records.
pub fn parse_report(text: &str) -> CmpResult<Comparison> {
    let mut settings = ReportSettings::default();
    let mut group = None;
    let mut labels: Option<(Method, Method)> = None;
    let mut records = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx as u64 + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(header) = line.strip_prefix(HEADER_PREFIX) {
            if let Some((metric, g)) = parse_header(header) {
                settings.metric = metric;
                group = g;
            }
            continue;
        }
        if line.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 4 {
            return Err(CompareError::parse(
                line_no,
                format!("expected 4 columns, found {}", tokens.len()),
            ));
        }

        let id = tokens[0];
        let (key_a, value_a) = parse_pair(tokens[1], line_no)?;
        let (key_b, value_b) = parse_pair(tokens[2], line_no)?;
        let (a, b) = (parse_method(key_a, line_no)?, parse_method(key_b, line_no)?);

        match labels {
            None => labels = Some((a, b)),
            Some(known) if known != (a, b) => {
                return Err(CompareError::parse(
                    line_no,
                    format!("methods {}/{} differ from {}/{}", a, b, known.0, known.1),
                ));
            }
            Some(_) => {}
        }

        let better = tokens[3].strip_prefix("better=").ok_or_else(|| {
            CompareError::parse(line_no, format!("expected 'better=...', found '{}'", tokens[3]))
        })?;
        let winner = if better == a.to_string() {
            Winner::A
        } else if better == b.to_string() {
            Winner::B
        } else if better == "tie" {
            settings.tie_policy = TiePolicy::Separate;
            Winner::Tie
        } else {
            return Err(CompareError::parse(line_no, format!("unknown winner '{}'", better)));
        };

        records.push(MetricRecord {
            id: id.to_string(),
            value_a: parse_value(value_a, line_no)?,
            value_b: parse_value(value_b, line_no)?,
            winner,
        });
    }

    if let Some((a, b)) = labels {
        settings.method_a = a;
        settings.method_b = b;
    }

    Comparison::from_records(settings, group, records)
}

/// `RMSD results between quantum and af2 (group S)`
fn parse_header(header: &str) -> Option<(MetricKind, Option<SizeGroup>)> {
    let (noun, rest) = header.split_once(" results between ")?;
    let metric = MetricKind::from_str(noun).ok()?;
    let group = rest
        .rsplit_once(" (group ")
        .and_then(|(_, g)| g.strip_suffix(')'))
        .and_then(|g| SizeGroup::from_str(g).ok());
    Some((metric, group))
}

fn parse_pair(token: &str, line: u64) -> CmpResult<(&str, &str)> {
    token.split_once('=').ok_or_else(|| {
        CompareError::parse(line, format!("expected 'method=value', found '{}'", token))
    })
}

fn parse_method(key: &str, line: u64) -> CmpResult<Method> {
    Method::from_str(key)
        .map_err(|_| CompareError::parse(line, format!("unknown method '{}'", key)))
}

fn parse_value(raw: &str, line: u64) -> CmpResult<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CompareError::parse(line, format!("invalid metric value '{}'", raw)))
}
