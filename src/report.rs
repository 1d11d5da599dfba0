use chrono::{DateTime, Utc};
use std::io::{self, Write};

use kubedeck::error::FetchError;
use kubedeck::models::{ResourceItem, ResourceKind};
use kubedeck::nav::Sidebar;
use kubedeck::page::{DerivedView, ExpansionState, NamespaceCounts, OverviewView};
use kubedeck::utils::{format_count, format_ratio};

pub fn write_header(
    out: &mut dyn Write,
    sidebar: &Sidebar,
    namespace: &str,
    last_fetched: Option<DateTime<Utc>>,
) -> io::Result<()> {
    writeln!(out, "{}", sidebar.render())?;
    writeln!(out)?;
    write!(out, "{}  (namespace: {})", sidebar.active().label(), namespace)?;
    if let Some(at) = last_fetched {
        write!(out, "  fetched {}", at.format("%Y-%m-%d %H:%M:%S UTC"))?;
    }
    writeln!(out)
}

fn write_counts(
    out: &mut dyn Write,
    label: &str,
    counts: &NamespaceCounts,
    readiness: bool,
) -> io::Result<()> {
    if readiness {
        writeln!(
            out,
            "{:<14} total {:>6}   running {:>6}   unavailable {:>6}",
            label,
            format_count(counts.total),
            format_count(counts.running),
            format_count(counts.unavailable)
        )?;
    } else {
        writeln!(out, "{:<14} total {:>6}", label, format_count(counts.total))?;
    }

    if let Some(anomaly) = &counts.anomaly {
        writeln!(out, "  warning: {}", anomaly)?;
    }
    Ok(())
}

pub fn write_list<T: ResourceItem>(
    out: &mut dyn Write,
    kind: ResourceKind,
    view: &DerivedView<T>,
    readiness: bool,
    expansion: ExpansionState,
) -> io::Result<()> {
    write_counts(out, kind.label(), &view.counts, readiness)?;
    writeln!(out)?;

    if view.items.is_empty() {
        writeln!(out, "No {} Found", kind.label())?;
        if kind.is_namespaced() {
            writeln!(
                out,
                "There are no {} in the \"{}\" namespace",
                kind.label().to_lowercase(),
                view.namespace
            )?;
        }
        return Ok(());
    }

    let rows: Vec<Vec<(&'static str, String)>> = view.items.iter().map(T::columns).collect();
    let headers: Vec<&str> = rows[0].iter().map(|(name, _)| *name).collect();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (i, (_, value)) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(value.chars().count());
            }
        }
    }

    let marker_width = if T::EXPANDABLE { 2 } else { 0 };
    write!(out, "{:marker_width$}", "")?;
    for (header, width) in headers.iter().zip(&widths) {
        write!(out, "{:<width$}  ", header, width = width)?;
    }
    writeln!(out)?;

    for (index, (item, row)) in view.items.iter().zip(&rows).enumerate() {
        let expanded = T::EXPANDABLE && expansion.is_expanded(index);
        if T::EXPANDABLE {
            write!(out, "{} ", if expanded { "v" } else { ">" })?;
        }
        for ((_, value), width) in row.iter().zip(&widths) {
            write!(out, "{:<width$}  ", value, width = width)?;
        }
        writeln!(out)?;

        if expanded {
            for line in item.details() {
                writeln!(out, "    {}", line)?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "{} {}", view.items.len(), kind.label().to_lowercase())
}

pub fn write_overview(out: &mut dyn Write, view: &OverviewView) -> io::Result<()> {
    writeln!(out, "{:<14} total {:>6}", "Namespaces", format_count(view.namespaces))?;
    write_counts(out, "Nodes", &view.nodes, true)?;
    writeln!(out, "{:<14} ready {}", "", format_ratio(view.nodes.running, view.nodes.total))?;

    let sections = [
        ("Pods", &view.pods, true),
        ("Services", &view.services, false),
        ("Ingress", &view.ingress, false),
        ("Secrets", &view.secrets, false),
        ("Config Maps", &view.config_maps, false),
    ];
    for (label, counts, readiness) in sections {
        match counts {
            Some(counts) => write_counts(out, label, counts, readiness)?,
            None => writeln!(out, "{:<14} no data", label)?,
        }
    }
    Ok(())
}

pub fn write_no_data(out: &mut dyn Write, kind: ResourceKind) -> io::Result<()> {
    writeln!(out, "No Data Available")?;
    writeln!(out, "Unable to fetch {} information", kind.label().to_lowercase())
}

pub fn write_error(out: &mut dyn Write, err: &FetchError) -> io::Result<()> {
    writeln!(out, "Error Loading Data")?;
    writeln!(out, "{}", err)?;
    if !matches!(err, FetchError::AuthExpired) {
        writeln!(out, "Retry with --refresh")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kubedeck::models::PodInfo;

    fn pod(name: &str) -> PodInfo {
        PodInfo {
            name: name.to_string(),
            namespace: "default".to_string(),
            status: "Running".to_string(),
            ..Default::default()
        }
    }

    fn render(view: &DerivedView<PodInfo>, expansion: ExpansionState) -> String {
        let mut out = Vec::new();
        write_list(&mut out, ResourceKind::Pods, view, true, expansion).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_with_expanded_row() {
        let view = DerivedView {
            namespace: "default".to_string(),
            counts: NamespaceCounts {
                total: 2,
                running: 2,
                unavailable: 0,
                anomaly: None,
            },
            items: vec![pod("api"), pod("worker")],
        };

        let output = render(&view, ExpansionState::ExpandedAt(1));
        assert!(output.contains("running      2"));
        assert!(output.contains("> api"));
        assert!(output.contains("v worker"));
        assert!(output.contains("No container information available"));
        assert!(output.ends_with("2 pods\n"));
    }

    #[test]
    fn test_empty_namespace() {
        let view: DerivedView<PodInfo> = DerivedView {
            namespace: "monitoring".to_string(),
            counts: NamespaceCounts::default(),
            items: Vec::new(),
        };

        let output = render(&view, ExpansionState::Collapsed);
        assert!(output.contains("No Pods Found"));
        assert!(output.contains("no pods in the \"monitoring\" namespace"));
    }

    #[test]
    fn test_auth_error_has_no_retry_hint() {
        let mut out = Vec::new();
        write_error(&mut out, &FetchError::AuthExpired).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("session expired"));
        assert!(!output.contains("--refresh"));
    }
}
