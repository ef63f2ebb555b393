//! Nav command - inspect the navigation table.

use anyhow::Result;
use serde_json::{Map, Value, json};

use erp_console_core::{Badge, NavigationTable};

use crate::ui;

/// Nav command arguments.
#[derive(Debug, Clone, Default)]
pub struct NavArgs {
    /// Show protected path prefixes.
    pub protected: bool,
    /// Show sidebars.
    pub sidebars: bool,
    /// Print JSON instead of a table.
    pub json: bool,
}

/// Run the nav command.
pub fn run_nav(args: NavArgs) -> Result<()> {
    let table = NavigationTable::builtin();
    let extras = super::load_config(None)
        .map(|c| c.guard.extra_protected_paths)
        .unwrap_or_default();

    let protected: Vec<&str> = table
        .list_protected_paths()
        .into_iter()
        .chain(extras.iter().map(String::as_str))
        .collect();

    // No filter flag means the top navigation bar.
    let show_entries = !args.protected && !args.sidebars;

    if args.json {
        let mut out = Map::new();
        if show_entries {
            out.insert("entries".to_string(), json!(table.list_nav_entries()));
        }
        if args.sidebars {
            out.insert("sidebars".to_string(), json!(table.list_sidebar_configs()));
        }
        if args.protected {
            out.insert("protectedPaths".to_string(), json!(protected));
        }
        println!("{}", serde_json::to_string_pretty(&Value::Object(out))?);
        return Ok(());
    }

    if show_entries {
        ui::header("Navigation");
        ui::table_row(&[("ID", 24), ("PATH", 32), ("AUTH", 8), ("LABEL", 0)]);
        for entry in table.list_nav_entries() {
            let auth = if entry.require_auth { "yes" } else { "no" };
            ui::table_row(&[
                (entry.id.as_str(), 24),
                (entry.path.as_str(), 32),
                (auth, 8),
                (entry.label.as_str(), 0),
            ]);
        }
    }

    if args.sidebars {
        for view in table.list_sidebar_configs() {
            ui::header(&format!("{} ({})", view.config.title, view.key));
            for item in &view.config.items {
                let mut label = item.label.clone();
                if let Some(badge) = &item.badge {
                    label = format!("{label} [{}]", badge_text(badge));
                }
                if item.disabled {
                    label.push_str(" (disabled)");
                }
                ui::table_row(&[("", 2), (item.path.as_str(), 36), (label.as_str(), 0)]);
            }
        }
    }

    if args.protected {
        ui::header("Protected Paths");
        for path in &protected {
            ui::kv("prefix", path);
        }
    }

    Ok(())
}

fn badge_text(badge: &Badge) -> String {
    match badge {
        Badge::Text(text) => text.clone(),
        Badge::Count(count) => count.to_string(),
    }
}
