//! Plain-text rendering of the view model.

use std::fmt::{self, Write};

use crate::core::{BankerView, SelectionRole};
use crate::rules::OperationMode;

/// Marker shown before a player's name.
fn marker(role: SelectionRole) -> &'static str {
    match role {
        SelectionRole::Primary => "[*]",
        SelectionRole::Secondary => "[1]",
        SelectionRole::Tertiary => "[2]",
        SelectionRole::Neutral => "   ",
    }
}

/// Render the view as a text block.
///
/// ```
/// use banker::cli::render_view;
/// use banker::core::{Banker, BankerConfig};
///
/// let text = render_view(&Banker::new(BankerConfig::default()).view());
/// assert!(text.contains("No players yet"));
/// ```
#[must_use]
pub fn render_view(view: &BankerView) -> String {
    let mut out = String::new();
    // Writing into a `String` cannot fail.
    let _ = write_view(&mut out, view);
    out
}

fn write_view(out: &mut String, view: &BankerView) -> fmt::Result {
    let mode = match view.mode {
        OperationMode::SingleParty => "single-party",
        OperationMode::TwoParty => "two-party",
    };

    if view.players.is_empty() {
        writeln!(out, "No players yet. Type 'setup' to start a game.")?;
    } else {
        let width = view.players.iter().map(|p| p.name.chars().count()).max().unwrap_or(0);
        writeln!(out, "Players ({mode}):")?;
        for player in &view.players {
            writeln!(
                out,
                "  {} {:<width$}  {}",
                marker(player.role),
                player.name,
                player.formatted_balance,
            )?;
        }
        writeln!(out, "  Total: {}", view.formatted_total)?;
    }
    writeln!(out, "Amount: {}", view.pending_amount)?;

    if let Some(setup) = &view.setup {
        let state = if setup.open { "open" } else { "hidden" };
        writeln!(out, "Setup ({state}):")?;
        if setup.candidates.is_empty() {
            writeln!(out, "  No players added.")?;
        }
        for candidate in &setup.candidates {
            writeln!(out, "  - {}  {}", candidate.name, candidate.formatted_balance)?;
        }
        writeln!(
            out,
            "  name: {}  balance: {}",
            setup.pending_name, setup.pending_balance
        )?;
    }

    Ok(())
}
