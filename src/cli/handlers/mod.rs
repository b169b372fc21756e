mod init;
pub use init::cmd_init_config;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::model::{AppState, GroupId};
use crate::ops::state_ops::find_group;
use crate::util::unicode;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("group not found: {0}")]
    GroupNotFound(u64),
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run a subcommand. Read commands work over the seed state, since nothing
/// outlives a session.
pub fn dispatch(command: Commands, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::seed();

    match command {
        Commands::List(args) => cmd_list(&state, args, json),
        Commands::Groups => cmd_groups(&state, json),
        Commands::InitConfig(args) => cmd_init_config(args),
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(state: &AppState, args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let groups = match args.group {
        Some(id) => {
            let group = find_group(state, GroupId(id)).ok_or(CliError::GroupNotFound(id))?;
            vec![group]
        }
        None => state.groups.iter().collect(),
    };
    log::debug!("event=cli_list groups={}", groups.len());

    if json {
        let trees: Vec<GroupTreeJson> = groups
            .iter()
            .map(|g| group_tree_to_json(state, g))
            .collect();
        println!("{}", serde_json::to_string_pretty(&trees)?);
    } else if groups.is_empty() {
        println!("No groups yet");
    } else {
        let blocks: Vec<String> = groups.iter().map(|g| format_group_tree(state, g)).collect();
        println!("{}", blocks.join("\n\n"));
    }
    Ok(())
}

fn cmd_groups(state: &AppState, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let summaries: Vec<GroupSummaryJson> = state
            .groups
            .iter()
            .map(|g| group_summary_to_json(state, g))
            .collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    for line in format_groups_table(state) {
        println!("{}", line);
    }
    Ok(())
}

/// `id  name  done` table, name column sized by display width
fn format_groups_table(state: &AppState) -> Vec<String> {
    let name_w = state
        .groups
        .iter()
        .map(|g| unicode::display_width(&g.name))
        .max()
        .unwrap_or(0)
        .max(4); // "name"
    let mut lines = vec![format!(
        "{:>4}  {}  done",
        "id",
        unicode::pad_to_width("name", name_w)
    )];
    for group in &state.groups {
        let summary = group_summary_to_json(state, group);
        lines.push(format!(
            "{:>4}  {}  {}/{}",
            summary.id,
            unicode::pad_to_width(&summary.name, name_w),
            summary.done,
            summary.total
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_group_is_an_error() {
        let state = AppState::seed();
        let err = cmd_list(&state, ListArgs { group: Some(9) }, false).unwrap_err();
        assert_eq!(err.to_string(), "group not found: 9");
    }

    #[test]
    fn known_group_lists() {
        let state = AppState::seed();
        assert!(cmd_list(&state, ListArgs { group: Some(1) }, true).is_ok());
    }

    #[test]
    fn groups_table_aligns_wide_names() {
        let mut state = AppState::seed();
        state.groups[0].name = "Café".into();
        state.groups[1].name = "日本".into();
        let lines = format_groups_table(&state);
        assert_eq!(lines[0], "  id  name  done");
        assert_eq!(lines[1], "   1  Café  0/1");
        assert_eq!(lines[2], "   2  日本  1/1");
    }

    #[test]
    fn dispatch_runs_read_commands() {
        assert!(dispatch(Commands::Groups, true).is_ok());
        let err = dispatch(Commands::List(ListArgs { group: Some(5) }), false).unwrap_err();
        assert_eq!(err.to_string(), "group not found: 5");
    }
}
