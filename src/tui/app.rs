use std::collections::HashSet;
use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::forms::{ConfirmPrompt, DeleteTarget, GroupForm, TaskForm};
use crate::model::{AppConfig, AppState, Group, GroupId, Task, TaskId};
use crate::ops::ids::IdAllocator;
use crate::ops::intent::{Intent, reduce};
use crate::ops::state_ops::{find_group, find_task, tasks_for_group};

use super::input;
use super::render;
use super::theme::Theme;

/// The modal dialog currently open, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Group(GroupForm),
    Task(TaskForm),
    Confirm(ConfirmPrompt),
}

/// A row in the tree view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlatItem {
    Group { group_id: GroupId, expanded: bool },
    Task { task_id: TaskId, group_id: GroupId },
    /// "No tasks in this group" under an expanded empty group. Not selectable.
    Empty { group_id: GroupId },
}

impl FlatItem {
    pub fn is_selectable(&self) -> bool {
        !matches!(self, FlatItem::Empty { .. })
    }
}

/// Main application state. Owns the only `AppState`; everything else here
/// is ephemeral UI state.
pub struct App {
    pub state: AppState,
    pub ids: IdAllocator,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Groups start expanded; this records the ones the user folded
    pub collapsed: HashSet<GroupId>,
    /// Index into `build_flat_items()`
    pub cursor: usize,
    pub scroll_offset: usize,
    pub dialog: Option<Dialog>,
    pub show_help: bool,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(state: AppState, config: &AppConfig) -> Self {
        App {
            ids: IdAllocator::from_state(&state),
            state,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            collapsed: HashSet::new(),
            cursor: 0,
            scroll_offset: 0,
            dialog: None,
            show_help: false,
            status_message: None,
            should_quit: false,
        }
    }

    /// Apply an intent. The next state is computed in full and swapped in
    /// with one assignment.
    pub fn dispatch(&mut self, intent: Intent) {
        let description = intent.to_string();
        let next = reduce(&self.state, intent);
        if next == self.state {
            log::debug!("event=noop {}", description);
        } else {
            log::info!("event=transition {}", description);
        }
        self.state = next;
        self.collapsed
            .retain(|id| self.state.groups.iter().any(|g| g.id == *id));
        self.clamp_cursor();
    }

    pub fn is_expanded(&self, group_id: GroupId) -> bool {
        !self.collapsed.contains(&group_id)
    }

    /// Build the flat list of visible rows
    pub fn build_flat_items(&self) -> Vec<FlatItem> {
        let mut items = Vec::new();
        for group in &self.state.groups {
            let expanded = self.is_expanded(group.id);
            items.push(FlatItem::Group {
                group_id: group.id,
                expanded,
            });
            if !expanded {
                continue;
            }
            let before = items.len();
            items.extend(tasks_for_group(&self.state, group.id).map(|t| FlatItem::Task {
                task_id: t.id,
                group_id: group.id,
            }));
            if items.len() == before {
                items.push(FlatItem::Empty { group_id: group.id });
            }
        }
        items
    }

    pub fn selected_item(&self) -> Option<FlatItem> {
        self.build_flat_items().get(self.cursor).copied()
    }

    pub fn selected_group(&self) -> Option<&Group> {
        match self.selected_item()? {
            FlatItem::Group { group_id, .. } => find_group(&self.state, group_id),
            _ => None,
        }
    }

    pub fn selected_task(&self) -> Option<&Task> {
        match self.selected_item()? {
            FlatItem::Task { task_id, .. } => find_task(&self.state, task_id),
            _ => None,
        }
    }

    /// Move the cursor by `delta` selectable rows, stopping at the ends
    pub fn move_cursor(&mut self, delta: isize) {
        let items = self.build_flat_items();
        let mut idx = self.cursor;
        let mut remaining = delta.unsigned_abs();
        while remaining > 0 {
            let next = if delta > 0 {
                (idx + 1..items.len()).find(|&i| items[i].is_selectable())
            } else {
                (0..idx).rev().find(|&i| items[i].is_selectable())
            };
            match next {
                Some(i) => idx = i,
                None => break,
            }
            remaining -= 1;
        }
        self.cursor = idx;
    }

    pub fn cursor_to_top(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_to_bottom(&mut self) {
        let items = self.build_flat_items();
        self.cursor = items
            .iter()
            .rposition(|item| item.is_selectable())
            .unwrap_or(0);
    }

    /// Keep the cursor in range and off non-selectable rows
    pub fn clamp_cursor(&mut self) {
        let items = self.build_flat_items();
        if items.is_empty() {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.min(items.len() - 1);
        if !items[self.cursor].is_selectable() {
            // An Empty row always follows its group header
            self.cursor = (0..self.cursor)
                .rev()
                .find(|&i| items[i].is_selectable())
                .unwrap_or(0);
        }
    }

    pub fn set_expanded(&mut self, group_id: GroupId, expanded: bool) {
        if expanded {
            self.collapsed.remove(&group_id);
        } else {
            self.collapsed.insert(group_id);
        }
        self.clamp_cursor();
    }

    pub fn toggle_expanded(&mut self, group_id: GroupId) {
        let expanded = self.is_expanded(group_id);
        self.set_expanded(group_id, !expanded);
    }

    pub fn select_group(&mut self, group_id: GroupId) {
        if let Some(idx) = self.build_flat_items().iter().position(
            |item| matches!(item, FlatItem::Group { group_id: id, .. } if *id == group_id),
        ) {
            self.cursor = idx;
        }
    }

    pub fn select_task(&mut self, task_id: TaskId) {
        if let Some(idx) = self.build_flat_items().iter().position(
            |item| matches!(item, FlatItem::Task { task_id: id, .. } if *id == task_id),
        ) {
            self.cursor = idx;
        }
    }

    // -----------------------------------------------------------------------
    // Dialogs
    // -----------------------------------------------------------------------

    pub fn open_create_group(&mut self) {
        self.dialog = Some(Dialog::Group(GroupForm::create()));
    }

    pub fn open_create_task(&mut self) {
        if self.state.groups.is_empty() {
            self.status_message = Some("create a group first".to_string());
            return;
        }
        self.dialog = Some(Dialog::Task(TaskForm::create(&self.state.groups)));
    }

    /// Open the editor for whatever row is selected
    pub fn open_edit_selected(&mut self) {
        let dialog = match self.selected_item() {
            Some(FlatItem::Group { group_id, .. }) => {
                find_group(&self.state, group_id).map(|g| Dialog::Group(GroupForm::edit(g)))
            }
            Some(FlatItem::Task { task_id, .. }) => find_task(&self.state, task_id)
                .map(|t| Dialog::Task(TaskForm::edit(t, &self.state.groups))),
            _ => None,
        };
        if dialog.is_some() {
            self.dialog = dialog;
        }
    }

    pub fn open_delete_selected(&mut self) {
        let target = match self.selected_item() {
            Some(FlatItem::Group { group_id, .. }) => DeleteTarget::Group(group_id),
            Some(FlatItem::Task { task_id, .. }) => DeleteTarget::Task(task_id),
            _ => return,
        };
        self.dialog = Some(Dialog::Confirm(ConfirmPrompt::for_target(target)));
    }

    /// Store a group emitted by the group editor
    pub fn save_group(&mut self, group: Group, is_edit: bool) {
        let verb = if is_edit { "updated" } else { "created" };
        self.status_message = Some(format!("{} group \"{}\"", verb, group.name));
        let id = group.id;
        self.dispatch(Intent::UpsertGroup(group));
        self.select_group(id);
    }

    /// Store a task emitted by the task editor, revealing it in its group
    pub fn save_task(&mut self, task: Task, is_edit: bool) {
        let verb = if is_edit { "updated" } else { "created" };
        self.status_message = Some(format!("{} task \"{}\"", verb, task.name));
        let (id, group_id) = (task.id, task.group_id);
        self.dispatch(Intent::UpsertTask(task));
        self.set_expanded(group_id, true);
        self.select_task(id);
    }

    /// Carry out a confirmed delete
    pub fn confirm_delete(&mut self, prompt: &ConfirmPrompt) {
        self.status_message = Some(match prompt.target {
            DeleteTarget::Group(id) => match find_group(&self.state, id) {
                Some(g) => format!("deleted group \"{}\"", g.name),
                None => "group already gone".to_string(),
            },
            DeleteTarget::Task(id) => match find_task(&self.state, id) {
                Some(t) => format!("deleted task \"{}\"", t.name),
                None => "task already gone".to_string(),
            },
        });
        self.dispatch(prompt.confirm());
    }

    pub fn toggle_selected_done(&mut self) {
        if let Some(task) = self.selected_task() {
            let id = task.id;
            self.dispatch(Intent::ToggleTaskDone(id));
        }
    }
}

/// Run the TUI over a fresh seed state
pub fn run(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(AppState::seed(), config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Restore the terminal before the default hook prints the panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    log::info!(
        "event=tui_start groups={} tasks={}",
        app.state.groups.len(),
        app.state.tasks.len()
    );
    let result = run_event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    log::info!("event=tui_exit");

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;

    fn seed_app() -> App {
        App::new(AppState::seed(), &AppConfig::default())
    }

    #[test]
    fn test_flat_items_seed() {
        let app = seed_app();
        let items = app.build_flat_items();
        assert_eq!(
            items,
            vec![
                FlatItem::Group {
                    group_id: GroupId(1),
                    expanded: true
                },
                FlatItem::Task {
                    task_id: TaskId(1),
                    group_id: GroupId(1)
                },
                FlatItem::Group {
                    group_id: GroupId(2),
                    expanded: true
                },
                FlatItem::Task {
                    task_id: TaskId(2),
                    group_id: GroupId(2)
                },
            ]
        );
    }

    #[test]
    fn test_collapse_hides_tasks() {
        let mut app = seed_app();
        app.toggle_expanded(GroupId(1));
        let items = app.build_flat_items();
        assert_eq!(items.len(), 3);
        assert_eq!(
            items[0],
            FlatItem::Group {
                group_id: GroupId(1),
                expanded: false
            }
        );
    }

    #[test]
    fn test_empty_group_placeholder_is_skipped() {
        let mut app = seed_app();
        app.dispatch(Intent::UpsertGroup(Group::new(GroupId(3), "Empty")));
        app.dispatch(Intent::UpsertGroup(Group::new(GroupId(4), "Last")));
        app.select_group(GroupId(3));
        assert_eq!(app.cursor, 4);
        app.move_cursor(1);
        assert_eq!(app.selected_group().map(|g| g.id), Some(GroupId(4)));
        app.move_cursor(-1);
        assert_eq!(app.selected_group().map(|g| g.id), Some(GroupId(3)));
    }

    #[test]
    fn test_cursor_stops_at_ends() {
        let mut app = seed_app();
        app.move_cursor(-3);
        assert_eq!(app.cursor, 0);
        app.move_cursor(10);
        assert_eq!(app.cursor, 3);
        app.cursor_to_top();
        assert_eq!(app.cursor, 0);
        app.cursor_to_bottom();
        assert_eq!(app.cursor, 3);
    }

    #[test]
    fn test_delete_group_clamps_cursor() {
        let mut app = seed_app();
        app.cursor_to_bottom();
        app.dispatch(Intent::DeleteGroup(GroupId(2)));
        assert_eq!(app.state.groups.len(), 1);
        assert_eq!(app.cursor, 1);
        assert!(app.selected_task().is_some());
    }

    #[test]
    fn test_dispatch_noop_keeps_state() {
        let mut app = seed_app();
        let before = app.state.clone();
        app.dispatch(Intent::ToggleTaskDone(TaskId(999)));
        assert_eq!(app.state, before);
    }

    #[test]
    fn test_new_task_refused_without_groups() {
        let mut app = App::new(AppState::default(), &AppConfig::default());
        app.open_create_task();
        assert!(app.dialog.is_none());
        assert_eq!(app.status_message.as_deref(), Some("create a group first"));
    }

    #[test]
    fn test_save_task_reveals_collapsed_group() {
        let mut app = seed_app();
        app.toggle_expanded(GroupId(2));
        let task = Task::new(TaskId(3), "New", Difficulty::Medium, GroupId(2));
        app.save_task(task, false);
        assert!(app.is_expanded(GroupId(2)));
        assert_eq!(app.selected_task().map(|t| t.id), Some(TaskId(3)));
        assert_eq!(app.status_message.as_deref(), Some("created task \"New\""));
    }

    #[test]
    fn test_confirm_delete_group_message() {
        let mut app = seed_app();
        let prompt = ConfirmPrompt::for_target(DeleteTarget::Group(GroupId(2)));
        app.confirm_delete(&prompt);
        assert_eq!(app.status_message.as_deref(), Some("deleted group \"Home\""));
        assert!(app.state.tasks.iter().all(|t| t.group_id != GroupId(2)));
    }

    #[test]
    fn test_collapsed_set_forgets_deleted_groups() {
        let mut app = seed_app();
        app.toggle_expanded(GroupId(2));
        app.dispatch(Intent::DeleteGroup(GroupId(2)));
        assert!(app.collapsed.is_empty());
    }
}
