//! App state and core application logic
//!
//! Manages the three-screen navigation flow, the home grid's focus
//! tracking, and keyboard routing. All state mutation happens here, on the
//! UI loop; async work reports back through messages.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::{CatalogEntry, CatalogLoadState, PlaybackState, StatusEvent};

// =============================================================================
// Screens
// =============================================================================

/// Current screen with its navigation payload
///
/// The flow is strictly forward: Home pushes Details with the selected
/// entry, Details pushes Player with the same entry. There is no
/// Home-to-Player transition. Back is a plain stack pop.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Details(CatalogEntry),
    Player(CatalogEntry),
}

impl Screen {
    /// Payload carried by the current screen, if any
    pub fn entry(&self) -> Option<&CatalogEntry> {
        match self {
            Screen::Home => None,
            Screen::Details(entry) | Screen::Player(entry) => Some(entry),
        }
    }
}

// =============================================================================
// Focus Tracker
// =============================================================================

/// Tracks which single catalog entry currently has input focus.
///
/// Focus is kept by id so it survives list updates; an id that is no longer
/// in the loaded sequence simply reports no focus (self-healing).
#[derive(Debug, Clone, Default)]
pub struct FocusTracker {
    focused: Option<String>,
}

impl FocusTracker {
    pub fn set_focus(&mut self, id: impl Into<String>) {
        self.focused = Some(id.into());
    }

    /// Blur that only clears when `id` is the currently focused entry.
    ///
    /// A stale blur arriving after a newer focus must not clobber it.
    pub fn clear_focus(&mut self, id: &str) {
        if self.focused.as_deref() == Some(id) {
            self.focused = None;
        }
    }

    pub fn focused_id(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Focused id, but only if it still exists in `entries`
    pub fn effective_focus(&self, entries: &[CatalogEntry]) -> Option<&str> {
        self.focused
            .as_deref()
            .filter(|id| entries.iter().any(|e| e.id == *id))
    }

    /// Whether `id` is effectively focused given the current entries
    pub fn is_focused(&self, id: &str, entries: &[CatalogEntry]) -> bool {
        self.effective_focus(entries) == Some(id)
    }
}

// =============================================================================
// Grid Selection State
// =============================================================================

/// Selection state for the home catalog grid
#[derive(Debug, Clone)]
pub struct GridState {
    /// Currently selected index (reading order)
    pub selected: usize,
    /// First visible row
    pub offset: usize,
    /// Total number of items
    pub len: usize,
    /// Fixed column count
    pub columns: usize,
}

impl GridState {
    pub fn new(columns: usize) -> Self {
        Self {
            selected: 0,
            offset: 0,
            len: 0,
            columns: columns.max(1),
        }
    }

    /// Row of the selected item
    pub fn row(&self) -> usize {
        self.selected / self.columns
    }

    /// Column of the selected item
    pub fn col(&self) -> usize {
        self.selected % self.columns
    }

    /// Total number of rows
    pub fn rows(&self) -> usize {
        self.len.div_ceil(self.columns)
    }

    pub fn left(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn right(&mut self) {
        if self.len > 0 && self.selected < self.len - 1 {
            self.selected += 1;
        }
    }

    pub fn up(&mut self) {
        if self.selected >= self.columns {
            self.selected -= self.columns;
        }
    }

    pub fn down(&mut self) {
        let next = self.selected + self.columns;
        if next < self.len {
            self.selected = next;
        }
    }

    /// Jump to first item
    pub fn first(&mut self) {
        self.selected = 0;
        self.offset = 0;
    }

    /// Jump to last item
    pub fn last(&mut self) {
        if self.len > 0 {
            self.selected = self.len - 1;
        }
    }

    /// Update offset to keep the selected row visible
    pub fn scroll_into_view(&mut self, visible_rows: usize) {
        if visible_rows == 0 {
            return;
        }
        let row = self.row();
        if row < self.offset {
            self.offset = row;
        } else if row >= self.offset + visible_rows {
            self.offset = row - visible_rows + 1;
        }
    }

    /// Update length (e.g., when a new catalog comes in)
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        // Clamp selected to valid range
        if len == 0 {
            self.selected = 0;
            self.offset = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

// =============================================================================
// Home Screen State
// =============================================================================

/// Home view state: load lifecycle, grid selection, and id-based focus
#[derive(Debug, Clone)]
pub struct HomeState {
    pub load: CatalogLoadState,
    pub grid: GridState,
    pub focus: FocusTracker,
}

impl HomeState {
    pub fn new(columns: usize) -> Self {
        Self {
            load: CatalogLoadState::Loading,
            grid: GridState::new(columns),
            focus: FocusTracker::default(),
        }
    }

    /// Replace the load state wholesale and re-sync selection and focus
    pub fn set_load_state(&mut self, state: CatalogLoadState) {
        self.load = state;
        let len = self.load.entries().map(<[_]>::len).unwrap_or(0);
        self.grid.set_len(len);
        self.refocus();
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        self.load.entries().unwrap_or_default()
    }

    pub fn selected_entry(&self) -> Option<&CatalogEntry> {
        self.entries().get(self.grid.selected)
    }

    pub fn move_left(&mut self) {
        self.grid.left();
        self.refocus();
    }

    pub fn move_right(&mut self) {
        self.grid.right();
        self.refocus();
    }

    pub fn move_up(&mut self) {
        self.grid.up();
        self.refocus();
    }

    pub fn move_down(&mut self) {
        self.grid.down();
        self.refocus();
    }

    pub fn move_first(&mut self) {
        self.grid.first();
        self.refocus();
    }

    pub fn move_last(&mut self) {
        self.grid.last();
        self.refocus();
    }

    /// Point the focus tracker at the grid selection.
    ///
    /// With nothing selectable the old id is left in place; the tracker's
    /// effective-focus check reports none for ids that are gone.
    fn refocus(&mut self) {
        let id = self.selected_entry().map(|entry| entry.id.clone());
        if let Some(id) = id {
            self.focus.set_focus(id);
        }
    }
}

// =============================================================================
// Main Application State
// =============================================================================

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Current screen
    pub screen: Screen,
    /// Navigation history stack
    pub nav_stack: Vec<Screen>,
    /// Whether the app is running
    pub running: bool,

    /// Home screen state
    pub home: HomeState,
    /// Play button focus on the details screen
    pub play_focused: bool,
    /// Player screen state, driven by status events
    pub playback: PlaybackState,

    /// Set when the user asks for a catalog reload; drained by the loop
    reload_requested: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(3)
    }
}

impl App {
    /// Create a new App with the given home grid column count
    pub fn new(columns: usize) -> Self {
        Self {
            screen: Screen::Home,
            nav_stack: Vec::new(),
            running: true,
            home: HomeState::new(columns),
            play_focused: true,
            playback: PlaybackState::default(),
            reload_requested: false,
        }
    }

    /// Navigate to a new screen, pushing the current one
    pub fn navigate(&mut self, screen: Screen) {
        if self.screen != screen {
            let prev = std::mem::replace(&mut self.screen, screen);
            self.nav_stack.push(prev);
        }
    }

    /// Go back to the previous screen
    pub fn back(&mut self) -> bool {
        if let Some(prev) = self.nav_stack.pop() {
            self.screen = prev;
            true
        } else {
            false
        }
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Select the focused entry on Home, pushing Details with it.
    ///
    /// Only defined on the home screen; the entry travels by value.
    pub fn select_entry(&mut self) -> bool {
        if !matches!(self.screen, Screen::Home) {
            return false;
        }
        let Some(entry) = self.home.selected_entry().cloned() else {
            return false;
        };
        self.play_focused = true;
        self.navigate(Screen::Details(entry));
        true
    }

    /// Start playback of the details entry, pushing Player with it.
    ///
    /// Only defined on the details screen; the identical entry value is
    /// carried forward.
    pub fn play(&mut self) -> bool {
        let Screen::Details(entry) = &self.screen else {
            return false;
        };
        let entry = entry.clone();
        self.playback = PlaybackState::default();
        self.navigate(Screen::Player(entry));
        true
    }

    /// Apply a settled catalog outcome to the home screen
    pub fn apply_catalog(&mut self, state: CatalogLoadState) {
        self.home.set_load_state(state);
    }

    /// Apply one playback status event
    pub fn apply_status(&mut self, event: &StatusEvent) {
        self.playback.apply(event);
    }

    /// True when the current screen is the player
    pub fn is_playing(&self) -> bool {
        matches!(self.screen, Screen::Player(_))
    }

    /// Consume a pending reload request
    pub fn take_reload_request(&mut self) -> bool {
        std::mem::take(&mut self.reload_requested)
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle keyboard event, returns true if event was consumed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Global quit shortcut (Ctrl+C or q)
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return true;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                return true;
            }
            KeyCode::Esc | KeyCode::Backspace => {
                return self.back();
            }
            _ => {}
        }

        match &self.screen {
            Screen::Home => self.handle_home_key(key),
            Screen::Details(_) => self.handle_details_key(key),
            Screen::Player(_) => self.handle_player_key(key),
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.home.move_left();
                true
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.home.move_right();
                true
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.home.move_up();
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.home.move_down();
                true
            }
            KeyCode::Home => {
                self.home.move_first();
                true
            }
            KeyCode::End => {
                self.home.move_last();
                true
            }
            KeyCode::Enter => self.select_entry(),
            KeyCode::Char('r') => {
                // Restart the whole load state machine
                self.home.set_load_state(CatalogLoadState::Loading);
                self.reload_requested = true;
                true
            }
            _ => false,
        }
    }

    fn handle_details_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter | KeyCode::Char('p') => self.play(),
            _ => false,
        }
    }

    fn handle_player_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            // Stop: pop back to details; the loop drops the session
            KeyCode::Char('s') => self.back(),
            _ => false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
