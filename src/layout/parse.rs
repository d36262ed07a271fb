//! Layout string reader
//!
//! Recursive descent over an explicit cursor into the input. Each production
//! rebuilds its part of the live tree as it goes: notebooks take their
//! dockables from wherever they currently are, dialogs are opened, and the
//! main window's root is replaced.
//!
//! Malformed input never aborts the whole load. The broken production reads
//! as nothing and parsing carries on; every problem is recorded in the
//! returned `LoadReport` so callers can tell the user.

use std::collections::BTreeSet;

use super::{DockManager, LinkPoint};
use crate::messages::DockEvent;
use crate::model::{Geometry, Orientation, Side, WidgetId};

// ============================================================================
// Report types
// ============================================================================

/// Kind of problem found in a layout string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseIssueKind {
    /// A bracketed production with an unknown tag
    UnknownProduction(String),
    /// A `|` was required inside a production
    MissingSeparator(&'static str),
    /// A production ran to the end of input without its `]`
    Unclosed(&'static str),
    /// Text skipped while looking for the next separator
    UnexpectedText(String),
    /// A numeric field that is not a plain integer (read as C `atoi` would)
    InvalidInteger(String),
    /// A production that names a singleton already placed earlier in the input
    Repeated(&'static str),
}

impl std::fmt::Display for ParseIssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseIssueKind::UnknownProduction(text) => write!(f, "unknown production {:?}", text),
            ParseIssueKind::MissingSeparator(tag) => write!(f, "missing '|' in [{}]", tag),
            ParseIssueKind::Unclosed(tag) => write!(f, "unclosed [{}]", tag),
            ParseIssueKind::UnexpectedText(text) => write!(f, "unexpected text {:?}", text),
            ParseIssueKind::InvalidInteger(text) => write!(f, "invalid integer {:?}", text),
            ParseIssueKind::Repeated(tag) => write!(f, "[{}] appears more than once", tag),
        }
    }
}

/// A problem and the byte offset where it was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    pub offset: usize,
    pub kind: ParseIssueKind,
}

impl std::fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "layout error at byte {}: {}", self.offset, self.kind)
    }
}

impl std::error::Error for ParseIssue {}

/// Outcome of `load_layout`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub issues: Vec<ParseIssue>,
    pub dialogs_opened: usize,
}

impl LoadReport {
    /// True when the input was well formed
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

// ============================================================================
// Cursor
// ============================================================================

/// What ended a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Separator {
    /// `|`: more fields follow
    Continue,
    /// `]`: the production is closed
    Close,
    /// Input exhausted
    End,
}

#[derive(Debug)]
struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn eat(&mut self, prefix: &str) -> bool {
        if self.rest().starts_with(prefix) {
            self.pos += prefix.len();
            true
        } else {
            false
        }
    }

    fn at_separator(&self) -> bool {
        matches!(self.rest().chars().next(), None | Some('|') | Some(']'))
    }

    /// Consume up to (not including) the next separator
    fn read_field(&mut self) -> &'a str {
        let rest = self.rest();
        let len = rest.find(['|', ']']).unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    /// Consume a bracketed group, including nested groups
    fn skip_group(&mut self) -> &'a str {
        let rest = self.rest();
        let mut depth = 0usize;
        for (i, ch) in rest.char_indices() {
            match ch {
                '[' => depth += 1,
                ']' => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        self.pos += i + 1;
                        return &rest[..=i];
                    }
                }
                _ => {}
            }
        }
        self.pos = self.input.len();
        rest
    }
}

/// C `atoi`: leading whitespace, optional sign, digits; anything else reads 0.
/// Returns the value and whether the whole field was a clean integer.
fn atoi(field: &str) -> (i32, bool) {
    let trimmed = field.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digit_len = digits.bytes().take_while(u8::is_ascii_digit).count();
    let mut value: i64 = 0;
    for byte in digits.bytes().take(digit_len) {
        value = (value * 10 + i64::from(byte - b'0')).min(i64::from(i32::MAX) + 1);
    }
    if negative {
        value = -value;
    }
    let value = value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;

    let clean = digit_len > 0 && digit_len == digits.len() && trimmed.len() == field.len();
    (value, clean)
}

// ============================================================================
// Parser
// ============================================================================

struct Parser<'a, 'm> {
    cursor: Cursor<'a>,
    manager: &'m mut DockManager,
    issues: Vec<ParseIssue>,
    /// Containers a dockable was taken out of; cleaned up once at the end
    emptied: BTreeSet<WidgetId>,
    /// Set once `[mainnotebook]` has been placed; later occurrences read as nothing
    main_notebook_taken: bool,
    dialogs_opened: usize,
}

impl<'a, 'm> Parser<'a, 'm> {
    fn new(manager: &'m mut DockManager, input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
            manager,
            issues: Vec::new(),
            emptied: BTreeSet::new(),
            main_notebook_taken: false,
            dialogs_opened: 0,
        }
    }

    fn issue(&mut self, offset: usize, kind: ParseIssueKind) {
        self.issues.push(ParseIssue { offset, kind });
    }

    /// Skip to the next `|` or `]` and consume it
    fn separator(&mut self) -> Separator {
        let start = self.cursor.pos;
        let skipped = self.cursor.read_field();
        if !skipped.is_empty() {
            self.issue(start, ParseIssueKind::UnexpectedText(skipped.to_string()));
        }
        match self.cursor.rest().chars().next() {
            Some('|') => {
                self.cursor.pos += 1;
                Separator::Continue
            }
            Some(']') => {
                self.cursor.pos += 1;
                Separator::Close
            }
            _ => Separator::End,
        }
    }

    /// Require a `|` between fields of `tag`
    fn expect_continue(&mut self, tag: &'static str) -> bool {
        let offset = self.cursor.pos;
        match self.separator() {
            Separator::Continue => true,
            Separator::Close => {
                self.issue(offset, ParseIssueKind::MissingSeparator(tag));
                false
            }
            Separator::End => {
                self.issue(offset, ParseIssueKind::Unclosed(tag));
                false
            }
        }
    }

    /// Consume the closing `]` of `tag`, also accepting `|]`
    fn close(&mut self, tag: &'static str) {
        let offset = self.cursor.pos;
        let mut separator = self.separator();
        if separator == Separator::Continue {
            separator = self.separator();
        }
        if separator != Separator::Close {
            self.issue(offset, ParseIssueKind::Unclosed(tag));
        }
    }

    fn read_int(&mut self) -> i32 {
        let offset = self.cursor.pos;
        let field = self.cursor.read_field();
        let (value, clean) = atoi(field);
        if !clean {
            self.issue(offset, ParseIssueKind::InvalidInteger(field.to_string()));
        }
        value
    }

    fn read_geometry(&mut self, tag: &'static str) -> Option<Geometry> {
        let mut values = [0i32; 4];
        for value in &mut values {
            *value = self.read_int();
            if !self.expect_continue(tag) {
                return None;
            }
        }
        let [x, y, width, height] = values;
        Some(Geometry::new(x, y, width, height))
    }

    /// widget := hor | vert | book | dialog | mainwindow | mainnotebook | ε
    fn read_widget(&mut self) -> Option<WidgetId> {
        let start = self.cursor.pos;
        if self.cursor.eat("[hor|") {
            self.read_paned(Orientation::Horizontal)
        } else if self.cursor.eat("[vert|") {
            self.read_paned(Orientation::Vertical)
        } else if self.cursor.eat("[book") {
            self.read_book()
        } else if self.cursor.eat("[dialog|") {
            self.read_dialog()
        } else if self.cursor.eat("[mainwindow|") {
            self.read_main_window()
        } else if self.cursor.eat("[mainnotebook]") {
            self.read_main_notebook(start)
        } else if self.cursor.at_separator() {
            None
        } else {
            let offset = self.cursor.pos;
            let text = if self.cursor.rest().starts_with('[') {
                self.cursor.skip_group()
            } else {
                self.cursor.read_field()
            };
            self.issue(offset, ParseIssueKind::UnknownProduction(text.to_string()));
            None
        }
    }

    fn read_paned(&mut self, orientation: Orientation) -> Option<WidgetId> {
        let tag = orientation.tag();
        let position = self.read_int();
        if !self.expect_continue(tag) {
            return None;
        }

        let first = self.read_widget();
        let offset = self.cursor.pos;
        match self.separator() {
            Separator::Continue => {}
            Separator::Close => {
                self.issue(offset, ParseIssueKind::MissingSeparator(tag));
                return first;
            }
            Separator::End => {
                self.issue(offset, ParseIssueKind::Unclosed(tag));
                return first;
            }
        }
        let second = self.read_widget();
        self.close(tag);

        match (first, second) {
            (Some(first), Some(second)) if first != second => {
                let tree = &mut self.manager.tree;
                let paned = tree.create_paned(orientation, position);
                LinkPoint::Paned {
                    paned,
                    side: Side::First,
                }
                .link(tree, first);
                LinkPoint::Paned {
                    paned,
                    side: Side::Second,
                }
                .link(tree, second);
                Some(paned)
            }
            (first, second) => first.or(second),
        }
    }

    fn read_book(&mut self) -> Option<WidgetId> {
        match self.separator() {
            Separator::Continue => {}
            Separator::Close => return None,
            Separator::End => {
                self.issue(self.cursor.pos, ParseIssueKind::Unclosed("book"));
                return None;
            }
        }

        let mut book = None;
        loop {
            let name = self.cursor.read_field();
            if !name.is_empty() {
                self.place_in_book(&mut book, name);
            }
            match self.separator() {
                Separator::Continue => continue,
                Separator::Close => break,
                Separator::End => {
                    self.issue(self.cursor.pos, ParseIssueKind::Unclosed("book"));
                    break;
                }
            }
        }
        book
    }

    /// Move a registered dockable into the notebook under construction
    fn place_in_book(&mut self, book: &mut Option<WidgetId>, name: &str) {
        let dockable = match self.manager.find_dockable(name) {
            Ok(id) => id,
            Err(e) => {
                tracing::debug!("Skipping layout entry: {}", e);
                return;
            }
        };

        let tree = &mut self.manager.tree;
        if let Some(old_parent) = tree.detach(dockable) {
            self.emptied.insert(old_parent);
        }
        let target = *book.get_or_insert_with(|| tree.create_notebook());
        tree.notebook_insert(target, dockable, None);
    }

    fn read_dialog(&mut self) -> Option<WidgetId> {
        let geometry = self.read_geometry("dialog")?;
        let child = self.read_widget();
        self.close("dialog");

        let child = child?;
        let dialog = self.manager.open_dialog(geometry);
        LinkPoint::Window(dialog).link(&mut self.manager.tree, child);
        self.dialogs_opened += 1;
        // Dialogs are roots of their own; nothing to embed upward
        None
    }

    fn read_main_window(&mut self) -> Option<WidgetId> {
        let geometry = self.read_geometry("mainwindow")?;
        let child = self.read_widget();
        self.close("mainwindow");

        let child = child?;
        let tree = &mut self.manager.tree;
        let main_window = tree.main_window();
        let root = tree.root_bin();
        if tree.parent(root).is_none() {
            LinkPoint::Window(main_window).link(tree, root);
        }
        if let Some(old_root) = LinkPoint::Bin(root).unlink(tree) {
            if old_root != tree.main_notebook() {
                tree.discard(old_root);
            }
        }
        LinkPoint::Bin(root).link(tree, child);
        tree.set_geometry(main_window, geometry);
        tree.set_visible(main_window, true);
        None
    }

    fn read_main_notebook(&mut self, offset: usize) -> Option<WidgetId> {
        if self.main_notebook_taken {
            self.issue(offset, ParseIssueKind::Repeated("mainnotebook"));
            return None;
        }
        self.main_notebook_taken = true;

        let tree = &mut self.manager.tree;
        let notebook = tree.main_notebook();
        if let Some(old_parent) = tree.detach(notebook) {
            self.emptied.insert(old_parent);
        }
        Some(notebook)
    }

    /// A non-root production at top level: keep its content visible
    fn adopt_stray(&mut self, widget: WidgetId) {
        let tree = &mut self.manager.tree;
        if widget == tree.main_notebook() && tree.root_child().is_none() {
            let root = tree.root_bin();
            LinkPoint::Bin(root).link(tree, widget);
            return;
        }
        let geometry = self.manager.next_dialog_geometry(self.manager.default_dialog_size);
        let dialog = self.manager.open_dialog(geometry);
        LinkPoint::Window(dialog).link(&mut self.manager.tree, widget);
        self.dialogs_opened += 1;
    }

    fn run(mut self) -> LoadReport {
        loop {
            if let Some(stray) = self.read_widget() {
                self.adopt_stray(stray);
            }
            match self.separator() {
                Separator::Continue => continue,
                Separator::Close => {
                    let offset = self.cursor.pos - 1;
                    self.issue(offset, ParseIssueKind::UnexpectedText("]".to_string()));
                    let trailing = self.cursor.rest();
                    if !trailing.is_empty() {
                        self.issue(
                            self.cursor.pos,
                            ParseIssueKind::UnexpectedText(trailing.to_string()),
                        );
                    }
                    break;
                }
                Separator::End => break,
            }
        }

        for container in std::mem::take(&mut self.emptied) {
            self.manager.remove_empty_container_recursive(container);
        }

        LoadReport {
            issues: self.issues,
            dialogs_opened: self.dialogs_opened,
        }
    }
}

impl DockManager {
    /// Rebuild the layout from a string produced by `save_layout`.
    ///
    /// Best effort: malformed parts read as nothing, the rest is applied. The
    /// report lists every problem found.
    pub fn load_layout(&mut self, layout: &str) -> LoadReport {
        let report = Parser::new(self, layout).run();
        for issue in &report.issues {
            tracing::warn!("{}", issue);
        }
        self.update_window_titles();
        tracing::info!(
            "Loaded layout ({} dialogs, {} issues)",
            report.dialogs_opened,
            report.issues.len()
        );
        self.events.push(DockEvent::LayoutLoaded);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atoi_semantics() {
        assert_eq!(atoi("300"), (300, true));
        assert_eq!(atoi("-12"), (-12, true));
        assert_eq!(atoi("  42"), (42, false));
        assert_eq!(atoi("12px"), (12, false));
        assert_eq!(atoi("abc"), (0, false));
        assert_eq!(atoi(""), (0, false));
        assert_eq!(atoi("99999999999"), (i32::MAX, true));
        assert_eq!(atoi("-99999999999"), (i32::MIN, true));
    }

    #[test]
    fn test_cursor_skip_group_handles_nesting() {
        let mut cursor = Cursor::new("[foo|[bar|1]|2]|rest");
        assert_eq!(cursor.skip_group(), "[foo|[bar|1]|2]");
        assert_eq!(cursor.rest(), "|rest");
    }

    #[test]
    fn test_second_main_notebook_reads_as_nothing() {
        let mut manager = DockManager::new();
        let input = "[mainwindow|0|0|1024|768|[hor|300|[mainnotebook]|[mainnotebook]]]";
        let report = manager.load_layout(input);

        let second = input.rfind("[mainnotebook]").unwrap();
        assert_eq!(
            report.issues,
            vec![ParseIssue {
                offset: second,
                kind: ParseIssueKind::Repeated("mainnotebook"),
            }]
        );
        let tree = manager.tree();
        assert_eq!(tree.root_child(), Some(tree.main_notebook()));
    }

    #[test]
    fn test_cursor_read_field_stops_at_separator() {
        let mut cursor = Cursor::new("Params|Toolbox]");
        assert_eq!(cursor.read_field(), "Params");
        assert!(cursor.at_separator());
    }
}
