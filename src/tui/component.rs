use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// Something drawn into a region of the frame.
///
/// Screen data arrives as borrowed props; `&mut self` lets a wrapper write
/// back into its persistent state (table selection, scroll offset) while
/// rendering.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Persistent component state that reacts to keys.
///
/// Keys the component fully handles itself yield `None`; anything the core
/// must hear about comes back as `Self::Event` for the loop to translate
/// into an `Action`.
pub trait EventHandler {
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
