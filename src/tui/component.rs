use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component drawn straight onto the frame.
///
/// Components receive their data as props (struct fields), usually borrowed
/// from `App`, and render within the given `Rect`. `render` takes `&mut self`
/// so a component can keep layout caches between calls.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A section body rendered inside the scrollable content pane.
///
/// The pane asks for the height first so it can size the scroll buffer,
/// then renders the view as an ordinary widget into that buffer.
pub trait SectionView: ratatui::widgets::Widget {
    /// Rows needed to show everything at the given width.
    fn height(&self, width: u16) -> u16;
}
