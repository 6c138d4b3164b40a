//! Screen Layout
//!
//! Draws a core [`Screen`] onto a ratatui frame: a bordered body titled
//! with the screen title and a one-line hint bar underneath. Body lines are
//! wrapped to the inner width so long errors stay readable.

use labcalc_core::Screen;
use ratatui::layout::{Constraint, Layout};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::theme::Theme;

/// Draw `screen` over the whole frame
pub fn draw(frame: &mut Frame, screen: &Screen, theme: &Theme) {
    let [body, footer] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(frame.area());

    let block = Block::bordered()
        .title(Span::styled(format!(" {} ", screen.title), theme.title()))
        .border_style(theme.chrome());
    let width = block.inner(body).width as usize;

    frame.render_widget(Paragraph::new(body_lines(screen, theme, width)).block(block), body);

    if let Some(hint) = &screen.hint {
        frame.render_widget(
            Paragraph::new(Span::styled(hint.clone(), theme.chrome())),
            footer,
        );
    }
}

/// Styled body lines, each screen line wrapped to `width` columns
#[must_use]
pub fn body_lines(screen: &Screen, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let width = width.max(1);
    screen
        .lines
        .iter()
        .flat_map(|line| {
            let style = theme.style_for(line.emphasis);
            textwrap::wrap(&line.text, width)
                .into_iter()
                .map(move |part| Line::styled(part.into_owned(), style))
        })
        .collect()
}
