use std::time::Instant;

use ratatui::{
    layout::Rect,
    prelude::{Backend, Frame},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use unicode_width::UnicodeWidthChar;

use crate::fade::TRANSPARENT;
use crate::layout::{LayoutEngine, WordWrapLayout};
use crate::ui::model::OverlayModel;

use super::theme::{UI_MARGIN, app_background_style, text_style};

pub fn draw_frame<B: Backend>(
    f: &mut Frame<'_, B>,
    model: &OverlayModel,
    wrap_width: usize,
    now: Instant,
    no_color: bool,
) {
    let size = f.size();
    f.render_widget(Block::default().style(app_background_style(no_color)), size);

    let inner = inset(size);
    let lines = overlay_lines(model, wrap_width, now, no_color);
    let visible = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .min(inner.height);
    let skipped = lines.len().saturating_sub(usize::from(visible));
    let area = Rect::new(
        inner.x,
        inner.y.saturating_add(inner.height.saturating_sub(visible)),
        inner.width,
        visible,
    );

    let paragraph = Paragraph::new(lines.into_iter().skip(skipped).collect::<Vec<_>>())
        .style(app_background_style(no_color))
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(paragraph, area);
}

/// Usable overlay area after the outer margin.
pub(super) const fn inset(size: Rect) -> Rect {
    let double = UI_MARGIN.saturating_mul(2);
    Rect {
        x: size.x.saturating_add(UI_MARGIN),
        y: size.y.saturating_add(UI_MARGIN),
        width: size.width.saturating_sub(double),
        height: size.height.saturating_sub(double),
    }
}

/// Wraps the window text at `width` and styles each char by its current alpha.
///
/// Runs of equal alpha share one styled span. Fully transparent text is drawn
/// as blanks of the same width so wrapping stays stable during a fade.
pub(crate) fn overlay_lines(
    model: &OverlayModel,
    width: usize,
    now: Instant,
    no_color: bool,
) -> Vec<Line<'static>> {
    let text = model.window().text();
    let layout = WordWrapLayout.measure(text, width);

    layout
        .lines(text)
        .into_iter()
        .map(|(line_start, line)| {
            let mut spans = Vec::new();
            let mut run = String::new();
            let mut run_alpha: Option<u8> = None;

            for (index, ch) in line.char_indices() {
                let alpha = model.alpha_at(line_start.saturating_add(index), now);
                if run_alpha.is_some_and(|current| current != alpha) {
                    spans.push(styled_run(std::mem::take(&mut run), run_alpha, no_color));
                }
                run_alpha = Some(alpha);
                if alpha == TRANSPARENT {
                    let blanks = ch.width().unwrap_or(0);
                    run.extend(std::iter::repeat_n(' ', blanks));
                } else {
                    run.push(ch);
                }
            }
            if !run.is_empty() {
                spans.push(styled_run(run, run_alpha, no_color));
            }

            Line::from(spans)
        })
        .collect()
}

fn styled_run(content: String, alpha: Option<u8>, no_color: bool) -> Span<'static> {
    Span::styled(content, text_style(no_color, alpha.unwrap_or(TRANSPARENT)))
}
