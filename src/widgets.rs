//! Ratatui rendering for formatted transaction rows.
//!
//! Hosts that draw with ratatui can embed [`TxRowWidget`] directly or take
//! the styled lines from [`row_lines`]. Colors come from the caller's
//! [`Palette`].

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::row::TxRow;
use crate::theme::{ColorRole, Palette};

/// Separator between secondary details.
const DETAIL_SEPARATOR: &str = " · ";

/// Marker for tickets that already voted or were revoked.
const VOTED_MARKER: &str = "●";

// ============================================================================
// Lines
// ============================================================================

/// Builds the styled lines for one row.
///
/// The first line holds the status icon, headline and confirmation label.
/// The second line, present only when there is something to show, holds the
/// muted secondary details.
#[must_use]
pub fn row_lines(row: &TxRow, palette: &Palette) -> Vec<Line<'static>> {
    let text = palette.resolve(ColorRole::Text);
    let accent = palette.resolve_or(row.status.color, text);

    let mut headline = vec![
        Span::styled(row.status.icon.glyph(), Style::new().fg(accent)),
        Span::raw(" "),
        Span::styled(
            row.headline.clone(),
            Style::new().fg(text).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            row.status_label.clone(),
            Style::new().fg(palette.resolve(row.status_label_color)),
        ),
    ];
    if let Some(icon) = row.status_icon {
        headline.push(Span::raw(" "));
        headline.push(Span::raw(icon.glyph()));
    }

    let mut lines = vec![Line::from(headline)];
    let details = detail_parts(row);
    if !details.is_empty() {
        lines.push(Line::styled(
            details.join(DETAIL_SEPARATOR),
            Style::new().fg(palette.resolve(ColorRole::GrayText2)),
        ));
    }
    lines
}

fn detail_parts(row: &TxRow) -> Vec<String> {
    let mix = row.mix_denomination.as_ref().map(|denomination| {
        row.mix_count
            .as_ref()
            .map_or_else(|| denomination.clone(), |count| format!("{denomination} {count}"))
    });

    [
        row.wallet_name.clone(),
        mix,
        row.secondary_amount.clone(),
        row.voted_or_revoked.then(|| VOTED_MARKER.to_string()),
        row.vote_reward.clone(),
        row.days_hint.clone(),
        row.staking_duration.clone(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

// ============================================================================
// Widget
// ============================================================================

/// Widget drawing one transaction row.
#[derive(Debug, Clone)]
pub struct TxRowWidget<'a> {
    row: &'a TxRow,
    palette: &'a Palette,
}

impl<'a> TxRowWidget<'a> {
    /// Creates a widget for a formatted row.
    #[must_use]
    pub const fn new(row: &'a TxRow, palette: &'a Palette) -> Self {
        Self { row, palette }
    }
}

impl Widget for TxRowWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(row_lines(self.row, self.palette)).render(area, buf);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TxDirection, TxFilter};
    use crate::locale::Locale;
    use crate::row::{RowLayout, format_row};
    use crate::test_utils::{StubWallet, TxMother, fixed_context};
    use insta::assert_snapshot;

    fn plain(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_voted_ticket_lines() {
        let locale = Locale::english();
        let ctx = fixed_context(&locale, RowLayout::Overview);
        let ticket = TxMother::ticket("t1");
        let wallet = StubWallet::dcr()
            .with_staking(&ticket.hash)
            .with_spender(&ticket.hash, TxMother::vote("v1"));
        let row = format_row(&wallet, &ticket, &ctx);

        let lines = row_lines(&row, &Palette::new());

        assert_snapshot!(plain(&lines), @r"
        ✓ Voted  Nov 14, 2023 at 10:03:20 PM
        Default wallet · 1 DCR · ● · +0.50 · Voted 10 minutes ago
        ");
        assert_eq!(
            lines[0].spans[0].style.fg,
            Some(ColorRole::Turquoise700.default_color())
        );
    }

    #[test]
    fn test_tx_page_regular_has_single_line() {
        let locale = Locale::english();
        let ctx = fixed_context(&locale, RowLayout::TxPage);
        let wallet = StubWallet::dcr().with_heights(1000, 20);
        let tx = TxMother::regular("r1", TxDirection::Sent, 100_000_000);
        let row = format_row(&wallet, &tx, &ctx);

        let lines = row_lines(&row, &Palette::new());

        assert_snapshot!(plain(&lines), @"↑ -1 DCR  Pending (11/20) …");
    }

    #[test]
    fn test_widget_renders_into_buffer() {
        let locale = Locale::english();
        let ctx = fixed_context(&locale, RowLayout::Overview);
        let ticket = TxMother::ticket("t1");
        let wallet = StubWallet::dcr().with_stage(&ticket.hash, TxFilter::Live);
        let row = format_row(&wallet, &ticket, &ctx);
        let palette = Palette::new();

        let area = Rect::new(0, 0, 60, 2);
        let mut buf = Buffer::empty(area);
        TxRowWidget::new(&row, &palette).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "●");
        assert_eq!(buf[(0, 0)].fg, ColorRole::Success2.default_color());
        assert_eq!(buf[(2, 0)].symbol(), "L");
    }
}
