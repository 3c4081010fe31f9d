use nt_core::sentiment::Tone;
use nt_core::view::Card;
use nt_core::Screen;
use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Span, Spans};
use tui::widgets::{Block, Borders, Paragraph, Wrap};
use tui::Frame;

use super::app::{columns_for, rows_for, App, CARD_HEIGHT};

const FOOTER: &str = " r reload · ↑/↓ scroll · q quit ";

pub fn draw<B: Backend>(f: &mut Frame<B>, screen: &Screen, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)].as_ref())
        .split(f.size());

    match screen {
        Screen::Loading { message } => {
            let text = vec![Spans::from(vec![
                Span::styled(app.spinner(), Style::default().fg(Color::Indexed(63))),
                Span::raw(" "),
                Span::raw(*message),
            ])];
            draw_centered(f, chunks[0], text, None);
        }
        Screen::Failure { title, message, action } => {
            let text = vec![
                Spans::from(Span::styled(
                    *title,
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Spans::from(""),
                Spans::from(message.as_str()),
                Spans::from(""),
                Spans::from(Span::styled(
                    format!("[r] {}", action),
                    Style::default().add_modifier(Modifier::REVERSED),
                )),
            ];
            draw_centered(f, chunks[0], text, Some(Color::Red));
        }
        Screen::Empty { heading, tagline, message } => {
            let body = draw_header(f, chunks[0], heading, tagline);
            draw_centered(f, body, vec![Spans::from(*message)], Some(Color::Gray));
        }
        Screen::Grid { heading, tagline, cards } => draw_grid(f, chunks[0], heading, tagline, cards, app),
    }

    let footer = Paragraph::new(Spans::from(Span::styled(FOOTER, Style::default().fg(Color::DarkGray))));
    f.render_widget(footer, chunks[1]);
}

fn draw_centered<B: Backend>(f: &mut Frame<B>, area: Rect, text: Vec<Spans>, border: Option<Color>) {
    let height = (text.len() as u16 + 2).min(area.height);
    let width = 60.min(area.width);
    let rect = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let mut block = Block::default();
    if let Some(color) = border {
        block = block.borders(Borders::ALL).border_style(Style::default().fg(color));
    }
    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, rect);
}

fn draw_grid<B: Backend>(
    f: &mut Frame<B>,
    area: Rect,
    heading: &str,
    tagline: &str,
    cards: &[Card],
    app: &App,
) {
    let body = draw_header(f, area, heading, tagline);
    let columns = columns_for(body.width);
    let rows = rows_for(cards.len(), columns);
    let first_row = app.scroll.min(rows.saturating_sub(1));
    let visible_rows = (body.height / CARD_HEIGHT).max(1) as usize;
    let card_width = body.width / columns as u16;

    for (row, chunk) in cards
        .chunks(columns)
        .enumerate()
        .skip(first_row)
        .take(visible_rows)
    {
        let y = body.y + ((row - first_row) as u16) * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(body.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        for (col, card) in chunk.iter().enumerate() {
            let rect = Rect {
                x: body.x + col as u16 * card_width,
                y,
                width: card_width,
                height,
            };
            draw_card(f, rect, card);
        }
    }
}

/// Draws heading and tagline, returns the area left below them.
fn draw_header<B: Backend>(f: &mut Frame<B>, area: Rect, heading: &str, tagline: &str) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)].as_ref())
        .split(area);

    let header = Paragraph::new(vec![
        Spans::from(Span::styled(heading, Style::default().add_modifier(Modifier::BOLD))),
        Spans::from(Span::styled(tagline, Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center);
    f.render_widget(header, chunks[0]);
    chunks[1]
}

fn draw_card<B: Backend>(f: &mut Frame<B>, area: Rect, card: &Card) {
    let badge = &card.badge;
    let tone = Style::default().fg(tone_color(badge.tone));

    let text = vec![
        Spans::from(Span::styled(card.title.as_str(), Style::default().add_modifier(Modifier::BOLD))),
        Spans::from(Span::styled(format!("{} {}", badge.icon.glyph(), badge.text), tone)),
        Spans::from(card.summary.as_str()),
        Spans::from(Span::styled(
            format!("{} {}", card.link.label, card.link.href),
            Style::default().fg(Color::Indexed(63)).add_modifier(Modifier::UNDERLINED),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(format!(" {} ", card.source), Style::default().fg(Color::Gray)));
    let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Green => Color::Green,
        Tone::Red => Color::Red,
        Tone::Blue => Color::Blue,
        Tone::Gray => Color::Gray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nt_core::{render, ArticleRef, SummaryRecord, ViewState};
    use tui::backend::TestBackend;
    use tui::Terminal;

    fn draw_to_text(state: &ViewState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let app = App::default();
        let screen = render(state);
        terminal.draw(|f| draw(f, &screen, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|line| line.iter().map(|cell| cell.symbol.as_str()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_loading_screen() {
        let text = draw_to_text(&ViewState::Loading, 80, 20);
        assert!(text.contains("Loading news..."));
    }

    #[test]
    fn test_failure_screen() {
        let text = draw_to_text(&ViewState::Error { message: "boom".to_string() }, 80, 20);
        assert!(text.contains("Failed to load news"));
        assert!(text.contains("boom"));
        assert!(text.contains("Try Again"));
    }

    #[test]
    fn test_empty_screen() {
        let text = draw_to_text(&ViewState::Ready { records: vec![] }, 80, 20);
        assert!(text.contains("AI News Digest"));
        assert!(text.contains("No news summaries available"));
    }

    #[test]
    fn test_grid_screen() {
        let records = vec![
            SummaryRecord::new("1").with_sentiment("Negative").with_article(ArticleRef {
                title: Some("Storm".to_string()),
                url: Some("https://n.test/s".to_string()),
                source: Some("Wire".to_string()),
            }),
            SummaryRecord::new("2"),
        ];
        let text = draw_to_text(&ViewState::Ready { records }, 100, 30);
        assert!(text.contains("AI News Digest"));
        assert!(text.contains("Wire"));
        assert!(text.contains("Storm"));
        assert!(text.contains("Negative"));
        assert!(text.contains("Unknown Source"));
        assert!(text.contains("No Title"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let records = (0..7).map(|i| SummaryRecord::new(i.to_string())).collect();
        draw_to_text(&ViewState::Ready { records }, 10, 4);
        draw_to_text(&ViewState::Error { message: "x".repeat(500) }, 5, 2);
    }
}
