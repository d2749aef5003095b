//! TUI rendering with ratatui
//!
//! Board layout: header, solved banners, the tile grid, mistakes and messages.

use super::app::{App, MessageStyle};
use crate::core::{Category, CategoryId, MISTAKE_BUDGET, WORDS_PER_CATEGORY, Word};
use crate::game::Status;
use crate::output::formatters::{mistake_dots, tile_label};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const TILE_HEIGHT: u16 = 3;
const BANNER_HEIGHT: u16 = 4;

/// Terminal color for a category difficulty
const fn category_color(id: CategoryId) -> Color {
    match id.color() {
        crate::core::Color::Yellow => Color::Yellow,
        crate::core::Color::Green => Color::Green,
        crate::core::Color::Blue => Color::Blue,
        crate::core::Color::Purple => Color::Magenta,
    }
}

const fn text_on(id: CategoryId) -> Color {
    match id.color() {
        crate::core::Color::Yellow | crate::core::Color::Green => Color::Black,
        crate::core::Color::Blue | crate::core::Color::Purple => Color::White,
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let solved = visible_solved(app);
    let rows = app.displayed_pool().len().div_ceil(WORDS_PER_CATEGORY) as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),                                   // Header
            Constraint::Length(solved.len() as u16 * BANNER_HEIGHT), // Solved banners
            Constraint::Length(rows * TILE_HEIGHT),                  // Tiles
            Constraint::Length(3),                                   // Mistakes
            Constraint::Min(3),                                      // Messages
            Constraint::Length(1),                                   // Help
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_solved(f, app, &solved, chunks[1]);
    render_tiles(f, app, chunks[2]);
    render_mistakes(f, app, chunks[3]);
    render_messages(f, app, chunks[4]);
    render_help(f, app, chunks[5]);
}

/// Solved categories whose banners are on screen
///
/// While a reveal is pending its tiles are still on the grid, so its banner
/// is held back.
fn visible_solved(app: &App) -> Vec<CategoryId> {
    let pending = app.reveal.as_ref().map(|reveal| reveal.category);
    let mut solved: Vec<CategoryId> = app
        .session
        .solved_categories()
        .into_iter()
        .filter(|id| Some(*id) != pending)
        .collect();

    // Show the remaining answers once the game is lost
    if app.session.status() == Status::Lost {
        for category in app.session.puzzle().categories() {
            if !solved.contains(&category.id()) {
                solved.push(category.id());
            }
        }
    }
    solved
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let puzzle = app.session.puzzle();
    let mut lines = vec![Line::from(Span::styled(
        puzzle.title().to_uppercase(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))];
    if !puzzle.author().is_empty() {
        lines.push(Line::from(format!("by {}", puzzle.author())));
    }

    let header = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_solved(f: &mut Frame, app: &App, solved: &[CategoryId], area: Rect) {
    if solved.is_empty() {
        return;
    }

    let banners = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(BANNER_HEIGHT); solved.len()])
        .split(area);

    for (id, banner_area) in solved.iter().zip(banners.iter()) {
        render_banner(f, app.session.puzzle().category(*id), *banner_area);
    }
}

fn render_banner(f: &mut Frame, category: &Category, area: Rect) {
    let style = Style::default()
        .bg(category_color(category.id()))
        .fg(text_on(category.id()));
    let words: Vec<String> = category
        .words()
        .iter()
        .map(|word| word.text().to_uppercase())
        .collect();

    let banner = Paragraph::new(vec![
        Line::from(Span::styled(
            category.name().to_uppercase(),
            style.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(words.join(", "), style)),
    ])
    .alignment(Alignment::Center)
    .style(style)
    .block(Block::default().borders(Borders::TOP).style(style));

    f.render_widget(banner, area);
}

fn render_tiles(f: &mut Frame, app: &App, area: Rect) {
    let words = app.displayed_pool();
    if words.is_empty() {
        return;
    }

    let row_count = words.len().div_ceil(WORDS_PER_CATEGORY);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(TILE_HEIGHT); row_count])
        .split(area);

    for (row, (row_area, chunk)) in rows
        .iter()
        .zip(words.chunks(WORDS_PER_CATEGORY))
        .enumerate()
    {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, WORDS_PER_CATEGORY as u32);
                WORDS_PER_CATEGORY
            ])
            .split(*row_area);

        for (col, (cell, word)) in cells.iter().zip(chunk).enumerate() {
            render_tile(f, app, word, row * WORDS_PER_CATEGORY + col, *cell);
        }
    }
}

fn render_tile(f: &mut Frame, app: &App, word: &Word, index: usize, area: Rect) {
    // Solved tiles are aligned to the first row before they leave
    let revealing = app
        .reveal
        .as_ref()
        .filter(|_| index < WORDS_PER_CATEGORY)
        .map(|reveal| reveal.category);

    let style = match revealing {
        Some(id) => Style::default()
            .bg(category_color(id))
            .fg(text_on(id))
            .add_modifier(Modifier::BOLD),
        None if app.session.is_selected(word) => Style::default()
            .bg(Color::DarkGray)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::White),
    };

    let border_style = if app.reveal.is_none() && index == app.cursor {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };

    let width = area.width.saturating_sub(2) as usize;
    let tile = Paragraph::new(tile_label(word, width.max(1)))
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style),
        );

    f.render_widget(tile, area);
}

fn render_mistakes(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.session.remaining_mistakes();
    let line = Line::from(vec![
        Span::raw("Mistakes remaining: "),
        Span::styled(
            mistake_dots(remaining),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  ({remaining}/{MISTAKE_BUDGET})")),
    ]);

    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.session.status().is_terminal() {
        "q: Quit | r: Play Again".to_string()
    } else {
        format!(
            "←↑↓→: Move | Space: Select ({}/{WORDS_PER_CATEGORY}) | Enter: Submit | s: Shuffle | d: Deselect | r: Restart | q: Quit",
            app.session.selection().len()
        )
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
