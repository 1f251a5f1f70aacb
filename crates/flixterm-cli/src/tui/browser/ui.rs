//! Browser rendering: header, banner, carousel rows, and detail overlay.

use std::time::Instant;

use flixterm_api::tmdb::{CatalogItem, ImageSize, image_url};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::state::{BrowserState, InputMode, ListPhase, ListRow};
use crate::tui::carousel::Direction as SlideDirection;

/// Draws the browser UI.
#[allow(clippy::indexing_slicing)]
pub fn draw(frame: &mut Frame, state: &BrowserState, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(7), // banner
            Constraint::Min(5),    // carousel rows
            Constraint::Length(3), // footer
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], state);
    draw_banner(frame, chunks[1], state);
    draw_rows(frame, chunks[2], state, now);
    draw_footer(frame, chunks[3], state);

    draw_detail(frame, state);
}

/// Draws the header with the search box and the screen name.
#[allow(clippy::indexing_slicing)]
fn draw_header(frame: &mut Frame, area: Rect, state: &BrowserState) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let search_style = if state.input_mode == InputMode::Search {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let search_text = if state.input_mode == InputMode::Search {
        state.search_input.clone()
    } else {
        state.search_keyword().unwrap_or_default().to_owned()
    };

    let search = Paragraph::new(search_text)
        .style(search_style)
        .block(Block::default().borders(Borders::ALL).title(" Search: / "));
    frame.render_widget(search, header_chunks[0]);

    let screen = Paragraph::new(state.screen.title())
        .block(Block::default().borders(Borders::ALL).title(" flixterm "));
    frame.render_widget(screen, header_chunks[1]);
}

/// Draws the full-width banner fed by the designated list's first item.
fn draw_banner(frame: &mut Frame, area: Rect, state: &BrowserState) {
    let block = Block::default().borders(Borders::ALL).title(" Featured ");
    let Some(item) = state.banner_item() else {
        frame.render_widget(block, area);
        return;
    };

    let rating = format!("{:.1}", item.vote_average);
    let date = item.date.as_deref().unwrap_or("unknown");
    let backdrop = image_url(item.backdrop_path.as_deref(), ImageSize::Original);

    let lines = vec![
        Line::from(Span::styled(
            item.title.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::raw(format!("\u{2605} {rating}  {date}"))),
        Line::from(Span::raw(item.overview.clone())),
        Line::from(Span::styled(backdrop, Style::default().fg(Color::DarkGray))),
    ];

    let banner = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(banner, area);
}

/// Splits the rows area evenly and draws each carousel row.
fn draw_rows(frame: &mut Frame, area: Rect, state: &BrowserState, now: Instant) {
    if state.rows.is_empty() {
        return;
    }
    let count = u32::try_from(state.rows.len()).unwrap_or(1);
    let constraints: Vec<Constraint> = state
        .rows
        .iter()
        .map(|_| Constraint::Ratio(1, count))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (index, chunk) in chunks.iter().enumerate() {
        draw_row(frame, *chunk, state, index, now);
    }
}

/// Draws one carousel row: a heading line plus the tile strip.
#[allow(clippy::indexing_slicing)]
fn draw_row(frame: &mut Frame, area: Rect, state: &BrowserState, index: usize, now: Instant) {
    let Some(row) = state.rows.get(index) else {
        return;
    };
    let focused = index == state.focused_row;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let marker = if focused { "\u{25b8} " } else { "  " };
    let heading_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let heading = Line::from(vec![
        Span::styled(format!("{marker}{}", row.key.label()), heading_style),
        window_position_span(row, state.window_size()),
    ]);
    frame.render_widget(Paragraph::new(heading), chunks[0]);

    let strip = chunks[1];
    if strip.height == 0 {
        return;
    }
    match &row.phase {
        ListPhase::Loading => {
            let text = Paragraph::new("Loading...").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(text, strip);
        }
        ListPhase::Failed { message } => {
            let lines = vec![
                Line::from(Span::styled(
                    format!("Failed: {message}"),
                    Style::default().fg(Color::Red),
                )),
                Line::from(Span::styled(
                    "Press r to retry",
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            frame.render_widget(Paragraph::new(lines), strip);
        }
        ListPhase::Ready => draw_strip(frame, strip, state, row, focused, now),
    }
}

/// Window position indicator, e.g. ` 1/2`. Empty for single-window lists.
fn window_position_span(row: &ListRow, window: usize) -> Span<'static> {
    row.carousel
        .max_index(row.items.len(), window)
        .filter(|&max| max > 0)
        .map_or_else(Span::default, |max| {
            Span::styled(
                format!(
                    "  {}/{}",
                    row.carousel.window_index().saturating_add(1),
                    max.saturating_add(1)
                ),
                Style::default().fg(Color::DarkGray),
            )
        })
}

/// Draws the visible window of a ready row, animating an in-flight slide.
#[allow(clippy::arithmetic_side_effects)]
fn draw_strip(
    frame: &mut Frame,
    area: Rect,
    state: &BrowserState,
    row: &ListRow,
    focused: bool,
    now: Instant,
) {
    let window = state.window_size();
    let visible = row.carousel.visible_slice(&row.items, window);
    if visible.is_empty() {
        let text = Paragraph::new("No results").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let tiles = u16::try_from(window.max(1)).unwrap_or(u16::MAX);
    let tile_width = (area.width / tiles).max(1);

    if let Some(slide) = row.slide {
        // Geometry is taken from the current frame width, so a resize
        // mid-slide re-lays the animation out instead of breaking it.
        let progress = slide.progress(now, state.slide_duration());
        let shift = slide_shift(progress, area.width);
        let outgoing = window_items(row, slide.from_index, window);
        match slide.direction {
            SlideDirection::Forward => {
                draw_tile_strip(frame, area, outgoing, tile_width, -shift, None);
                draw_tile_strip(
                    frame,
                    area,
                    visible,
                    tile_width,
                    i32::from(area.width) - shift,
                    None,
                );
            }
            SlideDirection::Backward => {
                draw_tile_strip(frame, area, outgoing, tile_width, shift, None);
                draw_tile_strip(
                    frame,
                    area,
                    visible,
                    tile_width,
                    shift - i32::from(area.width),
                    None,
                );
            }
        }
    } else {
        let cursor = focused.then_some(row.cursor);
        draw_tile_strip(frame, area, visible, tile_width, 0, cursor);
    }
}

/// Items of an arbitrary window, for the outgoing side of a slide.
fn window_items(row: &ListRow, index: usize, window: usize) -> &[CatalogItem] {
    let start = row
        .carousel
        .lead_exclusion()
        .saturating_add(index.saturating_mul(window))
        .min(row.items.len());
    let end = start.saturating_add(window).min(row.items.len());
    row.items.get(start..end).unwrap_or(&[])
}

/// Horizontal displacement in cells for a slide at the given progress.
#[allow(clippy::as_conversions)]
#[allow(clippy::cast_possible_truncation)]
fn slide_shift(progress: f64, width: u16) -> i32 {
    (progress.clamp(0.0, 1.0) * f64::from(width)).round() as i32
}

/// Draws a strip of tiles displaced by `x_offset` cells, clipped to `area`.
#[allow(clippy::arithmetic_side_effects)]
fn draw_tile_strip(
    frame: &mut Frame,
    area: Rect,
    items: &[CatalogItem],
    tile_width: u16,
    x_offset: i32,
    cursor: Option<usize>,
) {
    for (i, item) in items.iter().enumerate() {
        let Ok(slot) = i32::try_from(i) else {
            continue;
        };
        let tile_left = i32::from(area.x) + x_offset + slot * i32::from(tile_width);
        let tile_right = tile_left + i32::from(tile_width);
        let clip_left = tile_left.max(i32::from(area.x));
        let clip_right = tile_right.min(i32::from(area.right()));
        if clip_right <= clip_left {
            continue;
        }
        let (Ok(x), Ok(width)) = (
            u16::try_from(clip_left),
            u16::try_from(clip_right - clip_left),
        ) else {
            continue;
        };
        let rect = Rect {
            x,
            y: area.y,
            width,
            height: area.height,
        };
        draw_tile(frame, rect, item, cursor == Some(i));
    }
}

/// Draws a single tile: title plus a rating/date line.
fn draw_tile(frame: &mut Frame, area: Rect, item: &CatalogItem, focused: bool) {
    let border_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let rating = format!("{:.1}", item.vote_average);
    let date = item.date.as_deref().unwrap_or("----");
    let lines = vec![
        Line::from(Span::styled(
            item.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::raw(format!("\u{2605} {rating}  {date}"))),
    ];

    let tile = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(tile, area);
}

/// Draws the centered detail overlay for the current selection.
fn draw_detail(frame: &mut Frame, state: &BrowserState) {
    let Some(selection) = &state.detail else {
        return;
    };
    let Some(route) = state.detail_route() else {
        return;
    };

    let area = centered_rect(70, 60, frame.area());
    frame.render_widget(Clear, area);

    let item = &selection.item;
    let rating = format!("{:.1}", item.vote_average);
    let date = item.date.as_deref().unwrap_or("unknown");
    let backdrop = image_url(item.backdrop_path.as_deref(), ImageSize::Original);
    let poster = image_url(item.poster_path.as_deref(), ImageSize::W500);

    let lines = vec![
        Line::from(Span::styled(
            item.title.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::raw(format!(
            "From: {}  \u{2605} {rating}  {date}",
            selection.origin.label()
        ))),
        Line::default(),
        Line::from(Span::raw(item.overview.clone())),
        Line::default(),
        Line::from(Span::styled(
            format!("Backdrop: {backdrop}"),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            format!("Poster:   {poster}"),
            Style::default().fg(Color::DarkGray),
        )),
        Line::default(),
        Line::from(Span::styled(
            "o: open in browser  Esc: close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let modal = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {route} ")),
    );
    frame.render_widget(modal, area);
}

/// Returns a centered rect occupying the given percentages of `area`.
#[allow(clippy::arithmetic_side_effects)]
#[allow(clippy::indexing_slicing)]
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(100_u16.saturating_sub(percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage(100_u16.saturating_sub(percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(100_u16.saturating_sub(percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage(100_u16.saturating_sub(percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Draws the footer with key hints.
fn draw_footer(frame: &mut Frame, area: Rect, state: &BrowserState) {
    let help_text = if state.input_mode == InputMode::Search {
        "Type keyword | Esc: cancel | Enter: search"
    } else if state.detail.is_some() {
        "o: open in browser  Esc: close"
    } else {
        "\u{2191}\u{2193}/k/j: rows  \u{2190}\u{2192}/h/l: tiles  Enter: details  /: search  1: movies  2: TV  r: retry  q: quit"
    };

    let footer = Paragraph::new(help_text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
