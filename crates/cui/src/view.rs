use crate::app::{App, FocusPane};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Line, Modifier, Style, Stylize};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use roshambo_core::{Move, Outcome, RoundRecord};

pub fn draw(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(10),
            Constraint::Length(10),
        ])
        .split(frame.area());

    draw_header(frame, root[0], app);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(root[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(4)])
        .split(middle[0]);

    draw_moves(frame, left[0], app);
    draw_last_round(frame, left[1], app);
    draw_history(frame, middle[1], app);
    draw_events(frame, root[2], app);

    if app.show_help {
        draw_help_popup(frame, app);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let ledger = &app.session.ledger;
    let title = format!(
        "Roshambo | Focus: {} | Auto: {}",
        focus_label(app.focus),
        if app.auto_playing() { "on" } else { "off" }
    );
    let summary = format!(
        "You {} - {} CPU  |  Round {}  W {}  L {}  D {}",
        ledger.player_score,
        ledger.computer_score,
        ledger.round,
        ledger.wins,
        ledger.losses,
        ledger.draws
    );
    let lines = vec![
        Line::from(title.bold()),
        Line::from(summary),
        Line::from(format!("Seed {} | Status: {}", app.seed, app.status_line)),
    ];
    let block = Block::default().borders(Borders::ALL).title("Overview");
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(paragraph, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem<'_>> = Move::ALL
        .iter()
        .map(|mv| {
            let marker = if app.session.selected() == Some(*mv) {
                "*"
            } else {
                " "
            };
            ListItem::new(format!("{marker} {} {}", mv.icon(), mv.label()))
        })
        .collect();
    let block = pane_block("Moves", app.focus == FocusPane::Moves);
    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");
    let mut state = ListState::default();
    state.select(Some(app.moves_cursor.min(Move::ALL.len() - 1)));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_last_round(frame: &mut Frame, area: Rect, app: &App) {
    let lines = match app.session.ledger.latest() {
        Some(record) => vec![
            Line::from(format!(
                "{} {}  vs  {} {}",
                record.player.icon(),
                record.player.label(),
                record.computer.icon(),
                record.computer.label()
            )),
            Line::from(outcome_line(record.outcome)),
            Line::from(format!("Round {}", record.round)),
        ],
        None => vec![Line::from("Make your move!")],
    };
    let block = Block::default().borders(Borders::ALL).title("Last Round");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn outcome_line(outcome: Outcome) -> Line<'static> {
    let (text, color) = match outcome {
        Outcome::Win => ("You win!", Color::Green),
        Outcome::Lose => ("Computer wins!", Color::Red),
        Outcome::Draw => ("It's a draw!", Color::Yellow),
    };
    Line::from(text).style(Style::default().fg(color))
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem<'_>> = app
        .session
        .ledger
        .history()
        .map(|record| {
            ListItem::new(history_label(record)).style(Style::default().fg(outcome_color(
                record.outcome,
            )))
        })
        .collect();
    let block = pane_block("History", app.focus == FocusPane::History);
    frame.render_widget(List::new(items).block(block), area);
}

fn history_label(record: &RoundRecord) -> String {
    format!(
        "Round {:>3}  {} vs {}  {}",
        record.round,
        record.player.icon(),
        record.computer.icon(),
        record.outcome.label()
    )
}

fn outcome_color(outcome: Outcome) -> Color {
    match outcome {
        Outcome::Win => Color::Green,
        Outcome::Lose => Color::Red,
        Outcome::Draw => Color::Yellow,
    }
}

fn draw_events(frame: &mut Frame, area: Rect, app: &App) {
    let capacity = area.height.saturating_sub(2) as usize;
    let start = app.event_log.len().saturating_sub(capacity);
    let lines: Vec<Line<'_>> = app
        .event_log
        .iter()
        .skip(start)
        .map(|line| Line::from(line.clone()))
        .collect();
    let block = pane_block("Events", app.focus == FocusPane::Events);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_help_popup(frame: &mut Frame, _app: &App) {
    let area = centered_rect(60, 50, frame.area());
    frame.render_widget(Clear, area);
    let lines = vec![
        Line::from("q quit | ? help | tab focus | arrows/jk move"),
        Line::from("r/p/s or 1/2/3 select a move | space select at cursor"),
        Line::from("enter play round (needs a selected move)"),
        Line::from("a toggle auto-play (random move every 1.5s)"),
        Line::from("x reset scores and history"),
    ];
    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn focus_label(pane: FocusPane) -> &'static str {
    match pane {
        FocusPane::Moves => "Moves",
        FocusPane::History => "History",
        FocusPane::Events => "Events",
    }
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let mut block = Block::default().title(title).borders(Borders::ALL);
    if focused {
        block = block.border_style(Style::default().fg(Color::Yellow));
    }
    block
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
