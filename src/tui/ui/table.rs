use crate::cards::Card;
use crate::round::Phase;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_box, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let [header_area, cards_area, paytable_area, status_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(6),
        Constraint::Min(4),
        Constraint::Length(4),
    ])
    .areas(f.area());

    draw_header(f, app, header_area);
    draw_cards(f, app, cards_area);
    draw_paytable(f, app, paytable_area);
    draw_status(f, app, status_area);

    if let Some(notice) = app.notice() {
        draw_notice(f, notice);
    } else if app.help_open() {
        draw_help(f);
    }
}

fn draw_header(f: &mut Frame, app: &AppState, area: Rect) {
    let engine = &app.engine;
    let lines = vec![
        Line::from(vec![
            Span::styled(engine.variant().label(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!("   Chips: {}   Bet: {}", engine.bankroll(), engine.current_bet())),
        ]),
        Line::from(format!(
            "Hands: {}   Low: {}   High: {}",
            engine.hands_played(),
            engine.low_water(),
            engine.high_water()
        )),
    ];
    let header =
        Paragraph::new(lines).block(Block::default().title("videopoker").borders(Borders::ALL));
    f.render_widget(header, area);
}

fn draw_cards(f: &mut Frame, app: &AppState, area: Rect) {
    let title = match app.engine.phase() {
        Phase::AwaitingDraw => "Hand: hold with 1-5",
        _ => "Hand",
    };
    f.render_widget(Block::default().title(title).borders(Borders::ALL), area);
    let slots = Layout::horizontal([Constraint::Ratio(1, 5); 5]).split(inner(area));
    let holds = app.engine.holds();
    let drawing = app.engine.phase() == Phase::AwaitingDraw;
    for (slot, slot_area) in slots.iter().enumerate() {
        let card = app.engine.hand().and_then(|h| h.card(slot));
        let held = drawing && holds.is_held(slot);
        let [card_area, marker_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(*slot_area);
        render_card_widget(f, card_area, card, held);
        let marker = if held {
            Span::styled("HELD", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        } else {
            Span::styled(format!("[{}]", slot + 1), Style::default().add_modifier(Modifier::DIM))
        };
        f.render_widget(Paragraph::new(Line::from(marker)).alignment(Alignment::Center), marker_area);
    }
}

fn draw_paytable(f: &mut Frame, app: &AppState, area: Rect) {
    let bet = app.engine.current_bet();
    let last = app.engine.last_settlement().map(|s| s.category);
    let lines: Vec<Line> = app
        .engine
        .paytable()
        .rows()
        .filter(|(_, multiplier)| *multiplier > 0)
        .map(|(category, multiplier)| {
            let style = if last == Some(category) {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default()
            };
            Line::from(Span::styled(
                format!("{:<18}{:>8}", category.name(), multiplier * bet),
                style,
            ))
        })
        .collect();
    let block = Block::default()
        .title(format!("Paytable ({})", app.engine.variant().label()))
        .borders(Borders::ALL);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_status(f: &mut Frame, app: &AppState, area: Rect) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .areas(inner(area));

    let mut info: Vec<Line> = Vec::new();
    match (app.engine.phase(), app.engine.last_settlement()) {
        (Phase::AwaitingDraw, _) => info.push(Line::from("Hold cards, then Space to draw.")),
        (_, Some(settled)) => {
            let color = if settled.reward > 0 { Color::Green } else { Color::Gray };
            info.push(Line::from(Span::styled(settled.message(), Style::default().fg(color))));
        }
        _ => info.push(Line::from("Press Space to deal.")),
    }
    if let Some(err) = app.action_error() {
        info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }
    f.render_widget(Paragraph::new(info).wrap(Wrap { trim: true }), left);

    let keys = vec![Line::from("+/- bet • V game"), Line::from("? help • M menu • Q quit")];
    f.render_widget(Paragraph::new(keys).alignment(Alignment::Right), right);
}

fn draw_help(f: &mut Frame) {
    let area = centered_box(48, 20, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Table:", bold)),
        Line::from("- Space / Enter: deal or draw"),
        Line::from("- 1-5: hold / release a card"),
        Line::from("- + / -: raise / lower the bet"),
        Line::from("- V: next game"),
        Line::from("- R: reset chips"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from(Span::styled("Menu:", bold)),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: start a new table"),
        Line::from("- Esc: back to the table"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner(area));
}

fn draw_notice(f: &mut Frame, notice: &str) {
    let area = centered_box(56, 7, f.area());
    let block = Block::default()
        .title("Notice")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightRed));
    let mut lines: Vec<Line> = notice.lines().map(|l| Line::from(l.to_string())).collect();
    lines.push(Line::from(Span::styled(
        "Enter / Esc to continue",
        Style::default().add_modifier(Modifier::DIM),
    )));
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).alignment(Alignment::Center),
        inner(area),
    );
}

fn suit_style(card: Card) -> Style {
    if card.suit().is_red() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    }
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>, held: bool) {
    let mut block = Block::default().borders(Borders::ALL);
    if held {
        block = block.border_style(Style::default().fg(Color::Yellow));
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let content = match card {
        Some(c) => {
            Line::from(Span::styled(format!("{}{}", c.rank().face(), c.suit().symbol()), suit_style(c)))
        }
        None => Line::from("[  ]"),
    };
    f.render_widget(Paragraph::new(content).alignment(Alignment::Center), inner);
}
