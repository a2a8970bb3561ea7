//! Screen rendering: title bar, dessert cards, transaction panel, help bar,
//! and the toast overlay. Click targets are registered here, co-located
//! with the widgets they belong to.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::actions::{SHARE_TOTALS, TAP_DESSERT_A, TAP_DESSERT_B};
use crate::app::App;
use crate::input::{is_narrow_layout, ClickState};
use crate::logic::active_dessert;
use crate::state::{DessertImage, DessertLine, SalesState};

/// Height of a dessert card including borders.
const CARD_HEIGHT: u16 = 7;

/// Three-line picture for each dessert tier.
fn dessert_art(image: DessertImage) -> [&'static str; 3] {
    match image {
        DessertImage::Cupcake => ["   ,,,   ", "  (###)  ", "  \\___/  "],
        DessertImage::Eclair => ["  ______  ", " (______) ", "  ~~~~~~  "],
        DessertImage::Gingerbread => ["   (o)   ", "  -/|\\-  ", "   / \\   "],
        DessertImage::Honeycomb => [" /\\/\\/\\ ", " \\/\\/\\/ ", " /\\/\\/\\ "],
        DessertImage::Sundae => ["  * * *  ", "  \\   /  ", "   \\_/   "],
        DessertImage::Donut => ["  .--.  ", " ( () ) ", "  `--'  "],
        DessertImage::Froyo => ["   @@@   ", "  |~~~|  ", "  |___|  "],
        DessertImage::Jellybean => ["   __   ", "  (  )  ", "  (__)  "],
        DessertImage::Macaron => ["  ____  ", " (____) ", " (____) "],
        DessertImage::Lollipop => ["  (@@)  ", "   ||   ", "   ||   "],
    }
}

/// Format a count or dollar amount with thousands separators.
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.chars().rev().collect()
}

/// A line with `label` flushed left and `value` flushed right.
fn two_ended_line<'a>(label: String, value: String, width: u16, value_style: Style) -> Line<'a> {
    let pad = (width as usize)
        .saturating_sub(label.chars().count() + value.chars().count())
        .max(1);
    Line::from(vec![
        Span::raw(label),
        Span::raw(" ".repeat(pad)),
        Span::styled(value, value_style),
    ])
}

pub fn render(app: &App, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let mut cs = click_state.borrow_mut();
    let state = app.engine.current_state();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // title bar
            Constraint::Min(CARD_HEIGHT),     // dessert cards
            Constraint::Length(8),            // transaction panel
            Constraint::Length(3),            // help bar
        ])
        .split(area);

    render_title(f, chunks[0], &mut cs);

    if is_narrow_layout(area.width) {
        let cards = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(CARD_HEIGHT),
                Constraint::Length(CARD_HEIGHT),
                Constraint::Min(0),
            ])
            .split(chunks[1]);
        render_dessert_card(&state, DessertLine::A, f, cards[0], &mut cs);
        render_dessert_card(&state, DessertLine::B, f, cards[1], &mut cs);
    } else {
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);
        render_dessert_card(&state, DessertLine::A, f, cards[0], &mut cs);
        render_dessert_card(&state, DessertLine::B, f, cards[1], &mut cs);
    }

    render_transactions(&state, f, chunks[2]);
    render_help(f, chunks[3]);

    // Toast overlays the help bar; rendered last so it sits on top.
    if let Some(toast) = &app.toast {
        render_toast(&toast.text, f, chunks[3]);
    }
}

fn render_title(f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " Dessert Clicker ",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let share = Paragraph::new(Line::from(Span::styled(
        "[S] Share ",
        Style::default().fg(Color::Cyan),
    )))
    .alignment(Alignment::Right);
    f.render_widget(share, inner);

    // The share button's tap region covers the right end of the title bar,
    // full height for finger-sized tolerance.
    let share_width = 14.min(area.width);
    cs.add_click_target(
        Rect::new(
            area.x + area.width - share_width,
            area.y,
            share_width,
            area.height,
        ),
        SHARE_TOTALS,
    );
}

fn render_dessert_card(
    state: &SalesState,
    line: DessertLine,
    f: &mut Frame,
    area: Rect,
    cs: &mut ClickState,
) {
    let image = state.image(line);
    let tier = active_dessert(line, state.sold(line));

    let color = match line {
        DessertLine::A => Color::Yellow,
        DessertLine::B => Color::Cyan,
    };

    let mut lines: Vec<Line> = dessert_art(image)
        .iter()
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(color))))
        .collect();
    lines.push(Line::from(vec![
        Span::styled(
            format!("${}", format_number(tier.price)),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  sold {}", format_number(state.sold(line))),
            Style::default().fg(Color::Gray),
        ),
    ]));
    lines.push(Line::from(Span::styled(
        format!("tap or press [{}]", line.key()),
        Style::default().fg(Color::DarkGray),
    )));

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(format!(" {} ", image.name())),
        );
    f.render_widget(card, area);

    let action = match line {
        DessertLine::A => TAP_DESSERT_A,
        DessertLine::B => TAP_DESSERT_B,
    };
    cs.add_click_target(area, action);
}

fn render_transactions(state: &SalesState, f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Transactions ");
    let inner = block.inner(area);
    let w = inner.width;

    let dim = Style::default().fg(Color::Gray);
    let bold = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let money = Style::default().fg(Color::Green);
    let money_bold = Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD);

    let name_a = state.image_a.name();
    let name_b = state.image_b.name();

    let lines = vec![
        two_ended_line(
            format!("{}s sold", name_a),
            format_number(state.sold_a),
            w,
            dim,
        ),
        two_ended_line(
            format!("{}s sold", name_b),
            format_number(state.sold_b),
            w,
            dim,
        ),
        two_ended_line(
            "Total desserts sold".to_string(),
            format_number(state.total_sold),
            w,
            bold,
        ),
        two_ended_line(
            format!("{} revenue", name_a),
            format!("${}", format_number(state.revenue_a)),
            w,
            money,
        ),
        two_ended_line(
            format!("{} revenue", name_b),
            format!("${}", format_number(state.revenue_b)),
            w,
            money,
        ),
        two_ended_line(
            "Total revenue".to_string(),
            format!("${}", format_number(state.total_revenue)),
            w,
            money_bold,
        ),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(Span::styled(
        "tap a dessert to sell it",
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(help, area);
}

fn render_toast(text: &str, f: &mut Frame, area: Rect) {
    let toast = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", text),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(toast, area);
}
