use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ticketshub_types::Role;

use super::{FEATURES, LandingState, TESTIMONIALS};
use crate::common::role_style;
use crate::features::header::NavItem;

/// Renders the public page for the selected navigation entry.
pub fn render_landing(frame: &mut Frame, area: Rect, landing: &LandingState, nav: NavItem) {
    match nav {
        NavItem::Features => render_features(frame, area),
        NavItem::Roles => render_roles(frame, area),
        NavItem::About => render_about(frame, area, landing),
        _ => render_home(frame, area, landing),
    }
}

fn render_home(frame: &mut Frame, area: Rect, landing: &LandingState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(6)])
        .split(area);

    let accent = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("Where great events find their people", accent)),
        Line::from(""),
        Line::from(Span::styled(
            "Organizers meet verified vendors, speakers and sponsors.",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "Post what your event needs and let the right partners come to you.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[s]", Style::default().fg(Color::Green)),
            Span::raw(" Get started    "),
            Span::styled("[l]", Style::default().fg(Color::Cyan)),
            Span::raw(" Sign in"),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    render_testimonial(frame, chunks[1], landing);
}

fn render_features(frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for (row_idx, row) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 2); 2])
            .split(*row);
        for (col_idx, col) in cols.iter().enumerate() {
            let Some((title, body)) = FEATURES.get(row_idx * 2 + col_idx) else {
                continue;
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    format!(" {title} "),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ));
            frame.render_widget(
                Paragraph::new(*body)
                    .wrap(Wrap { trim: true })
                    .block(block),
                *col,
            );
        }
    }
}

fn render_roles(frame: &mut Frame, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(area);

    for (role, col) in Role::all().iter().zip(cols.iter()) {
        let style = role_style(*role);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(style.color))
            .title(Span::styled(
                format!(" {} {} ", style.icon, role.label()),
                Style::default()
                    .fg(style.color)
                    .add_modifier(Modifier::BOLD),
            ));
        let mut lines = vec![Line::from(style.tagline)];
        if *role != Role::Admin {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "[s] Join",
                Style::default().fg(Color::DarkGray),
            )));
        }
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(block),
            *col,
        );
    }
}

fn render_about(frame: &mut Frame, area: Rect, landing: &LandingState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(6)])
        .split(area);

    let about = vec![
        Line::from(Span::styled(
            "About TICKETSHUB Management",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(
            "TICKETSHUB connects the people who plan events with the people who make them \
             work. Organizers describe what an event needs; vendors, speakers and sponsors \
             see the events that match what they offer.",
        ),
        Line::from(""),
        Line::from(
            "Every partner account is verified by our team before it can take part, so \
             organizers always know who they are working with.",
        ),
    ];
    frame.render_widget(
        Paragraph::new(about)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL)),
        chunks[0],
    );

    render_testimonial(frame, chunks[1], landing);
}

fn render_testimonial(frame: &mut Frame, area: Rect, landing: &LandingState) {
    let testimonial = landing.current();
    let dots: Vec<Span> = (0..TESTIMONIALS.len())
        .map(|i| {
            if i == landing.testimonial {
                Span::styled("● ", Style::default().fg(Color::Cyan))
            } else {
                Span::styled("○ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();

    let lines = vec![
        Line::from(Span::styled(
            format!("“{}”", testimonial.quote),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(
            format!("{}, {}", testimonial.author, testimonial.company),
            Style::default().fg(Color::Gray),
        )),
        Line::from(dots),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" What our members say "),
            ),
        area,
    );
}
