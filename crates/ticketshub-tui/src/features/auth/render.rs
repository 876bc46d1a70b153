//! Auth modal view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ticketshub_core::demo;
use ticketshub_types::Role;

use crate::common::{mask, role_style, truncate_with_ellipsis};
use crate::overlays::render_utils::{InputHint, OverlayConfig, render_overlay, spinner};
use crate::overlays::{AuthField, AuthMode, AuthPhase, AuthState};

const POPUP_WIDTH: u16 = 64;

pub fn render_auth_overlay(frame: &mut Frame, auth: &AuthState, area: Rect, tick: u64) {
    let (title, toggle) = match auth.mode {
        AuthMode::SignIn => ("Sign in", "create account"),
        AuthMode::SignUp => ("Create account", "sign in instead"),
    };
    let hints = if auth.phase.is_busy() {
        vec![InputHint::new("Esc", "cancel")]
    } else {
        vec![
            InputHint::new("Enter", "submit"),
            InputHint::new("Tab", "next field"),
            InputHint::new("Ctrl+S", toggle),
            InputHint::new("Esc", "close"),
        ]
    };

    let lines = match auth.phase {
        AuthPhase::Form => form_lines(auth, POPUP_WIDTH.saturating_sub(4)),
        phase => progress_lines(auth, phase, tick),
    };
    let height = lines.len() as u16 + 4;

    let layout = render_overlay(
        frame,
        area,
        &OverlayConfig {
            title,
            border_color: Color::Cyan,
            width: POPUP_WIDTH,
            height,
            hints: &hints,
        },
    );
    frame.render_widget(Paragraph::new(lines), layout.body);
}

fn form_lines(auth: &AuthState, width: u16) -> Vec<Line<'static>> {
    let value_width = (width as usize).saturating_sub(16);
    let mut lines = Vec::new();

    if auth.mode == AuthMode::SignUp {
        lines.push(Line::from(Span::styled(
            "Tell us about yourself. We verify every account before it goes live.",
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }

    for (idx, field) in auth.mode.fields().iter().enumerate() {
        let focused = idx == auth.focus;
        let marker = if focused {
            Span::styled("› ", Style::default().fg(Color::Cyan))
        } else {
            Span::raw("  ")
        };
        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let mut spans = vec![
            marker,
            Span::styled(format!("{:<12}", field.label()), label_style),
        ];
        if *field == AuthField::Role {
            spans.extend(role_picker(auth.selected_role(), focused));
        } else {
            let value = match field {
                AuthField::Name => auth.name.clone(),
                AuthField::Email => auth.email.clone(),
                AuthField::Phone => auth.phone.clone(),
                AuthField::Password => mask(&auth.password),
                AuthField::Role => String::new(),
            };
            spans.push(Span::raw(truncate_with_ellipsis(&value, value_width)));
            if focused {
                spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
            }
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    match &auth.error {
        Some(error) => lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        ))),
        None if auth.mode == AuthMode::SignIn => {
            let admin = demo::credential(Role::Admin);
            lines.push(Line::from(Span::styled(
                format!("Demo: {} / {}", admin.email, admin.password),
                Style::default().fg(Color::DarkGray),
            )));
        }
        None => lines.push(Line::from("")),
    }
    lines
}

fn role_picker(role: Role, focused: bool) -> Vec<Span<'static>> {
    let style = role_style(role);
    let arrow = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    vec![
        Span::styled("◀ ", arrow),
        Span::styled(
            format!("{} {}", style.icon, role.label()),
            Style::default().fg(style.color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ▶", arrow),
    ]
}

fn progress_lines(auth: &AuthState, phase: AuthPhase, tick: u64) -> Vec<Line<'static>> {
    let spin = Span::styled(
        format!("{} ", spinner(tick)),
        Style::default().fg(Color::Yellow),
    );
    let muted = Style::default().fg(Color::Gray);

    match phase {
        AuthPhase::Form => Vec::new(),
        AuthPhase::Submitting { .. } => vec![
            Line::from(""),
            Line::from(vec![spin, Span::raw("Signing in…")]),
            Line::from(Span::styled(auth.email.clone(), muted)),
        ],
        AuthPhase::Verifying { .. } => vec![
            Line::from(""),
            Line::from(vec![spin, Span::raw("Verifying your account…")]),
            Line::from(Span::styled(
                format!(
                    "{} · {} · {}",
                    auth.name.trim(),
                    auth.email.trim(),
                    auth.selected_role().label()
                ),
                muted,
            )),
        ],
        AuthPhase::Verified { .. } => vec![
            Line::from(""),
            Line::from(Span::styled(
                "✓ Account verified",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled("Signing you in shortly…", muted)),
        ],
        AuthPhase::AutoLogin { .. } => vec![
            Line::from(""),
            Line::from(vec![
                spin,
                Span::raw(format!(
                    "Signing in to the {} demo account…",
                    auth.selected_role().as_str()
                )),
            ]),
            Line::from(Span::styled(auth.email.clone(), muted)),
        ],
    }
}
