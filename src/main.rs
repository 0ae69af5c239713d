//! mockapi-tui - user management demo over a simulated async API
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central view state processing events
//! - Backend Layer (Tokio) - delayed mock API calls over in-memory data

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::*,
};
use tokio::sync::mpsc;

use mockapi_tui::constants::{self, TITLE};
use mockapi_tui::messages::ui_events::{key_to_ui_event, FormField, InputMode, Panel};
use mockapi_tui::ui::{highlight_json, panel_border_style, render_form_field, user_list_item};
use mockapi_tui::{ApiCommand, ApiResponse, AppActor, BackendActor, Config, MockApi, RenderState, UiEvent};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", &config.log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();
    tracing::info!(latency_scale = config.latency_scale, "Starting {}", constants::APP_NAME);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _terminal_guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (api_cmd_tx, api_cmd_rx) = mpsc::unbounded_channel::<ApiCommand>();
    let (api_resp_tx, api_resp_rx) = mpsc::unbounded_channel::<ApiResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn backend actor
    let backend_actor = BackendActor::new(MockApi::seeded(config.latency()), api_resp_tx);
    tokio::spawn(backend_actor.run(api_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(api_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, api_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    tracing::info!("Shutting down");
    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.active_panel,
                    current_state.input_mode,
                    current_state.show_help,
                ) {
                    let quit = matches!(event, UiEvent::Quit);
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();
    let error_height = if state.error.is_some() { 3 } else { 0 };

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Title
            Constraint::Length(error_height), // Error banner
            Constraint::Min(0),               // Content
            Constraint::Length(1),            // Status bar
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", TITLE),
        Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
    )));
    f.render_widget(title, main_chunks[0]);

    if let Some(error) = &state.error {
        draw_error_banner(f, error, main_chunks[1]);
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[2]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // User list
            Constraint::Length(5), // Form
            Constraint::Length(3), // Actions
        ])
        .split(columns[0]);

    draw_user_list(f, state, left[0]);
    draw_form(f, state, left[1]);
    draw_actions(f, left[2]);
    draw_detail(f, state, columns[1]);

    draw_status_bar(f, state, main_chunks[3]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_error_banner(f: &mut Frame, error: &str, area: Rect) {
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(Color::Red));
    let banner = Paragraph::new(error)
        .style(Style::default().fg(Color::LightRed))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(banner, area);
}

fn draw_user_list(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.active_panel == Panel::Users;
    let selected_id = state.selected_user.as_ref().map(|u| u.id);

    let loading = if state.is_loading { " データ読み込み中..." } else { "" };
    let title = format!(" ユーザー一覧 ({}){} ", state.users.len(), loading);

    let items: Vec<ListItem> = state
        .users
        .iter()
        .map(|user| user_list_item(user, Some(user.id) == selected_id))
        .collect();

    let highlight_style = if is_focused {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(panel_border_style(is_focused, InputMode::Normal))
                .title(title),
        )
        .highlight_style(highlight_style);

    let mut list_state = ListState::default();
    if !state.users.is_empty() {
        list_state.select(Some(state.user_cursor));
    }
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_form(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.active_panel == Panel::Form;
    let editing = is_focused && state.input_mode == InputMode::Editing;

    let lines: Vec<Line> = [FormField::Name, FormField::Email, FormField::Age]
        .into_iter()
        .map(|field| {
            render_form_field(
                field.label(),
                state.form.field(field),
                is_focused && state.form_field == field,
                editing,
            )
        })
        .collect();

    let submit_hint = if state.is_loading { "送信不可" } else { "s:ユーザー作成" };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(panel_border_style(is_focused, state.input_mode))
        .title(" 新規ユーザー作成 ")
        .title_bottom(Line::from(format!(" {} ", submit_hint)).right_aligned());

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_actions(f: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" x ", Style::default().fg(Color::Black).bg(Color::Yellow)),
        Span::raw(" エラーをシミュレート  "),
        Span::styled(" t ", Style::default().fg(Color::Black).bg(Color::Magenta)),
        Span::raw(" タイムアウトをシミュレート"),
    ]);
    let block = Block::default().borders(Borders::ALL);
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_detail(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.active_panel == Panel::Detail;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(panel_border_style(is_focused, InputMode::Normal))
        .title(" ユーザー詳細 ");

    let Some(user) = &state.selected_user else {
        let hint = Paragraph::new("ユーザーを選択してください")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(hint, area);
        return;
    };

    if state.raw_view {
        let raw = serde_json::json!({
            "user": user,
            "posts": state.user_posts,
            "comments": state.post_comments,
        });
        let raw_block = block.title_bottom(Line::from(" v:通常表示 ").right_aligned());
        let paragraph = Paragraph::new(highlight_json(&raw))
            .block(raw_block)
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
        return;
    }

    let mut lines = vec![
        Line::from(Span::styled(user.name.clone(), Style::default().bold())),
        Line::from(vec![
            Span::styled("メール: ", Style::default().bold()),
            Span::raw(user.email.clone()),
        ]),
        Line::from(vec![
            Span::styled("年齢: ", Style::default().bold()),
            Span::raw(format!("{}歳", user.age)),
        ]),
        Line::default(),
        Line::from(Span::styled("投稿一覧", Style::default().bold().underlined())),
    ];

    if state.user_posts.is_empty() {
        lines.push(Line::from(Span::styled(
            "投稿がありません",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for (i, post) in state.user_posts.iter().enumerate() {
        let highlighted = is_focused && i == state.post_cursor;
        let marker = if highlighted { "> " } else { "  " };
        let title_style = if highlighted {
            Style::default().fg(Color::Yellow).bold()
        } else {
            Style::default().bold()
        };
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(post.title.clone(), title_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", post.body),
            Style::default().fg(Color::Gray),
        )));

        if state.comments_post_id == Some(post.id) {
            if state.post_comments.is_empty() {
                lines.push(Line::from(Span::styled(
                    "      コメントはありません",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            for comment in &state.post_comments {
                lines.push(Line::from(vec![
                    Span::styled(format!("      {}: ", comment.name), Style::default().fg(Color::Cyan)),
                    Span::raw(comment.body.clone()),
                ]));
            }
        }
    }

    let detail_block = block.title_bottom(Line::from(" Enter:コメント v:JSON ").right_aligned());
    let paragraph = Paragraph::new(lines)
        .block(detail_block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let hints = if state.input_mode == InputMode::Editing {
        " ESC:stop editing | Tab:next field | Enter:submit "
    } else {
        " Tab:panel | ↑/↓:move | Enter:select | d:delete | e:edit | r:reload | ?:help | q:quit "
    };

    let mut spans = Vec::new();
    if state.in_flight > 0 {
        spans.push(Span::styled(
            format!(" [{} pending] ", state.in_flight),
            Style::default().fg(Color::Yellow),
        ));
    }
    if let Some(notice) = &state.notice {
        spans.push(Span::styled(format!(" {} |", notice), Style::default().fg(Color::Cyan)));
    }
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 MOCKAPI TUI - Keyboard Shortcuts

 NAVIGATION
   Tab / Shift+Tab    Switch panels
   ↑ / ↓  (k / j)     Move in list / form / posts

 USERS
   Enter              Show user detail and posts
   d                  Delete user
   r                  Reload user list

 FORM
   e / Enter          Edit fields
   Tab                Next field (while editing)
   s / Enter          Create user

 DETAIL
   Enter              Load comments of post
   v                  Toggle JSON view

 SIMULATION
   x                  Simulated API error
   t                  Delayed response (5s)

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
