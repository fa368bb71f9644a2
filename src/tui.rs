//! 対話型フィードブラウザ
//!
//! ## モジュール構成
//!
//! - `app`: Model/Msg/update（Elm Architecture）
//! - `view`: 画面描画
//! - `link`: 記事リンクを外部ブラウザで開く

mod app;
mod link;
mod view;

use crate::feed::FeedState;
use app::{update, Model, Msg};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::io::{self, stdout, Stdout};
use std::time::{Duration, Instant};

/// イベント待ちの間隔（追加読み込みの締め切り確認を兼ねる）
const TICK: Duration = Duration::from_millis(50);

/// TUI を実行
pub fn run(feed: FeedState, load_delay: Duration) -> io::Result<()> {
    // ターミナル設定
    terminal::enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let result = Terminal::new(backend).and_then(|mut terminal| {
        let model = Model::new(feed, load_delay);
        event_loop(&mut terminal, model)
    });

    // ターミナルを復元
    terminal::disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut model: Model,
) -> io::Result<()> {
    let size = terminal.size()?;
    update(&mut model, Msg::Resize(size.height), Instant::now());

    while !model.should_quit {
        terminal.draw(|f| view::view(f, &model))?;

        if event::poll(TICK)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(msg) = model.key_to_msg(key.code) {
                        let effect = update(&mut model, msg, Instant::now());
                        if let Some(url) = effect.open_url {
                            match link::open_url(&url) {
                                Ok(()) => tracing::info!(%url, "opened article"),
                                Err(e) => {
                                    tracing::warn!(%url, error = %e, "failed to open article")
                                }
                            }
                        }
                    }
                }
                Event::Resize(_, height) => {
                    update(&mut model, Msg::Resize(height), Instant::now());
                }
                _ => {}
            }
        }

        update(&mut model, Msg::Tick, Instant::now());
    }

    Ok(())
}
