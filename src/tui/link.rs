//! 記事リンクをシステムのブラウザで開く

use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};

/// プラットフォームごとのオープナー（プログラムと先頭引数）
fn opener() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("open", &[])
    } else if cfg!(target_os = "windows") {
        ("cmd", &["/C", "start", ""])
    } else {
        ("xdg-open", &[])
    }
}

/// 開く前に URL を検証する
fn validate(url: &str) -> io::Result<()> {
    if url.starts_with("https://") || url.starts_with("http://") {
        Ok(())
    } else {
        Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("not a web link: {}", url),
        ))
    }
}

/// URL を外部ブラウザで開く（完了は待たない）
///
/// GLAD_BROWSER が設定されていればそのコマンドを使う。
pub fn open_url(url: &str) -> io::Result<()> {
    validate(url)?;

    let mut command = match crate::env::EnvVar::get("GLAD_BROWSER") {
        Some(program) => Command::new(program),
        None => {
            let (program, args) = opener();
            let mut command = Command::new(program);
            command.args(args);
            command
        }
    };

    command.arg(url);
    spawn_reaped(command).map(|_| ())
}

/// 出力を捨てて起動し、終了はバックグラウンドのスレッドで回収する
fn spawn_reaped(mut command: Command) -> io::Result<JoinHandle<io::Result<ExitStatus>>> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(thread::spawn(move || {
        let status = child.wait();
        if let Err(e) = &status {
            tracing::warn!(error = %e, "failed to wait for browser process");
        }
        status
    }))
}
