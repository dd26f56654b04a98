use std::future::Future;
use std::time::Duration;

use tempfile::tempdir;
use tokio::net::UdpSocket;

use super::*;
use crate::error::{AppError, AppResult, ValidationError};
use crate::fragment::parse_fragment;
use crate::ingest::RECV_BUFFER_SIZE;
use crate::shutdown_handlers::shutdown_channel;

const SRT: &str = "\u{feff}1\n00:00:01,000 --> 00:00:03,000\nHello there\n\nnot a cue\n\n2\n00:00:04,000 --> 00:00:06,000\nGeneral Kenobi\n";
const RECEIVE_TIMEOUT: Duration = Duration::from_secs(2);

fn run_async_test<F>(future: F) -> AppResult<()>
where
    F: Future<Output = AppResult<()>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::validation(format!("Failed to build runtime: {}", err)))?;
    runtime.block_on(future)
}

fn send_args(file: String, target: SocketAddr, grow: bool) -> SendArgs {
    SendArgs {
        file,
        target,
        interval: Duration::from_millis(1),
        grow,
    }
}

#[test]
fn parse_cues_skips_malformed_blocks() -> AppResult<()> {
    let (cues, skipped) = parse_cues(SRT);
    if skipped != 1 {
        return Err(AppError::validation(format!("Unexpected skipped: {}", skipped)));
    }
    let texts: Vec<&str> = cues.iter().map(|cue| cue.text.as_str()).collect();
    if texts != ["Hello there", "General Kenobi"] {
        return Err(AppError::validation(format!("Unexpected cues: {:?}", texts)));
    }
    let first_start = cues.first().map(|cue| cue.start_ms);
    if first_start != Some(1_000) {
        return Err(AppError::validation("Unexpected first start"));
    }
    Ok(())
}

#[test]
fn grow_revisions_extend_word_by_word() -> AppResult<()> {
    let cue = Fragment::new(7, "one two three four", 1_000, 5_000);
    let revisions = grow_revisions(&cue);

    let texts: Vec<&str> = revisions.iter().map(|rev| rev.text.as_str()).collect();
    if texts != ["one", "one two", "one two three", "one two three four"] {
        return Err(AppError::validation(format!("Unexpected texts: {:?}", texts)));
    }
    let ends: Vec<u64> = revisions.iter().map(|rev| rev.end_ms).collect();
    if ends != [2_000, 3_000, 4_000, 5_000] {
        return Err(AppError::validation(format!("Unexpected ends: {:?}", ends)));
    }
    if revisions.iter().any(|rev| rev.id != 7 || rev.start_ms != 1_000) {
        return Err(AppError::validation("Revisions must keep id and start"));
    }
    Ok(())
}

#[test]
fn grow_single_word_cue_is_unchanged() -> AppResult<()> {
    let cue = Fragment::new(1, "Hi", 0, 100);
    if grow_revisions(&cue) != vec![cue] {
        return Err(AppError::validation("Single word cue should not expand"));
    }
    Ok(())
}

#[test]
fn plan_without_grow_keeps_cues() -> AppResult<()> {
    let cues = vec![
        Fragment::new(1, "a b", 0, 10),
        Fragment::new(2, "c", 10, 20),
    ];
    if plan_datagrams(&cues, false) != cues {
        return Err(AppError::validation("Expected cues unchanged"));
    }
    if plan_datagrams(&cues, true).len() != 3 {
        return Err(AppError::validation("Expected one extra revision"));
    }
    Ok(())
}

#[test]
fn load_cues_reports_missing_file() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("missing.srt").to_string_lossy().into_owned();
    match load_cues(&path) {
        Err(AppError::Ingest(IngestError::ReadSubtitles { .. })) => Ok(()),
        Err(err) => Err(AppError::validation(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::validation("Expected read error")),
    }
}

#[test]
fn load_cues_rejects_file_without_cues() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("empty.srt");
    std::fs::write(&path, "garbage\n\nmore garbage\n")?;
    match load_cues(&path.to_string_lossy()) {
        Err(AppError::Validation(ValidationError::NoCues { .. })) => Ok(()),
        Err(err) => Err(AppError::validation(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::validation("Expected no cues error")),
    }
}

#[test]
fn run_send_delivers_datagrams_over_loopback() -> AppResult<()> {
    run_async_test(async {
        let dir = tempdir()?;
        let path = dir.path().join("cues.srt");
        std::fs::write(&path, SRT)?;

        let receiver = UdpSocket::bind("127.0.0.1:0").await?;
        let target = receiver.local_addr()?;
        let args = send_args(path.to_string_lossy().into_owned(), target, true);
        let (shutdown_tx, _) = shutdown_channel();

        let report = run_send(&args, &shutdown_tx).await?;
        if report.sent != 4 || report.planned != 4 || report.interrupted {
            return Err(AppError::validation(format!("Unexpected report: {:?}", report)));
        }

        let mut texts = Vec::new();
        let mut datagram = vec![0_u8; RECV_BUFFER_SIZE];
        for _ in 0..report.sent {
            let (len, _) = tokio::time::timeout(RECEIVE_TIMEOUT, receiver.recv_from(&mut datagram))
                .await
                .map_err(|err| AppError::validation(format!("Timed out: {}", err)))??;
            let payload = datagram.get(..len).unwrap_or_default();
            let raw = std::str::from_utf8(payload)
                .map_err(|err| AppError::validation(format!("Invalid UTF-8: {}", err)))?;
            texts.push(parse_fragment(raw)?.text);
        }
        if texts != ["Hello", "Hello there", "General", "General Kenobi"] {
            return Err(AppError::validation(format!("Unexpected texts: {:?}", texts)));
        }
        Ok(())
    })
}

#[test]
fn send_stops_on_shutdown() -> AppResult<()> {
    run_async_test(async {
        let receiver = UdpSocket::bind("127.0.0.1:0").await?;
        let mut args = send_args(String::new(), receiver.local_addr()?, false);
        args.interval = Duration::from_secs(60);
        let fragments = vec![Fragment::new(1, "a", 0, 1), Fragment::new(2, "b", 1, 2)];
        let (shutdown_tx, _) = shutdown_channel();

        let sending = send_fragments(&fragments, &args, &shutdown_tx);
        let stopper = async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            drop(shutdown_tx.send(()));
        };
        let (report, ()) = tokio::join!(sending, stopper);
        let report = report?;
        if report.sent != 1 || !report.interrupted {
            return Err(AppError::validation(format!("Unexpected report: {:?}", report)));
        }
        Ok(())
    })
}
