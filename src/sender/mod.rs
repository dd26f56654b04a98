//! The `send` subcommand: replays `.srt` cues to a running overlay.
mod cues;

#[cfg(test)]
mod tests;

use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};

use tokio::net::UdpSocket;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::args::SendArgs;
use crate::error::{AppError, AppResult, IngestError};
use crate::fragment::Fragment;
use crate::shutdown::ShutdownSender;

pub use cues::{grow_revisions, load_cues, parse_cues, plan_datagrams};

/// Outcome of one `send` run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SendReport {
    pub sent: usize,
    pub planned: usize,
    pub interrupted: bool,
}

fn unspecified_for(target: SocketAddr) -> SocketAddr {
    match target {
        SocketAddr::V4(_) => SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0)),
        SocketAddr::V6(_) => SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0)),
    }
}

/// Sends each fragment as one datagram, `args.interval` apart, stopping early on shutdown.
///
/// # Errors
///
/// Returns an error when the local socket cannot be bound or a send fails.
pub async fn send_fragments(
    fragments: &[Fragment],
    args: &SendArgs,
    shutdown_tx: &ShutdownSender,
) -> AppResult<SendReport> {
    let local = unspecified_for(args.target);
    let socket = UdpSocket::bind(local)
        .await
        .map_err(|source| AppError::ingest(IngestError::Bind { addr: local, source }))?;

    let mut shutdown_rx = shutdown_tx.subscribe();
    let mut ticker = tokio::time::interval(args.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut report = SendReport {
        planned: fragments.len(),
        ..SendReport::default()
    };
    for fragment in fragments {
        tokio::select! {
            _ = shutdown_rx.recv() => {
                report.interrupted = true;
                break;
            }
            _ = ticker.tick() => {}
        }

        let payload = fragment.to_wire_text();
        socket
            .send_to(payload.as_bytes(), args.target)
            .await
            .map_err(|source| {
                AppError::ingest(IngestError::Send {
                    target: args.target,
                    source,
                })
            })?;
        report.sent = report.sent.saturating_add(1);
        debug!(id = fragment.id, text = %fragment.text, "Sent fragment");
    }

    Ok(report)
}

/// Runs the `send` subcommand end to end.
///
/// # Errors
///
/// Returns an error when the subtitle file is unusable or sending fails.
pub async fn run_send(args: &SendArgs, shutdown_tx: &ShutdownSender) -> AppResult<SendReport> {
    let cues = load_cues(&args.file)?;
    let datagrams = plan_datagrams(&cues, args.grow);
    info!(
        file = %args.file,
        target = %args.target,
        cues = cues.len(),
        datagrams = datagrams.len(),
        "Replaying subtitles"
    );

    let report = send_fragments(&datagrams, args, shutdown_tx).await?;
    info!(
        sent = report.sent,
        planned = report.planned,
        interrupted = report.interrupted,
        "Send finished"
    );
    Ok(report)
}
